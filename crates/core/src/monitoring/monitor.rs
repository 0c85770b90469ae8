use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{error, info, warn};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::accounts::AccountRepository;
use crate::activity_logs::ActivityLogRepository;
use crate::constants::{
    MONITOR_CHECK_INTERVAL_SECS, MONITOR_SUSPICIOUS_THRESHOLD, MONITOR_TIME_WINDOW_SECS,
};
use crate::errors::Result;

/// Tuning for the activity monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Pause between ledger scans
    pub check_interval: Duration,
    /// Trailing window actions are counted over
    pub time_window: Duration,
    /// Flag an account once its in-window count strictly exceeds this
    pub suspicious_threshold: i64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(MONITOR_CHECK_INTERVAL_SECS),
            time_window: Duration::from_secs(MONITOR_TIME_WINDOW_SECS),
            suspicious_threshold: MONITOR_SUSPICIOUS_THRESHOLD,
        }
    }
}

struct LoopState {
    handle: Option<JoinHandle<()>>,
    shutdown: Option<watch::Sender<bool>>,
}

/// Periodically scans the ledger and flags suspicious accounts.
///
/// Flagging is one-way: once an account is flagged it stays flagged; the
/// monitor never clears the state.
pub struct ActivityMonitor {
    accounts: Arc<AccountRepository>,
    activity_logs: Arc<ActivityLogRepository>,
    config: MonitorConfig,
    state: Mutex<LoopState>,
}

impl ActivityMonitor {
    pub fn new(
        accounts: Arc<AccountRepository>,
        activity_logs: Arc<ActivityLogRepository>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            accounts,
            activity_logs,
            config,
            state: Mutex::new(LoopState {
                handle: None,
                shutdown: None,
            }),
        }
    }

    /// Starts the monitor loop. Starting an already-running monitor is a
    /// no-op.
    pub async fn start(&self) {
        let mut state = self.state.lock().await;
        if state.handle.is_some() {
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let accounts = self.accounts.clone();
        let activity_logs = self.activity_logs.clone();
        let config = self.config.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(config.check_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        // A failed scan skips this cycle only; the loop stays up.
                        if let Err(e) = Self::scan(&accounts, &activity_logs, &config) {
                            error!("Error in monitoring loop: {}", e);
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        state.handle = Some(handle);
        state.shutdown = Some(shutdown_tx);
        info!("Activity monitoring started");
    }

    /// Stops the monitor loop and waits for any in-flight scan to finish.
    /// Stopping a monitor that is not running is a no-op.
    pub async fn stop(&self) {
        let (handle, shutdown) = {
            let mut state = self.state.lock().await;
            (state.handle.take(), state.shutdown.take())
        };

        let Some(handle) = handle else {
            return;
        };
        if let Some(shutdown_tx) = shutdown {
            let _ = shutdown_tx.send(true);
        }
        if let Err(e) = handle.await {
            error!("Activity monitor task failed: {}", e);
        }
        info!("Activity monitoring stopped");
    }

    pub async fn is_running(&self) -> bool {
        self.state.lock().await.handle.is_some()
    }

    /// Runs one ledger scan immediately and returns how many accounts were
    /// newly flagged.
    pub fn scan_once(&self) -> Result<usize> {
        Self::scan(&self.accounts, &self.activity_logs, &self.config)
    }

    fn scan(
        accounts: &AccountRepository,
        activity_logs: &ActivityLogRepository,
        config: &MonitorConfig,
    ) -> Result<usize> {
        let now = Utc::now().naive_utc();
        let window_start = now - chrono::Duration::seconds(config.time_window.as_secs() as i64);

        let mut newly_flagged = 0;
        for account in accounts.list()? {
            let action_count =
                activity_logs.count_for_account_in_window(account.id, window_start, now)?;

            if action_count > config.suspicious_threshold && !account.is_flagged {
                accounts.set_flagged(account.id)?;
                newly_flagged += 1;
                warn!(
                    "Account {} flagged after {} actions within the monitoring window",
                    account.username, action_count
                );
            }
        }
        Ok(newly_flagged)
    }
}
