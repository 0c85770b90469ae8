use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::synth;
use crate::constants::{GENERATOR_INTERVAL_SECS, GENERATOR_MANUAL_BATCH_SIZE};
use crate::errors::Result;
use crate::live::{ConnectionRegistry, LiveEvent, ShipBroadcast};
use crate::ships::{Ship, ShipRepository};

/// Tuning for the ship generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Pause between periodic generation cycles
    pub interval: Duration,
    /// Batch size used by the manual trigger
    pub manual_batch_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(GENERATOR_INTERVAL_SECS),
            manual_batch_size: GENERATOR_MANUAL_BATCH_SIZE,
        }
    }
}

struct LoopState {
    handle: Option<JoinHandle<()>>,
    shutdown: Option<watch::Sender<bool>>,
}

/// Synthesizes ship records on a fixed cadence and pushes each persisted
/// record to every open live connection.
///
/// The auto-generation flag only skips cycles; it does not stop the loop.
/// The loop itself runs from `start` until `stop`.
pub struct ShipGenerator {
    ships: Arc<ShipRepository>,
    registry: Arc<ConnectionRegistry>,
    config: GeneratorConfig,
    auto_enabled: Arc<AtomicBool>,
    state: Mutex<LoopState>,
}

impl ShipGenerator {
    pub fn new(
        ships: Arc<ShipRepository>,
        registry: Arc<ConnectionRegistry>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            ships,
            registry,
            config,
            auto_enabled: Arc::new(AtomicBool::new(true)),
            state: Mutex::new(LoopState {
                handle: None,
                shutdown: None,
            }),
        }
    }

    /// Whether periodic cycles currently produce records
    pub fn auto_generation_enabled(&self) -> bool {
        self.auto_enabled.load(Ordering::Relaxed)
    }

    /// Turns periodic generation off without notifying connected clients.
    /// Used when a client connects, so a fresh inspection session is not
    /// flooded by generator noise.
    pub fn disable_auto_generation(&self) {
        self.auto_enabled.store(false, Ordering::Relaxed);
    }

    /// Applies the desired auto-generation state and notifies every open
    /// connection of the new value.
    pub async fn set_auto_generation(&self, enabled: bool) -> bool {
        self.auto_enabled.store(enabled, Ordering::Relaxed);
        self.registry
            .broadcast(LiveEvent::AutoGeneration { enabled })
            .await;
        info!(
            "Auto-generation {}",
            if enabled { "enabled" } else { "disabled" }
        );
        enabled
    }

    /// Starts the generation loop. Starting an already-running generator is
    /// a no-op.
    pub async fn start(&self) {
        let mut state = self.state.lock().await;
        if state.handle.is_some() {
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let ships = self.ships.clone();
        let registry = self.registry.clone();
        let auto_enabled = self.auto_enabled.clone();
        let config = self.config.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(config.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if !auto_enabled.load(Ordering::Relaxed) {
                            continue;
                        }
                        // A failed cycle is skipped; the loop stays up.
                        if let Err(e) = Self::generate(&ships, &registry, 1).await {
                            error!("Error in generation cycle: {}", e);
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        state.handle = Some(handle);
        state.shutdown = Some(shutdown_tx);
        info!("Ship generation started");
    }

    /// Stops the generation loop and waits for any in-flight cycle to
    /// finish. Stopping a generator that is not running is a no-op.
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
            error!("Ship generator task failed: {}", e);
        }
        info!("Ship generation stopped");
    }

    pub async fn is_running(&self) -> bool {
        self.state.lock().await.handle.is_some()
    }

    /// Runs one periodic cycle immediately. Skipped (returning `None`) while
    /// auto-generation is disabled.
    pub async fn run_cycle(&self) -> Result<Option<Ship>> {
        if !self.auto_generation_enabled() {
            return Ok(None);
        }
        let created = Self::generate(&self.ships, &self.registry, 1).await?;
        Ok(created.into_iter().next())
    }

    /// Manual trigger: persists and broadcasts the configured batch size,
    /// regardless of the auto-generation flag.
    pub async fn generate_batch(&self) -> Result<Vec<Ship>> {
        self.generate_now(self.config.manual_batch_size).await
    }

    /// Persists `count` synthesized ships and broadcasts each one to all
    /// open connections, regardless of the auto-generation flag. Each ship
    /// is committed exactly once.
    pub async fn generate_now(&self, count: usize) -> Result<Vec<Ship>> {
        Self::generate(&self.ships, &self.registry, count).await
    }

    async fn generate(
        ships: &ShipRepository,
        registry: &ConnectionRegistry,
        count: usize,
    ) -> Result<Vec<Ship>> {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            let ship = ships.create(synth::random_ship())?;
            registry
                .broadcast(LiveEvent::NewShip {
                    data: ShipBroadcast::system(ship.clone()),
                })
                .await;
            created.push(ship);
        }
        info!("Generated {} ship(s)", created.len());
        Ok(created)
    }
}
