mod common;

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use navarch_core::accounts::{AccountRepository, NewAccount, ROLE_REGULAR};
use navarch_core::activity_logs::{ActivityLogRepository, NewActivityLog, ACTION_READ};
use navarch_core::monitoring::{ActivityMonitor, MonitorConfig};

fn new_account(repo: &AccountRepository, username: &str) -> i32 {
    repo.create(NewAccount {
        username: username.to_string(),
        role: ROLE_REGULAR.to_string(),
    })
    .expect("Failed to create account")
    .id
}

fn append_logs(repo: &ActivityLogRepository, account_id: i32, n: usize, at: NaiveDateTime) {
    for i in 0..n {
        repo.append(NewActivityLog {
            account_id,
            action: ACTION_READ.to_string(),
            entity_type: "ships".to_string(),
            entity_id: None,
            timestamp: Some(at),
            details: Some(format!("listing #{}", i)),
        })
        .expect("Failed to append ledger entry");
    }
}

fn monitor_with(db: &common::TestDb, config: MonitorConfig) -> ActivityMonitor {
    ActivityMonitor::new(
        Arc::new(AccountRepository::new(db.pool.clone())),
        Arc::new(ActivityLogRepository::new(db.pool.clone())),
        config,
    )
}

#[test]
fn flags_only_accounts_above_threshold() {
    let db = common::setup_db();
    let accounts = AccountRepository::new(db.pool.clone());
    let logs = ActivityLogRepository::new(db.pool.clone());

    let busy = new_account(&accounts, "busy");
    let quiet = new_account(&accounts, "quiet");

    let recent = Utc::now().naive_utc() - chrono::Duration::minutes(10);
    append_logs(&logs, busy, 55, recent);
    append_logs(&logs, quiet, 49, recent);

    let monitor = monitor_with(&db, MonitorConfig::default());
    let newly_flagged = monitor.scan_once().expect("Scan failed");
    assert_eq!(newly_flagged, 1);

    assert!(accounts.get_by_id(busy).unwrap().is_flagged);
    assert!(!accounts.get_by_id(quiet).unwrap().is_flagged);

    let flagged = accounts.list_flagged().unwrap();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].username, "busy");
}

#[test]
fn threshold_comparison_is_strict() {
    let db = common::setup_db();
    let accounts = AccountRepository::new(db.pool.clone());
    let logs = ActivityLogRepository::new(db.pool.clone());

    let account = new_account(&accounts, "edge");
    let recent = Utc::now().naive_utc() - chrono::Duration::minutes(5);
    append_logs(&logs, account, 50, recent);

    let monitor = monitor_with(&db, MonitorConfig::default());
    assert_eq!(monitor.scan_once().unwrap(), 0);
    assert!(!accounts.get_by_id(account).unwrap().is_flagged);

    // One action past the threshold tips it over.
    append_logs(&logs, account, 1, recent);
    assert_eq!(monitor.scan_once().unwrap(), 1);
    assert!(accounts.get_by_id(account).unwrap().is_flagged);
}

#[test]
fn actions_outside_window_are_ignored() {
    let db = common::setup_db();
    let accounts = AccountRepository::new(db.pool.clone());
    let logs = ActivityLogRepository::new(db.pool.clone());

    let account = new_account(&accounts, "historic");
    let stale = Utc::now().naive_utc() - chrono::Duration::hours(2);
    append_logs(&logs, account, 200, stale);

    let monitor = monitor_with(&db, MonitorConfig::default());
    assert_eq!(monitor.scan_once().unwrap(), 0);
    assert!(!accounts.get_by_id(account).unwrap().is_flagged);
}

#[test]
fn window_count_is_inclusive_of_both_bounds() {
    let db = common::setup_db();
    let accounts = AccountRepository::new(db.pool.clone());
    let logs = ActivityLogRepository::new(db.pool.clone());

    let account = new_account(&accounts, "bounds");
    let from = Utc::now().naive_utc() - chrono::Duration::hours(1);
    let to = Utc::now().naive_utc();

    append_logs(&logs, account, 1, from);
    append_logs(&logs, account, 1, to);
    append_logs(&logs, account, 1, from - chrono::Duration::seconds(1));
    append_logs(&logs, account, 1, to + chrono::Duration::seconds(1));

    let count = logs
        .count_for_account_in_window(account, from, to)
        .expect("Count failed");
    assert_eq!(count, 2);
}

#[test]
fn repeated_scans_never_unflag() {
    let db = common::setup_db();
    let accounts = AccountRepository::new(db.pool.clone());
    let logs = ActivityLogRepository::new(db.pool.clone());

    let account = new_account(&accounts, "repeat");
    let recent = Utc::now().naive_utc() - chrono::Duration::minutes(1);
    append_logs(&logs, account, 60, recent);

    let monitor = monitor_with(&db, MonitorConfig::default());
    assert_eq!(monitor.scan_once().unwrap(), 1);
    // Already flagged: later cycles neither error nor flag again.
    assert_eq!(monitor.scan_once().unwrap(), 0);
    assert_eq!(monitor.scan_once().unwrap(), 0);
    assert!(accounts.get_by_id(account).unwrap().is_flagged);
}

#[tokio::test]
async fn start_and_stop_are_idempotent() {
    let db = common::setup_db();
    let monitor = monitor_with(
        &db,
        MonitorConfig {
            check_interval: Duration::from_millis(20),
            ..MonitorConfig::default()
        },
    );

    assert!(!monitor.is_running().await);
    monitor.start().await;
    monitor.start().await;
    assert!(monitor.is_running().await);

    monitor.stop().await;
    assert!(!monitor.is_running().await);
    monitor.stop().await;

    // The monitor can be started again after a stop.
    monitor.start().await;
    assert!(monitor.is_running().await);
    monitor.stop().await;
}

#[tokio::test]
async fn running_loop_flags_within_one_cycle() {
    let db = common::setup_db();
    let accounts = AccountRepository::new(db.pool.clone());
    let logs = ActivityLogRepository::new(db.pool.clone());

    let account = new_account(&accounts, "live");
    let recent = Utc::now().naive_utc() - chrono::Duration::minutes(1);
    append_logs(&logs, account, 60, recent);

    let monitor = monitor_with(
        &db,
        MonitorConfig {
            check_interval: Duration::from_millis(20),
            ..MonitorConfig::default()
        },
    );
    monitor.start().await;

    let mut flagged = false;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if accounts.get_by_id(account).unwrap().is_flagged {
            flagged = true;
            break;
        }
    }
    monitor.stop().await;
    assert!(flagged, "monitor loop never flagged the account");
}
