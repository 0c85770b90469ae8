//! Design defaults for the background activity core.

/// How often the activity monitor scans the ledger.
pub const MONITOR_CHECK_INTERVAL_SECS: u64 = 300;

/// Trailing window the monitor counts actions over.
pub const MONITOR_TIME_WINDOW_SECS: u64 = 3600;

/// An account is flagged once its in-window action count strictly exceeds this.
pub const MONITOR_SUSPICIOUS_THRESHOLD: i64 = 50;

/// Cadence of the periodic ship generator.
pub const GENERATOR_INTERVAL_SECS: u64 = 10;

/// Batch size used by the manual "generate now" trigger.
pub const GENERATOR_MANUAL_BATCH_SIZE: usize = 5;

/// Per-connection buffer of pending live events.
pub const LIVE_CHANNEL_CAPACITY: usize = 64;
