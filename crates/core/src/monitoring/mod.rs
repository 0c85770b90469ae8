//! Background scan of the activity ledger that flags accounts exceeding a
//! windowed action-rate threshold.

mod monitor;

pub use monitor::{ActivityMonitor, MonitorConfig};
