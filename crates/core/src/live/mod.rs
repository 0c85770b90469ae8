//! Live update channel: the registry of open client connections and the
//! best-effort broadcast of generated-record events.

mod live_events;
mod registry;

pub use live_events::{LiveEvent, ShipBroadcast, SOURCE_SYSTEM};
pub use registry::ConnectionRegistry;
