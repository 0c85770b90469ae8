use serde::Serialize;

use crate::ships::Ship;

/// Tag carried by records the generator created, as opposed to user-created
/// ones.
pub const SOURCE_SYSTEM: &str = "system";

/// Ship payload pushed over the live channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipBroadcast {
    pub id: i32,
    pub name: String,
    pub year_built: i32,
    pub commissioned_date: Option<i32>,
    pub stricken_date: Option<i32>,
    pub country_of_origin: Option<String>,
    pub source: String,
}

impl ShipBroadcast {
    /// Wraps a generator-created ship with the system source tag
    pub fn system(ship: Ship) -> Self {
        Self {
            id: ship.id,
            name: ship.name,
            year_built: ship.year_built,
            commissioned_date: ship.commissioned_date,
            stricken_date: ship.stricken_date,
            country_of_origin: ship.country_of_origin,
            source: SOURCE_SYSTEM.to_string(),
        }
    }
}

/// Events pushed to connected live clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A ship was added to the catalogue
    NewShip { data: ShipBroadcast },
    /// Unicast acknowledgement of a control message
    Status { message: String },
    /// The auto-generation flag changed
    AutoGeneration { enabled: bool },
}
