use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account as exposed by the admin listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub is_flagged: bool,
    pub created_at: NaiveDateTime,
}

impl From<navarch_core::accounts::Account> for Account {
    fn from(account: navarch_core::accounts::Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role,
            is_flagged: account.is_flagged,
            created_at: account.created_at,
        }
    }
}

/// Ship as exposed by the catalogue listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Ship {
    pub id: i32,
    pub name: String,
    pub year_built: i32,
    pub commissioned_date: Option<i32>,
    pub stricken_date: Option<i32>,
    pub country_of_origin: Option<String>,
}

impl From<navarch_core::ships::Ship> for Ship {
    fn from(ship: navarch_core::ships::Ship) -> Self {
        Self {
            id: ship.id,
            name: ship.name,
            year_built: ship.year_built,
            commissioned_date: ship.commissioned_date,
            stricken_date: ship.stricken_date,
            country_of_origin: ship.country_of_origin,
        }
    }
}

/// Catalogue-wide aggregates
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShipStatistics {
    pub total: i64,
    pub most_common_country: Option<String>,
    pub most_common_country_count: i64,
    pub active: i64,
    pub retired: i64,
    pub oldest_year: Option<i32>,
    pub newest_year: Option<i32>,
}

impl From<navarch_core::ships::ShipStatistics> for ShipStatistics {
    fn from(stats: navarch_core::ships::ShipStatistics) -> Self {
        Self {
            total: stats.total,
            most_common_country: stats.most_common_country,
            most_common_country_count: stats.most_common_country_count,
            active: stats.active,
            retired: stats.retired,
            oldest_year: stats.oldest_year,
            newest_year: stats.newest_year,
        }
    }
}

/// Current auto-generation state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationStatus {
    pub enabled: bool,
}

/// Desired auto-generation state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationToggle {
    pub enabled: bool,
}

/// Reported after the generator loop has been stopped
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratorStopped {
    pub running: bool,
}
