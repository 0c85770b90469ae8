use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Earliest launch year the catalogue accepts.
const MIN_YEAR_BUILT: i32 = 1500;

/// Domain model representing a ship in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: i32,
    pub name: String,
    pub year_built: i32,
    pub commissioned_date: Option<i32>,
    pub stricken_date: Option<i32>,
    pub country_of_origin: Option<String>,
}

/// Input model for creating a new ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShip {
    pub name: String,
    pub year_built: i32,
    pub commissioned_date: Option<i32>,
    pub stricken_date: Option<i32>,
    pub country_of_origin: Option<String>,
}

impl NewShip {
    /// Validates the new ship data, including cross-field date consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Ship name cannot be empty".to_string(),
            )));
        }
        if self.year_built < MIN_YEAR_BUILT {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Year built {} is before {}",
                self.year_built, MIN_YEAR_BUILT
            ))));
        }
        if let Some(commissioned) = self.commissioned_date {
            if commissioned < self.year_built {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Commissioned date cannot precede year built".to_string(),
                )));
            }
        }
        if let (Some(commissioned), Some(stricken)) = (self.commissioned_date, self.stricken_date) {
            if stricken < commissioned {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Stricken date cannot precede commissioned date".to_string(),
                )));
            }
        }
        if self.stricken_date.is_some() && self.commissioned_date.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "commissioned_date".to_string(),
            )));
        }
        Ok(())
    }
}

/// Aggregate statistics over the whole catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStatistics {
    pub total: i64,
    pub most_common_country: Option<String>,
    pub most_common_country_count: i64,
    pub active: i64,
    pub retired: i64,
    pub oldest_year: Option<i32>,
    pub newest_year: Option<i32>,
}

impl ShipStatistics {
    pub fn empty() -> Self {
        Self {
            total: 0,
            most_common_country: None,
            most_common_country_count: 0,
            active: 0,
            retired: 0,
            oldest_year: None,
            newest_year: None,
        }
    }
}

/// Database model for ships
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::ships)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShipDB {
    pub id: i32,
    pub name: String,
    pub year_built: i32,
    pub commissioned_date: Option<i32>,
    pub stricken_date: Option<i32>,
    pub country_of_origin: Option<String>,
}

/// Insertable model for ships; the id is assigned by the database
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::ships)]
pub struct NewShipDB {
    pub name: String,
    pub year_built: i32,
    pub commissioned_date: Option<i32>,
    pub stricken_date: Option<i32>,
    pub country_of_origin: Option<String>,
}

// Conversion implementations
impl From<ShipDB> for Ship {
    fn from(db: ShipDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            year_built: db.year_built,
            commissioned_date: db.commissioned_date,
            stricken_date: db.stricken_date,
            country_of_origin: db.country_of_origin,
        }
    }
}

impl From<NewShip> for NewShipDB {
    fn from(domain: NewShip) -> Self {
        Self {
            name: domain.name,
            year_built: domain.year_built,
            commissioned_date: domain.commissioned_date,
            stricken_date: domain.stricken_date,
            country_of_origin: domain.country_of_origin,
        }
    }
}
