use diesel::dsl::{count, max, min};
use diesel::prelude::*;
use std::sync::Arc;

use super::ships_model::{NewShip, NewShipDB, Ship, ShipDB, ShipStatistics};
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::ships;

/// Repository for managing ship data in the database
pub struct ShipRepository {
    pool: Arc<DbPool>,
}

impl ShipRepository {
    /// Creates a new ShipRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Creates a new ship
    pub fn create(&self, new_ship: NewShip) -> Result<Ship> {
        let mut conn = get_connection(&self.pool)?;

        new_ship.validate()?;
        let ship_db: NewShipDB = new_ship.into();

        diesel::insert_into(ships::table)
            .values(&ship_db)
            .get_result::<ShipDB>(&mut conn)
            .map(Ship::from)
            .map_err(Error::from)
    }

    /// Creates multiple ships in a single transaction. Either every row is
    /// persisted or none is.
    pub fn create_batch(&self, new_ships: Vec<NewShip>) -> Result<Vec<Ship>> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction(|conn| {
            let mut created = Vec::with_capacity(new_ships.len());
            for new_ship in new_ships {
                new_ship.validate()?;
                let ship_db: NewShipDB = new_ship.into();
                let inserted = diesel::insert_into(ships::table)
                    .values(&ship_db)
                    .get_result::<ShipDB>(conn)?;
                created.push(Ship::from(inserted));
            }
            Ok(created)
        })
    }

    /// Retrieves a ship by its ID
    pub fn get_by_id(&self, ship_id: i32) -> Result<Ship> {
        let mut conn = get_connection(&self.pool)?;

        ships::table
            .find(ship_id)
            .first::<ShipDB>(&mut conn)
            .optional()?
            .map(Ship::from)
            .ok_or_else(|| Error::NotFound(format!("Ship {}", ship_id)))
    }

    /// Lists the most recently added ships, newest first
    pub fn list_recent(&self, limit: i64) -> Result<Vec<Ship>> {
        let mut conn = get_connection(&self.pool)?;

        ships::table
            .order(ships::id.desc())
            .limit(limit)
            .load::<ShipDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Ship::from).collect())
            .map_err(Error::from)
    }

    /// Counts all ships in the catalogue
    pub fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        ships::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(Error::from)
    }

    /// Computes catalogue-wide aggregates in the database rather than in
    /// application code.
    pub fn statistics(&self) -> Result<ShipStatistics> {
        let mut conn = get_connection(&self.pool)?;

        let total = ships::table.count().get_result::<i64>(&mut conn)?;
        if total == 0 {
            return Ok(ShipStatistics::empty());
        }

        let most_common: Option<(Option<String>, i64)> = ships::table
            .filter(ships::country_of_origin.is_not_null())
            .group_by(ships::country_of_origin)
            .select((ships::country_of_origin, count(ships::id)))
            .order(count(ships::id).desc())
            .first(&mut conn)
            .optional()?;

        let (most_common_country, most_common_country_count) = match most_common {
            Some((country, country_count)) => (country, country_count),
            None => (None, 0),
        };

        let active = ships::table
            .filter(ships::stricken_date.is_null())
            .count()
            .get_result::<i64>(&mut conn)?;
        let retired = total - active;

        let (oldest_year, newest_year) = ships::table
            .select((min(ships::year_built), max(ships::year_built)))
            .first::<(Option<i32>, Option<i32>)>(&mut conn)?;

        Ok(ShipStatistics {
            total,
            most_common_country,
            most_common_country_count,
            active,
            retired,
            oldest_year,
            newest_year,
        })
    }
}
