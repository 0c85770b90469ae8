use std::sync::Arc;

use super::ships_model::{NewShip, Ship, ShipStatistics};
use super::ships_repository::ShipRepository;
use crate::errors::Result;

/// Service for managing the ship catalogue
pub struct ShipService {
    repository: Arc<ShipRepository>,
}

impl ShipService {
    pub fn new(repository: Arc<ShipRepository>) -> Self {
        Self { repository }
    }

    pub fn add_ship(&self, new_ship: NewShip) -> Result<Ship> {
        self.repository.create(new_ship)
    }

    pub fn add_ships(&self, new_ships: Vec<NewShip>) -> Result<Vec<Ship>> {
        self.repository.create_batch(new_ships)
    }

    pub fn get_ship(&self, ship_id: i32) -> Result<Ship> {
        self.repository.get_by_id(ship_id)
    }

    pub fn get_recent_ships(&self, limit: i64) -> Result<Vec<Ship>> {
        self.repository.list_recent(limit)
    }

    pub fn count_ships(&self) -> Result<i64> {
        self.repository.count()
    }

    pub fn get_statistics(&self) -> Result<ShipStatistics> {
        self.repository.statistics()
    }
}
