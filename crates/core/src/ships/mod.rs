//! The ship catalogue itself: models, persistence and aggregate statistics.

mod ships_model;
mod ships_repository;
mod ships_service;

pub use ships_model::{NewShip, Ship, ShipStatistics};
pub use ships_repository::ShipRepository;
pub use ships_service::ShipService;
