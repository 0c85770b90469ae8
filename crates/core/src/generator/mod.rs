//! Periodic synthesis of ship records, pushed to live clients as they are
//! persisted.

mod ship_generator;
mod synth;

pub use ship_generator::{GeneratorConfig, ShipGenerator};
pub use synth::random_ship;
