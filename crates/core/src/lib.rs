pub mod db;

pub mod accounts;
pub mod activity_logs;
pub mod ships;

pub mod generator;
pub mod live;
pub mod monitoring;

pub mod constants;
pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
