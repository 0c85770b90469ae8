use std::sync::Arc;

use navarch_core::db::{self, DbPool};
use tempfile::TempDir;

/// Throwaway SQLite database living inside a temp directory that is removed
/// when the value is dropped.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    _dir: TempDir,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("navarch-test.db")
        .to_str()
        .expect("Temp path is not valid UTF-8")
        .to_string();

    let db_path = db::init(&db_path).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    TestDb { pool, _dir: dir }
}
