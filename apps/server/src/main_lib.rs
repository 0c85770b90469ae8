use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use navarch_core::accounts::{AccountRepository, AccountService};
use navarch_core::activity_logs::{ActivityLogRepository, ActivityLogService};
use navarch_core::db;
use navarch_core::generator::ShipGenerator;
use navarch_core::live::ConnectionRegistry;
use navarch_core::monitoring::ActivityMonitor;
use navarch_core::ships::{ShipRepository, ShipService};

use crate::config::Config;

pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub ship_service: Arc<ShipService>,
    pub activity_log_service: Arc<ActivityLogService>,
    pub registry: Arc<ConnectionRegistry>,
    pub monitor: Arc<ActivityMonitor>,
    pub generator: Arc<ShipGenerator>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("NAVARCH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let account_repository = Arc::new(AccountRepository::new(pool.clone()));
    let ship_repository = Arc::new(ShipRepository::new(pool.clone()));
    let activity_log_repository = Arc::new(ActivityLogRepository::new(pool.clone()));

    let registry = Arc::new(ConnectionRegistry::new());

    let monitor = Arc::new(ActivityMonitor::new(
        account_repository.clone(),
        activity_log_repository.clone(),
        config.monitor.clone(),
    ));
    let generator = Arc::new(ShipGenerator::new(
        ship_repository.clone(),
        registry.clone(),
        config.generator.clone(),
    ));

    let account_service = Arc::new(AccountService::new(account_repository));
    let ship_service = Arc::new(ShipService::new(ship_repository));
    let activity_log_service = Arc::new(ActivityLogService::new(activity_log_repository));

    Ok(Arc::new(AppState {
        account_service,
        ship_service,
        activity_log_service,
        registry,
        monitor,
        generator,
        db_path,
    }))
}
