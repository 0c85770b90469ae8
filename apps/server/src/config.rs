use std::{net::SocketAddr, time::Duration};

use navarch_core::generator::GeneratorConfig;
use navarch_core::monitoring::MonitorConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub monitor: MonitorConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("NAVARCH_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .expect("Invalid NAVARCH_LISTEN_ADDR");
        let db_path = std::env::var("NAVARCH_DB_PATH").unwrap_or_else(|_| "./db/navy.db".into());
        let cors_allow = std::env::var("NAVARCH_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_parse("NAVARCH_REQUEST_TIMEOUT_MS", 30000);

        let monitor_defaults = MonitorConfig::default();
        let monitor = MonitorConfig {
            check_interval: Duration::from_secs(env_parse(
                "NAVARCH_MONITOR_INTERVAL_SECS",
                monitor_defaults.check_interval.as_secs(),
            )),
            time_window: Duration::from_secs(env_parse(
                "NAVARCH_MONITOR_WINDOW_SECS",
                monitor_defaults.time_window.as_secs(),
            )),
            suspicious_threshold: env_parse(
                "NAVARCH_MONITOR_THRESHOLD",
                monitor_defaults.suspicious_threshold,
            ),
        };

        let generator_defaults = GeneratorConfig::default();
        let generator = GeneratorConfig {
            interval: Duration::from_secs(env_parse(
                "NAVARCH_GENERATOR_INTERVAL_SECS",
                generator_defaults.interval.as_secs(),
            )),
            manual_batch_size: env_parse(
                "NAVARCH_GENERATOR_BATCH_SIZE",
                generator_defaults.manual_batch_size,
            ),
        };

        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            monitor,
            generator,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
