use std::{env, path::PathBuf};

use dirs::{config_dir, home_dir};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIR_NAME: &str = "serverwidget";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application data directory.
pub const HOME_ENV: &str = "SERVERWIDGET_HOME";

pub const DEFAULT_LOG_FILTER: &str = "serverwidget_core=info";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // An already installed global subscriber is kept.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns the application data directory, defaulting to the platform
/// config directory (or the home directory) joined with `serverwidget`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    config_dir()
        .or_else(home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Config file location inside `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
