use std::path::{Path, PathBuf};
use std::sync::Once;
use std::{env, fs};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".subtrack_core";
const BOOKS_DIR: &str = "books";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("subtrack_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application data directory, defaulting to `~/.subtrack_core`.
///
/// The `SUBTRACK_CORE_HOME` environment variable overrides the default.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SUBTRACK_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed books directory.
pub fn books_dir_in(root: &Path) -> PathBuf {
    root.join(BOOKS_DIR)
}

/// Path to the persisted session configuration file.
pub fn config_file_in(root: &Path) -> PathBuf {
    root.join("config.json")
}

/// Creates `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> crate::errors::Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
