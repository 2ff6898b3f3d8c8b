use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;

use subtrack_core::config::ConfigManager;
use subtrack_core::storage::{JsonStore, Session};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Claims a fresh scratch directory that outlives the calling test.
pub fn claim_temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Creates an isolated local store backed by a unique directory.
pub fn setup_store() -> JsonStore {
    JsonStore::new(Some(claim_temp_dir())).expect("create json store backend")
}

/// Creates an isolated local session for `scope`.
pub fn setup_session(scope: &str) -> Session {
    Session::local_with_root(scope, claim_temp_dir()).expect("create local session")
}

/// Creates a config manager rooted in a unique directory.
pub fn setup_config_manager() -> ConfigManager {
    ConfigManager::with_base_dir(claim_temp_dir()).expect("create config manager for temp dir")
}
