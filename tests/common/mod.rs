use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;
use trackme::{auth::AccountDirectory, config::ConfigManager, store::JsonStore};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store, account directory, and config manager backed by
/// a unique directory for each test.
pub fn setup_test_env() -> (JsonStore, AccountDirectory, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = JsonStore::new(Some(base.join("store"))).expect("create json store");
    let directory = AccountDirectory::new(base.join("accounts.json"));
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");

    (store, directory, config_manager)
}
