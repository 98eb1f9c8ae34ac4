use dirs::home_dir;
use std::sync::Once;
use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

const DEFAULT_DIR_NAME: &str = ".trackme";
const CONFIG_FILE: &str = "config.json";
const ACCOUNTS_FILE: &str = "accounts.json";
const TMP_SUFFIX: &str = "tmp";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("trackme=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.trackme`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TRACKME_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the configuration file inside a base directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Path to the account directory file inside a base directory.
pub fn accounts_file_in(base: &Path) -> PathBuf {
    base.join(ACCOUNTS_FILE)
}

/// Creates the directory (and parents) when it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes `data` to `path` through a temporary sibling file and a rename, so
/// readers never observe a half-written document.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    let tmp = tmp_path(path);
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    name.push('.');
    name.push_str(TMP_SUFFIX);
    path.with_file_name(name)
}
