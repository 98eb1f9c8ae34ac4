use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::core::utils::{app_data_dir, config_file_in, ensure_dir, write_atomic};
use crate::errors::StoreError;

/// User-facing settings, persisted as JSON in the app data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "AED".into(),
            data_dir: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, StoreError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, StoreError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, StoreError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}
