use crate::errors::AppResult;
use crate::store::StoreConfig;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_directory")]
    pub data_directory: String,
    #[serde(default)]
    pub seed_directory: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File this configuration was read from (or would have been).
    #[serde(skip, default = "Config::config_file")]
    pub loaded_from: PathBuf,
}

fn default_data_directory() -> String {
    Config::config_dir().to_string_lossy().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            seed_directory: None,
            log_level: default_log_level(),
            loaded_from: Self::config_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.attendance-tracker`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".attendance-tracker")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yml")
    }

    /// Load configuration from `path` (or the standard file), or return
    /// defaults if it does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map_or_else(Self::config_file, Path::to_path_buf);

        let content = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            String::new()
        };

        let cfg = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(Self {
            loaded_from: path,
            ..cfg
        })
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_directory)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            data_directory: self.data_dir(),
            seed_directory: self.seed_directory.as_deref().map(expand_tilde),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }
}
