use crate::core::view::{DEFAULT_MAX_DISPLAY, DEFAULT_PAGE_SIZE};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_max_page_links")]
    pub max_page_links: usize,
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_data_file() -> String {
    "data.json".to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_max_page_links() -> usize {
    DEFAULT_MAX_DISPLAY
}
fn default_page_title() -> String {
    "Snives".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
            max_page_links: default_max_page_links(),
            page_title: default_page_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rosterview")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rosterview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rosterview.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparsable file warns and falls back to defaults
    /// rather than aborting the run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(mut cfg) => {
                // page_size 0 would make every page empty forever
                if cfg.page_size == 0 {
                    cfg.page_size = default_page_size();
                }
                if cfg.max_page_links < 3 {
                    cfg.max_page_links = default_max_page_links();
                }
                cfg
            }
            Err(e) => {
                messages::warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Report config keys that are missing from the file on disk.
    pub fn missing_fields() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path)
            .map_err(|_| AppError::Config(format!("cannot read {}", path.display())))?;

        let doc: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;

        let mut missing = Vec::new();
        for key in ["data_file", "page_size", "max_page_links", "page_title"] {
            if doc.get(key).is_none() {
                missing.push(key);
            }
        }
        Ok(missing)
    }

    /// Initialize configuration and data files.
    /// `custom_data` overrides the default data file path; `is_test` skips
    /// writing the config file so tests never touch the real home directory.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        let config = Config {
            data_file: custom_data.unwrap_or_else(default_data_file),
            ..Default::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        // Seed an empty data file so the first `view` renders the empty
        // state instead of a missing-file error.
        let data_path = PathBuf::from(&config.data_file);
        if !data_path.exists() {
            fs::write(&data_path, "[]\n")?;
        }
        messages::success(format!("Data file:   {:?}", data_path));

        Ok(())
    }
}
