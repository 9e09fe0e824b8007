use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::record::RecordType;
use crate::utils::{app_data_dir, config_file_in, DEFAULT_LOG_FILTER};

const TMP_SUFFIX: &str = "tmp";

/// Placeholder replaced by the saved record id in the success message.
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config could not be parsed: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}

/// Settings for the customer comment handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub form_title: String,
    pub hide_navbar: bool,
    /// Default text of the greeting field.
    pub greeting: String,
    pub submit_label: String,
    /// Success message; `{id}` is replaced with the saved record id.
    pub success_template: String,
    pub record_type: RecordType,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_title: "Hello World".into(),
            hide_navbar: false,
            greeting: "Hello World".into(),
            submit_label: "Save".into(),
            success_template: "Customer Id {id} was saved successfully.".into(),
            record_type: RecordType::Customer,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Config {
    pub fn success_message(&self, id: &str) -> String {
        self.success_template.replace(ID_PLACEHOLDER, id)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored config, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
