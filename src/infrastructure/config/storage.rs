use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "blob-gallery";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Location of the TOML configuration file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Uses `path_override`, or `config.toml` in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no override is given and the platform config
    /// directory cannot be determined.
    pub fn new(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path_override {
            Some(path) => path.to_path_buf(),
            None => ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
                .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
                .ok_or(ConfigError::ConfigDirNotFound)?,
        };
        Ok(Self { path })
    }

    /// Returns the configuration file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// A missing file is created with defaults; an unparsable one is left
    /// untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Config file not found, writing defaults");
            let config = AppConfig::default();
            self.write(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Unparsable config file, using defaults");
            AppConfig::default()
        }))
    }

    fn write(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}
