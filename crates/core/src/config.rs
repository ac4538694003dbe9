use crate::clock::TimeBasis;
use crate::layout::{LogLayout, DEFAULT_LOG_DIR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub log_dir: PathBuf,
    pub time_basis: TimeBasis,
}

impl JournalConfig {
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Self {
        Self {
            log_dir: log_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_time_basis(mut self, time_basis: TimeBasis) -> Self {
        self.time_basis = time_basis;
        self
    }

    pub fn layout(&self) -> LogLayout {
        LogLayout::new(&self.log_dir)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            time_basis: TimeBasis::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config = JournalConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, JournalConfig::default());
        assert_eq!(config.log_dir, PathBuf::from(".tmp/logs"));
    }

    #[test]
    fn test_partial_config() {
        let config = JournalConfig::from_yaml_str("time_basis: utc\n").unwrap();
        assert_eq!(config.time_basis, TimeBasis::Utc);
        assert_eq!(config.log_dir, PathBuf::from(".tmp/logs"));
    }

    #[test]
    fn test_rejects_unknown_time_basis() {
        let result = JournalConfig::from_yaml_str("time_basis: martian\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("runlog.yaml");
        let config = JournalConfig::new("/srv/logs").with_time_basis(TimeBasis::Utc);

        config.save(&path).unwrap();
        let loaded = JournalConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.layout().dir(), Path::new("/srv/logs"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let result = JournalConfig::load(temp.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
