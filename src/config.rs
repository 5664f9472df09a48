use crate::error::{LarderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LarderConfig {
    #[serde(default)]
    pub larder: LarderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LarderSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_foods_key")]
    pub foods_key: String,

    #[serde(default = "default_recipes_key")]
    pub recipes_key: String,

    /// Foods expiring within this many days are flagged as expiring soon.
    #[serde(default = "default_expiring_within_days")]
    pub expiring_within_days: i64,
}

fn default_path() -> String {
    ".larder".to_string()
}

fn default_foods_key() -> String {
    "foods".to_string()
}

fn default_recipes_key() -> String {
    "recipes".to_string()
}

fn default_expiring_within_days() -> i64 {
    3
}

impl Default for LarderSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            foods_key: default_foods_key(),
            recipes_key: default_recipes_key(),
            expiring_within_days: default_expiring_within_days(),
        }
    }
}

impl LarderConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: LarderConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| LarderError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".larder.toml");
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(LarderError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.larder.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LarderError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = LarderSettings::default();
        assert_eq!(settings.path, ".larder");
        assert_eq!(settings.foods_key, "foods");
        assert_eq!(settings.recipes_key, "recipes");
        assert_eq!(settings.expiring_within_days, 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".larder.toml");

        let config = LarderConfig::default();
        config.save(&config_path).unwrap();

        let (loaded, root) = LarderConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.larder.path, config.larder.path);
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".larder.toml");
        LarderConfig::default().save(&config_path).unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = LarderConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_not_initialized() {
        let dir = TempDir::new().unwrap();
        let result = LarderConfig::find_config_file(dir.path());
        assert!(matches!(result, Err(LarderError::NotInitialized)));
    }
}
