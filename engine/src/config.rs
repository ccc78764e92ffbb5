use std::io::ErrorKind;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config file and caches the parsed value. A missing file
/// yields the config's `Default`; a present but malformed or invalid file is
/// an error rather than a silent fallback.
pub struct ConfigManager<TConfig> {
    file_path: String,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            config: Mutex::new(None),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => {
                let config: TConfig = serde_yaml_ng::from_str(&content)
                    .map_err(|e| format!("Failed to deserialize config: {}", e))?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                config
            }
            Err(e) if e.kind() == ErrorKind::NotFound => TConfig::default(),
            Err(e) => {
                return Err(format!(
                    "Failed to read config file {}: {}",
                    self.file_path, e
                ));
            }
        };

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.file_path, serialized).map_err(|e| {
            format!("Failed to write config file {}: {}", self.file_path, e)
        })?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        answer: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { answer: 42 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.answer == 0 {
                return Err("answer must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    fn temp_config_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("tictactoe_engine_{}_{}.yaml", name, std::process::id()));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager: ConfigManager<TestConfig> =
            ConfigManager::from_yaml_file(&temp_config_path("missing"));
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let path = temp_config_path("round_trip");
        let manager: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);

        let config = TestConfig { answer: 7 };
        manager.set_config(&config).unwrap();

        let fresh: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "answer: 0\n").unwrap();

        let manager: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);
        let error = manager.get_config().unwrap_err();
        assert!(error.contains("validation"), "unexpected error: {}", error);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_set_rejects_invalid_config() {
        let path = temp_config_path("set_invalid");
        let manager: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);

        assert!(manager.set_config(&TestConfig { answer: 0 }).is_err());
        assert!(!std::path::Path::new(&path).exists());
    }
}
