use serde::{Deserialize, Serialize};
use tictactoe_engine::DEFAULT_DEPTH_LIMIT;
use tictactoe_engine::config::{ConfigManager, Validate};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(path: Option<&str>) -> ConfigManager<GameConfig> {
    ConfigManager::from_yaml_file(path.unwrap_or(CONFIG_FILE))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// Search depth the computer starts the session with. Each human win
    /// deepens the search by one ply.
    pub initial_depth_limit: u32,
    /// Cosmetic pause before the computer moves. Zero disables it.
    pub think_delay_ms: u64,
    /// Fixed RNG seed for reproducible sessions; omit for a random one.
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.initial_depth_limit < DEFAULT_DEPTH_LIMIT {
            return Err(format!(
                "initial_depth_limit must be at least {}",
                DEFAULT_DEPTH_LIMIT
            ));
        }
        if self.initial_depth_limit > 25 {
            return Err("initial_depth_limit must not exceed 25".to_string());
        }
        if self.think_delay_ms > 10_000 {
            return Err("think_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_depth_limit: DEFAULT_DEPTH_LIMIT,
            think_delay_ms: 500,
            seed: None,
        }
    }
}
