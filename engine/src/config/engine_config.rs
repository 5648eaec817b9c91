use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::games::SessionRng;
use crate::games::tictactoe::{DEFAULT_BOT_MOVE_DELAY, Difficulty, GameMode};
use super::Validate;

const MAX_BOT_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSetting {
    #[default]
    TwoPlayer,
    VsComputer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bot_move_delay_ms: u64,
    pub default_mode: ModeSetting,
    pub default_difficulty: Difficulty,
    /// Fixed seed for reproducible matches; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY.as_millis() as u64,
            default_mode: ModeSetting::TwoPlayer,
            default_difficulty: Difficulty::Medium,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn bot_move_delay(&self) -> Duration {
        Duration::from_millis(self.bot_move_delay_ms)
    }

    pub fn game_mode(&self) -> GameMode {
        match self.default_mode {
            ModeSetting::TwoPlayer => GameMode::TwoPlayer,
            ModeSetting::VsComputer => GameMode::VsComputer(self.default_difficulty),
        }
    }

    pub fn make_rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}",
                MAX_BOT_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigManager, InMemoryConfigProvider, YamlConfigSerializer};

    fn manager(content: Option<&str>) -> ConfigManager<InMemoryConfigProvider, EngineConfig> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer,
        )
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = manager(None).get_config().unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.bot_move_delay(), Duration::from_millis(500));
        assert_eq!(config.game_mode(), GameMode::TwoPlayer);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "default_mode: vs_computer\ndefault_difficulty: hard\nseed: 9\n";
        let config = manager(Some(yaml)).get_config().unwrap();
        assert_eq!(config.game_mode(), GameMode::VsComputer(Difficulty::Hard));
        assert_eq!(config.bot_move_delay_ms, 500);
        assert_eq!(config.make_rng().seed(), 9);
    }

    #[test]
    fn test_invalid_delay_is_rejected() {
        let err = manager(Some("bot_move_delay_ms: 60000\n"))
            .get_config()
            .unwrap_err();
        assert!(err.contains("bot_move_delay_ms"), "{err}");
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let err = manager(Some("default_difficulty: impossible\n"))
            .get_config()
            .unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{err}");
    }

    #[test]
    fn test_set_config_is_served_from_cache() {
        let manager = manager(None);
        let config = EngineConfig {
            bot_move_delay_ms: 0,
            default_mode: ModeSetting::VsComputer,
            default_difficulty: Difficulty::Easy,
            seed: Some(1),
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }
}
