use std::path::PathBuf;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSessionSettings;
use serde::{Deserialize, Serialize};

use super::{LoggingConfig, OpponentConfig, PlayersConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub players: PlayersConfig,
    pub opponent: OpponentConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            player_one_name: self.players.player_one.trim().to_string(),
            player_two_name: self.players.player_two.trim().to_string(),
            automated_opponent: self.opponent.automated,
            search_depth: self.opponent.search_depth,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.players.validate()?;
        self.opponent.validate()?;
        self.logging.validate()?;
        self.session_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid_and_matches_session_defaults() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session_settings(), TicTacToeSessionSettings::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer;
        let config: Config = serializer
            .deserialize("players:\n  player_one: Alice\nopponent:\n  search_depth: 4\n")
            .unwrap();

        assert_eq!(config.players.player_one, "Alice");
        assert_eq!(config.players.player_two, "Computer");
        assert_eq!(config.opponent.search_depth, 4);
        assert!(config.opponent.automated);
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let mut config = Config::default();
        config.opponent.search_depth = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.players.player_one = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.prefix = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_config_saved_to_file_is_read_back() {
        let file_path = get_temp_file_path();
        let mut config = Config::default();
        config.players.player_two = "Bob".to_string();
        config.opponent.automated = false;
        config.logging.prefix = Some("ttt".to_string());

        get_config_manager(Some(file_path.clone())).set_config(&config).unwrap();

        let content = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("player_two: Bob"));

        let reloaded = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(reloaded, config);

        let _ = std::fs::remove_file(file_path);
    }
}
