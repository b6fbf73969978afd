use common::config::Validate;
use common::games::tictactoe::validate_player_name;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PlayersConfig {
    pub player_one: String,
    pub player_two: String,
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        validate_player_name(&self.player_one)?;
        validate_player_name(&self.player_two)?;
        Ok(())
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            player_one: "Player 1".to_string(),
            player_two: "Computer".to_string(),
        }
    }
}
