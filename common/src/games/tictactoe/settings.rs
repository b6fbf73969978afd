use crate::config::Validate;

pub const DEFAULT_SEARCH_DEPTH: u32 = 2;
pub const MAX_SEARCH_DEPTH: u32 = 9;
pub const MAX_PLAYER_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub player_one_name: String,
    pub player_two_name: String,
    pub automated_opponent: bool,
    pub search_depth: u32,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            player_one_name: "Player 1".to_string(),
            player_two_name: "Computer".to_string(),
            automated_opponent: true,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        validate_player_name(&self.player_one_name)?;
        validate_player_name(&self.player_two_name)?;
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "Search depth ({}) cannot exceed {}",
                self.search_depth, MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}

pub fn validate_player_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Player name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "Player name '{}' is longer than {} characters",
            trimmed, MAX_PLAYER_NAME_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSessionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.search_depth, 2);
        assert!(settings.automated_opponent);
    }

    #[test]
    fn test_blank_name_rejected() {
        let settings = TicTacToeSessionSettings {
            player_two_name: "   ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_long_name_rejected() {
        assert!(validate_player_name(&"a".repeat(MAX_PLAYER_NAME_LEN)).is_ok());
        assert!(validate_player_name(&"a".repeat(MAX_PLAYER_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_depth_limit() {
        let settings = TicTacToeSessionSettings {
            search_depth: MAX_SEARCH_DEPTH + 1,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("Search depth"));
    }
}
