use common::config::Validate;
use common::games::tictactoe::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OpponentConfig {
    pub automated: bool,
    pub search_depth: u32,
}

impl Validate for OpponentConfig {
    fn validate(&self) -> Result<(), String> {
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "search_depth must be between 0 and {}",
                MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            automated: true,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}
