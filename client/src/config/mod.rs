mod config;
mod logging_config;
mod opponent_config;
mod players_config;

pub use config::{Config, get_config_manager};
pub use logging_config::LoggingConfig;
pub use opponent_config::OpponentConfig;
pub use players_config::PlayersConfig;
