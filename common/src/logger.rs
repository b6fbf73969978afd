use std::sync::OnceLock;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Diagnostics go to stderr; stdout belongs to whoever renders the board.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: DateTime<Local>, file: &str, line: u32, message: &str) -> String {
        let timestamp = timestamp.format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(Local::now(), file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// No-op until `init_logger` has been called.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Game".to_string()));
        let line = logger.format_line(fixed_time(), "src/games/tictactoe/game_state.rs", 42, "X at 4");
        assert_eq!(line, "[2024-03-09 14:05:07][Game][game_state.rs:42] X at 4");
    }

    #[test]
    fn test_format_line_without_prefix_strips_windows_path() {
        let logger = Logger::new(None);
        let line = logger.format_line(fixed_time(), "src\\main.rs", 7, "hello");
        assert_eq!(line, "[2024-03-09 14:05:07][main.rs:7] hello");
    }
}
