use common::games::tictactoe::{PlayerSlot, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewGame,
    Rename(PlayerSlot, String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <cell>          place your mark on cell 0-8 (row-major)
  <row> <col>     place your mark by row and column, each 0-2
  new             start a new game with the current names
  name <1|2> <n>  rename player one or two
  help            show this message
  quit            leave";

/// Parses one line of player input. Cell numbers are passed through as-is;
/// range checking is left to the game.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty input, type 'help' for commands".to_string());
    };

    match head.to_ascii_lowercase().as_str() {
        "new" | "restart" => Ok(Command::NewGame),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "name" => parse_rename(parts),
        _ => parse_place(head, parts.next(), parts.next()),
    }
}

fn parse_rename<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Command, String> {
    let slot = match parts.next() {
        Some("1") => PlayerSlot::One,
        Some("2") => PlayerSlot::Two,
        _ => return Err("Usage: name <1|2> <name>".to_string()),
    };

    let name = parts.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err("Usage: name <1|2> <name>".to_string());
    }
    Ok(Command::Rename(slot, name))
}

fn parse_place(first: &str, second: Option<&str>, extra: Option<&str>) -> Result<Command, String> {
    if extra.is_some() {
        return Err("Too many numbers, expected <cell> or <row> <col>".to_string());
    }

    let first = parse_number(first)?;
    match second {
        None => Ok(Command::Place(first)),
        Some(col) => {
            let col = parse_number(col)?;
            Position::new(first, col)
                .to_index()
                .map(Command::Place)
                .ok_or_else(|| format!("Row {} / column {} is outside the board", first, col))
        }
    }
}

fn parse_number(text: &str) -> Result<usize, String> {
    text.parse::<usize>()
        .map_err(|_| format!("'{}' is not a command or a cell number", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index() {
        assert_eq!(parse_command("4"), Ok(Command::Place(4)));
        assert_eq!(parse_command("  8 "), Ok(Command::Place(8)));
        assert_eq!(parse_command("12"), Ok(Command::Place(12)));
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(parse_command("1 2"), Ok(Command::Place(5)));
        assert_eq!(parse_command("2 0"), Ok(Command::Place(6)));
        assert!(parse_command("3 0").is_err());
        assert!(parse_command("1 2 3").is_err());
    }

    #[test]
    fn test_words() {
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("HELP"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("name 2 Deep Blue"),
            Ok(Command::Rename(PlayerSlot::Two, "Deep Blue".to_string()))
        );
    }

    #[test]
    fn test_bad_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("x").is_err());
        assert!(parse_command("-1").is_err());
        assert!(parse_command("name 3 Bob").is_err());
        assert!(parse_command("name 1").is_err());
    }
}
