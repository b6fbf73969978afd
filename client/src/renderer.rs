use std::io::Write;
use common::games::tictactoe::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, OutcomeNotifier, StateUpdate};

/// Text board: marks where played, the cell number where empty.
pub fn render_board(board: &[Mark; CELL_COUNT]) -> String {
    let rows: Vec<String> = board
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark {
                    Mark::Empty => format!(" {} ", row * BOARD_SIZE + col),
                    _ => format!(" {} ", mark),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn describe_outcome(update: &StateUpdate) -> Option<String> {
    match update.status {
        GameStatus::InProgress => None,
        GameStatus::Tied => Some("Game over: it's a tie.".to_string()),
        GameStatus::Won(slot) => {
            let line = update
                .winning_line
                .map(|line| format!(" along {} -> {}", line.start, line.end))
                .unwrap_or_default();
            Some(format!("Game over: {} wins{}.", slot.mark(), line))
        }
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show(&mut self, update: &StateUpdate) {
        if let Err(e) = self.write_update(update) {
            common::log!("Failed to render board: {}", e);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_update(&mut self, update: &StateUpdate) -> std::io::Result<()> {
        writeln!(self.out)?;
        if let Some(last) = update.last_move {
            writeln!(self.out, "{} played {}", last.mark, last.index)?;
        }
        writeln!(self.out, "{}", render_board(&update.board))?;
        if let Some(outcome) = describe_outcome(update) {
            writeln!(self.out, "{}", outcome)?;
        }
        self.out.flush()
    }
}

impl<W: Write> OutcomeNotifier for TerminalRenderer<W> {
    fn on_state_changed(&mut self, update: &StateUpdate) {
        self.show(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{CellMark, PlayerSlot, WinningLine};

    fn update(status: GameStatus, board: [Mark; CELL_COUNT]) -> StateUpdate {
        StateUpdate {
            status,
            board,
            winning_line: None,
            last_move: None,
        }
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let text = render_board(&[Mark::Empty; CELL_COUNT]);
        assert_eq!(text, " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 ");
    }

    #[test]
    fn test_render_marks() {
        let mut board = [Mark::Empty; CELL_COUNT];
        board[0] = Mark::X;
        board[4] = Mark::O;
        let text = render_board(&board);
        assert!(text.starts_with(" X | 1 | 2 "));
        assert!(text.contains(" 3 | O | 5 "));
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(describe_outcome(&update(GameStatus::InProgress, [Mark::Empty; CELL_COUNT])), None);
        assert_eq!(
            describe_outcome(&update(GameStatus::Tied, [Mark::X; CELL_COUNT])),
            Some("Game over: it's a tie.".to_string())
        );

        let mut won = update(GameStatus::Won(PlayerSlot::Two), [Mark::O; CELL_COUNT]);
        won.winning_line = Some(WinningLine::new(Mark::O, [2, 4, 6]));
        assert_eq!(describe_outcome(&won), Some("Game over: O wins along 2 -> 6.".to_string()));
    }

    #[test]
    fn test_notifier_writes_move_and_board() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut board = [Mark::Empty; CELL_COUNT];
        board[4] = Mark::X;
        let mut moved = update(GameStatus::InProgress, board);
        moved.last_move = Some(CellMark::new(4, Mark::X));

        renderer.on_state_changed(&moved);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("X played 4"));
        assert!(text.contains(" 3 | X | 5 "));
        assert!(!text.contains("Game over"));
    }
}
