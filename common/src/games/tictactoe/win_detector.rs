use super::board::Board;
use super::types::{Mark, WinLine, WinningLine};

pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every line whose three cells all hold `mark`. `Mark::Empty` never matches.
pub fn matching_lines(board: &Board, mark: Mark) -> Vec<WinLine> {
    if mark.is_empty() {
        return Vec::new();
    }

    let cells = board.cells();
    WIN_LINES
        .iter()
        .filter(|line| line.iter().all(|&idx| cells[idx] == mark))
        .copied()
        .collect()
}

pub fn has_line(board: &Board, mark: Mark) -> bool {
    if mark.is_empty() {
        return false;
    }

    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

pub fn is_tie(board: &Board) -> bool {
    board.is_full() && !has_line(board, Mark::X) && !has_line(board, Mark::O)
}

/// First matching line for `mark`; a double-line win still draws one line.
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    matching_lines(board, mark)
        .first()
        .map(|&cells| WinningLine::new(mark, cells))
}
