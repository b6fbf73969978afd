use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::has_line;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const NEUTRAL_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub depth: u32,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            depth: state.search_depth(),
            bot_mark: state.current_player().mark(),
        }
    }
}

pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let opponent_mark = input.bot_mark.opponent()?;
    choose_move(&input.board, input.depth, input.bot_mark, opponent_mark, rng)
}

#[derive(Clone, Copy)]
struct SearchMarks {
    maximizing: Mark,
    minimizing: Mark,
}

/// Picks a cell for `maximizing_mark`.
///
/// At depth 0 the pick is uniformly random among the empty cells. Otherwise
/// every empty cell is tried in ascending order and scored with a plain
/// minimax (no pruning) down to `depth`; the first cell with the highest
/// score wins. Returns `None` when the board has no empty cell or the marks
/// are not two distinct players.
pub fn choose_move(
    board: &Board,
    depth: u32,
    maximizing_mark: Mark,
    minimizing_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    if maximizing_mark.is_empty() || minimizing_mark.is_empty() || maximizing_mark == minimizing_mark {
        return None;
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    if depth == 0 {
        return rng
            .pick_index(available_moves.len())
            .map(|idx| available_moves[idx].index);
    }

    let marks = SearchMarks {
        maximizing: maximizing_mark,
        minimizing: minimizing_mark,
    };

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in available_moves {
        let next = board.with_move(cell.index, marks.maximizing);
        let score = minimax(&next, depth, false, marks);

        if score > best_score {
            best_score = score;
            best_move = Some(cell.index);
        }
    }

    best_move
}

fn minimax(board: &Board, depth: u32, is_maximizing: bool, marks: SearchMarks) -> i32 {
    // Minimizing side is checked first.
    if has_line(board, marks.minimizing) {
        return LOSS_SCORE;
    }
    if has_line(board, marks.maximizing) {
        return WIN_SCORE;
    }

    // Horizon and draw both score neutral.
    if depth == 0 || board.is_full() {
        return NEUTRAL_SCORE;
    }

    let moves = board.available_moves();

    if is_maximizing {
        moves
            .iter()
            .map(|cell| {
                let next = board.with_move(cell.index, marks.maximizing);
                minimax(&next, depth - 1, false, marks)
            })
            .max()
            .unwrap_or(NEUTRAL_SCORE)
    } else {
        moves
            .iter()
            .map(|cell| {
                let next = board.with_move(cell.index, marks.minimizing);
                minimax(&next, depth - 1, true, marks)
            })
            .min()
            .unwrap_or(NEUTRAL_SCORE)
    }
}
