mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, check_index};
pub use bot_controller::{BotInput, calculate_move, choose_move};
pub use error::GameError;
pub use game_state::{AUTOMATED_SLOT, TicTacToeGameState};
pub use session::{BoardReader, MoveApplier, OutcomeNotifier, StateUpdate, TicTacToeSession};
pub use settings::{
    DEFAULT_SEARCH_DEPTH, MAX_PLAYER_NAME_LEN, MAX_SEARCH_DEPTH, TicTacToeSessionSettings,
    validate_player_name,
};
pub use types::{
    BOARD_SIZE, CELL_COUNT, CellMark, GameStatus, Mark, Player, PlayerSlot, Players, Position,
    WinLine, WinningLine, cell_at_point,
};
pub use win_detector::{WIN_LINES, has_line, is_tie, matching_lines, winning_line};
