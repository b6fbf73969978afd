use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::GameError;
use super::settings::TicTacToeSessionSettings;
use super::types::{CELL_COUNT, CellMark, GameStatus, Mark, Player, PlayerSlot, Players, WinLine, WinningLine};
use super::win_detector::matching_lines;

/// The seat the computer takes when the automated opponent is on.
pub const AUTOMATED_SLOT: PlayerSlot = PlayerSlot::Two;

/// Turn state machine for one game: owns the board, whose turn it is and
/// the outcome. A move either applies completely or not at all.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    players: Players,
    current_slot: PlayerSlot,
    status: GameStatus,
    winning_lines: Vec<WinLine>,
    automated_opponent: bool,
    search_depth: u32,
    last_move: Option<CellMark>,
    rng: SessionRng,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSessionSettings, rng: SessionRng) -> Self {
        crate::log!(
            "New game: {} (X) vs {} (O), automated opponent: {}, depth: {}, seed: {}",
            settings.player_one_name,
            settings.player_two_name,
            settings.automated_opponent,
            settings.search_depth,
            rng.seed()
        );

        Self {
            board: Board::new(),
            players: Players::new(
                settings.player_one_name.as_str(),
                settings.player_two_name.as_str(),
            ),
            current_slot: PlayerSlot::One,
            status: GameStatus::InProgress,
            winning_lines: Vec::new(),
            automated_opponent: settings.automated_opponent,
            search_depth: settings.search_depth,
            last_move: None,
            rng,
        }
    }

    pub fn reset(&mut self, player_one_name: impl Into<String>, player_two_name: impl Into<String>) {
        self.board.reset();
        self.players = Players::new(player_one_name, player_two_name);
        self.current_slot = PlayerSlot::One;
        self.status = GameStatus::InProgress;
        self.winning_lines.clear();
        self.last_move = None;

        crate::log!(
            "Game reset: {} (X) vs {} (O)",
            self.players.get(PlayerSlot::One).name(),
            self.players.get(PlayerSlot::Two).name()
        );
    }

    pub fn set_automated_opponent(&mut self, enabled: bool) {
        self.automated_opponent = enabled;
    }

    pub fn rename_player(&mut self, slot: PlayerSlot, name: impl Into<String>) {
        self.players.get_mut(slot).set_name(name);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_state(&self) -> [Mark; CELL_COUNT] {
        self.board.get()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        self.players.get(slot)
    }

    pub fn current_player(&self) -> &Player {
        self.players.get(self.current_slot)
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(slot) => Some(self.players.get(slot)),
            _ => None,
        }
    }

    /// All lines completed by the winning move; empty unless the game is won.
    pub fn winning_lines(&self) -> &[WinLine] {
        &self.winning_lines
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        let winner = self.winner()?;
        self.winning_lines
            .first()
            .map(|&cells| WinningLine::new(winner.mark(), cells))
    }

    pub fn is_automated_opponent(&self) -> bool {
        self.automated_opponent
    }

    pub fn search_depth(&self) -> u32 {
        self.search_depth
    }

    pub fn last_move(&self) -> Option<CellMark> {
        self.last_move
    }

    pub fn is_automated_turn(&self) -> bool {
        self.automated_opponent
            && self.status == GameStatus::InProgress
            && self.current_slot == AUTOMATED_SLOT
    }

    pub fn apply_player_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            crate::log!("Rejected move at {}: game is already over", index);
            return Err(GameError::GameOver);
        }

        if self.board.is_occupied(index).inspect_err(|e| crate::log!("Rejected move: {}", e))? {
            crate::log!("Rejected move at {}: cell is already marked", index);
            return Err(GameError::InvalidMove(index));
        }

        self.place_mark(index)
    }

    /// Plays the computer's reply when it is the automated side's turn.
    /// Returns the chosen cell, or `None` when no automated move was due.
    pub fn maybe_auto_move(&mut self) -> Result<Option<usize>, GameError> {
        if !self.is_automated_turn() {
            return Ok(None);
        }

        let input = BotInput::from_game_state(self);
        let Some(index) = calculate_move(&input, &mut self.rng) else {
            return Ok(None);
        };

        crate::log!(
            "{} searched at depth {} and picked {}",
            self.current_player().name(),
            input.depth,
            index
        );

        self.apply_player_move(index)?;
        Ok(Some(index))
    }

    fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        let mark = self.current_slot.mark();
        self.board.apply_move(index, mark)?;
        self.last_move = Some(CellMark::new(index, mark));

        crate::log!("{} placed {} at {}", self.current_player().name(), mark, index);

        self.check_game_over(mark);

        if self.status == GameStatus::InProgress {
            self.current_slot = self.current_slot.other();
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self, mark: Mark) {
        let lines = matching_lines(&self.board, mark);
        if !lines.is_empty() {
            self.winning_lines = lines;
            self.status = GameStatus::Won(self.current_slot);
            crate::log!("{} won", self.current_player().name());
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            crate::log!("Game tied");
        }
    }
}
