use crate::games::SessionRng;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{CELL_COUNT, CellMark, GameStatus, Mark, PlayerSlot, WinningLine};

pub trait BoardReader {
    fn board_state(&self) -> [Mark; CELL_COUNT];
}

pub trait MoveApplier {
    fn apply_player_move(&mut self, index: usize) -> Result<GameStatus, GameError>;
}

pub trait OutcomeNotifier {
    fn on_state_changed(&mut self, update: &StateUpdate);
}

/// What a renderer needs after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateUpdate {
    pub status: GameStatus,
    pub board: [Mark; CELL_COUNT],
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<CellMark>,
}

impl StateUpdate {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            status: state.status(),
            board: state.board_state(),
            winning_line: state.winning_line(),
            last_move: state.last_move(),
        }
    }
}

/// Drives one game for an input/rendering collaborator.
///
/// Every successful move, human or automated, is reported once through the
/// notifier. Rejected moves report nothing.
pub struct TicTacToeSession<N: OutcomeNotifier> {
    game_state: TicTacToeGameState,
    notifier: N,
}

impl<N: OutcomeNotifier> TicTacToeSession<N> {
    pub fn new(settings: &TicTacToeSessionSettings, rng: SessionRng, notifier: N) -> Self {
        Self {
            game_state: TicTacToeGameState::new(settings, rng),
            notifier,
        }
    }

    pub fn new_game(
        &mut self,
        player_one_name: impl Into<String>,
        player_two_name: impl Into<String>,
        automated: bool,
    ) {
        self.game_state.set_automated_opponent(automated);
        self.game_state.reset(player_one_name, player_two_name);
    }

    pub fn rename_player(&mut self, slot: PlayerSlot, name: impl Into<String>) {
        self.game_state.rename_player(slot, name);
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn snapshot(&self) -> StateUpdate {
        StateUpdate::from_game_state(&self.game_state)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    fn notify(&mut self) {
        let update = StateUpdate::from_game_state(&self.game_state);
        self.notifier.on_state_changed(&update);
    }
}

impl<N: OutcomeNotifier> BoardReader for TicTacToeSession<N> {
    fn board_state(&self) -> [Mark; CELL_COUNT] {
        self.game_state.board_state()
    }
}

impl<N: OutcomeNotifier> MoveApplier for TicTacToeSession<N> {
    /// Applies the human move and, if the game goes on, the automated reply.
    /// Returns the status after both.
    fn apply_player_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        self.game_state.apply_player_move(index)?;
        self.notify();

        if self.game_state.maybe_auto_move()?.is_some() {
            self.notify();
        }

        Ok(self.game_state.status())
    }
}
