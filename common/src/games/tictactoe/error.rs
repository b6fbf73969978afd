use std::fmt;

use super::types::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    OutOfRange(usize),
    InvalidMove(usize),
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfRange(index) => {
                write!(f, "Cell index {} is out of range 0..{}", index, CELL_COUNT)
            }
            GameError::InvalidMove(index) => write!(f, "Cell {} is already marked", index),
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
