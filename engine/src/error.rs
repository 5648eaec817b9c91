use thiserror::Error;

use crate::games::tictactoe::Side;

/// Broad classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested cell cannot be played right now.
    IllegalMove,
    /// The game is not in a state that accepts the operation.
    IllegalState,
    /// A strategy was asked to move on a full board.
    NoLegalMove,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cell {index} is out of range (must be 0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("it is not {side}'s turn")]
    WrongTurn { side: Side },

    #[error("game is already over")]
    GameOver,

    #[error("it is not the automated side's turn")]
    NotAutomatedTurn,

    #[error("no legal moves available")]
    NoLegalMove,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::OutOfRange { .. }
            | GameError::CellOccupied { .. }
            | GameError::WrongTurn { .. } => ErrorKind::IllegalMove,
            GameError::GameOver | GameError::NotAutomatedTurn => ErrorKind::IllegalState,
            GameError::NoLegalMove => ErrorKind::NoLegalMove,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
