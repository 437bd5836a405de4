use thiserror::Error;

/// Construction-time configuration errors. Invalid moves during play are
/// not errors: the board ignores them, and a lost game is a normal outcome.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board must be at least 1x1")]
    EmptyBoard,
    #[error("too many mines for the board size")]
    TooManyMines,
    #[error("mine coordinates outside the board")]
    MineOutOfBounds,
}

pub type Result<T> = std::result::Result<T, GameError>;
