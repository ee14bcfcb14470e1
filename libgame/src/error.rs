use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The grid handed in is not a well-formed binary board.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A driver parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type GameResult<T> = Result<T, GameError>;
