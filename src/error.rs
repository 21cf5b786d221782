use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("level index {0} is out of range")]
    InvalidLevelIndex(usize),
    #[error("malformed level: {0}")]
    MalformedLevel(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
