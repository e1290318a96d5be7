use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid size or difficulty")]
    InvalidSettings,
    #[error("Invalid x y position")]
    InvalidPosition,
    #[error("Board must be square with a side between 1 and 255")]
    InvalidBoardShape,
    #[error("Unknown preset name")]
    UnknownPreset,
    #[error("Game has not been started")]
    NotStarted,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
