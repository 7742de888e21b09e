use thiserror::Error;

/// Rejections raised while turning user input into a [`Board`](crate::logic::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("expected exactly 9 tiles, found {found}")]
    WrongLength { found: usize },
    #[error("tile {value} is out of range, tiles must be 0-8")]
    OutOfRange { value: u32 },
    #[error("tile {value} appears more than once")]
    Duplicate { value: u8 },
    #[error("invalid tile '{token}', expected an integer")]
    InvalidToken { token: String },
}
