// libbana/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unknown command: {command:#04x}")]
    UnknownCommand { command: u8 },

    #[error("invalid uid length: {len}")]
    InvalidUid { len: usize },

    #[error("no card in field")]
    NoCard,
    #[error("mifare session not authenticated")]
    NotAuthenticated,
    #[error("card in field does not match the requested uid")]
    StaleUid,

    #[error("bus error: {0}")]
    Bus(String),

    #[error("operation timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, Error>;
