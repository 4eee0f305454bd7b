// felica-tag/src/error.rs

use thiserror::Error;

/// Broad origin of an [`Error`], used to pick a recovery policy.
///
/// `Transport` means the card is gone and the session should be recreated on
/// the next tag presentation. `Protocol` points at a programming or data
/// corruption fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Protocol,
    Transport,
    UnexpectedResponse,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("command packet too large: {length} bytes (max 255)")]
    PacketTooLarge { length: usize },

    #[error("malformed response: expected at least {expected} bytes, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("no IDm available: polling has not succeeded yet")]
    NoIdm,

    #[error("no transceiver bound to the session")]
    NoTransport,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("tag lost: card left the field")]
    TagLost,

    #[error("operation timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TagLost | Error::Timeout | Error::Transport(_) => ErrorKind::Transport,
            Error::UnexpectedResponse { .. } => ErrorKind::UnexpectedResponse,
            _ => ErrorKind::Protocol,
        }
    }

    /// True when the failure came from the transceiver rather than the codec.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

pub type Result<T> = std::result::Result<T, Error>;
