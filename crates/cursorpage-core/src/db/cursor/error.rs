use crate::serialize::SerializeError;
use thiserror::Error as ThisError;

///
/// CursorError
///
/// Cursor token encode/decode and shape validation failures.
///
/// Every variant except `Encode` is caused by client input and must be
/// reported as such.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token is not valid base64url")]
    InvalidEncoding,

    #[error("cursor payload could not be decoded: {0}")]
    Decode(String),

    #[error("unsupported cursor version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error("cursor does not match the requested sort order: expected={expected}, actual={actual}")]
    SignatureMismatch { expected: String, actual: String },

    #[error("cursor arity mismatch: expected {expected} fields, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("failed to encode cursor: {0}")]
    Encode(String),
}

impl CursorError {
    /// Returns true when the failure is attributable to the caller's token.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Encode(_))
    }

    pub(super) fn decode(err: &SerializeError) -> Self {
        Self::Decode(err.to_string())
    }

    pub(super) fn encode(err: &SerializeError) -> Self {
        Self::Encode(err.to_string())
    }
}
