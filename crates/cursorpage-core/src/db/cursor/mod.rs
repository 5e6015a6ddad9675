//! Module: cursor
//! Responsibility: the opaque cursor token and its codec.
//! Does not own: sort semantics beyond "which fields are in the token".
//! Boundary: the only artifact of this crate visible to end clients.

mod boundary;
mod codec;
mod error;
mod wire;

#[cfg(test)]
mod tests;

pub use boundary::CursorBoundary;
pub use codec::{CursorCodec, decode_cursor, encode_cursor};
pub use error::CursorError;

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Cursor
///
/// Opaque pagination token. Clients must treat the content as meaningless;
/// it is only valid against the sort specification that produced it.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
