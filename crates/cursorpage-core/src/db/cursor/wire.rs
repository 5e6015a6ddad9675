use crate::value::Value;
use serde::{Deserialize, Serialize};

// Defensive decode bounds for untrusted cursor token input.
pub(super) const MAX_CURSOR_TOKEN_LEN: usize = 8 * 1024;
pub(super) const MAX_CURSOR_PAYLOAD_BYTES: usize = 6 * 1024;

///
/// CursorTokenVersion
///
/// Wire-level cursor token version owned by the cursor protocol boundary.
/// This keeps version parsing and compatibility behavior centralized.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CursorTokenVersion {
    V1,
}

impl CursorTokenVersion {
    const V1_TAG: u8 = 1;

    pub(super) const CURRENT: Self = Self::V1;

    // Decode one raw wire version into the protocol enum.
    pub(super) const fn decode(raw: u8) -> Option<Self> {
        match raw {
            Self::V1_TAG => Some(Self::V1),
            _ => None,
        }
    }

    // Encode this protocol version for wire format output.
    pub(super) const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}

///
/// CursorTokenWire
///
/// Serialized cursor record. Field names are implied by the sort spec the
/// signature was computed from, so only values travel.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(super) struct CursorTokenWire {
    pub(super) version: u8,
    pub(super) signature: [u8; 8],
    pub(super) values: Vec<Value>,
}
