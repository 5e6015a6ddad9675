//! Module: request
//! Responsibility: the Relay-style pagination request and its validation.
//! Does not own: cursor decoding or sort construction.
//! Boundary: rejects invalid argument combinations before any query is planned.

use crate::{config::PaginationConfig, db::cursor::Cursor, db::sort::SortSpecError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// RequestError
///
/// Invalid pagination or sort arguments. Always a client error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RequestError {
    #[error("`first` and `last` cannot be combined")]
    FirstAndLast,

    #[error("`first` with `before` requires `after`")]
    FirstWithBeforeOnly,

    #[error("`last` with `after` requires `before`")]
    LastWithAfterOnly,

    #[error("cannot sort by field '{field}'")]
    InvalidSortField { field: String },

    #[error(transparent)]
    InvalidSort(#[from] SortSpecError),
}

impl RequestError {
    /// Stable label for telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FirstAndLast => "first_and_last",
            Self::FirstWithBeforeOnly => "first_with_before_only",
            Self::LastWithAfterOnly => "last_with_after_only",
            Self::InvalidSortField { .. } => "invalid_sort_field",
            Self::InvalidSort(_) => "invalid_sort",
        }
    }
}

///
/// Direction
///
/// Query traversal direction. Backward traversal runs the query under the
/// reversed sort and restores the original order afterwards.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }
}

///
/// TraversalMode
///
/// Which `PageInfo` derivation applies. `Window` wins over the direction
/// whenever both `after` and `before` are present.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalMode {
    Forward,
    Backward,
    Window,
}

impl TraversalMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Window => "window",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// PaginationRequest
///
/// `first`/`after` traverse forward, `last`/`before` traverse backward, and
/// `after` plus `before` bound a window.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Cursor>,
}

impl PaginationRequest {
    /// `first: n`.
    #[must_use]
    pub fn forward(first: u32) -> Self {
        Self {
            first: Some(first),
            ..Self::default()
        }
    }

    /// `last: n`.
    #[must_use]
    pub fn backward(last: u32) -> Self {
        Self {
            last: Some(last),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn after(mut self, cursor: impl Into<Cursor>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn before(mut self, cursor: impl Into<Cursor>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Check the argument combination and resolve direction, mode and size.
    pub fn validate(&self, config: &PaginationConfig) -> Result<RequestShape, RequestError> {
        let has_after = self.after.is_some();
        let has_before = self.before.is_some();

        let (direction, requested) = match (self.first, self.last) {
            (Some(_), Some(_)) => return Err(RequestError::FirstAndLast),
            (Some(_), None) if has_before && !has_after => {
                return Err(RequestError::FirstWithBeforeOnly);
            }
            (None, Some(_)) if has_after && !has_before => {
                return Err(RequestError::LastWithAfterOnly);
            }
            (Some(first), None) => (Direction::Forward, Some(first)),
            (None, Some(last)) => (Direction::Backward, Some(last)),
            (None, None) if has_before && !has_after => (Direction::Backward, None),
            (None, None) => (Direction::Forward, None),
        };

        let mode = match (has_after && has_before, direction) {
            (true, _) => TraversalMode::Window,
            (false, Direction::Forward) => TraversalMode::Forward,
            (false, Direction::Backward) => TraversalMode::Backward,
        };

        Ok(RequestShape {
            direction,
            mode,
            size: config.page_size(requested),
        })
    }
}

///
/// RequestShape
///
/// Validated request: traversal direction, page-info mode and clamped size.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequestShape {
    pub direction: Direction,
    pub mode: TraversalMode,
    pub size: u32,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginationConfig {
        PaginationConfig::default()
    }

    #[test]
    fn invalid_combinations_are_rejected() {
        let both = PaginationRequest {
            first: Some(1),
            last: Some(1),
            ..PaginationRequest::default()
        };
        assert_eq!(both.validate(&config()), Err(RequestError::FirstAndLast));

        let first_before = PaginationRequest::forward(2).before("c");
        assert_eq!(
            first_before.validate(&config()),
            Err(RequestError::FirstWithBeforeOnly)
        );

        let last_after = PaginationRequest::backward(2).after("c");
        assert_eq!(
            last_after.validate(&config()),
            Err(RequestError::LastWithAfterOnly)
        );
    }

    #[test]
    fn accompanied_pairings_are_windows() {
        let forward = PaginationRequest::forward(2).after("a").before("b");
        let shape = forward.validate(&config()).expect("window is valid");
        assert_eq!(shape.direction, Direction::Forward);
        assert_eq!(shape.mode, TraversalMode::Window);

        let backward = PaginationRequest::backward(2).after("a").before("b");
        let shape = backward.validate(&config()).expect("window is valid");
        assert_eq!(shape.direction, Direction::Backward);
        assert_eq!(shape.mode, TraversalMode::Window);
    }

    #[test]
    fn sizes_default_and_clamp() {
        let shape = PaginationRequest::default()
            .validate(&config())
            .expect("empty request is valid");
        assert_eq!(shape.size, 20);
        assert_eq!(shape.mode, TraversalMode::Forward);

        let shape = PaginationRequest::forward(10_000)
            .validate(&config())
            .expect("oversized request is clamped");
        assert_eq!(shape.size, 100);
    }

    #[test]
    fn bare_before_traverses_backward() {
        let shape = PaginationRequest::default()
            .before("c")
            .validate(&config())
            .expect("bare before is valid");

        assert_eq!(shape.direction, Direction::Backward);
        assert_eq!(shape.mode, TraversalMode::Backward);
        assert_eq!(shape.size, 20);
    }

    #[test]
    fn request_uses_relay_argument_names() {
        let request: PaginationRequest =
            serde_json::from_str(r#"{"last":3,"before":"abc"}"#).expect("request parses");

        assert_eq!(request, PaginationRequest::backward(3).before("abc"));
        assert_eq!(
            serde_json::to_string(&PaginationRequest::forward(1)).expect("request serializes"),
            r#"{"first":1}"#
        );
    }
}
