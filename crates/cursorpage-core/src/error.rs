use crate::db::{
    cursor::CursorError,
    request::RequestError,
    sort::SortSpecError,
    source::DataSourceError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure a pagination call can surface. Nothing is retried, logged,
/// or partially returned; the caller gets exactly one of these.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("bad request: {0}")]
    BadRequest(#[from] RequestError),

    #[error("invalid cursor: {0}")]
    InvalidCursor(CursorError),

    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::BadRequest(_) => ErrorClass::Client,
            Self::InvalidCursor(err) if err.is_client_error() => ErrorClass::Client,
            Self::DataSource(_) => ErrorClass::DataSource,
            Self::InvalidCursor(_) | Self::Internal(_) => ErrorClass::Internal,
        }
    }

    /// Returns true when the caller's input caused the failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.class(), ErrorClass::Client)
    }

    /// Stable label for telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(err) => err.kind(),
            Self::InvalidCursor(_) => "invalid_cursor",
            Self::DataSource(_) => "data_source",
            Self::Internal(_) => "internal",
        }
    }
}

// Cursor encode failures are ours, not the client's.
impl From<CursorError> for Error {
    fn from(err: CursorError) -> Self {
        if err.is_client_error() {
            Self::InvalidCursor(err)
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<SortSpecError> for Error {
    fn from(err: SortSpecError) -> Self {
        Self::BadRequest(err.into())
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Client,
    DataSource,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Client => "client",
            Self::DataSource => "data_source",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_the_origin_of_the_failure() {
        assert_eq!(Error::from(RequestError::FirstAndLast).class(), ErrorClass::Client);
        assert_eq!(Error::from(CursorError::Empty).class(), ErrorClass::Client);
        assert_eq!(
            Error::from(DataSourceError::message("timeout")).class(),
            ErrorClass::DataSource
        );
        assert_eq!(
            Error::Internal("broken".to_string()).class(),
            ErrorClass::Internal
        );
    }

    #[test]
    fn cursor_encode_failures_are_internal() {
        let err = Error::from(CursorError::Encode("boom".to_string()));

        assert!(matches!(err, Error::Internal(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn sort_errors_are_bad_requests() {
        let err = Error::from(SortSpecError::Empty);

        assert!(matches!(
            err,
            Error::BadRequest(RequestError::InvalidSort(SortSpecError::Empty))
        ));
        assert_eq!(err.kind(), "invalid_sort");
    }

    #[test]
    fn data_source_errors_pass_through_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "statement timeout");
        let err = Error::from(DataSourceError::new(io));

        let Error::DataSource(inner) = err else {
            panic!("data source error expected");
        };
        let io = inner
            .downcast_ref::<std::io::Error>()
            .expect("original error should be preserved");
        assert_eq!(io.kind(), std::io::ErrorKind::TimedOut);
    }
}
