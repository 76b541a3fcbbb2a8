//! Error types for wordlayout library.

use std::io;
use thiserror::Error;

/// Result type alias for wordlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or exchanging a layout.
///
/// Malformed document input (missing indent fields, unparsable numbers,
/// negative rectangle sizes) is never reported here: it is resolved locally
/// with conservative defaults. Only contract violations by the caller and
/// failures of the JSON handoff layer surface as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing serialized layouts.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A block was appended before any page was started.
    #[error("Cannot add a block: no page has been started")]
    NoActivePage,

    /// Page number is out of range.
    #[error("Page {0} is out of range (layout has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// A unit name could not be recognized.
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoActivePage;
        assert_eq!(
            err.to_string(),
            "Cannot add a block: no page has been started"
        );

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (layout has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
