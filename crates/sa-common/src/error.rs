//! Error types for series analysis.
//!
//! Statistical computation itself never fails for normal numeric input;
//! only reading the series and serializing the report can, so the error
//! surface stays small.

use thiserror::Error;

/// Result type alias for series analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for series analysis.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_cause() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn json_error_converts_via_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("invalid JSON should fail to parse");
        let err = Error::from(parse_err);
        assert!(err.to_string().contains("JSON"));
    }
}
