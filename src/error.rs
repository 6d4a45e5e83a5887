// ⚠️ Error Types
// Typed failures for the record pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, evaluating, or writing records.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// A token contains a character outside I, V, X, L, C, D, M.
    #[error("invalid Roman numeral: {token:?}")]
    InvalidNumeral { token: String },

    /// The stream ended in the middle of a record.
    #[error("incomplete record at end of input: {tokens:?}")]
    IncompleteRecord { tokens: Vec<String> },

    /// The input could not be opened. Fatal: nothing is processed.
    #[error("failed to open input {path:?}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_repeat_source() {
        let missing = ProcessError::SourceUnavailable {
            path: PathBuf::from("Input.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(missing.to_string(), "failed to open input \"Input.txt\"");

        let io = ProcessError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
        assert_eq!(io.to_string(), "disk gone");
        let chain = format!("{:#}", anyhow::Error::from(io).context("Failed to read input"));
        assert_eq!(chain, "Failed to read input: disk gone");
    }

    #[test]
    fn test_incomplete_record_message() {
        let err = ProcessError::IncompleteRecord {
            tokens: vec!["X".to_string(), "+".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "incomplete record at end of input: [\"X\", \"+\"]"
        );
    }
}
