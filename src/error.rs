//! @ai:module:intent Define error types for the annotation rewriter
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all rewriter operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", format_missing_keys(.keys))]
    MissingKeys { keys: Vec<String> },

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One message per missing key, matching the legacy config checker's wording.
fn format_missing_keys(keys: &[String]) -> String {
    keys.iter()
        .map(|k| format!("\"{}\" undefined in configuration file", k))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_lists_every_key() {
        let err = Error::MissingKeys {
            keys: vec!["path".to_string(), "annotate".to_string()],
        };

        let message = err.to_string();
        assert!(message.contains("\"path\" undefined in configuration file"));
        assert!(message.contains("\"annotate\" undefined in configuration file"));
    }
}
