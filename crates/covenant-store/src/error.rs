//! Error types for the persistence adapter

use std::path::PathBuf;

/// Errors raised by a key-value backend or by encoding a collection
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error against a file-backed store
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be encoded
    #[error("failed to encode {collection}: {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Key is not usable by the backend
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// Backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = StoreError::io_error(
            "/tmp/covenant/contracts.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("contracts.json"));
    }
}
