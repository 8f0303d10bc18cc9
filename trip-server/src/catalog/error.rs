//! Stop catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading the stop catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid catalog JSON
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}
