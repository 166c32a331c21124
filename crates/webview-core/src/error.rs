use thiserror::Error;

/// Top-level error type for loading catalogs, config, and property files.
///
/// The string operations themselves never fail; only the file-backed
/// plumbing around them does.
#[derive(Debug, Error)]
pub enum StringsError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Translation catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Gecko property file could not be processed.
    #[error("properties error: {0}")]
    Properties(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
