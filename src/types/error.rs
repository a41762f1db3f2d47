//! Error types for mdtoc

/// Main error type for mdtoc operations.
///
/// Heading extraction itself never fails; these errors come from the
/// surfaces around it (reading files, loading configuration).
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Async runtime error
    #[cfg(feature = "async")]
    #[error("Async runtime error: {0}")]
    AsyncRuntime(String),
}

/// Result type alias for mdtoc operations
pub type Result<T> = std::result::Result<T, TocError>;
