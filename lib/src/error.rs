/// Custom error type for the arcmarks library
///
/// Only fatal conditions live here: unreadable input, malformed JSON,
/// unwritable output and broken configuration. Irregular data inside a
/// well-formed export is never an error.
#[derive(Debug, thiserror::Error)]
pub enum ArcmarksError {
    /// I/O errors (reading the export, writing the bookmarks file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using ArcmarksError
pub type Result<T> = std::result::Result<T, ArcmarksError>;

impl From<serde_yaml::Error> for ArcmarksError {
    fn from(err: serde_yaml::Error) -> Self {
        ArcmarksError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for ArcmarksError {
    fn from(err: serde_json::Error) -> Self {
        ArcmarksError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for ArcmarksError {
    fn from(err: simd_json::Error) -> Self {
        ArcmarksError::Json(err.to_string())
    }
}
