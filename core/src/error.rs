//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (reading generator output, writing the dump).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The assembled document could not be encoded.
    #[display("Serialization Error: {_0}")]
    Json(serde_json::Error),

    /// The document has no `paths` object.
    #[from(ignore)]
    #[display("Invalid Document: missing required 'paths' object")]
    MissingPaths,

    /// The raw document could not be read as an API description.
    #[from(ignore)]
    #[display("Invalid Document: {_0}")]
    InvalidDocument(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
