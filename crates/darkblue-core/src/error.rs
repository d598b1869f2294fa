//! Error types for the Dark Blue role theme

use thiserror::Error;

/// Main error type for role theme operations
///
/// The built-in theme is assembled from typed literals and never produces
/// one of these. They surface when a theme, role name, state or color token
/// arrives as text (JSON documents, CLI arguments) and fails validation.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Role name outside the nine defined roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Interaction state other than default, hover or disabled
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// Color token that does not resolve against the base palette
    #[error("Unknown color token at {path}: {token}")]
    UnknownToken { path: String, token: String },

    /// A role key is absent from the theme document
    #[error("Missing role: {0}")]
    MissingRole(String),

    /// The same key appears twice in one object
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A required style field is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A style record carries a field it does not define
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A node has the wrong JSON type (e.g. a string where a record belongs)
    #[error("Shape violation at {path}: {reason}")]
    ShapeViolation { path: String, reason: String },

    /// Malformed JSON text
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    /// Whether this error describes a structurally invalid theme, as opposed
    /// to an I/O or syntax failure while reading one.
    pub fn is_shape_violation(&self) -> bool {
        !matches!(self, ThemeError::Json(_) | ThemeError::Io(_))
    }

    pub(crate) fn shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ThemeError::ShapeViolation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using ThemeError
pub type ThemeResult<T> = Result<T, ThemeError>;
