//! Error types for pagekit
//!
//! Almost nothing in this crate can fail: URL construction and option merging
//! are pure in-memory work, and a missing request environment falls back to
//! defaults instead of erroring. The variants here cover the two genuinely
//! fallible paths: collaborator rendering and locale file loading.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Rendering Errors
    // ============================================================================
    /// A rendering collaborator failed
    #[error("Render failed: {message}")]
    Render {
        /// What the collaborator reported
        message: String,
    },

    /// A named view was not found on the template search path
    #[error("View '{name}' not found on search path")]
    ViewNotFound {
        /// The missing view name
        name: String,
    },

    // ============================================================================
    // Locale Errors
    // ============================================================================
    /// A locale file did not parse as YAML
    #[error("Failed to parse locale YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A locale file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all for collaborator-defined failures
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a view-not-found error
    pub fn view_not_found(name: impl Into<String>) -> Self {
        Self::ViewNotFound { name: name.into() }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
