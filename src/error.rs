use thiserror::Error;

use crate::scheme::SchemeField;

/// Errors surfaced while loading, deriving or applying a color scheme.
///
/// All of these are raised synchronously to the caller; nothing is
/// retried or recovered internally.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// No scheme file with this name exists in any search location.
    #[error("cannot find color scheme \"{name}\"")]
    NotFound { name: String },

    /// The scheme file is not well-formed JSON, or a value inside it
    /// could not be deserialized.
    #[error("failed to parse color scheme: {0}")]
    Parse(#[from] serde_json::Error),

    /// A color string could not be interpreted.
    #[error("could not parse color \"{0}\"")]
    InvalidColor(String),

    /// A required scheme color is absent.
    #[error("color scheme is missing the \"{field}\" color")]
    MissingField { field: SchemeField },

    /// Palette application was requested while no application is running.
    #[error("an application must be running before a color scheme can be applied")]
    NoApplication,
}
