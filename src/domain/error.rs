//! Error types for the zcalc plugin.
//!
//! Calculator input never fails: arithmetic edge cases surface as special
//! floating-point values and malformed input is ignored. [`CalcError`] therefore
//! only covers the plugin's edges, such as theme loading and configuration.

use thiserror::Error;

/// The main error type for zcalc operations outside the calculation core.
///
/// # Examples
///
/// ```
/// use zcalc::domain::CalcError;
///
/// fn load_theme() -> Result<(), CalcError> {
///     Err(CalcError::Theme("missing [colors] table".to_string()))
/// }
///
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// Theme parsing or loading failed.
    ///
    /// The string describes which part of the theme could not be read or
    /// deserialized.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zcalc operations.
pub type Result<T> = std::result::Result<T, CalcError>;
