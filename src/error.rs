//! Error types for color model and picker operations

use thiserror::Error;

/// Result type alias for color model operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Result type alias for picker configuration and state operations
pub type PickerResult<T> = std::result::Result<T, PickerError>;

/// Errors raised by the color model itself
///
/// There are exactly two: reading a color that was never set, and a hex
/// string that does not normalize to eight hex digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A getter was called before any representation was set
    #[error("No color is set")]
    NoColorSet,

    /// Hex input did not normalize to `RRGGBBAA`; carries the input as given
    #[error("Unknown hex color: {0}")]
    UnknownHexColor(String),
}

impl ColorError {
    /// Create a new unknown hex color error
    pub fn unknown_hex<S: Into<String>>(input: S) -> Self {
        Self::UnknownHexColor(input.into())
    }
}

/// Errors raised by the picker layer around the color model
#[derive(Error, Debug)]
pub enum PickerError {
    /// Color parsing or access errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input/output errors while loading or saving configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PickerError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create configuration error naming the accepted values
    pub fn config_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        expected: &str,
    ) -> Self {
        Self::InvalidConfig(format!(
            "Invalid {}: '{}' (expected: {})",
            parameter, value, expected
        ))
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<std::path::Path>>(
        operation: &str,
        path: P,
        error: &std::io::Error,
    ) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }
}
