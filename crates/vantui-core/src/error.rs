//! Error types for Vantui

use thiserror::Error;

/// Main error type for Vantui operations
///
/// Rate and speed values never produce errors: they are coerced and clamped.
/// Errors only arise from parsing user-facing configuration.
#[derive(Error, Debug)]
pub enum VantError {
    /// Start position name not one of top/right/bottom/left
    #[error("Invalid start position: {0}")]
    InvalidStartPosition(String),

    /// Gradient offset key without a leading number
    #[error("Invalid gradient offset: {0}")]
    InvalidGradientOffset(String),

    /// Gradient mapping with no stops
    #[error("Gradient has no color stops")]
    EmptyGradient,

    /// Size/width value that is neither a number nor a CSS length
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Stroke linecap name not one of butt/round/square
    #[error("Invalid stroke linecap: {0}")]
    InvalidLinecap(String),

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Dialog operation not valid in its current state
    #[error("Invalid dialog transition: {0}")]
    DialogState(String),
}

/// Result type alias using VantError
pub type VantResult<T> = Result<T, VantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VantError::InvalidStartPosition("diagonal".to_string());
        assert_eq!(format!("{}", err), "Invalid start position: diagonal");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VantError = io_err.into();
        assert!(matches!(err, VantError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: VantError = json_err.into();
        assert!(matches!(err, VantError::Config(_)));
    }
}
