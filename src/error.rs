//! Error handling for Explodomatica
//!
//! The DSP primitives are total and never fail. Errors only arise at the
//! edges: parameter validation, config loading and file export.

use thiserror::Error;

/// Result type alias for Explodomatica operations
pub type Result<T> = std::result::Result<T, ExplodeError>;

/// Main error type for Explodomatica operations
#[derive(Error, Debug)]
pub enum ExplodeError {
    #[error("Invalid parameter {param}: {value} (expected {expected})")]
    InvalidParameter {
        param: String,
        value: String,
        expected: String,
    },

    #[error("Cannot open '{path}' for writing")]
    FileWrite {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExplodeError {
    /// Build an `InvalidParameter` error
    pub fn invalid_parameter(
        param: &str,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        ExplodeError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ExplodeError::InvalidParameter { .. } => "INVALID_PARAMETER",
            ExplodeError::FileWrite { .. } => "FILE_WRITE",
            ExplodeError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ExplodeError::Config(_) => "CONFIG_ERROR",
            ExplodeError::Io(_) => "IO_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ExplodeError::InvalidParameter { .. } => vec![
                "Run with --help to see accepted parameter ranges",
                "Use --print-params to inspect the effective configuration",
            ],
            ExplodeError::FileWrite { .. } => vec![
                "Check that the target directory exists",
                "Check write permissions on the target path",
            ],
            ExplodeError::ConfigNotFound { .. } => vec![
                "Check the config file path is correct",
                "Omit --config to use the built-in defaults",
            ],
            ExplodeError::Config(_) => vec![
                "Config files are JSON objects keyed by parameter name",
                "Use --print-params to generate a valid template",
            ],
            ExplodeError::Io(_) => vec![],
        }
    }
}
