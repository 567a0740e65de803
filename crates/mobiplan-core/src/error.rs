//! Error types and exit codes for mobiplan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown preference)
//! - 3: Data error (unknown node, invalid graph or mode catalog)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during mobiplan operations
#[derive(Error, Debug)]
pub enum MobiplanError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid preference: {0} (expected: fastest or cheapest)")]
    InvalidPreference(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown node: {id}")]
    InvalidEndpoint { id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("invalid transport mode {id}: {reason}")]
    InvalidMode { id: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl MobiplanError {
    /// Create a usage error (bad flags, arguments or command state)
    pub fn usage(message: impl Into<String>) -> Self {
        MobiplanError::UsageError(message.into())
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MobiplanError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a structurally invalid graph
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        MobiplanError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for a transport mode that violates its constraints
    pub fn invalid_mode(id: &str, reason: impl Into<String>) -> Self {
        MobiplanError::InvalidMode {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error for an endpoint missing from the graph
    pub fn invalid_endpoint(id: &str) -> Self {
        MobiplanError::InvalidEndpoint { id: id.to_string() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MobiplanError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MobiplanError::UnknownFormat(_)
            | MobiplanError::UsageError(_)
            | MobiplanError::InvalidPreference(_)
            | MobiplanError::InvalidValue { .. } => ExitCode::Usage,

            MobiplanError::InvalidEndpoint { .. }
            | MobiplanError::InvalidGraph { .. }
            | MobiplanError::InvalidMode { .. } => ExitCode::Data,

            MobiplanError::Io(_)
            | MobiplanError::Json(_)
            | MobiplanError::TomlDe(_)
            | MobiplanError::TomlSer(_)
            | MobiplanError::FailedOperationWithTarget { .. }
            | MobiplanError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MobiplanError::UnknownFormat(_) => "unknown_format",
            MobiplanError::UsageError(_) => "usage_error",
            MobiplanError::InvalidPreference(_) => "invalid_preference",
            MobiplanError::InvalidValue { .. } => "invalid_value",
            MobiplanError::InvalidEndpoint { .. } => "invalid_endpoint",
            MobiplanError::InvalidGraph { .. } => "invalid_graph",
            MobiplanError::InvalidMode { .. } => "invalid_mode",
            MobiplanError::Io(_) => "io_error",
            MobiplanError::Json(_) => "json_error",
            MobiplanError::TomlDe(_) | MobiplanError::TomlSer(_) => "toml_error",
            MobiplanError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MobiplanError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mobiplan operations
pub type Result<T> = std::result::Result<T, MobiplanError>;
