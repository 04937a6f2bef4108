//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown vertex on the command line)
//! - 3: Data error (malformed network file, unreached destination)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, unreachable target (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Precondition violations
    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("negative edge weight {weight} on {source_vertex} -> {destination}")]
    NegativeWeight {
        source_vertex: String,
        destination: String,
        weight: f64,
    },

    // Data errors (exit code 3)
    #[error("destination not reached from start: {vertex}")]
    Unreached { vertex: String },

    #[error("invalid network file {path:?} at line {line}: {reason}")]
    InvalidNetwork {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("{context} limit exceeded: {actual} (max {max})")]
    LimitExceeded {
        context: String,
        actual: usize,
        max: usize,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a vertex the graph does not contain
    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a destination missing from a shortest-path tree
    pub fn unreached(vertex: impl std::fmt::Debug) -> Self {
        GraphError::Unreached {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a malformed line in a network file
    pub fn invalid_network(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl std::fmt::Display,
    ) -> Self {
        GraphError::InvalidNetwork {
            path: path.into(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_)
            | GraphError::LimitExceeded { .. }
            | GraphError::UnknownVertex { .. } => ExitCode::Usage,

            GraphError::Unreached { .. }
            | GraphError::InvalidNetwork { .. }
            | GraphError::NegativeWeight { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::Unreached { .. } => "unreached",
            GraphError::InvalidNetwork { .. } => "invalid_network",
            GraphError::UsageError(_) => "usage_error",
            GraphError::LimitExceeded { .. } => "limit_exceeded",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
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

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
