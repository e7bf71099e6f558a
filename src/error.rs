//! Error types for the jrun CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for jrun operations.
///
/// The variants mirror the failure taxonomy: bad input, unusable
/// configuration, no project root, and child-process launch faults. A child
/// process exiting non-zero is NOT an error; its code is propagated directly.
#[derive(Error, Debug)]
pub enum JrunError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be read, parsed, or is missing required values.
    #[error("{0}")]
    ConfigError(String),

    /// No project root (directory containing pom.xml) was found.
    #[error("{0}")]
    ProjectRootError(String),

    /// The java or mvn executable could not be launched.
    #[error("{0}")]
    LaunchError(String),
}

impl JrunError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Every internal failure maps to exit code 1; only successful child
    /// executions produce other codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            JrunError::UserError(_)
            | JrunError::ConfigError(_)
            | JrunError::ProjectRootError(_)
            | JrunError::LaunchError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for jrun operations.
pub type Result<T> = std::result::Result<T, JrunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_errors_map_to_failure_exit_code() {
        let errors = [
            JrunError::UserError("bad argument".to_string()),
            JrunError::ConfigError("missing java_home".to_string()),
            JrunError::ProjectRootError("no pom.xml".to_string()),
            JrunError::LaunchError("java not found".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn error_messages_are_passed_through() {
        let err = JrunError::ProjectRootError(
            "could not find pom.xml in '/tmp/x' or any parent directory".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "could not find pom.xml in '/tmp/x' or any parent directory"
        );
    }
}
