use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by the store and the services.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjexError {
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("Task not found: {task_id} in project {project_id}")]
    TaskNotFound { project_id: String, task_id: String },

    #[error("Validation failed for {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("Request cancelled")]
    Cancelled,
}

impl ProjexError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjexError>;

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_validation_failure(field: &str, value: &str, reason: &str) {
        warn!(
            field = %field,
            value = %value,
            reason = %reason,
            "Validation failed"
        );
    }

    pub fn log_request_failure(operation: &str, err: &ProjexError) {
        error!(
            operation = %operation,
            error = %err,
            "Request failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ProjexError::ProjectNotFound { id: "p9".into() };
        assert_eq!(err.to_string(), "Project not found: p9");

        let err = ProjexError::validation("name", "must not be empty");
        assert_eq!(err.to_string(), "Validation failed for name: must not be empty");

        let err = ProjexError::TaskNotFound {
            project_id: "p1".into(),
            task_id: "t3".into(),
        };
        assert_eq!(err.to_string(), "Task not found: t3 in project p1");
        assert_eq!(ProjexError::Cancelled.to_string(), "Request cancelled");
    }
}
