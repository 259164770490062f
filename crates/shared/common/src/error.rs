//! Unified error handling.
//!
//! Store operations are total and never produce these errors. They exist for
//! the layers above the store: lookups that require a hit, and output encoding.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Encoding
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Failed to encode output".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// One-line report for the command line: `[CODE] message`
    pub fn report(&self) -> String {
        format!("[{}] {}", self.code(), self.user_message())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
