use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationResult;

pub const GENERIC_SUBMIT_FAILURE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.errors.len())]
    Invalid(ValidationResult),
    #[error("too many attempts, retry in {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },
    #[error("backend is not configured: {0}")]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Request(String),
    #[error("email function rejected the message: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl SubmitError {
    /// Text for the notification shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => "Please fix the highlighted fields.".to_string(),
            SubmitError::RateLimited { retry_after_ms } => format!(
                "Too many attempts. Please try again in {} seconds.",
                retry_after_ms.div_ceil(1000)
            ),
            SubmitError::Rejected(Some(reason)) if !reason.trim().is_empty() => reason.clone(),
            _ => GENERIC_SUBMIT_FAILURE.to_string(),
        }
    }
}
