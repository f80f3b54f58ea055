use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Policy rejected: {0}")]
    PolicyDenied(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("Validation rejected: {}", message);
        AppError::Validation(message)
    }

    pub fn policy_denied(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("Policy rejected: {}", message);
        AppError::PolicyDenied(message)
    }

    /// True for refusals that leave state untouched by business rule rather
    /// than by failure (locked months, non-elapsed months, historical dates).
    pub fn is_policy_denied(&self) -> bool {
        matches!(self, AppError::PolicyDenied(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        log::error!("Serialization error: {}", error);
        AppError::Storage(error.into())
    }
}
