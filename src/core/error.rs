use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Crate-wide error type. Services return these one level below the calling
/// surface; the surface decides how to present them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequestError(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    UnauthorizedError(String),

    #[error("entity not found: {detail}")]
    EntityNotFoundError { detail: String },

    #[error("entity already exists: {detail}")]
    EntityExistsError { detail: String },

    #[error("invalid payload: {0}")]
    InvalidPayloadError(String),

    #[error("store operation failed: {0}")]
    StoreError(String),

    #[error("subscription failed: {0}")]
    SubscriptionError(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
