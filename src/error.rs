use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Server-side API key is not configured.")]
    MissingApiKey,
    #[error("API error: {status} {status_text}")]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("Invalid API response structure.")]
    InvalidResponse,
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
