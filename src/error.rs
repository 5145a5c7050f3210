use thiserror::Error;

#[derive(Error, Debug)]
pub enum FestlistError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },

    #[error("Sample size must be zero or greater, got {0}")]
    InvalidSampleSize(i64),
}
