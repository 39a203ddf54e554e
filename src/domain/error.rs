use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AstroError {
    /// Caller errors carry a message safe to show verbatim; everything
    /// else is reported generically at the boundary.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AstroError::MissingField(_) | AstroError::InvalidDate(_)
        )
    }
}
