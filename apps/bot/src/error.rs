use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("HTTP error: {detail}")]
    Http { detail: String },
    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },
    #[error("Invalid state: {detail}")]
    InvalidState { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn http(detail: String) -> Self {
        Self::Http { detail }
    }

    pub fn api(status: u16, detail: String) -> Self {
        Self::Api { status, detail }
    }

    pub fn invalid_state(detail: String) -> Self {
        Self::InvalidState { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::http(e.to_string())
    }
}
