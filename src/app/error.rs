use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylinkError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlaylinkError>;
