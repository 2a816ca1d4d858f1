use roster_core::ValidationErrors;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request rejected: {0}")]
    Validation(ValidationErrors),

    #[error("--{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
}
