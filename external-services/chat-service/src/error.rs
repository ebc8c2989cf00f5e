use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat server request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chat server rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type ChatResult<T> = std::result::Result<T, ChatError>;
