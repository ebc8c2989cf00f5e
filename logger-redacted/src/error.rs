use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Global subscriber already set: {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, LoggerError>;
