use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
