use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid scan root: {0}")]
    InvalidRoot(String),

    #[error("Parser error: {0}")]
    ParserError(String),
}
