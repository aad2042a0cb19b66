use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Expected positive integer, received {0}")]
    InvalidArgument(String),
}
