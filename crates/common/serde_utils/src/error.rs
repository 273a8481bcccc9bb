use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}
