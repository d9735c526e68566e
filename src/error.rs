use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrakerskiError {
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("modulus mismatch")]
    ModulusMismatch,

    #[error("plaintext must be a single bit, got {0}")]
    InvalidPlaintext(u64),

    #[error("depth exhausted: no evaluation keys remain")]
    DepthExhausted,
}

pub type Result<T> = std::result::Result<T, BrakerskiError>;
