//! Error types shared by the cipher engines.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid key format (expected {expected} hex characters)")]
    InvalidKeyFormat { expected: usize },

    #[error("Invalid ciphertext format (expected hex with length a multiple of {granularity})")]
    InvalidCiphertextFormat { granularity: usize },

    #[error("Invalid key length (expected {expected} bytes, got {actual})")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid padding")]
    InvalidPadding,
}

pub type Result<T> = std::result::Result<T, CipherError>;
