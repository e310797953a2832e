//! Errors raised by the secret wrappers. Construction and comparison never
//! fail; decoding failures surface as the decoder's own error type, so the
//! only failure left here is the random source.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("random source unavailable: {0}")]
    Entropy(String),
}

impl From<rand::Error> for SecretError {
    fn from(err: rand::Error) -> Self {
        SecretError::Entropy(format!("{err}"))
    }
}
