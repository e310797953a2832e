//! Wrapper types that keep secret text and bytes out of log lines, debug
//! output and serialized data. Nothing here encrypts; the wrappers only make
//! accidental disclosure through ordinary formatting paths impossible.

pub mod config;
pub mod error;
pub mod logging;
pub mod secret;

pub use error::SecretError;
pub use secret::{
    generate_uuid, Concealed, EqualityPolicy, SecretBytes, SecretKey, SecretText, REDACTED,
};
