//! `SecretBytes` keeps a byte buffer out of logs, debug output and serialized
//! data. The buffer is copied on the way in and on every read, so neither the
//! caller's input nor any revealed copy aliases the stored value.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::compare::{equal_bytes, EqualityPolicy};
use super::hash::content_hash;
use super::{Concealed, REDACTED, REDACTED_BYTES_DEBUG};

/// A byte sequence that should not be exposed.
///
/// Renders as `(redacted)` / `SecretBytes{}` and serializes as `(redacted)`.
/// Use [`SecretBytes::reveal`] to get at the data.
#[derive(Clone)]
pub struct SecretBytes {
    value: Vec<u8>,
    hash: i64,
    policy: EqualityPolicy,
}

impl SecretBytes {
    /// Copies `bytes`; later changes to the caller's buffer have no effect on
    /// the protected value.
    pub fn new(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    fn from_vec(value: Vec<u8>) -> Self {
        let hash = content_hash(&value);
        Self {
            value,
            hash,
            policy: EqualityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EqualityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> EqualityPolicy {
        self.policy
    }

    /// Returns a fresh copy of the underlying bytes.
    ///
    /// Never call this where the value must not be exposed, for example while
    /// building a log line.
    pub fn reveal(&self) -> Vec<u8> {
        self.value.clone()
    }

    /// True if both hold exactly the same byte sequence.
    pub fn equals(&self, other: &SecretBytes) -> bool {
        self.equals_with(other, self.policy.strictest(other.policy))
    }

    pub fn equals_with(&self, other: &SecretBytes, policy: EqualityPolicy) -> bool {
        equal_bytes(policy, &self.value, &other.value)
    }

    pub fn equals_optional(a: Option<&SecretBytes>, b: Option<&SecretBytes>) -> bool {
        super::optional_eq(a, b)
    }

    pub fn content_hash(&self) -> i64 {
        self.hash
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Concealed for SecretBytes {
    fn content_hash(&self) -> i64 {
        self.hash
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}

impl From<&[u8]> for SecretBytes {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_BYTES_DEBUG)
    }
}

impl Serialize for SecretBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Length hints come from the encoded input and are not trusted.
const MAX_PREALLOC: usize = 4096;

struct SecretBytesVisitor;

impl<'de> Visitor<'de> for SecretBytesVisitor {
    type Value = SecretBytes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, byte buffer or sequence of bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SecretBytes::new(v.as_bytes()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(SecretBytes::from_vec(v.into_bytes()))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(SecretBytes::new(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(SecretBytes::from_vec(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut value = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOC));
        while let Some(byte) = seq.next_element::<u8>()? {
            value.push(byte);
        }
        Ok(SecretBytes::from_vec(value))
    }
}

impl<'de> Deserialize<'de> for SecretBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(SecretBytesVisitor)
    }
}
