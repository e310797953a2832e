//! `SecretText` keeps a string out of logs, debug output and serialized data.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::compare::{equal_bytes, EqualityPolicy};
use super::hash::content_hash;
use super::{Concealed, REDACTED, REDACTED_TEXT_DEBUG};

/// A string that should not be exposed, for example in log lines.
///
/// `Display` writes `(redacted)` and `Debug` writes `SecretText{}`, so passing
/// the value to a formatter or logger never leaks the payload. Serializing
/// writes the redaction marker too. Deserializing is deliberately asymmetric:
/// it stores the decoded string as the live secret, which is how secrets are
/// read from configuration files.
///
/// The type does not implement `PartialEq` or `Hash`. Use [`SecretText::equals`]
/// and [`SecretText::content_hash`], or wrap it in a
/// [`SecretKey`](super::SecretKey) for map keys.
#[derive(Clone)]
pub struct SecretText {
    value: String,
    hash: i64,
    policy: EqualityPolicy,
}

impl SecretText {
    /// Wraps `value`; the content hash is computed once here.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let hash = content_hash(value.as_bytes());
        Self {
            value,
            hash,
            policy: EqualityPolicy::default(),
        }
    }

    /// Replaces the equality policy used by [`SecretText::equals`].
    pub fn with_policy(mut self, policy: EqualityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> EqualityPolicy {
        self.policy
    }

    /// Returns the underlying value.
    ///
    /// Never call this where the value must not be exposed, for example while
    /// building a log line.
    pub fn reveal(&self) -> &str {
        &self.value
    }

    /// True if both hold the same text. Fixed-time comparison is used unless
    /// both sides are configured for short-circuit comparison.
    pub fn equals(&self, other: &SecretText) -> bool {
        self.equals_with(other, self.policy.strictest(other.policy))
    }

    /// Compares under an explicit policy, ignoring the configured ones.
    pub fn equals_with(&self, other: &SecretText, policy: EqualityPolicy) -> bool {
        equal_bytes(policy, self.value.as_bytes(), other.value.as_bytes())
    }

    /// Equality over optional operands. Two `None`s are equal.
    pub fn equals_optional(a: Option<&SecretText>, b: Option<&SecretText>) -> bool {
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

impl Concealed for SecretText {
    fn content_hash(&self) -> i64 {
        self.hash
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<String> for SecretText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Debug for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_TEXT_DEBUG)
    }
}

impl Serialize for SecretText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SecretText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecretText::new)
    }
}

#[cfg(test)]
mod tests {
    use super::SecretText;
    use crate::secret::{EqualityPolicy, REDACTED};

    #[test]
    fn reveals_the_wrapped_value() {
        let text = SecretText::new("abc123");
        assert_eq!(text.reveal(), "abc123");
    }

    #[test]
    fn display_is_redacted() {
        let text = SecretText::new("abc123");
        assert_eq!(format!("{text}"), REDACTED);
        assert_eq!(text.to_string(), REDACTED);
        assert_eq!(format!("{}", SecretText::new("")), REDACTED);
    }

    #[test]
    fn debug_is_redacted() {
        let text = SecretText::new("abc123");
        assert_eq!(format!("{text:?}"), "SecretText{}");
        assert_eq!(format!("{text:#?}"), "SecretText{}");
        assert_eq!(format!("{:?}", Some(text)), "Some(SecretText{})");
    }

    #[test]
    fn equals_compares_contents() {
        assert!(SecretText::new("foo").equals(&SecretText::new("foo")));
        assert!(!SecretText::new("foo").equals(&SecretText::new("bar")));
        assert!(!SecretText::new("foo").equals(&SecretText::new("foobar")));
    }

    #[test]
    fn equals_under_either_policy() {
        let a = SecretText::new("token").with_policy(EqualityPolicy::ShortCircuit);
        let b = SecretText::new("token").with_policy(EqualityPolicy::ShortCircuit);
        assert!(a.equals(&b));
        assert!(a.equals_with(&b, EqualityPolicy::FixedTime));
        assert!(!a.equals_with(&SecretText::new("tokeN"), EqualityPolicy::ShortCircuit));
    }

    #[test]
    fn optional_operands() {
        let foo = SecretText::new("foo");
        assert!(SecretText::equals_optional(None, None));
        assert!(!SecretText::equals_optional(Some(&foo), None));
        assert!(!SecretText::equals_optional(None, Some(&foo)));
        assert!(SecretText::equals_optional(Some(&foo), Some(&SecretText::new("foo"))));
    }

    #[test]
    fn clone_is_equal_but_independent() {
        let orig = SecretText::new("hello").with_policy(EqualityPolicy::ShortCircuit);
        let copy = orig.clone();
        assert!(orig.equals(&copy));
        assert_eq!(copy.policy(), EqualityPolicy::ShortCircuit);
        assert_ne!(orig.reveal().as_ptr(), copy.reveal().as_ptr());
    }

    #[test]
    fn hash_is_stable() {
        let a = SecretText::new("hello");
        assert_eq!(a.content_hash(), 99162322);
        assert_eq!(a.content_hash(), a.content_hash());
        assert_eq!(a.clone().content_hash(), 99162322);
    }

    #[test]
    fn json_encoding_is_redacted() {
        let text = SecretText::new("abc123");
        let encoded = serde_json::to_string(&text).expect("serialization should succeed");
        assert_eq!(encoded, "\"(redacted)\"");
        assert!(!encoded.contains("abc123"));
    }

    #[test]
    fn json_decoding_stores_the_value() {
        let encoded = serde_json::to_string("abc123").unwrap();
        let text: SecretText = serde_json::from_str(&encoded).expect("decoding should succeed");
        assert_eq!(text.reveal(), "abc123");
        assert_eq!(text.content_hash(), SecretText::new("abc123").content_hash());
    }

    #[test]
    fn json_decoding_rejects_non_strings() {
        assert!(serde_json::from_str::<SecretText>("42").is_err());
        assert!(serde_json::from_str::<SecretText>("\"unterminated").is_err());
    }

    #[test]
    fn payload_equal_to_marker_still_redacts() {
        let text = SecretText::new(REDACTED);
        assert_eq!(format!("{text}"), REDACTED);
        assert_eq!(text.reveal(), REDACTED);
    }
}
