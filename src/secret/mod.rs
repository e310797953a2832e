//! Secret wrapper types. Each submodule owns one concern so the redaction
//! guarantees stay easy to audit: the wrappers themselves, the content hash,
//! the equality policies, the hash-container adapter and the identifier
//! generator.

pub mod bytes;
pub mod compare;
pub mod hash;
pub mod keyed;
pub mod text;
pub mod uuid;

pub use bytes::SecretBytes;
pub use compare::EqualityPolicy;
pub use keyed::SecretKey;
pub use text::SecretText;
pub use uuid::{generate_uuid, generate_uuid_from};

/// Written by `Display` and `Serialize` in place of any secret payload.
pub const REDACTED: &str = "(redacted)";
pub(crate) const REDACTED_TEXT_DEBUG: &str = "SecretText{}";
pub(crate) const REDACTED_BYTES_DEBUG: &str = "SecretBytes{}";

/// Common surface of the secret wrappers.
///
/// Implementors do not implement `PartialEq` or `std::hash::Hash`; these two
/// methods are the only way to compare or bucket them.
pub trait Concealed {
    /// Precomputed content hash, see [`hash::content_hash`].
    fn content_hash(&self) -> i64;

    /// Content equality under the stricter of the two operands' policies.
    fn content_eq(&self, other: &Self) -> bool;
}

/// Equality over optional operands: two absent values are equal, an absent
/// value never equals a present one.
pub fn optional_eq<S: Concealed>(a: Option<&S>, b: Option<&S>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.content_eq(b),
        _ => false,
    }
}
