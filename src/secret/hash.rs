//! Rolling content hash used for bucket placement in hash containers.
//!
//! The hash is `h = h * 31 + byte` over the raw bytes with wrapping 64-bit
//! arithmetic. It is deterministic and cheap, and it is not collision
//! resistant: two different secrets may share a hash, so it must never stand
//! in for an equality check.

/// Computes the content hash of `data`.
pub fn content_hash(data: &[u8]) -> i64 {
    data.iter()
        .fold(0i64, |acc, &v| acc.wrapping_mul(31).wrapping_add(i64::from(v)))
}
