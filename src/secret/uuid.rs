//! UUID-shaped random identifiers returned as secrets.
//!
//! The output uses the canonical 8-4-4-4-12 lowercase hex layout but the
//! version and variant bits are left random, so it is not an RFC 4122 v4
//! UUID. Do not use it where a standards-compliant UUID is required.

use rand::rngs::OsRng;
use rand::RngCore;

use super::SecretText;
use crate::error::SecretError;

const UUID_LEN: usize = 16;

/// Generates an identifier from the operating system's random source.
///
/// Fails with [`SecretError::Entropy`] if the source cannot supply bytes;
/// there is no fallback to a weaker generator.
pub fn generate_uuid() -> Result<SecretText, SecretError> {
    generate_uuid_from(&mut OsRng)
}

/// Generates an identifier from `rng`.
pub fn generate_uuid_from<R: RngCore + ?Sized>(rng: &mut R) -> Result<SecretText, SecretError> {
    let mut b = [0u8; UUID_LEN];
    rng.try_fill_bytes(&mut b).map_err(|e| {
        tracing::error!(error = %e, "random source failed while generating identifier");
        SecretError::from(e)
    })?;

    Ok(SecretText::new(format!(
        "{}-{}-{}-{}-{}",
        hex::encode(&b[0..4]),
        hex::encode(&b[4..6]),
        hex::encode(&b[6..8]),
        hex::encode(&b[8..10]),
        hex::encode(&b[10..16]),
    )))
}

#[cfg(test)]
mod tests {
    use super::{generate_uuid, generate_uuid_from};
    use crate::error::SecretError;
    use crate::secret::REDACTED;
    use rand::RngCore;

    struct FixedRng(u8);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            u32::from(self.0)
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = self.0.wrapping_add(i as u8);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("identifier generation must use try_fill_bytes")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("identifier generation must use try_fill_bytes")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("identifier generation must use try_fill_bytes")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy exhausted",
            )))
        }
    }

    #[test]
    fn formats_bytes_as_grouped_hex() {
        let id = generate_uuid_from(&mut FixedRng(0xa0)).expect("fixed rng cannot fail");
        assert_eq!(id.reveal(), "a0a1a2a3-a4a5-a6a7-a8a9-aaabacadaeaf");
    }

    #[test]
    fn generated_identifier_is_redacted() {
        let id = generate_uuid().expect("os rng should be available");
        assert_eq!(format!("{id}"), REDACTED);
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn consecutive_identifiers_differ() {
        let a = generate_uuid().expect("os rng should be available");
        let b = generate_uuid().expect("os rng should be available");
        assert!(!a.equals(&b));
    }

    #[test]
    fn entropy_failure_is_an_error() {
        let err = generate_uuid_from(&mut BrokenRng).unwrap_err();
        assert!(matches!(err, SecretError::Entropy(_)));
        assert!(format!("{err}").contains("entropy exhausted"));
    }
}
