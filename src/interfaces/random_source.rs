// ============================================================================
// Secure Random Source Interface
// Defines the contract for the byte source behind crypto random digits
// ============================================================================

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// The secure source could not supply bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("secure random source unavailable: {0}")]
pub struct RandomUnavailable(pub String);

/// Source of cryptographically secure random bytes.
///
/// `BigNumber::random` consumes this when `Config::crypto()` is set.
/// Implementations report unavailability instead of panicking so that the
/// caller can decide between an error and the pseudo-random fallback.
pub trait SecureRandom {
    /// Fill `buf` entirely with secure random bytes.
    fn fill_secure(&mut self, buf: &mut [u8]) -> Result<(), RandomUnavailable>;
}

/// The operating system's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_secure(&mut self, buf: &mut [u8]) -> Result<(), RandomUnavailable> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| RandomUnavailable(e.to_string()))
    }
}

/// A source that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecureRandom;

impl SecureRandom for NoSecureRandom {
    fn fill_secure(&mut self, _buf: &mut [u8]) -> Result<(), RandomUnavailable> {
        Err(RandomUnavailable("no secure source configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills() {
        let mut buf = [0u8; 64];
        OsRandom.fill_secure(&mut buf).unwrap();
        // 64 zero bytes from a working OS source is practically impossible
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_no_secure_random() {
        let err = NoSecureRandom.fill_secure(&mut [0u8; 7]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "secure random source unavailable: no secure source configured"
        );
    }
}
