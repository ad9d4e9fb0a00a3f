// ============================================================================
// Random Values
// Uniform decimals in [0, 1) assembled limb by limb
// ============================================================================

use crate::config::Config;
use crate::interfaces::{OsRandom, SecureRandom};
use crate::number::limbs::{BASE, LOG_BASE, POWS_TEN};
use crate::number::{check_range, BigNumber, BigNumberError, BigNumberResult, Operation, MAX_ARG};
use rand::Rng;

/// Candidates at or above this bound are redrawn so that the final
/// `% BASE` carries no bias.
const REJECT_ABOVE: u64 = 9_000_000_000_000_000;

/// Bytes per 53-bit candidate.
const CANDIDATE_BYTES: usize = 7;

/// 53-bit candidate from seven bytes, the top byte masked to five bits.
fn candidate(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .skip(1)
        .fold(u64::from(bytes[0] & 0x1f), |acc, &b| (acc << 8) | u64::from(b))
}

/// `count` limbs from the secure source, or why it is unavailable.
fn secure_limbs(count: usize, source: &mut dyn SecureRandom) -> Result<Vec<u64>, String> {
    let mut bytes = vec![0u8; count * CANDIDATE_BYTES];
    source.fill_secure(&mut bytes).map_err(|e| e.to_string())?;
    let mut limbs = Vec::with_capacity(count);
    for chunk in bytes.chunks_mut(CANDIDATE_BYTES) {
        let mut value = candidate(chunk);
        while value >= REJECT_ABOVE {
            source.fill_secure(chunk).map_err(|e| e.to_string())?;
            value = candidate(chunk);
        }
        limbs.push(value % BASE);
    }
    Ok(limbs)
}

/// `count` limbs from the thread-local pseudo-random generator.
fn pseudo_limbs(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    let mut limbs = Vec::with_capacity(count);
    while limbs.len() < count {
        let value = rng.gen::<u64>() >> 11;
        if value < REJECT_ABOVE {
            limbs.push(value % BASE);
        }
    }
    limbs
}

impl BigNumber {
    /// Random value in [0, 1) with `dp` decimal places (default
    /// `cfg.decimal_places()`), drawn from the operating system when
    /// `cfg.crypto()` is set.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let r = BigNumber::random(Some(5), &cfg).unwrap();
    /// assert!(r.gte(&BigNumber::from(0)) && r.lt(&BigNumber::from(1)));
    /// assert!(r.decimal_places().unwrap() <= 5);
    /// ```
    pub fn random(dp: Option<u32>, cfg: &Config) -> BigNumberResult<BigNumber> {
        Self::random_with(dp, cfg, &mut OsRandom)
    }

    /// [`BigNumber::random`] drawing secure bytes from `source`.
    ///
    /// An unavailable source is an error when `cfg.errors()` is set;
    /// otherwise a warning is logged and pseudo-random digits are used.
    pub fn random_with(
        dp: Option<u32>,
        cfg: &Config,
        source: &mut dyn SecureRandom,
    ) -> BigNumberResult<BigNumber> {
        let dp = match dp {
            Some(dp) => check_range(i64::from(dp), 0, MAX_ARG, Operation::Random, "decimal places")?,
            None => i64::from(cfg.decimal_places),
        };
        let dp = dp as usize;
        let count = dp.div_ceil(LOG_BASE);

        let mut limbs = None;
        if cfg.crypto {
            match secure_limbs(count, source) {
                Ok(drawn) => limbs = Some(drawn),
                Err(reason) if cfg.errors => {
                    return Err(BigNumberError::validation(
                        Operation::Random,
                        "crypto unavailable",
                        reason,
                    ));
                }
                Err(reason) => {
                    tracing::warn!(%reason, "crypto unavailable, using pseudo-random digits");
                }
            }
        }
        let mut limbs = limbs.unwrap_or_else(|| pseudo_limbs(count));

        // Keep only the digits within `dp` places in the last limb
        let partial = dp % LOG_BASE;
        if let Some(last) = limbs.last_mut().filter(|_| partial > 0) {
            let unit = POWS_TEN[LOG_BASE - partial];
            *last -= *last % unit;
        }
        Ok(BigNumber::from_limbs(false, &limbs, -1))
    }
}
