// ============================================================================
// Exponentiation
// Square-and-multiply with limb truncation at pow_precision
// ============================================================================

use crate::arith::MAX_SAFE_INTEGER;
use crate::config::Config;
use crate::number::limbs::LOG_BASE;
use crate::number::BigNumber;
use crate::rounding::round_significant;

/// Keep at most `cap` limbs of `x` (no limit when `cap` is 0).
fn truncate_limbs(x: BigNumber, cap: usize) -> BigNumber {
    match x.finite_parts() {
        Some((limbs, _)) if cap > 0 && limbs.len() > cap => {
            BigNumber::from_limbs(x.negative, &limbs[..cap], x.top_limb_exponent())
        }
        _ => x,
    }
}

impl BigNumber {
    /// `self` raised to `n`.
    ///
    /// Integral exponents with |n| ≤ 2^53 - 1 are computed exactly up to
    /// `cfg.pow_precision()` significant digits (rounded with
    /// `cfg.rounding_mode()`; 0 means unlimited). A negative exponent takes
    /// the reciprocal at `cfg.decimal_places()`. Any other exponent is
    /// evaluated with `f64::powf` and carries only `f64` accuracy.
    ///
    /// The fallback never raises, even with `cfg.errors()` set: a
    /// non-integral or out-of-range exponent is not treated as an invalid
    /// argument.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let x = BigNumber::parse("0.7", &cfg).unwrap();
    /// assert_eq!(x.to_power(2.0, &cfg).to_string(), "0.49");
    /// assert_eq!(BigNumber::from(2).to_power(-2.0, &cfg).to_string(), "0.25");
    /// ```
    pub fn to_power(&self, n: f64, cfg: &Config) -> BigNumber {
        if !n.is_finite() || n.fract() != 0.0 || n.abs() > MAX_SAFE_INTEGER as f64 {
            tracing::debug!(exponent = n, "exponent not a safe integer, using f64 powf");
            return BigNumber::from_f64_lossy(self.to_number().powf(n), cfg);
        }

        let precision = cfg.pow_precision as usize;
        let cap = if precision > 0 {
            precision.div_ceil(LOG_BASE) + 2
        } else {
            0
        };

        let mut remaining = n.abs() as u64;
        let mut base = self.clone();
        let mut result = BigNumber::one();
        loop {
            if remaining % 2 == 1 {
                result = truncate_limbs(result.times(&base, cfg), cap);
                if !result.is_finite() {
                    break;
                }
            }
            remaining /= 2;
            if remaining == 0 {
                break;
            }
            base = truncate_limbs(base.times(&base, cfg), cap);
        }

        if n < 0.0 {
            result = BigNumber::one().div(&result, cfg);
        }
        if precision > 0 {
            round_significant(result, precision as i64, cfg.rounding_mode, false, cfg)
        } else {
            result
        }
    }
}
