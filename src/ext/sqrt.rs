// ============================================================================
// Square Root
// Newton iteration seeded from f64::sqrt
// ============================================================================

use crate::arith::divide;
use crate::config::{Config, RoundingMode};
use crate::number::BigNumber;
use crate::rounding::round_significant;

/// Guard digits carried by the Newton quotient beyond `decimal_places`.
const GUARD_DIGITS: i64 = 4;

/// Substring by character offsets where a negative offset counts from the
/// end and out-of-range offsets are clipped.
fn window(s: &str, start: i64, end: i64) -> &str {
    let len = s.len() as i64;
    let clip = |i: i64| -> usize {
        let i = if i < 0 { (len + i).max(0) } else { i.min(len) };
        i as usize
    };
    let (start, end) = (clip(start), clip(end));
    if start >= end {
        ""
    } else {
        &s[start..end]
    }
}

/// Starting point for the iteration: the `f64` square root, or when the
/// value is outside the `f64` range, the root of its significand placed at
/// half the exponent.
fn seed(x: &BigNumber, cfg: &Config) -> BigNumber {
    let approx = x.to_number().sqrt();
    if approx != 0.0 && approx.is_finite() {
        return BigNumber::from_f64_lossy(approx, cfg);
    }
    let (Some(mut digits), Some(exponent)) = (x.coefficient(), x.exponent()) else {
        return BigNumber::nan();
    };
    if (digits.len() as i64 + exponent) % 2 == 0 {
        digits.push('0');
    }
    let root = digits.parse::<f64>().unwrap_or(f64::INFINITY).sqrt();
    let half = (exponent + 1).div_euclid(2) - i64::from(exponent < 0 || exponent % 2 != 0);
    let mantissa = if root.is_finite() {
        BigNumber::from_f64_lossy(root, cfg).coefficient()
    } else {
        None
    };
    let mantissa = mantissa.unwrap_or_else(|| "1".to_string());
    BigNumber::from_digits(false, &mantissa, half, cfg)
}

impl BigNumber {
    /// Square root rounded to `cfg.decimal_places()` with
    /// `cfg.rounding_mode()`.
    ///
    /// The root of a negative non-zero value is NaN; ±0 and +Infinity are
    /// their own roots.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let two = BigNumber::from(2);
    /// assert_eq!(two.square_root(&cfg).to_string(), "1.4142135623730950488");
    /// assert!(BigNumber::from(-1).square_root(&cfg).is_nan());
    /// ```
    pub fn square_root(&self, cfg: &Config) -> BigNumber {
        if self.is_nan() || (self.negative && !self.is_zero()) {
            return BigNumber::nan();
        }
        if self.is_zero() || self.is_infinite() {
            return self.clone();
        }

        let dp = i64::from(cfg.decimal_places);
        let half = BigNumber::from_digits(false, "5", -1, cfg);
        let mut guard = dp + GUARD_DIGITS;
        let mut root = seed(self, cfg);
        let mut inexact = false;

        if let Some(seed_exponent) = root.exponent().filter(|_| !root.is_zero()) {
            let mut shared = seed_exponent + guard;
            if shared < 3 {
                shared = 0;
            }
            let mut retried = false;
            loop {
                let previous = root;
                let quotient = divide(self, &previous, guard, RoundingMode::Down, cfg);
                root = half.times(&previous.plus(&quotient, cfg), cfg);

                let before = previous.coefficient().unwrap_or_default();
                let digits = root.coefficient().unwrap_or_default();
                if window(&before, 0, shared) != window(&digits, 0, shared) {
                    continue;
                }

                if root.exponent().is_some_and(|e| e < seed_exponent) {
                    shared -= 1;
                }
                let tail = window(&digits, shared - 3, shared + 1);
                if tail != "9999" && (retried || tail != "4999") {
                    let exact_tail = tail.bytes().all(|b| b == b'0')
                        || (tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0'));
                    if exact_tail {
                        let e = root.exponent().unwrap_or(0);
                        root = round_significant(root, e + dp + 2, RoundingMode::Down, false, cfg);
                        inexact = root.times(&root, cfg) != *self;
                    }
                    break;
                }

                if !retried {
                    let e = previous.exponent().unwrap_or(0);
                    let up = round_significant(previous, e + dp + 2, RoundingMode::Up, false, cfg);
                    if up.times(&up, cfg) == *self {
                        root = up;
                        break;
                    }
                }
                guard += GUARD_DIGITS;
                shared += GUARD_DIGITS;
                retried = true;
                tracing::debug!(guard, "square root digits undecided, extending guard");
            }
        }

        let e = root.exponent().unwrap_or(0);
        round_significant(root, e + dp + 1, cfg.rounding_mode, inexact, cfg)
    }
}
