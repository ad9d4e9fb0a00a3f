// ============================================================================
// Division and Modulo
// Multi-limb long division feeding the rounding engine
// ============================================================================

use crate::config::{Config, ModuloMode, RoundingMode};
use crate::number::limbs::{mul_small, BASE, LOG_BASE};
use crate::number::{BigNumber, Repr};
use crate::rounding::round_significant;

const WIDE_BASE: u128 = BASE as u128;

/// Integer quotient limbs of `num / den` and whether the remainder is
/// non-zero. `den` must not start with a zero limb.
///
/// Knuth's algorithm D in base 10^14: the divisor is scaled so that its
/// leading limb is at least half the base, each quotient limb is estimated
/// from the two leading remainder limbs and corrected at most twice, then
/// the estimate is multiplied back and subtracted.
pub(crate) fn div_rem_limbs(num: &[u64], den: &[u64]) -> (Vec<u64>, bool) {
    if den.len() == 1 {
        let d = u128::from(den[0]);
        let mut rem: u128 = 0;
        let quotient = num
            .iter()
            .map(|&limb| {
                let cur = rem * WIDE_BASE + u128::from(limb);
                rem = cur % d;
                (cur / d) as u64
            })
            .collect();
        return (quotient, rem != 0);
    }

    let n = den.len();
    let mut padded;
    let num = if num.len() < n {
        padded = vec![0u64; n - num.len()];
        padded.extend_from_slice(num);
        padded.as_slice()
    } else {
        num
    };
    let m = num.len() - n;

    // Normalize so that v[0] >= BASE / 2
    let factor = BASE / (den[0] + 1);
    let v: Vec<u64> = mul_small(den, factor)[1..].to_vec();
    let mut u = mul_small(num, factor);

    let v0 = u128::from(v[0]);
    let v1 = u128::from(v[1]);
    let mut quotient = vec![0u64; m + 1];

    for j in 0..=m {
        let top = u128::from(u[j]) * WIDE_BASE + u128::from(u[j + 1]);
        let mut qhat = top / v0;
        let mut rhat = top % v0;
        while qhat >= WIDE_BASE || qhat * v1 > rhat * WIDE_BASE + u128::from(u[j + 2]) {
            qhat -= 1;
            rhat += v0;
            if rhat >= WIDE_BASE {
                break;
            }
        }

        // u[j..=j+n] -= qhat * v
        let mut carry: u128 = 0;
        let mut borrow: i128 = 0;
        for i in (0..n).rev() {
            let p = qhat * u128::from(v[i]) + carry;
            carry = p / WIDE_BASE;
            let t = i128::from(u[j + 1 + i]) - (p % WIDE_BASE) as i128 - borrow;
            if t < 0 {
                u[j + 1 + i] = (t + WIDE_BASE as i128) as u64;
                borrow = 1;
            } else {
                u[j + 1 + i] = t as u64;
                borrow = 0;
            }
        }
        let t = i128::from(u[j]) - carry as i128 - borrow;

        if t < 0 {
            // Estimate was one too large: add the divisor back
            qhat -= 1;
            let mut carry = 0u64;
            for i in (0..n).rev() {
                let s = u[j + 1 + i] + v[i] + carry;
                u[j + 1 + i] = s % BASE;
                carry = s / BASE;
            }
            u[j] = 0;
        } else {
            u[j] = t as u64;
        }
        quotient[j] = qhat as u64;
    }

    let remainder = u.iter().any(|&limb| limb != 0);
    (quotient, remainder)
}

/// `x / y` rounded to `dp` decimal places with `mode`.
pub(crate) fn divide(
    x: &BigNumber,
    y: &BigNumber,
    dp: i64,
    mode: RoundingMode,
    cfg: &Config,
) -> BigNumber {
    let negative = x.negative != y.negative;
    let (xs, ys) = match (&x.repr, &y.repr) {
        (Repr::NaN, _) | (_, Repr::NaN) => return BigNumber::nan(),
        (Repr::Infinite, Repr::Infinite) => return BigNumber::nan(),
        (Repr::Infinite, _) => return BigNumber::infinity(negative),
        (_, Repr::Infinite) => return BigNumber::zero(negative),
        (Repr::Finite { limbs: xs, .. }, Repr::Finite { limbs: ys, .. }) => (xs, ys),
    };
    match (xs[0] == 0, ys[0] == 0) {
        (true, true) => return BigNumber::nan(),
        (false, true) => return BigNumber::infinity(negative),
        (true, false) => return BigNumber::zero(negative),
        (false, false) => {}
    }

    // Lowest quotient limb needed to see the digit after `dp` places
    let lowest = (-(dp + 1)).div_euclid(LOG_BASE as i64);
    let qx = x.top_limb_exponent();
    let qy = y.top_limb_exponent();
    let scale = (qx - xs.len() as i64) - (qy - ys.len() as i64) - lowest;

    // x / y / BASE^lowest = (X * BASE^scale) / Y over limb integers
    let mut dropped = false;
    let numerator: Vec<u64> = if scale >= 0 {
        let mut n = xs.to_vec();
        n.resize(xs.len() + scale as usize, 0);
        n
    } else {
        let keep = xs.len().saturating_sub(scale.unsigned_abs() as usize);
        dropped = xs[keep..].iter().any(|&limb| limb != 0);
        xs[..keep].to_vec()
    };

    let (quotient, remainder) = div_rem_limbs(&numerator, ys);

    // An all-zero quotient lies below the last needed digit but is not zero
    let vanished = quotient.iter().all(|&limb| limb == 0);
    let q = if vanished {
        BigNumber::from_limbs(negative, &[1], lowest - 1)
    } else {
        BigNumber::from_limbs(negative, &quotient, lowest + quotient.len() as i64 - 1)
    };
    let sd = q.exponent().map_or(0, |e| dp + e + 1);
    round_significant(q, sd, mode, dropped || remainder || vanished, cfg)
}

impl BigNumber {
    /// Quotient rounded to `cfg.decimal_places()` with `cfg.rounding_mode()`.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let third = BigNumber::from(1).div(&BigNumber::from(3), &cfg);
    /// assert_eq!(third.to_string(), "0.33333333333333333333");
    /// assert!(BigNumber::from(1).div(&BigNumber::from(0), &cfg).is_infinite());
    /// ```
    pub fn div(&self, other: &BigNumber, cfg: &Config) -> BigNumber {
        divide(self, other, i64::from(cfg.decimal_places), cfg.rounding_mode, cfg)
    }

    /// Integer part of the quotient (truncated towards zero).
    pub fn div_to_int(&self, other: &BigNumber, cfg: &Config) -> BigNumber {
        divide(self, other, 0, RoundingMode::Down, cfg)
    }

    /// Remainder `self - other * q`, where the integer quotient `q` is
    /// rounded according to `cfg.modulo_mode()`.
    ///
    /// With [`ModuloMode::Euclid`] the remainder is never negative.
    pub fn modulo(&self, other: &BigNumber, cfg: &Config) -> BigNumber {
        if !self.is_finite() || other.is_nan() || other.is_zero() {
            return BigNumber::nan();
        }
        if other.is_infinite() || self.is_zero() {
            return self.clone();
        }

        let quotient = match cfg.modulo_mode.rounding_mode() {
            Some(mode) => divide(self, other, 0, mode, cfg),
            None => {
                debug_assert_eq!(cfg.modulo_mode, ModuloMode::Euclid);
                let q = divide(self, &other.abs(), 0, RoundingMode::Floor, cfg);
                if other.negative {
                    q.negated()
                } else {
                    q
                }
            }
        };
        self.minus(&quotient.times(other, cfg), cfg)
    }
}
