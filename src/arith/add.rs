// ============================================================================
// Addition and Subtraction
// One signed-magnitude algorithm for both operations
// ============================================================================

use crate::config::{Config, RoundingMode};
use crate::number::limbs::{limb_exponent, BASE};
use crate::number::{BigNumber, Repr};
use std::cmp::Ordering;

/// Exact signed sum.
fn add(x: &BigNumber, y: &BigNumber, cfg: &Config) -> BigNumber {
    let (xs, ex, ys, ey) = match (&x.repr, &y.repr) {
        (Repr::NaN, _) | (_, Repr::NaN) => return BigNumber::nan(),
        (Repr::Infinite, Repr::Infinite) => {
            return if x.negative == y.negative {
                x.clone()
            } else {
                BigNumber::nan()
            };
        }
        (Repr::Infinite, _) => return x.clone(),
        (_, Repr::Infinite) => return y.clone(),
        (
            Repr::Finite {
                exponent: ex,
                limbs: xs,
            },
            Repr::Finite {
                exponent: ey,
                limbs: ys,
            },
        ) => (xs, *ex, ys, *ey),
    };

    // Exact cancellation is -0 only when rounding towards -Infinity
    let cancelled = || BigNumber::zero(cfg.rounding_mode == RoundingMode::Floor);

    match (xs[0] == 0, ys[0] == 0) {
        (true, true) if x.negative == y.negative => return x.clone(),
        (true, true) => return cancelled(),
        (true, false) => return y.clone(),
        (false, true) => return x.clone(),
        (false, false) => {}
    }

    // Common frame of limb exponents [bottom, top]
    let tx = limb_exponent(ex);
    let ty = limb_exponent(ey);
    let top = tx.max(ty);
    let bottom = (tx - xs.len() as i64 + 1).min(ty - ys.len() as i64 + 1);
    let width = (top - bottom + 1) as usize;
    let align = |limbs: &[u64], t: i64| {
        let mut out = vec![0u64; width];
        let start = (top - t) as usize;
        out[start..start + limbs.len()].copy_from_slice(limbs);
        out
    };
    let mut a = align(xs, tx);
    let mut b = align(ys, ty);

    if x.negative == y.negative {
        let mut carry = 0u64;
        for i in (0..width).rev() {
            let sum = a[i] + b[i] + carry;
            carry = sum / BASE;
            a[i] = sum % BASE;
        }
        let mut top = top;
        if carry > 0 {
            a.insert(0, carry);
            top += 1;
        }
        return BigNumber::from_limbs(x.negative, &a, top).clamp_range(cfg);
    }

    // Subtract the smaller magnitude from the larger one
    let mut negative = x.negative;
    match a.cmp(&b) {
        Ordering::Equal => return cancelled(),
        Ordering::Less => {
            std::mem::swap(&mut a, &mut b);
            negative = y.negative;
        }
        Ordering::Greater => {}
    }
    let mut borrow = 0u64;
    for i in (0..width).rev() {
        let sub = b[i] + borrow;
        if a[i] >= sub {
            a[i] -= sub;
            borrow = 0;
        } else {
            a[i] = a[i] + BASE - sub;
            borrow = 1;
        }
    }
    BigNumber::from_limbs(negative, &a, top).clamp_range(cfg)
}

impl BigNumber {
    /// Exact sum.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let a = BigNumber::parse("0.1", &cfg).unwrap();
    /// let b = BigNumber::parse("0.2", &cfg).unwrap();
    /// assert_eq!(a.plus(&b, &cfg).to_string(), "0.3");
    /// ```
    pub fn plus(&self, other: &BigNumber, cfg: &Config) -> BigNumber {
        add(self, other, cfg)
    }

    /// Exact difference.
    pub fn minus(&self, other: &BigNumber, cfg: &Config) -> BigNumber {
        add(self, &other.negated(), cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::default()
    }

    fn num(s: &str) -> BigNumber {
        BigNumber::parse(s, &cfg()).unwrap()
    }

    fn sum(a: &str, b: &str) -> String {
        num(a).plus(&num(b), &cfg()).to_string()
    }

    fn diff(a: &str, b: &str) -> String {
        num(a).minus(&num(b), &cfg()).to_string()
    }

    #[test]
    fn test_exact_addition() {
        assert_eq!(sum("0.1", "0.2"), "0.3");
        assert_eq!(sum("99999999999999", "1"), "100000000000000");
        assert_eq!(sum("1e-30", "1"), "1.000000000000000000000000000001");
        assert_eq!(sum("-5", "-7.25"), "-12.25");
    }

    #[test]
    fn test_subtraction_with_borrow() {
        assert_eq!(diff("100000000000000", "0.00000000000001"), "99999999999999.99999999999999");
        assert_eq!(diff("1", "3"), "-2");
        assert_eq!(diff("-1", "-3"), "2");
        assert_eq!(sum("5", "-5.5"), "-0.5");
    }

    #[test]
    fn test_zero_signs() {
        assert!(!num("1").minus(&num("1"), &cfg()).is_negative());
        let floor = cfg().with_rounding_mode(RoundingMode::Floor);
        assert!(num("1").minus(&num("1"), &floor).is_negative());
        assert!(num("0").plus(&num("-0"), &floor).is_negative());
        assert!(!num("0").plus(&num("-0"), &cfg()).is_negative());
        assert!(num("-0").plus(&num("-0"), &cfg()).is_negative());
        assert_eq!(sum("0", "-3"), "-3");
        assert_eq!(diff("0", "3"), "-3");
    }

    #[test]
    fn test_special_values() {
        let inf = BigNumber::infinity(false);
        assert!(inf.plus(&inf.negated(), &cfg()).is_nan());
        assert!(inf.minus(&inf, &cfg()).is_nan());
        assert!(inf.plus(&inf, &cfg()).is_infinite());
        assert!(inf.plus(&num("-1e100"), &cfg()).is_infinite());
        assert!(num("1").minus(&inf, &cfg()).is_negative());
        assert!(BigNumber::nan().plus(&num("1"), &cfg()).is_nan());
    }

    #[test]
    fn test_sum_overflows_range() {
        let c = Config::new().with_range(-3, 3).unwrap();
        let x = BigNumber::parse("9999", &c).unwrap();
        assert!(x.plus(&BigNumber::one(), &c).is_infinite());
    }
}
