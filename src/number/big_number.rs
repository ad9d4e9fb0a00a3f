// ============================================================================
// BigNumber
// Arbitrary-precision decimal value: sign, exponent and limb significand
// ============================================================================

use super::limbs::{
    coefficient_string, digit_count, limb_exponent, limbs_from_digits, trim_trailing_zeros, Limbs,
    LOG_BASE,
};
use crate::config::Config;
use smallvec::smallvec;

/// Arbitrary-precision decimal number.
///
/// A value is NaN, ±Infinity, or a finite `±0.d₁d₂d₃… × 10^(exponent + 1)`
/// whose significant digits are held in base 10^14 limbs. Values are
/// immutable: every operation returns a new `BigNumber`.
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
#[derive(Clone)]
pub struct BigNumber {
    /// Sign; always `false` for NaN
    pub(crate) negative: bool,
    pub(crate) repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Repr {
    NaN,
    Infinite,
    Finite {
        /// Power of ten of the first significant digit (0 for zero)
        exponent: i64,
        /// Aligned significand limbs; `[0]` for zero
        limbs: Limbs,
    },
}

impl BigNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Not-a-Number.
    pub fn nan() -> Self {
        Self {
            negative: false,
            repr: Repr::NaN,
        }
    }

    /// Signed Infinity.
    pub fn infinity(negative: bool) -> Self {
        Self {
            negative,
            repr: Repr::Infinite,
        }
    }

    /// Signed zero.
    pub fn zero(negative: bool) -> Self {
        Self {
            negative,
            repr: Repr::Finite {
                exponent: 0,
                limbs: smallvec![0],
            },
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self {
            negative: false,
            repr: Repr::Finite {
                exponent: 0,
                limbs: smallvec![1],
            },
        }
    }

    /// Build from a digit string without leading or trailing zeros whose
    /// first digit weighs 10^exponent, collapsing out-of-range exponents.
    pub(crate) fn from_digits(negative: bool, digits: &str, exponent: i64, cfg: &Config) -> Self {
        if digits.is_empty() {
            return Self::zero(negative);
        }
        Self {
            negative,
            repr: Repr::Finite {
                exponent,
                limbs: limbs_from_digits(digits, exponent),
            },
        }
        .clamp_range(cfg)
    }

    /// Build from big-endian limbs whose first limb has limb exponent
    /// `top`. Leading and trailing zero limbs are removed; no range check.
    pub(crate) fn from_limbs(negative: bool, limbs: &[u64], top: i64) -> Self {
        let first = limbs.iter().position(|&l| l != 0);
        let Some(first) = first else {
            return Self::zero(negative);
        };
        let mut limbs: Limbs = limbs[first..].iter().copied().collect();
        trim_trailing_zeros(&mut limbs);
        let top = top - first as i64;
        let exponent = top * LOG_BASE as i64 + digit_count(limbs[0]) as i64 - 1;
        Self {
            negative,
            repr: Repr::Finite { exponent, limbs },
        }
    }

    /// Collapse to signed Infinity above the configured range and to
    /// signed zero below it.
    pub(crate) fn clamp_range(self, cfg: &Config) -> Self {
        let negative = self.negative;
        match self.exponent() {
            Some(e) if e > cfg.range.1 => Self::infinity(negative),
            Some(e) if e < cfg.range.0 => Self::zero(negative),
            _ => self,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Limbs and exponent of a finite value.
    #[inline]
    pub(crate) fn finite_parts(&self) -> Option<(&[u64], i64)> {
        match &self.repr {
            Repr::Finite { exponent, limbs } => Some((limbs.as_slice(), *exponent)),
            _ => None,
        }
    }

    /// Power of ten of the first significant digit; `None` unless finite.
    #[inline]
    pub fn exponent(&self) -> Option<i64> {
        self.finite_parts().map(|(_, e)| e)
    }

    /// Significant digits without trailing zeros; `None` unless finite.
    pub fn coefficient(&self) -> Option<String> {
        self.finite_parts().map(|(limbs, _)| coefficient_string(limbs))
    }

    /// Limb exponent of the first limb.
    #[inline]
    pub(crate) fn top_limb_exponent(&self) -> i64 {
        limb_exponent(self.exponent().unwrap_or(0))
    }

    /// Same value with the sign replaced (NaN stays unsigned).
    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        if !matches!(self.repr, Repr::NaN) {
            self.negative = negative;
        }
        self
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Whether the value is neither NaN nor ±Infinity.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self.repr, Repr::Finite { .. })
    }

    /// Whether the value is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::NaN)
    }

    /// Whether the value is ±Infinity.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self.repr, Repr::Infinite)
    }

    /// Whether the sign is negative (true for -0 and -Infinity).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the value is ±0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(&self.repr, Repr::Finite { limbs, .. } if limbs[0] == 0)
    }

    /// Whether the value is a finite integer.
    pub fn is_integer(&self) -> bool {
        match &self.repr {
            Repr::Finite { exponent, limbs } => {
                limb_exponent(*exponent) > limbs.len() as i64 - 2
            }
            _ => false,
        }
    }

    // ========================================================================
    // Sign Operations
    // ========================================================================

    /// Absolute value.
    pub fn abs(&self) -> Self {
        self.clone().with_sign(false)
    }

    /// Negated value (NaN stays NaN).
    pub fn negated(&self) -> Self {
        let negative = !self.negative;
        self.clone().with_sign(negative)
    }

    // ========================================================================
    // Digit Counts
    // ========================================================================

    /// Number of digits after the decimal point; `None` unless finite.
    pub fn decimal_places(&self) -> Option<u64> {
        let (limbs, exponent) = self.finite_parts()?;
        let last = limbs.len() as i64 - 1;
        let mut n = (last - limb_exponent(exponent)) * LOG_BASE as i64;
        let mut tail = limbs[last as usize];
        if tail != 0 {
            while tail % 10 == 0 {
                tail /= 10;
                n -= 1;
            }
        }
        Some(n.max(0) as u64)
    }

    /// Number of significant digits; `None` unless finite.
    ///
    /// With `include_integer_zeros`, trailing zeros of the integer part count
    /// as significant (so `1e+3` has precision 4).
    pub fn precision(&self, include_integer_zeros: bool) -> Option<u64> {
        let (limbs, exponent) = self.finite_parts()?;
        let n = if limbs[0] == 0 {
            1
        } else {
            coefficient_string(limbs).len() as i64
        };
        if include_integer_zeros && exponent + 1 > n {
            Some((exponent + 1) as u64)
        } else {
            Some(n as u64)
        }
    }
}

impl std::fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Finite { exponent, limbs } => write!(
                f,
                "BigNumber({}, e={}, limbs={:?})",
                self,
                exponent,
                limbs.as_slice()
            ),
            _ => write!(f, "BigNumber({})", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> BigNumber {
        BigNumber::parse(s, &Config::default()).unwrap()
    }

    #[test]
    fn test_special_values() {
        assert!(BigNumber::nan().is_nan());
        assert!(!BigNumber::nan().is_finite());
        assert!(!BigNumber::nan().is_negative());
        assert!(BigNumber::infinity(true).is_negative());
        assert!(BigNumber::infinity(false).is_infinite());
        assert!(BigNumber::zero(true).is_zero());
        assert!(BigNumber::zero(true).is_negative());
        assert_eq!(BigNumber::zero(false).exponent(), Some(0));
    }

    #[test]
    fn test_from_limbs_normalizes() {
        let x = BigNumber::from_limbs(false, &[0, 0, 12, 0], 1);
        // 12 sits at limb exponent -1: 12e-14
        assert_eq!(x.exponent(), Some(-13));
        assert_eq!(x.coefficient().unwrap(), "12");

        assert!(BigNumber::from_limbs(true, &[0, 0], 3).is_zero());
    }

    #[test]
    fn test_clamp_range() {
        let cfg = Config::new().with_range(-5, 5).unwrap();
        assert!(BigNumber::parse("1234567", &cfg).unwrap().is_infinite());
        let tiny = BigNumber::parse("-0.0000001", &cfg).unwrap();
        assert!(tiny.is_zero());
        assert!(tiny.is_negative());
    }

    #[test]
    fn test_is_integer() {
        assert!(num("0").is_integer());
        assert!(num("-12345678901234567890").is_integer());
        assert!(num("1e30").is_integer());
        assert!(!num("1.5").is_integer());
        assert!(!num("123456789012345.1").is_integer());
        assert!(!BigNumber::infinity(false).is_integer());
    }

    #[test]
    fn test_abs_and_negated() {
        assert_eq!(num("-2.5").abs().to_string(), "2.5");
        assert_eq!(num("2.5").negated().to_string(), "-2.5");
        assert!(BigNumber::nan().negated().is_nan());
        assert!(!BigNumber::nan().negated().is_negative());
        assert!(num("0").negated().is_negative());
    }

    #[test]
    fn test_decimal_places_and_precision() {
        assert_eq!(num("123.4500").decimal_places(), Some(2));
        assert_eq!(num("1e+20").decimal_places(), Some(0));
        assert_eq!(num("0.000000000000000123").decimal_places(), Some(18));
        assert_eq!(BigNumber::nan().decimal_places(), None);

        assert_eq!(num("123.45").precision(false), Some(5));
        assert_eq!(num("1e+3").precision(false), Some(1));
        assert_eq!(num("1e+3").precision(true), Some(4));
        assert_eq!(num("0").precision(false), Some(1));
    }
}
