// ============================================================================
// Rational Approximation
// Continued-fraction convergents bounded by a maximum denominator
// ============================================================================

use crate::arith::divide;
use crate::config::{Config, RoundingMode};
use crate::number::{BigNumber, BigNumberError, BigNumberResult, Operation};
use std::fmt;

/// A numerator and denominator pair; the denominator is always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Fraction {
    pub numerator: BigNumber,
    pub denominator: BigNumber,
}

impl Fraction {
    /// Numerator and denominator rendered under `cfg`.
    pub fn to_strings(&self, cfg: &Config) -> (String, String) {
        (self.numerator.value_of(cfg), self.denominator.value_of(cfg))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn check_max_denominator(max: &BigNumber) -> BigNumberResult<()> {
    let reason = if !max.is_integer() {
        "max denominator not an integer"
    } else if max.lt(&BigNumber::one()) {
        "max denominator out of range"
    } else {
        return Ok(());
    };
    Err(BigNumberError::validation(Operation::ToFraction, reason, max))
}

impl BigNumber {
    /// Closest fraction with denominator at most `max_denominator` (an
    /// integer ≥ 1); without a bound the fraction is exact.
    ///
    /// NaN and ±Infinity are returned over a denominator of one.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let pi = BigNumber::parse("3.14159265358979", &cfg).unwrap();
    /// let bound = BigNumber::from(1000);
    /// let f = pi.to_fraction(Some(&bound), &cfg).unwrap();
    /// assert_eq!(f.to_string(), "355/113");
    /// ```
    pub fn to_fraction(
        &self,
        max_denominator: Option<&BigNumber>,
        cfg: &Config,
    ) -> BigNumberResult<Fraction> {
        if let Some(max) = max_denominator {
            check_max_denominator(max)?;
        }
        let (Some(digits), Some(exponent)) = (self.coefficient(), self.exponent()) else {
            return Ok(Fraction {
                numerator: self.clone(),
                denominator: BigNumber::one(),
            });
        };

        // |self| = s / d with s the significand as an integer
        let cfg = &cfg.unbounded_above();
        let scale = digits.len() as i64 - exponent - 1;
        let one = BigNumber::one();
        let mut d = BigNumber::from_digits(false, "1", scale, cfg);
        let mut s = BigNumber::from_digits(false, &digits, digits.len() as i64 - 1, cfg);
        let bound = match max_denominator {
            Some(max) if max.lte(&d) => max.clone(),
            _ if scale > 0 => d.clone(),
            _ => one.clone(),
        };

        // Convergent recurrences: numerators n0, n1 and denominators d0, d1
        let (mut n0, mut n1) = (BigNumber::zero(false), one.clone());
        let (mut d0, mut d1) = (one.clone(), BigNumber::zero(false));
        loop {
            let q = divide(&s, &d, 0, RoundingMode::Down, cfg);
            let d2 = d0.plus(&q.times(&d1, cfg), cfg);
            if !d2.is_finite() || d2.gt(&bound) {
                break;
            }
            d0 = std::mem::replace(&mut d1, d2);
            let n2 = n0.plus(&q.times(&n1, cfg), cfg);
            n0 = std::mem::replace(&mut n1, n2);
            let rest = s.minus(&q.times(&d, cfg), cfg);
            s = std::mem::replace(&mut d, rest);
        }

        // Best semiconvergent still within the bound
        let k = divide(&bound.minus(&d0, cfg), &d1, 0, RoundingMode::Down, cfg);
        let n0 = n0.plus(&k.times(&n1, cfg), cfg).with_sign(self.negative);
        let d0 = d0.plus(&k.times(&d1, cfg), cfg);
        let n1 = n1.with_sign(self.negative);

        let dp = (2 * scale).max(0);
        let error = |n: &BigNumber, d: &BigNumber| {
            divide(n, d, dp, cfg.rounding_mode, cfg).minus(self, cfg).abs()
        };
        let fraction = if error(&n1, &d1).lte(&error(&n0, &d0)) {
            Fraction {
                numerator: n1,
                denominator: d1,
            }
        } else {
            Fraction {
                numerator: n0,
                denominator: d0,
            }
        };
        Ok(fraction)
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

    fn frac(s: &str, max: Option<&str>) -> (String, String) {
        let c = cfg();
        let max = max.map(num);
        num(s).to_fraction(max.as_ref(), &c).unwrap().to_strings(&c)
    }

    fn pair(n: &str, d: &str) -> (String, String) {
        (n.to_string(), d.to_string())
    }

    #[test]
    fn test_exact_fractions() {
        assert_eq!(frac("0.1", None), pair("1", "10"));
        assert_eq!(frac("0.75", None), pair("3", "4"));
        assert_eq!(frac("-1.25", None), pair("-5", "4"));
        assert_eq!(frac("100", None), pair("100", "1"));
        assert_eq!(frac("0", None), pair("0", "1"));
    }

    #[test]
    fn test_bounded_denominator() {
        assert_eq!(frac("3.14159265358979", Some("1000")), pair("355", "113"));
        assert_eq!(frac("3.14159265358979", Some("10")), pair("22", "7"));
        assert_eq!(frac("0.333", Some("5")), pair("1", "3"));
        // Ties keep the last full convergent
        assert_eq!(frac("0.5", Some("1")), pair("0", "1"));
    }

    #[test]
    fn test_invalid_bounds() {
        let c = cfg();
        let err = num("0.5").to_fraction(Some(&num("1.5")), &c).unwrap_err();
        assert_eq!(err.to_string(), "toFraction() max denominator not an integer: 1.5");
        let err = num("0.5").to_fraction(Some(&num("0")), &c).unwrap_err();
        assert_eq!(err.to_string(), "toFraction() max denominator out of range: 0");
    }

    #[test]
    fn test_non_finite() {
        let c = cfg();
        let f = BigNumber::nan().to_fraction(None, &c).unwrap();
        assert!(f.numerator.is_nan());
        assert_eq!(f.denominator.to_string(), "1");
    }
}
