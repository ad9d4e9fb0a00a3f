// ============================================================================
// Formatter
// String renderings: plain, fixed, exponential, precision, base-n, grouped
// ============================================================================
//
// Every rendering that limits digits first rounds through the shared
// rounding engine, then places a point or an exponent around the
// significant digits. A negative value that rounds to zero keeps its minus
// sign ("-0.00"); negative zero itself prints without one.

mod base;
mod grouping;
pub(crate) mod notation;

use crate::config::{Config, RoundingMode};
use crate::number::limbs::coefficient_string;
use crate::number::{check_range, BigNumber, BigNumberResult, Operation, MAX_ARG};
use crate::rounding::{check_precision, round_significant};
use notation::{exponential, pad_decimals, pad_digits, positional};

fn check_decimal_places(dp: u32, operation: Operation) -> BigNumberResult<i64> {
    check_range(i64::from(dp), 0, MAX_ARG, operation, "decimal places")
}

/// Rendering of NaN and the infinities.
fn special(x: &BigNumber) -> String {
    match (x.is_nan(), x.negative) {
        (true, _) => "NaN".to_string(),
        (false, true) => "-Infinity".to_string(),
        (false, false) => "Infinity".to_string(),
    }
}

/// Prefix the minus sign of a negative non-zero original.
fn signed(x: &BigNumber, body: String) -> String {
    if x.negative && !x.is_zero() {
        format!("-{}", body)
    } else {
        body
    }
}

impl BigNumber {
    /// Plain rendering: exponential notation when the exponent is at or
    /// beyond `cfg.exponential_at()`, fixed-point otherwise.
    pub(crate) fn plain_string(&self, cfg: &Config) -> String {
        let Some((limbs, exponent)) = self.finite_parts() else {
            return special(self);
        };
        let digits = coefficient_string(limbs);
        let (neg, pos) = cfg.exponential_at;
        let body = if exponent <= neg || exponent >= pos {
            exponential(&digits, exponent)
        } else {
            positional(&digits, exponent)
        };
        signed(self, body)
    }

    /// Fixed-point rendering with `dp` decimal places (all places when `None`).
    pub(crate) fn fixed_string(&self, dp: Option<i64>, mode: RoundingMode, cfg: &Config) -> String {
        let Some((limbs, exponent)) = self.finite_parts() else {
            return special(self);
        };
        let Some(dp) = dp else {
            return signed(self, positional(&coefficient_string(limbs), exponent));
        };
        let rounded = round_significant(self.clone(), dp + exponent + 1, mode, false, cfg);
        let Some((limbs, e)) = rounded.finite_parts() else {
            return special(&rounded);
        };
        let body = pad_decimals(positional(&coefficient_string(limbs), e), dp);
        signed(self, body)
    }

    /// Plain rendering under `cfg`, or the value in `base` (2 to 64) rounded
    /// to `cfg.decimal_places()` fraction digits.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let x = BigNumber::parse("255.5", &cfg).unwrap();
    /// assert_eq!(x.to_string_with(Some(16), &cfg).unwrap(), "ff.8");
    /// assert_eq!(x.to_string_with(None, &cfg).unwrap(), "255.5");
    /// ```
    pub fn to_string_with(&self, base: Option<u32>, cfg: &Config) -> BigNumberResult<String> {
        match base {
            None => Ok(self.plain_string(cfg)),
            Some(base) => self.to_string_base(base, cfg),
        }
    }

    /// The value in `base` (2 to 64); fraction digits are rounded to
    /// `cfg.decimal_places()` with `cfg.rounding_mode()`.
    pub fn to_string_base(&self, base: u32, cfg: &Config) -> BigNumberResult<String> {
        check_range(i64::from(base), 2, 64, Operation::ToString, "base")?;
        if !self.is_finite() {
            return Ok(special(self));
        }
        Ok(signed(self, base::to_radix(self, base, cfg)))
    }

    /// Fixed-point notation with `dp` decimal places (default: as many as
    /// needed), rounded with `mode` (default the configured mode).
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let x = BigNumber::parse("1.005", &cfg).unwrap();
    /// assert_eq!(x.to_fixed(Some(2), None, &cfg).unwrap(), "1.01");
    /// ```
    pub fn to_fixed(
        &self,
        dp: Option<u32>,
        mode: Option<RoundingMode>,
        cfg: &Config,
    ) -> BigNumberResult<String> {
        let dp = dp
            .map(|dp| check_decimal_places(dp, Operation::ToFixed))
            .transpose()?;
        Ok(self.fixed_string(dp, mode.unwrap_or(cfg.rounding_mode), cfg))
    }

    /// Exponential notation with `dp` digits after the point (default: as
    /// many as needed).
    pub fn to_exponential(
        &self,
        dp: Option<u32>,
        mode: Option<RoundingMode>,
        cfg: &Config,
    ) -> BigNumberResult<String> {
        let dp = dp
            .map(|dp| check_decimal_places(dp, Operation::ToExponential))
            .transpose()?;
        let Some((limbs, exponent)) = self.finite_parts() else {
            return Ok(special(self));
        };
        let Some(dp) = dp else {
            return Ok(signed(self, exponential(&coefficient_string(limbs), exponent)));
        };
        let mode = mode.unwrap_or(cfg.rounding_mode);
        let rounded = round_significant(self.clone(), dp + 1, mode, false, cfg);
        let Some((limbs, e)) = rounded.finite_parts() else {
            return Ok(special(&rounded));
        };
        let digits = pad_digits(coefficient_string(limbs), dp + 1);
        Ok(signed(self, exponential(&digits, e)))
    }

    /// `sd` significant digits (1 to 1e9), in exponential notation when
    /// `sd` is smaller than the integer digit count or the exponent is at or
    /// below the negative threshold. Without `sd` every digit is kept and
    /// only the negative threshold selects exponential notation.
    pub fn to_precision(
        &self,
        sd: Option<u32>,
        mode: Option<RoundingMode>,
        cfg: &Config,
    ) -> BigNumberResult<String> {
        let sd = sd
            .map(|sd| check_precision(sd, Operation::ToPrecision))
            .transpose()?;
        let Some((limbs, exponent)) = self.finite_parts() else {
            return Ok(special(self));
        };
        let Some(sd) = sd else {
            let digits = coefficient_string(limbs);
            let body = if exponent <= cfg.exponential_at.0 {
                exponential(&digits, exponent)
            } else {
                positional(&digits, exponent)
            };
            return Ok(signed(self, body));
        };
        let mode = mode.unwrap_or(cfg.rounding_mode);
        let rounded = round_significant(self.clone(), sd, mode, false, cfg);
        let Some((limbs, e)) = rounded.finite_parts() else {
            return Ok(special(&rounded));
        };
        let digits = coefficient_string(limbs);
        let body = if sd <= e || e <= cfg.exponential_at.0 {
            exponential(&pad_digits(digits, sd), e)
        } else {
            pad_decimals(positional(&digits, e), sd - e - 1)
        };
        Ok(signed(self, body))
    }

    /// Nearest `f64`; may lose precision.
    pub fn to_number(&self) -> f64 {
        match self.finite_parts() {
            None if self.is_nan() => f64::NAN,
            None if self.negative => f64::NEG_INFINITY,
            None => f64::INFINITY,
            Some((limbs, exponent)) => {
                let text = format!(
                    "{}{}",
                    if self.negative { "-" } else { "" },
                    exponential(&coefficient_string(limbs), exponent)
                );
                text.parse().unwrap_or(f64::NAN)
            }
        }
    }

    /// Plain rendering, the form used for serialization.
    pub fn value_of(&self, cfg: &Config) -> String {
        self.plain_string(cfg)
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

    #[test]
    fn test_plain_thresholds() {
        let c = cfg();
        assert_eq!(num("0.0000001").plain_string(&c), "1e-7");
        assert_eq!(num("0.000001").plain_string(&c), "0.000001");
        assert_eq!(num("1e21").plain_string(&c), "1e+21");
        assert_eq!(num("-1e20").plain_string(&c), "-100000000000000000000");
        assert_eq!(num("-0").plain_string(&c), "0");

        let wide = cfg().with_exponential_at(-3, 3).unwrap();
        assert_eq!(num("1234").plain_string(&wide), "1.234e+3");
        assert_eq!(num("0.001").plain_string(&wide), "1e-3");
    }

    #[test]
    fn test_to_fixed() {
        let c = cfg();
        assert_eq!(num("1.005").to_fixed(Some(2), None, &c).unwrap(), "1.01");
        assert_eq!(num("123.456").to_fixed(Some(0), None, &c).unwrap(), "123");
        assert_eq!(num("0.5").to_fixed(Some(0), None, &c).unwrap(), "1");
        assert_eq!(num("9.99").to_fixed(Some(1), None, &c).unwrap(), "10.0");
        assert_eq!(num("1e21").to_fixed(Some(2), None, &c).unwrap(), "1000000000000000000000.00");
        assert_eq!(num("1e-21").to_fixed(None, None, &c).unwrap(), "0.000000000000000000001");
        assert_eq!(num("-0.001").to_fixed(Some(2), None, &c).unwrap(), "-0.00");
        assert_eq!(
            num("2.345").to_fixed(Some(2), Some(RoundingMode::Down), &c).unwrap(),
            "2.34"
        );
        assert_eq!(BigNumber::infinity(true).to_fixed(Some(2), None, &c).unwrap(), "-Infinity");

        let err = num("1").to_fixed(Some(1_000_000_001), None, &c).unwrap_err();
        assert_eq!(err.to_string(), "toFixed() decimal places out of range: 1000000001");
    }

    #[test]
    fn test_to_exponential() {
        let c = cfg();
        assert_eq!(num("45.6").to_exponential(Some(0), None, &c).unwrap(), "5e+1");
        assert_eq!(num("45.6").to_exponential(Some(3), None, &c).unwrap(), "4.560e+1");
        assert_eq!(num("-0.000123").to_exponential(None, None, &c).unwrap(), "-1.23e-4");
        assert_eq!(num("0").to_exponential(Some(2), None, &c).unwrap(), "0.00e+0");
        assert_eq!(num("9.99").to_exponential(Some(1), None, &c).unwrap(), "1.0e+1");
    }

    #[test]
    fn test_to_precision() {
        let c = cfg();
        assert_eq!(num("45.6").to_precision(Some(1), None, &c).unwrap(), "5e+1");
        assert_eq!(num("45.6").to_precision(Some(5), None, &c).unwrap(), "45.600");
        assert_eq!(num("123.456").to_precision(Some(3), None, &c).unwrap(), "123");
        assert_eq!(num("0.00001234").to_precision(Some(2), None, &c).unwrap(), "0.000012");
        assert_eq!(num("0.0000001234").to_precision(Some(2), None, &c).unwrap(), "1.2e-7");
        assert_eq!(num("9.99").to_precision(Some(2), None, &c).unwrap(), "10");
        assert_eq!(num("0").to_precision(Some(3), None, &c).unwrap(), "0.00");

        let err = num("1").to_precision(Some(0), None, &c).unwrap_err();
        assert_eq!(err.to_string(), "toPrecision() precision out of range: 0");
    }

    #[test]
    fn test_to_precision_all_digits() {
        let c = cfg();
        assert_eq!(
            num("1e21").to_precision(None, None, &c).unwrap(),
            "1000000000000000000000"
        );
        assert_eq!(num("-123.45").to_precision(None, None, &c).unwrap(), "-123.45");
        assert_eq!(num("1e-7").to_precision(None, None, &c).unwrap(), "1e-7");
        assert_eq!(num("0.000001").to_precision(None, None, &c).unwrap(), "0.000001");
        assert_eq!(BigNumber::nan().to_precision(None, None, &c).unwrap(), "NaN");
    }

    #[test]
    fn test_to_string_base() {
        let c = cfg();
        assert_eq!(num("255").to_string_base(16, &c).unwrap(), "ff");
        assert_eq!(num("-255").to_string_base(2, &c).unwrap(), "-11111111");
        assert_eq!(num("0.5").to_string_base(2, &c).unwrap(), "0.1");
        assert_eq!(num("4096").to_string_base(64, &c).unwrap(), "100");
        assert_eq!(num("1e25").to_string_base(10, &c).unwrap(), "10000000000000000000000000");
        assert_eq!(BigNumber::nan().to_string_base(16, &c).unwrap(), "NaN");

        let err = num("1").to_string_base(65, &c).unwrap_err();
        assert_eq!(err.to_string(), "toString() base out of range: 65");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(num("0.1").to_number(), 0.1);
        assert_eq!(num("-1.5e300").to_number(), -1.5e300);
        assert!(num("-0").to_number().is_sign_negative());
        assert!(BigNumber::nan().to_number().is_nan());
        assert_eq!(BigNumber::infinity(true).to_number(), f64::NEG_INFINITY);
    }
}
