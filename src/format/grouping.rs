// ============================================================================
// Digit Grouping
// Separator insertion for to_format
// ============================================================================

use super::check_decimal_places;
use crate::config::{Config, FormatConfig, RoundingMode};
use crate::number::{BigNumber, BigNumberResult, Operation};

/// Group integer digits from the left so that the rightmost group has
/// `primary` digits and every other group `secondary` (or `primary`) digits.
fn group_integer(digits: &str, fmt: &FormatConfig) -> String {
    let (mut size, mut last) = (fmt.group_size, 0);
    let mut len = digits.len();
    if fmt.secondary_group_size > 0 {
        last = size;
        size = fmt.secondary_group_size;
        len = len.saturating_sub(last);
    }
    if size == 0 || len == 0 || (last > 0 && digits.len() <= last) {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() * 2);
    let mut end = match len % size {
        0 => size,
        r => r,
    };
    out.push_str(&digits[..end]);
    while end < len {
        out.push_str(&fmt.group_separator);
        out.push_str(&digits[end..end + size]);
        end += size;
    }
    if last > 0 {
        out.push_str(&fmt.group_separator);
        out.push_str(&digits[end..]);
    }
    out
}

/// Separate every `size` fraction digits, never after the last one.
fn group_fraction(digits: &str, fmt: &FormatConfig) -> String {
    let size = fmt.fraction_group_size;
    if size == 0 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, chunk) in digits.as_bytes().chunks(size).enumerate() {
        if i > 0 {
            out.push_str(&fmt.fraction_group_separator);
        }
        out.extend(chunk.iter().map(|&b| b as char));
    }
    out
}

impl BigNumber {
    /// Fixed-point rendering with `dp` decimal places, grouped and
    /// separated according to `cfg.format()`.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// let x = BigNumber::parse("-1234567.891", &cfg).unwrap();
    /// assert_eq!(x.to_format(Some(2), None, &cfg).unwrap(), "-1,234,567.89");
    /// ```
    pub fn to_format(
        &self,
        dp: Option<u32>,
        mode: Option<RoundingMode>,
        cfg: &Config,
    ) -> BigNumberResult<String> {
        let dp = dp
            .map(|dp| check_decimal_places(dp, Operation::ToFormat))
            .transpose()?;
        let fixed = self.fixed_string(dp, mode.unwrap_or(cfg.rounding_mode), cfg);
        if !self.is_finite() {
            return Ok(fixed);
        }

        let fmt = &cfg.format;
        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (int, frac) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(fixed.len() * 2);
        out.push_str(sign);
        out.push_str(&group_integer(int, fmt));
        if let Some(frac) = frac {
            out.push_str(&fmt.decimal_separator);
            out.push_str(&group_fraction(frac, fmt));
        }
        Ok(out)
    }
}
