// ============================================================================
// Parser
// Construction from decimal text, base-n text, f64 and existing values
// ============================================================================

use super::radix::{convert_base, digit_value, render_digits, MAX_RADIX, MIN_RADIX};
use super::{check_range, BigNumber, BigNumberError, BigNumberResult, Operation};
use crate::config::Config;
use crate::rounding::round_decimal_places;

/// Significant digits an `f64` literal may carry before precision loss is assumed.
const MAX_F64_DIGITS: usize = 15;

const PRECISION_LOSS: &str = "number type has more than 15 significant digits";

/// Saturation bound for parsed exponent suffixes; far outside any valid range.
const EXPONENT_LIMIT: i64 = i64::MAX / 4;

/// Input accepted by [`BigNumber::parse`].
#[derive(Debug, Clone, Copy)]
pub enum NumberInput<'a> {
    /// A literal, decimal unless `base` is given (2 to 64)
    Text { literal: &'a str, base: Option<u32> },
    /// A native float, checked for precision already lost
    Number(f64),
    /// A copy of an existing value
    Existing(&'a BigNumber),
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(literal: &'a str) -> Self {
        NumberInput::Text {
            literal,
            base: None,
        }
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(literal: &'a String) -> Self {
        NumberInput::from(literal.as_str())
    }
}

impl From<f64> for NumberInput<'_> {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl<'a> From<&'a BigNumber> for NumberInput<'a> {
    fn from(value: &'a BigNumber) -> Self {
        NumberInput::Existing(value)
    }
}

impl BigNumber {
    /// Construct a value from text, an `f64` or another value.
    ///
    /// Malformed literals become NaN when `cfg.errors()` is false and a
    /// [`BigNumberError::Parse`] otherwise.
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config};
    ///
    /// let cfg = Config::default();
    /// assert_eq!(BigNumber::parse("007.1500", &cfg).unwrap().to_string(), "7.15");
    /// assert_eq!(BigNumber::parse("-1.5e3", &cfg).unwrap().to_string(), "-1500");
    /// ```
    pub fn parse<'a>(input: impl Into<NumberInput<'a>>, cfg: &Config) -> BigNumberResult<Self> {
        parse_input(input.into(), Operation::Construct, cfg)
    }

    /// Construct a value from a literal in `base` (2 to 64).
    ///
    /// Base 10 given explicitly rounds the result to `cfg.decimal_places()`;
    /// other bases convert fractions with a division at that precision.
    pub fn with_base(literal: &str, base: u32, cfg: &Config) -> BigNumberResult<Self> {
        parse_input(
            NumberInput::Text {
                literal,
                base: Some(base),
            },
            Operation::Construct,
            cfg,
        )
    }

    /// Construct a value from an `f64`.
    pub fn from_f64(value: f64, cfg: &Config) -> BigNumberResult<Self> {
        parse_input(NumberInput::Number(value), Operation::Construct, cfg)
    }
}

/// Dispatch on the input variant, tagging failures with `operation`.
pub(crate) fn parse_input(
    input: NumberInput<'_>,
    operation: Operation,
    cfg: &Config,
) -> BigNumberResult<BigNumber> {
    match input {
        NumberInput::Existing(value) => Ok(value.clone()),
        NumberInput::Number(value) => parse_f64(value, operation, cfg),
        NumberInput::Text {
            literal,
            base: None,
        } => parse_text(literal, operation, cfg),
        NumberInput::Text {
            literal,
            base: Some(base),
        } => parse_radix(literal, base, operation, cfg),
    }
}

// ============================================================================
// Decimal Literals
// ============================================================================

/// Scanned `-?(\d+(\.\d*)?|\.\d+)(e[+-]?\d+)?` literal.
struct DecimalLiteral {
    negative: bool,
    /// Significant digits, no leading or trailing zeros (empty for zero)
    digits: String,
    exponent: i64,
}

impl DecimalLiteral {
    fn scan(s: &str) -> Option<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (mantissa, shift) = match body.find(['e', 'E']) {
            Some(i) => (&body[..i], parse_exponent(&body[i + 1..])?),
            None => (body, 0),
        };
        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return None;
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);

        let leading = digits.bytes().take_while(|&b| b == b'0').count();
        let significant = digits[leading..].trim_end_matches('0').to_string();
        let point = (int_part.len() as i64).saturating_add(shift);

        Some(Self {
            negative,
            exponent: point.saturating_sub(leading as i64 + 1),
            digits: significant,
        })
    }

    fn into_number(self, cfg: &Config) -> BigNumber {
        BigNumber::from_digits(self.negative, &self.digits, self.exponent, cfg)
    }
}

/// Parse `[+-]?\d+`, saturating huge magnitudes.
fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        })
        .min(EXPONENT_LIMIT);
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_text(literal: &str, operation: Operation, cfg: &Config) -> BigNumberResult<BigNumber> {
    match DecimalLiteral::scan(literal) {
        Some(scanned) => Ok(scanned.into_number(cfg)),
        None => parse_lenient(literal, None, operation, cfg),
    }
}

// ============================================================================
// Native Floats
// ============================================================================

/// Significant digits and exponent of a finite `f64`, taken from its
/// shortest round-trip form such as "1.5e-7".
fn scan_f64(value: f64) -> Option<DecimalLiteral> {
    let mut scanned = DecimalLiteral::scan(&format!("{:e}", value.abs()))?;
    scanned.negative = value.is_sign_negative();
    Some(scanned)
}

fn parse_f64(value: f64, operation: Operation, cfg: &Config) -> BigNumberResult<BigNumber> {
    if !value.is_finite() {
        return Ok(BigNumber::from_f64_lossy(value, cfg));
    }
    let Some(scanned) = scan_f64(value) else {
        return Ok(BigNumber::nan());
    };

    let small_integer = value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX);
    if !small_integer && scanned.digits.len() > MAX_F64_DIGITS {
        if cfg.errors {
            return Err(BigNumberError::validation(operation, PRECISION_LOSS, value));
        }
        tracing::warn!(value, "{}", PRECISION_LOSS);
    }
    Ok(scanned.into_number(cfg))
}

impl BigNumber {
    /// Convert an `f64` without the significant-digit guard.
    pub(crate) fn from_f64_lossy(value: f64, cfg: &Config) -> BigNumber {
        if value.is_nan() {
            return BigNumber::nan();
        }
        if value.is_infinite() {
            return BigNumber::infinity(value.is_sign_negative());
        }
        scan_f64(value).map_or_else(BigNumber::nan, |scanned| scanned.into_number(cfg))
    }
}

// ============================================================================
// Base-n Literals
// ============================================================================

fn parse_radix(
    literal: &str,
    base: u32,
    operation: Operation,
    cfg: &Config,
) -> BigNumberResult<BigNumber> {
    check_range(
        i64::from(base),
        i64::from(MIN_RADIX),
        i64::from(MAX_RADIX),
        operation,
        "base",
    )?;

    if base == 10 {
        let value = parse_text(literal, operation, cfg)?;
        return Ok(round_decimal_places(
            value,
            i64::from(cfg.decimal_places),
            cfg.rounding_mode,
            cfg,
        ));
    }

    let (negative, body) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    match radix_digits(body, base) {
        Some((int, frac)) => Ok(radix_to_decimal(negative, &int, &frac, base, cfg)),
        None => parse_lenient(literal, Some(base), operation, cfg),
    }
}

/// Digit values of `[alphabet]+(\.[alphabet]+)?`.
fn radix_digits(body: &str, base: u32) -> Option<(Vec<u8>, Vec<u8>)> {
    let (int, frac) = match body.split_once('.') {
        Some((int, frac)) if !frac.is_empty() => (int, frac),
        Some(_) => return None,
        None => (body, ""),
    };
    if int.is_empty() {
        return None;
    }
    let values = |part: &str| {
        part.bytes()
            .map(|c| digit_value(c, base))
            .collect::<Option<Vec<u8>>>()
    };
    Some((values(int)?, values(frac)?))
}

/// Exact integer conversion, then one division by `base^frac.len()` at the
/// configured decimal places for the fraction.
fn radix_to_decimal(negative: bool, int: &[u8], frac: &[u8], base: u32, cfg: &Config) -> BigNumber {
    let wide = cfg.unbounded_above();
    let mut all = Vec::with_capacity(int.len() + frac.len());
    all.extend_from_slice(int);
    all.extend_from_slice(frac);
    let numerator = decimal_integer(negative, &convert_base(&all, base, 10), &wide);

    if frac.is_empty() {
        return numerator.clamp_range(cfg);
    }

    let mut unit = vec![0u8; frac.len() + 1];
    unit[0] = 1;
    let denominator = decimal_integer(false, &convert_base(&unit, base, 10), &wide);
    numerator.div(&denominator, cfg)
}

/// Build an integer from big-endian decimal digit values.
fn decimal_integer(negative: bool, digits: &[u8], cfg: &Config) -> BigNumber {
    let text = render_digits(digits);
    let significant = text.trim_start_matches('0');
    let exponent = significant.len() as i64 - 1;
    BigNumber::from_digits(negative, significant.trim_end_matches('0'), exponent, cfg)
}

// ============================================================================
// Lenient Forms
// ============================================================================

/// Second chance for literals the strict grammars reject: surrounding
/// whitespace, a leading `+`, `Infinity`/`NaN`, `0x`/`0b`/`0o` prefixes and,
/// with an explicit base, `"5."` and `".5"`.
fn parse_lenient(
    literal: &str,
    base: Option<u32>,
    operation: Operation,
    cfg: &Config,
) -> BigNumberResult<BigNumber> {
    let mut text = literal.trim();
    if let Some(rest) = text.strip_prefix('+') {
        if rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.') {
            text = rest;
        }
    }

    match text {
        "NaN" | "-NaN" => return Ok(BigNumber::nan()),
        "Infinity" => return Ok(BigNumber::infinity(false)),
        "-Infinity" => return Ok(BigNumber::infinity(true)),
        _ => {}
    }

    let mut candidate = text.to_string();
    let mut radix = base;
    if let Some((sign, prefix_base, rest)) = split_base_prefix(text) {
        if base.map_or(true, |b| b == prefix_base) {
            candidate = format!("{}{}", sign, rest);
            radix = Some(prefix_base);
        }
    }
    if base.is_some() {
        if let Some(int) = candidate.strip_suffix('.') {
            if !int.is_empty() && !int.contains('.') {
                candidate = int.to_string();
            }
        } else if let Some(frac) = candidate.strip_prefix('.') {
            if !frac.is_empty() && !frac.contains('.') {
                candidate = format!("0.{}", frac);
            }
        }
    }

    if candidate != literal {
        let input = NumberInput::Text {
            literal: &candidate,
            base: radix,
        };
        return parse_input(input, operation, cfg);
    }

    let reason = match base {
        Some(b) => format!("not a base {} number", b),
        None => "not a number".to_string(),
    };
    if cfg.errors {
        return Err(BigNumberError::parse(operation, reason, literal));
    }
    tracing::warn!(literal, %reason, "malformed literal read as NaN");
    Ok(BigNumber::nan())
}

/// Split `-?0[xbo]\w[\w.]*` into sign, prefix base and remainder.
fn split_base_prefix(text: &str) -> Option<(&str, u32, &str)> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let rest = body.strip_prefix('0')?;
    let mut chars = rest.chars();
    let base = match chars.next()?.to_ascii_lowercase() {
        'x' => 16,
        'b' => 2,
        'o' => 8,
        _ => return None,
    };
    let rest = chars.as_str();
    let word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    if !rest.starts_with(word) || !rest.chars().all(|c| word(c) || c == '.') {
        return None;
    }
    Some((sign, base, rest))
}
