// ============================================================================
// Rounding Engine
// The shared significant-digit truncation routine and the public rounding API
// ============================================================================
//
// Every operation that limits precision (division, square root,
// exponentiation, the formatters and the methods below) ends in
// `round_significant`. Up/down decisions are delegated to
// `RoundingMode::rounds_up`.

use crate::config::{Config, RoundingMode};
use crate::number::limbs::{digit_count, limb_exponent, BASE, LOG_BASE, POWS_TEN};
use crate::number::{check_range, BigNumber, BigNumberResult, Operation, Repr, MAX_ARG};

/// Round `x` to `sd` significant digits.
///
/// `truncated` reports that digits beyond the stored ones were already
/// dropped by the caller (a non-zero division remainder). When `sd < 1`
/// every digit is discarded and the result is either a single unit at
/// 10^(exponent - sd + 1) or a signed zero. Out-of-range results collapse
/// to signed zero or Infinity.
pub(crate) fn round_significant(
    x: BigNumber,
    sd: i64,
    mode: RoundingMode,
    truncated: bool,
    cfg: &Config,
) -> BigNumber {
    let negative = x.negative;
    let (exponent, mut limbs) = match x.repr {
        Repr::Finite { exponent, limbs } => (exponent, limbs),
        repr => return BigNumber { negative, repr },
    };
    if limbs[0] == 0 && !truncated {
        return BigNumber::zero(negative);
    }

    let offset = LOG_BASE - digit_count(limbs[0]);
    let top = limb_exponent(exponent);

    if sd < 1 {
        let first = (limbs[0] / POWS_TEN[LOG_BASE - 1 - offset]) % 10;
        let (digit, rest) = if sd == 0 {
            (first as u32, limbs[0] % POWS_TEN[LOG_BASE - 1 - offset])
        } else {
            (0, limbs[0])
        };
        let sticky = truncated || rest != 0 || limbs.len() > 1;
        return if mode.rounds_up(digit, 10, sticky, false, negative) {
            BigNumber::from_digits(negative, "1", exponent - sd + 1, cfg)
        } else {
            BigNumber::zero(negative)
        };
    }

    // Position of the first discarded digit, counted from the top of limb 0
    let pos = sd.saturating_add(offset as i64) as u64;
    let li = (pos / LOG_BASE as u64) as usize;
    let pi = (pos % LOG_BASE as u64) as usize;
    if li >= limbs.len() {
        if !truncated {
            return BigNumber {
                negative,
                repr: Repr::Finite { exponent, limbs },
            }
            .clamp_range(cfg);
        }
        limbs.resize(li + 1, 0);
    }

    let unit = POWS_TEN[LOG_BASE - 1 - pi];
    let digit = ((limbs[li] / unit) % 10) as u32;
    let sticky =
        truncated || limbs[li] % unit != 0 || limbs[li + 1..].iter().any(|&limb| limb != 0);
    let prev = pos as usize - 1;
    let prev_odd = (limbs[prev / LOG_BASE] / POWS_TEN[LOG_BASE - 1 - prev % LOG_BASE]) % 2 == 1;
    let round_up = mode.rounds_up(digit, 10, sticky, prev_odd, negative);

    // Drop the discarded digits
    let (mut i, mut add) = if pi == 0 {
        limbs.truncate(li);
        (li - 1, 1)
    } else {
        limbs.truncate(li + 1);
        let keep = POWS_TEN[LOG_BASE - pi];
        limbs[li] -= limbs[li] % keep;
        (li, keep)
    };

    let mut top = top;
    if round_up {
        loop {
            limbs[i] += add;
            if limbs[i] < BASE {
                break;
            }
            limbs[i] -= BASE;
            if i == 0 {
                limbs.insert(0, 1);
                top += 1;
                break;
            }
            i -= 1;
            add = 1;
        }
    }

    BigNumber::from_limbs(negative, &limbs, top).clamp_range(cfg)
}

/// Round a finite value to `dp` decimal places.
pub(crate) fn round_decimal_places(
    x: BigNumber,
    dp: i64,
    mode: RoundingMode,
    cfg: &Config,
) -> BigNumber {
    match x.exponent() {
        Some(e) => round_significant(x, dp + e + 1, mode, false, cfg),
        None => x,
    }
}

fn check_decimal_places(dp: u32, operation: Operation) -> BigNumberResult<i64> {
    check_range(i64::from(dp), 0, MAX_ARG, operation, "decimal places")
}

pub(crate) fn check_precision(sd: u32, operation: Operation) -> BigNumberResult<i64> {
    check_range(i64::from(sd), 1, MAX_ARG, operation, "precision")
}

// ============================================================================
// Public Rounding Operations
// ============================================================================

impl BigNumber {
    /// Round to `dp` decimal places (default 0) using `mode` (default the
    /// configured rounding mode).
    ///
    /// # Example
    /// ```
    /// use bignumber::{BigNumber, Config, RoundingMode};
    ///
    /// let cfg = Config::default();
    /// let x = BigNumber::parse("-2.5", &cfg).unwrap();
    /// assert_eq!(x.round(None, None, &cfg).unwrap().to_string(), "-3");
    /// assert_eq!(x.round(None, Some(RoundingMode::HalfEven), &cfg).unwrap().to_string(), "-2");
    /// ```
    pub fn round(
        &self,
        dp: Option<u32>,
        mode: Option<RoundingMode>,
        cfg: &Config,
    ) -> BigNumberResult<Self> {
        let dp = check_decimal_places(dp.unwrap_or(0), Operation::Round)?;
        let mode = mode.unwrap_or(cfg.rounding_mode);
        Ok(round_decimal_places(self.clone(), dp, mode, cfg))
    }

    /// Round to an integer towards +Infinity.
    pub fn ceil(&self, cfg: &Config) -> Self {
        round_decimal_places(self.clone(), 0, RoundingMode::Ceil, cfg)
    }

    /// Round to an integer towards -Infinity.
    pub fn floor(&self, cfg: &Config) -> Self {
        round_decimal_places(self.clone(), 0, RoundingMode::Floor, cfg)
    }

    /// Round to an integer towards zero.
    pub fn truncated(&self, cfg: &Config) -> Self {
        round_decimal_places(self.clone(), 0, RoundingMode::Down, cfg)
    }

    /// Round to `sd` significant digits (1 to 1e9) using `mode` (default the
    /// configured rounding mode). Without `sd` the value is returned as is.
    pub fn to_digits(
        &self,
        sd: Option<u32>,
        mode: Option<RoundingMode>,
        cfg: &Config,
    ) -> BigNumberResult<Self> {
        let mode = mode.unwrap_or(cfg.rounding_mode);
        match sd {
            Some(sd) => {
                let sd = check_precision(sd, Operation::ToDigits)?;
                Ok(round_significant(self.clone(), sd, mode, false, cfg))
            }
            None => Ok(self.clone()),
        }
    }
}
