// ============================================================================
// Multiplication
// Schoolbook limb product accumulated in u128
// ============================================================================

use crate::config::Config;
use crate::number::limbs::{limb_exponent, BASE};
use crate::number::{check_range, BigNumber, BigNumberResult, Operation, Repr};

/// Largest exact integer of an `f64`, the bound for shift and power arguments.
pub(crate) const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Product of two limb sequences, one limb longer than both combined.
pub(crate) fn mul_limbs(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate().rev() {
        if x == 0 {
            continue;
        }
        let mut carry: u128 = 0;
        for (j, &y) in b.iter().enumerate().rev() {
            let t = u128::from(acc[i + j + 1]) + u128::from(x) * u128::from(y) + carry;
            acc[i + j + 1] = (t % u128::from(BASE)) as u64;
            carry = t / u128::from(BASE);
        }
        acc[i] = carry as u64;
    }
    acc
}

impl BigNumber {
    /// Exact product.
    pub fn times(&self, other: &BigNumber, cfg: &Config) -> BigNumber {
        let negative = self.negative != other.negative;
        match (&self.repr, &other.repr) {
            (Repr::NaN, _) | (_, Repr::NaN) => BigNumber::nan(),
            (Repr::Infinite, _) | (_, Repr::Infinite) => {
                if self.is_zero() || other.is_zero() {
                    BigNumber::nan()
                } else {
                    BigNumber::infinity(negative)
                }
            }
            (
                Repr::Finite {
                    exponent: ex,
                    limbs: xs,
                },
                Repr::Finite {
                    exponent: ey,
                    limbs: ys,
                },
            ) => {
                if xs[0] == 0 || ys[0] == 0 {
                    return BigNumber::zero(negative);
                }
                let product = mul_limbs(xs, ys);
                let top = limb_exponent(*ex) + limb_exponent(*ey) + 1;
                BigNumber::from_limbs(negative, &product, top).clamp_range(cfg)
            }
        }
    }

    /// Multiply by 10^n, |n| at most 2^53 - 1.
    pub fn shift(&self, n: i64, cfg: &Config) -> BigNumberResult<BigNumber> {
        check_range(n, -MAX_SAFE_INTEGER, MAX_SAFE_INTEGER, Operation::Shift, "argument")?;
        match (self.exponent(), self.coefficient()) {
            (Some(exponent), Some(digits)) if !self.is_zero() => Ok(BigNumber::from_digits(
                self.negative,
                &digits,
                exponent.saturating_add(n),
                cfg,
            )),
            _ => Ok(self.clone()),
        }
    }
}
