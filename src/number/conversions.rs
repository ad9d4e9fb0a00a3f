// ============================================================================
// Trait Implementations
// Display, parsing, integer and Decimal interop, operators
// ============================================================================
//
// The std traits have no place for a configuration argument, so they all
// run under `Config::default()`. Callers that need other settings use the
// inherent methods.

use super::{BigNumber, BigNumberError};
use crate::arith::compare;
use crate::config::Config;
use crate::format::notation::positional;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_string(&Config::default()))
    }
}

impl std::str::FromStr for BigNumber {
    type Err = BigNumberError;

    /// Parse a decimal, `0x`/`0b`/`0o` prefixed, `NaN` or `Infinity` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigNumber::parse(s, &Config::default())
    }
}

// ============================================================================
// Integer Conversion
// ============================================================================

fn from_integer(negative: bool, magnitude: u128) -> BigNumber {
    if magnitude == 0 {
        return BigNumber::zero(false);
    }
    let text = magnitude.to_string();
    let digits = text.trim_end_matches('0');
    BigNumber::from_digits(negative, digits, text.len() as i64 - 1, &Config::default())
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigNumber {
                #[inline]
                #[allow(unused_comparisons)]
                fn from(value: $t) -> Self {
                    from_integer(value < 0, (value as i128).unsigned_abs())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<Decimal> for BigNumber {
    /// Exact conversion; the sign of a negative zero is kept.
    fn from(d: Decimal) -> Self {
        let magnitude = d.mantissa().unsigned_abs();
        if magnitude == 0 {
            return BigNumber::zero(d.is_sign_negative());
        }
        let text = magnitude.to_string();
        let digits = text.trim_end_matches('0');
        let exponent = text.len() as i64 - 1 - i64::from(d.scale());
        BigNumber::from_digits(d.is_sign_negative(), digits, exponent, &Config::default())
    }
}

impl BigNumber {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Returns `None` for NaN, ±Infinity, and values that need more than
    /// 28 fraction digits or exceed the Decimal range.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let (limbs, exponent) = self.finite_parts()?;
        if !(-29..=28).contains(&exponent) {
            return None;
        }
        let text = positional(&super::limbs::coefficient_string(limbs), exponent);
        let mut d = Decimal::from_str_exact(&text).ok()?;
        d.set_sign_negative(self.negative);
        Some(d)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for BigNumber {
    /// Numeric equality: NaN is unequal to everything, `0 == -0`.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for BigNumber {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for BigNumber {
    type Output = BigNumber;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<&BigNumber> for &BigNumber {
            type Output = BigNumber;

            #[inline]
            fn $method(self, rhs: &BigNumber) -> BigNumber {
                self.$op(rhs, &Config::default())
            }
        }

        impl $trait<BigNumber> for BigNumber {
            type Output = BigNumber;

            #[inline]
            fn $method(self, rhs: BigNumber) -> BigNumber {
                (&self).$op(&rhs, &Config::default())
            }
        }

        impl $trait<&BigNumber> for BigNumber {
            type Output = BigNumber;

            #[inline]
            fn $method(self, rhs: &BigNumber) -> BigNumber {
                (&self).$op(rhs, &Config::default())
            }
        }

        impl $trait<BigNumber> for &BigNumber {
            type Output = BigNumber;

            #[inline]
            fn $method(self, rhs: BigNumber) -> BigNumber {
                self.$op(&rhs, &Config::default())
            }
        }
    };
}

impl_binary_op!(Add, add, plus);
impl_binary_op!(Sub, sub, minus);
impl_binary_op!(Mul, mul, times);
impl_binary_op!(Div, div, div);
impl_binary_op!(Rem, rem, modulo);

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value_of(&Config::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        BigNumber::parse(text.as_str(), &Config::default()).map_err(serde::de::Error::custom)
    }
}
