// ============================================================================
// Rounding and Modulo Modes
// ============================================================================

use crate::number::{BigNumberError, BigNumberResult, Operation};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy for resolving a value truncated at a digit boundary.
///
/// The discriminants match the classic numeric identifiers 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up = 0,
    /// Towards zero
    Down = 1,
    /// Towards +Infinity
    Ceil = 2,
    /// Towards -Infinity
    Floor = 3,
    /// Nearest neighbour, ties away from zero
    #[default]
    HalfUp = 4,
    /// Nearest neighbour, ties towards zero
    HalfDown = 5,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven = 6,
    /// Nearest neighbour, ties towards +Infinity
    HalfCeil = 7,
    /// Nearest neighbour, ties towards -Infinity
    HalfFloor = 8,
}

impl RoundingMode {
    /// All modes in identifier order.
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceil,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfCeil,
        RoundingMode::HalfFloor,
    ];

    /// Numeric identifier (0-8).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Decide whether the retained digits must be incremented.
    ///
    /// * `digit` - the first discarded digit, in `[0, radix)`
    /// * `sticky` - whether any non-zero digit follows the discarded one
    /// * `prev_odd` - whether the last retained digit is odd
    /// * `negative` - sign of the value being rounded
    ///
    /// This is the only place where rounding decisions are made.
    pub fn rounds_up(self, digit: u32, radix: u32, sticky: bool, prev_odd: bool, negative: bool) -> bool {
        let twice = digit * 2;
        match self {
            RoundingMode::Up => digit != 0 || sticky,
            RoundingMode::Down => false,
            RoundingMode::Ceil => !negative && (digit != 0 || sticky),
            RoundingMode::Floor => negative && (digit != 0 || sticky),
            _ if twice > radix => true,
            _ if twice < radix => false,
            // Exactly half-way unless something non-zero follows.
            _ if sticky => true,
            RoundingMode::HalfUp => true,
            RoundingMode::HalfDown => false,
            RoundingMode::HalfEven => prev_odd,
            RoundingMode::HalfCeil => !negative,
            RoundingMode::HalfFloor => negative,
        }
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = BigNumberError;

    fn try_from(value: u8) -> BigNumberResult<Self> {
        RoundingMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| {
                BigNumberError::validation(Operation::Config, "rounding mode out of range", value)
            })
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "ROUND_UP",
            RoundingMode::Down => "ROUND_DOWN",
            RoundingMode::Ceil => "ROUND_CEIL",
            RoundingMode::Floor => "ROUND_FLOOR",
            RoundingMode::HalfUp => "ROUND_HALF_UP",
            RoundingMode::HalfDown => "ROUND_HALF_DOWN",
            RoundingMode::HalfEven => "ROUND_HALF_EVEN",
            RoundingMode::HalfCeil => "ROUND_HALF_CEIL",
            RoundingMode::HalfFloor => "ROUND_HALF_FLOOR",
        };
        f.write_str(name)
    }
}

/// Convention for the sign and magnitude of a modulo result.
///
/// Modes 0-8 compute `a - n * q` where `q` is `a / n` rounded to an integer
/// with the rounding mode of the same identifier. `Euclid` always yields a
/// non-negative remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModuloMode {
    Up = 0,
    /// Truncated division; the remainder takes the dividend's sign
    #[default]
    Down = 1,
    Ceil = 2,
    /// Floored division; the remainder takes the divisor's sign
    Floor = 3,
    HalfUp = 4,
    HalfDown = 5,
    /// IEEE 754 remainder
    HalfEven = 6,
    HalfCeil = 7,
    HalfFloor = 8,
    /// Euclidean division; the remainder is never negative
    Euclid = 9,
}

impl ModuloMode {
    /// Numeric identifier (0-9).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// The rounding mode used for the integer quotient, `None` for `Euclid`.
    pub fn rounding_mode(self) -> Option<RoundingMode> {
        RoundingMode::ALL.get(self as usize).copied()
    }
}

impl TryFrom<u8> for ModuloMode {
    type Error = BigNumberError;

    fn try_from(value: u8) -> BigNumberResult<Self> {
        match value {
            9 => Ok(ModuloMode::Euclid),
            _ => {
                let rm = RoundingMode::try_from(value).map_err(|_| {
                    BigNumberError::validation(Operation::Config, "modulo mode out of range", value)
                })?;
                Ok(ModuloMode::from(rm))
            }
        }
    }
}

impl From<RoundingMode> for ModuloMode {
    fn from(rm: RoundingMode) -> Self {
        match rm {
            RoundingMode::Up => ModuloMode::Up,
            RoundingMode::Down => ModuloMode::Down,
            RoundingMode::Ceil => ModuloMode::Ceil,
            RoundingMode::Floor => ModuloMode::Floor,
            RoundingMode::HalfUp => ModuloMode::HalfUp,
            RoundingMode::HalfDown => ModuloMode::HalfDown,
            RoundingMode::HalfEven => ModuloMode::HalfEven,
            RoundingMode::HalfCeil => ModuloMode::HalfCeil,
            RoundingMode::HalfFloor => ModuloMode::HalfFloor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        for (i, rm) in RoundingMode::ALL.iter().enumerate() {
            assert_eq!(rm.id() as usize, i);
            assert_eq!(RoundingMode::try_from(i as u8).unwrap(), *rm);
        }
        assert!(RoundingMode::try_from(9).is_err());
        assert_eq!(ModuloMode::try_from(9).unwrap(), ModuloMode::Euclid);
        assert_eq!(ModuloMode::try_from(3).unwrap(), ModuloMode::Floor);
        assert!(ModuloMode::try_from(10).is_err());
    }

    #[test]
    fn test_directed_modes() {
        assert!(RoundingMode::Up.rounds_up(0, 10, true, false, false));
        assert!(!RoundingMode::Up.rounds_up(0, 10, false, false, false));
        assert!(!RoundingMode::Down.rounds_up(9, 10, true, false, false));
        assert!(RoundingMode::Ceil.rounds_up(1, 10, false, false, false));
        assert!(!RoundingMode::Ceil.rounds_up(1, 10, false, false, true));
        assert!(RoundingMode::Floor.rounds_up(1, 10, false, false, true));
    }

    #[test]
    fn test_half_modes() {
        // 2.5 -> ties
        assert!(RoundingMode::HalfUp.rounds_up(5, 10, false, false, false));
        assert!(!RoundingMode::HalfDown.rounds_up(5, 10, false, false, false));
        assert!(!RoundingMode::HalfEven.rounds_up(5, 10, false, false, false));
        assert!(RoundingMode::HalfEven.rounds_up(5, 10, false, true, false));
        assert!(RoundingMode::HalfCeil.rounds_up(5, 10, false, false, false));
        assert!(!RoundingMode::HalfCeil.rounds_up(5, 10, false, false, true));
        assert!(RoundingMode::HalfFloor.rounds_up(5, 10, false, false, true));

        // 2.51 -> above half for every half mode
        assert!(RoundingMode::HalfDown.rounds_up(5, 10, true, false, false));
        assert!(RoundingMode::HalfEven.rounds_up(5, 10, true, false, false));

        // Odd radix: 1 of 3 is below half, 2 of 3 above
        assert!(!RoundingMode::HalfUp.rounds_up(1, 3, false, false, false));
        assert!(RoundingMode::HalfUp.rounds_up(2, 3, false, false, false));
    }

    #[test]
    fn test_modulo_rounding_mode() {
        assert_eq!(ModuloMode::Down.rounding_mode(), Some(RoundingMode::Down));
        assert_eq!(ModuloMode::Euclid.rounding_mode(), None);
        assert_eq!(ModuloMode::default(), ModuloMode::Down);
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }
}
