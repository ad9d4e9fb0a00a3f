// ============================================================================
// Number Errors
// Misuse errors raised by construction, configuration and formatting
// ============================================================================

use std::fmt;
use thiserror::Error;

/// The public operation that raised an error.
///
/// Rendered with the operation's canonical name so that messages read like
/// `"toFixed() decimal places out of range: 1000000001"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    Construct,
    Config,
    Random,
    Round,
    Shift,
    ToDigits,
    ToExponential,
    ToFixed,
    ToFormat,
    ToFraction,
    ToPrecision,
    ToString,
}

impl Operation {
    /// Canonical name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Construct => "new BigNumber",
            Operation::Config => "config",
            Operation::Random => "random",
            Operation::Round => "round",
            Operation::Shift => "shift",
            Operation::ToDigits => "toDigits",
            Operation::ToExponential => "toExponential",
            Operation::ToFixed => "toFixed",
            Operation::ToFormat => "toFormat",
            Operation::ToFraction => "toFraction",
            Operation::ToPrecision => "toPrecision",
            Operation::ToString => "toString",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors signalling misuse of the API.
///
/// Mathematically undefined results (0/0, sqrt(-1), ...) are never errors;
/// they are returned in-band as NaN or Infinity values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigNumberError {
    /// An argument is outside its documented range. Raised regardless of
    /// the `errors` configuration flag.
    #[error("{operation}() {reason}: {value}")]
    Validation {
        operation: Operation,
        reason: String,
        value: String,
    },

    /// A numeric literal could not be parsed. Only raised when the `errors`
    /// configuration flag is set; otherwise the literal becomes NaN.
    #[error("{operation}() {reason}: {value}")]
    Parse {
        operation: Operation,
        reason: String,
        value: String,
    },
}

impl BigNumberError {
    pub(crate) fn validation(
        operation: Operation,
        reason: impl Into<String>,
        value: impl fmt::Display,
    ) -> Self {
        BigNumberError::Validation {
            operation,
            reason: reason.into(),
            value: value.to_string(),
        }
    }

    pub(crate) fn parse(operation: Operation, reason: impl Into<String>, value: &str) -> Self {
        BigNumberError::Parse {
            operation,
            reason: reason.into(),
            value: value.to_string(),
        }
    }

    /// The operation that raised the error.
    pub fn operation(&self) -> Operation {
        match self {
            BigNumberError::Validation { operation, .. }
            | BigNumberError::Parse { operation, .. } => *operation,
        }
    }
}

/// Result type alias for fallible number operations
pub type BigNumberResult<T> = Result<T, BigNumberError>;

/// Largest accepted value for decimal-place, precision and threshold arguments.
pub(crate) const MAX_ARG: i64 = 1_000_000_000;

/// Check that an integer argument lies in `[min, max]`.
pub(crate) fn check_range(
    value: i64,
    min: i64,
    max: i64,
    operation: Operation,
    name: &str,
) -> BigNumberResult<i64> {
    if value < min || value > max {
        Err(BigNumberError::validation(
            operation,
            format!("{} out of range", name),
            value,
        ))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigNumber, Config};

    #[test]
    fn test_error_display() {
        let err = BigNumberError::parse(Operation::Construct, "not a number", "abc");
        assert_eq!(err.to_string(), "new BigNumber() not a number: abc");

        let err = BigNumberError::validation(Operation::ToFixed, "decimal places out of range", -1);
        assert_eq!(err.to_string(), "toFixed() decimal places out of range: -1");
    }

    #[test]
    fn test_error_operation() {
        let cfg = Config::default();
        let one = BigNumber::from(1);

        let err = one.to_fixed(Some(2_000_000_000), None, &cfg).unwrap_err();
        assert_eq!(err.operation(), Operation::ToFixed);
        assert_eq!(err.operation().name(), "toFixed");

        let err = one.shift(i64::MAX, &cfg).unwrap_err();
        assert_eq!(err.operation(), Operation::Shift);
        assert_ne!(err.operation(), Operation::Round);
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(5, 0, 8, Operation::Round, "rounding mode"), Ok(5));
        let err = check_range(9, 0, 8, Operation::Round, "rounding mode").unwrap_err();
        assert_eq!(err.to_string(), "round() rounding mode out of range: 9");
    }
}
