// ============================================================================
// BigNumber Library
// Arbitrary-precision decimal arithmetic with configurable rounding
// ============================================================================

//! # BigNumber
//!
//! Arbitrary-precision signed decimal numbers with exact addition,
//! subtraction and multiplication, and division, square root and
//! exponentiation rounded under an explicit configuration.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic**: `0.1 + 0.2` is `0.3`
//! - **Nine rounding modes** applied through a single rounding engine
//! - **Explicit configuration**: every operation takes a `&Config`; values
//!   never capture settings
//! - **Base 2 to 64** input and output
//! - **Formatting**: fixed, exponential, significant-digit and grouped
//! - **Square root, powers, continued-fraction approximation, random values**
//!
//! ## Example
//!
//! ```rust
//! use bignumber::prelude::*;
//!
//! let cfg = Config::new()
//!     .with_decimal_places(10)
//!     .unwrap()
//!     .with_rounding_mode(RoundingMode::HalfEven);
//!
//! let a = BigNumber::parse("0.1", &cfg).unwrap();
//! let b = BigNumber::parse("0.2", &cfg).unwrap();
//! assert_eq!(a.plus(&b, &cfg).to_string(), "0.3");
//!
//! let third = BigNumber::from(1).div(&BigNumber::from(3), &cfg);
//! assert_eq!(third.to_string(), "0.3333333333");
//!
//! let price = BigNumber::parse("1234567.891", &cfg).unwrap();
//! assert_eq!(price.to_format(Some(2), None, &cfg).unwrap(), "1,234,567.89");
//! ```

pub mod config;
pub mod ext;
pub mod interfaces;
pub mod number;

mod arith;
mod format;
mod proptests;
mod rounding;

pub use config::{Config, FormatConfig, ModuloMode, RoundingMode, SharedConfig};
pub use ext::Fraction;
pub use interfaces::{NoSecureRandom, OsRandom, RandomUnavailable, SecureRandom};
pub use number::{BigNumber, BigNumberError, BigNumberResult, NumberInput, Operation};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{Config, FormatConfig, ModuloMode, RoundingMode, SharedConfig};
    pub use crate::ext::Fraction;
    pub use crate::interfaces::{OsRandom, SecureRandom};
    pub use crate::number::{BigNumber, BigNumberError, BigNumberResult, NumberInput};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::thread;

    fn num(s: &str) -> BigNumber {
        BigNumber::parse(s, &Config::default()).unwrap()
    }

    #[test]
    fn test_normalized_round_trip() {
        assert_eq!(num("007.1500").to_string(), "7.15");
        assert_eq!(num("-0.000").to_string(), "0");
        assert_eq!(num(".5e1").to_string(), "5");
    }

    #[test]
    fn test_division_by_zero() {
        let cfg = Config::default();
        let zero = BigNumber::from(0);
        assert_eq!(BigNumber::from(1).div(&zero, &cfg).to_string(), "Infinity");
        assert_eq!(BigNumber::from(-1).div(&zero, &cfg).to_string(), "-Infinity");
        assert!(zero.div(&zero, &cfg).is_nan());
    }

    #[test]
    fn test_headline_values() {
        let cfg = Config::default();
        assert_eq!(BigNumber::from(4).square_root(&cfg).to_string(), "2");
        assert!(BigNumber::from(-1).square_root(&cfg).is_nan());
        assert_eq!(num("1.005").to_fixed(Some(2), None, &cfg).unwrap(), "1.01");

        let f = num("0.1").to_fraction(None, &cfg).unwrap();
        assert_eq!(f.to_strings(&cfg), ("1".to_string(), "10".to_string()));

        let r = BigNumber::random(Some(5), &cfg).unwrap();
        assert!(r.gte(&BigNumber::from(0)) && r.lt(&BigNumber::from(1)));
        assert!(r.precision(false).unwrap() <= 5);
    }

    #[test]
    fn test_config_changes_do_not_touch_values() {
        let mut cfg = Config::default();
        let third = BigNumber::from(1).div(&BigNumber::from(3), &cfg);
        cfg.set_decimal_places(2).unwrap();
        assert_eq!(third.to_string(), "0.33333333333333333333");
        assert_eq!(
            BigNumber::from(1).div(&BigNumber::from(3), &cfg).to_string(),
            "0.33"
        );
    }

    #[test]
    fn test_independent_configurations() {
        let a = Config::default().with_decimal_places(3).unwrap();
        let b = Config::default()
            .with_decimal_places(3)
            .unwrap()
            .with_rounding_mode(RoundingMode::Down);
        let two_thirds = BigNumber::from(2);
        let three = BigNumber::from(3);
        assert_eq!(two_thirds.div(&three, &a).to_string(), "0.667");
        assert_eq!(two_thirds.div(&three, &b).to_string(), "0.666");
    }

    #[test]
    fn test_shared_config_across_threads() {
        let shared = SharedConfig::new(Config::default()).unwrap();
        shared
            .update(|cfg| cfg.set_decimal_places(4).map(|_| ()))
            .unwrap();

        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let cfg = shared.snapshot();
                    BigNumber::from(i).div(&BigNumber::from(7), &cfg).to_string()
                })
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["0.1429", "0.2857", "0.4286", "0.5714"]);
    }

    #[test]
    fn test_mixed_pipeline() {
        let cfg = Config::default()
            .with_decimal_places(8)
            .unwrap()
            .with_modulo_mode(ModuloMode::Euclid);

        let principal = num("1000");
        let rate = num("1.05");
        let grown = principal.times(&rate.to_power(10.0, &cfg), &cfg);
        assert_eq!(grown.to_fixed(Some(2), None, &cfg).unwrap(), "1628.89");

        assert_eq!(num("-7").modulo(&num("3"), &cfg).to_string(), "2");
        assert_eq!(grown.to_string_base(16, &cfg).unwrap().split('.').next(), Some("65c"));
    }
}
