// ============================================================================
// Arithmetic Configuration
// Settings read by every operation, passed explicitly as a snapshot
// ============================================================================

mod modes;
mod shared;

pub use modes::{ModuloMode, RoundingMode};
pub use shared::SharedConfig;

use crate::number::{check_range, BigNumberError, BigNumberResult, Operation, MAX_ARG};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Format Settings
// ============================================================================

/// Separators and group sizes used by `to_format`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    /// Separator between integer and fraction part
    pub decimal_separator: String,
    /// Separator between integer-part groups
    pub group_separator: String,
    /// Size of the integer-part group nearest the decimal point (0 disables grouping)
    pub group_size: usize,
    /// Size of every other integer-part group (0 means same as `group_size`)
    pub secondary_group_size: usize,
    /// Separator between fraction-part groups
    pub fraction_group_separator: String,
    /// Size of fraction-part groups (0 disables grouping)
    pub fraction_group_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_size: 3,
            secondary_group_size: 0,
            fraction_group_separator: " ".to_string(),
            fraction_group_size: 0,
        }
    }
}

// ============================================================================
// Complete Configuration
// ============================================================================

/// Arithmetic settings.
///
/// A `Config` is a plain value: clone it to obtain an independent
/// configuration, mutate it through the validating setters, and pass it by
/// reference to every operation. Values never capture a configuration, so
/// changing one never alters numbers that already exist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub(crate) decimal_places: u32,
    pub(crate) rounding_mode: RoundingMode,
    pub(crate) exponential_at: (i64, i64),
    pub(crate) range: (i64, i64),
    pub(crate) errors: bool,
    pub(crate) crypto: bool,
    pub(crate) modulo_mode: ModuloMode,
    pub(crate) pow_precision: u32,
    pub(crate) format: FormatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_places: 20,
            rounding_mode: RoundingMode::HalfUp,
            exponential_at: (-7, 21),
            range: (-10_000_000, 10_000_000),
            errors: true,
            crypto: false,
            modulo_mode: ModuloMode::Down,
            pow_precision: 100,
            format: FormatConfig::default(),
        }
    }
}

impl Config {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Maximum decimal places of division, square root and base conversion results.
    #[inline]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Default rounding mode.
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Exponents at or beyond which `to_string` uses exponential notation.
    #[inline]
    pub fn exponential_at(&self) -> (i64, i64) {
        self.exponential_at
    }

    /// Exponents beyond which values collapse to zero or Infinity.
    #[inline]
    pub fn range(&self) -> (i64, i64) {
        self.range
    }

    /// Whether malformed literals raise errors instead of producing NaN.
    #[inline]
    pub fn errors(&self) -> bool {
        self.errors
    }

    /// Whether `random` draws from the secure source.
    #[inline]
    pub fn crypto(&self) -> bool {
        self.crypto
    }

    /// Modulo convention.
    #[inline]
    pub fn modulo_mode(&self) -> ModuloMode {
        self.modulo_mode
    }

    /// Significant digits kept by integer exponentiation (0 = unlimited).
    #[inline]
    pub fn pow_precision(&self) -> u32 {
        self.pow_precision
    }

    /// Separators used by `to_format`.
    #[inline]
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    // ========================================================================
    // Validating Setters
    // ========================================================================

    /// Set the decimal places, 0 to 1e9 inclusive.
    pub fn set_decimal_places(&mut self, dp: u32) -> BigNumberResult<&mut Self> {
        self.decimal_places = check_range(dp as i64, 0, MAX_ARG, Operation::Config, "DECIMAL_PLACES")? as u32;
        Ok(self)
    }

    /// Set the default rounding mode.
    pub fn set_rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.rounding_mode = rm;
        self
    }

    /// Set both exponential notation thresholds: `neg` in [-1e9, 0], `pos` in [0, 1e9].
    pub fn set_exponential_at(&mut self, neg: i64, pos: i64) -> BigNumberResult<&mut Self> {
        check_range(neg, -MAX_ARG, 0, Operation::Config, "EXPONENTIAL_AT")?;
        check_range(pos, 0, MAX_ARG, Operation::Config, "EXPONENTIAL_AT")?;
        self.exponential_at = (neg, pos);
        Ok(self)
    }

    /// Set symmetric thresholds `[-|n|, |n|]`.
    pub fn set_exponential_at_symmetric(&mut self, n: i64) -> BigNumberResult<&mut Self> {
        check_range(n, -MAX_ARG, MAX_ARG, Operation::Config, "EXPONENTIAL_AT")?;
        self.exponential_at = (-n.abs(), n.abs());
        Ok(self)
    }

    /// Set the exponent range: `min` in [-1e9, -1], `max` in [1, 1e9].
    pub fn set_range(&mut self, min: i64, max: i64) -> BigNumberResult<&mut Self> {
        check_range(min, -MAX_ARG, -1, Operation::Config, "RANGE")?;
        check_range(max, 1, MAX_ARG, Operation::Config, "RANGE")?;
        self.range = (min, max);
        Ok(self)
    }

    /// Set a symmetric range `[-|n|, |n|]`; `n` must not be zero.
    pub fn set_range_symmetric(&mut self, n: i64) -> BigNumberResult<&mut Self> {
        check_range(n, -MAX_ARG, MAX_ARG, Operation::Config, "RANGE")?;
        if n == 0 {
            return Err(BigNumberError::validation(Operation::Config, "RANGE cannot be zero", n));
        }
        self.range = (-n.abs(), n.abs());
        Ok(self)
    }

    /// Enable or disable parse errors.
    pub fn set_errors(&mut self, errors: bool) -> &mut Self {
        self.errors = errors;
        self
    }

    /// Enable or disable the secure random source.
    pub fn set_crypto(&mut self, crypto: bool) -> &mut Self {
        self.crypto = crypto;
        self
    }

    /// Set the modulo convention.
    pub fn set_modulo_mode(&mut self, mode: ModuloMode) -> &mut Self {
        self.modulo_mode = mode;
        self
    }

    /// Set the exponentiation precision, 0 to 1e9 inclusive.
    pub fn set_pow_precision(&mut self, sd: u32) -> BigNumberResult<&mut Self> {
        self.pow_precision = check_range(sd as i64, 0, MAX_ARG, Operation::Config, "POW_PRECISION")? as u32;
        Ok(self)
    }

    /// Replace the format settings.
    pub fn set_format(&mut self, format: FormatConfig) -> &mut Self {
        self.format = format;
        self
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Builder method: set decimal places
    pub fn with_decimal_places(mut self, dp: u32) -> BigNumberResult<Self> {
        self.set_decimal_places(dp)?;
        Ok(self)
    }

    /// Builder method: set rounding mode
    pub fn with_rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rounding_mode = rm;
        self
    }

    /// Builder method: set exponential notation thresholds
    pub fn with_exponential_at(mut self, neg: i64, pos: i64) -> BigNumberResult<Self> {
        self.set_exponential_at(neg, pos)?;
        Ok(self)
    }

    /// Builder method: set exponent range
    pub fn with_range(mut self, min: i64, max: i64) -> BigNumberResult<Self> {
        self.set_range(min, max)?;
        Ok(self)
    }

    /// Builder method: enable or disable parse errors
    pub fn with_errors(mut self, errors: bool) -> Self {
        self.errors = errors;
        self
    }

    /// Builder method: enable or disable the secure random source
    pub fn with_crypto(mut self, crypto: bool) -> Self {
        self.crypto = crypto;
        self
    }

    /// Builder method: set modulo convention
    pub fn with_modulo_mode(mut self, mode: ModuloMode) -> Self {
        self.modulo_mode = mode;
        self
    }

    /// Builder method: set exponentiation precision
    pub fn with_pow_precision(mut self, sd: u32) -> BigNumberResult<Self> {
        self.set_pow_precision(sd)?;
        Ok(self)
    }

    /// Builder method: set format settings
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    /// Validate every setting.
    ///
    /// Needed for configurations that did not go through the setters, such
    /// as deserialized ones.
    pub fn validate(&self) -> BigNumberResult<()> {
        check_range(self.decimal_places as i64, 0, MAX_ARG, Operation::Config, "DECIMAL_PLACES")?;
        check_range(self.exponential_at.0, -MAX_ARG, 0, Operation::Config, "EXPONENTIAL_AT")?;
        check_range(self.exponential_at.1, 0, MAX_ARG, Operation::Config, "EXPONENTIAL_AT")?;
        check_range(self.range.0, -MAX_ARG, -1, Operation::Config, "RANGE")?;
        check_range(self.range.1, 1, MAX_ARG, Operation::Config, "RANGE")?;
        check_range(self.pow_precision as i64, 0, MAX_ARG, Operation::Config, "POW_PRECISION")?;
        Ok(())
    }

    /// Load a configuration from JSON; absent keys keep their defaults.
    ///
    /// ```ignore
    /// let cfg = Config::from_json(r#"{ "decimal_places": 5, "rounding_mode": "HalfEven" }"#)?;
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> BigNumberResult<Self> {
        let cfg: Config = serde_json::from_str(json)
            .map_err(|e| BigNumberError::validation(Operation::Config, "invalid configuration", e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Copy with the upper exponent bound lifted, for intermediate results
    /// that must not collapse to Infinity.
    pub(crate) fn unbounded_above(&self) -> Config {
        let mut cfg = self.clone();
        cfg.range.1 = i64::MAX;
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.decimal_places(), 20);
        assert_eq!(cfg.rounding_mode(), RoundingMode::HalfUp);
        assert_eq!(cfg.exponential_at(), (-7, 21));
        assert_eq!(cfg.range(), (-10_000_000, 10_000_000));
        assert!(cfg.errors());
        assert!(!cfg.crypto());
        assert_eq!(cfg.modulo_mode(), ModuloMode::Down);
        assert_eq!(cfg.pow_precision(), 100);
        assert_eq!(cfg.format().group_size, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let cfg = Config::new()
            .with_decimal_places(5)
            .unwrap()
            .with_rounding_mode(RoundingMode::HalfEven)
            .with_modulo_mode(ModuloMode::Euclid)
            .with_range(-100, 100)
            .unwrap();

        assert_eq!(cfg.decimal_places(), 5);
        assert_eq!(cfg.rounding_mode(), RoundingMode::HalfEven);
        assert_eq!(cfg.modulo_mode(), ModuloMode::Euclid);
        assert_eq!(cfg.range(), (-100, 100));
    }

    #[test]
    fn test_validation() {
        let mut cfg = Config::new();
        assert!(cfg.set_decimal_places(1_000_000_001).is_err());
        assert!(cfg.set_exponential_at(1, 5).is_err());
        assert!(cfg.set_range(0, 5).is_err());
        assert!(cfg.set_pow_precision(2_000_000_000).is_err());

        let err = cfg.set_range_symmetric(0).unwrap_err();
        assert_eq!(err.to_string(), "config() RANGE cannot be zero: 0");

        // Failed setters leave the previous value in place
        assert_eq!(cfg.decimal_places(), 20);
        assert_eq!(cfg.range(), (-10_000_000, 10_000_000));
    }

    #[test]
    fn test_symmetric_setters() {
        let mut cfg = Config::new();
        cfg.set_exponential_at_symmetric(-9).unwrap();
        assert_eq!(cfg.exponential_at(), (-9, 9));
        cfg.set_range_symmetric(500).unwrap();
        assert_eq!(cfg.range(), (-500, 500));
    }

    #[test]
    fn test_clones_are_independent() {
        let base = Config::new();
        let mut other = base.clone();
        other.set_decimal_places(2).unwrap();
        assert_eq!(base.decimal_places(), 20);
        assert_eq!(other.decimal_places(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let cfg = Config::from_json(r#"{ "decimal_places": 5, "rounding_mode": "HalfEven" }"#).unwrap();
        assert_eq!(cfg.decimal_places(), 5);
        assert_eq!(cfg.rounding_mode(), RoundingMode::HalfEven);
        assert_eq!(cfg.pow_precision(), 100);

        assert!(Config::from_json(r#"{ "range": [0, 10] }"#).is_err());
    }
}
