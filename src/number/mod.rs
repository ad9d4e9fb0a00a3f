// ============================================================================
// Number Module
// Value model, construction and radix conversion
// ============================================================================
//
// This module provides:
// - BigNumber: immutable arbitrary-precision decimal value
// - NumberInput: tagged constructor input (text, f64 or existing value)
// - BigNumberError: validation and parse errors tagged with the operation
//
// Design principles:
// - Significand held in base 10^14 limbs, products accumulated in u128
// - Misuse is reported through Result, undefined results are NaN/Infinity
// - Values carry no configuration; every operation takes a &Config

mod big_number;
mod conversions;
mod errors;
pub(crate) mod limbs;
mod parse;
pub(crate) mod radix;

pub use big_number::BigNumber;
pub(crate) use big_number::Repr;
pub use errors::{BigNumberError, BigNumberResult, Operation};
pub(crate) use errors::{check_range, MAX_ARG};
pub use parse::NumberInput;
