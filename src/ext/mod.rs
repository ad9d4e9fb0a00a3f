// ============================================================================
// Extensions Module
// Square root, exponentiation, rational approximation and random values
// ============================================================================
//
// These build on the exact arithmetic and the rounding engine. Square root
// and integral powers are arbitrary-precision; non-integral powers go
// through f64 and carry only f64 accuracy.

mod fraction;
mod pow;
mod random;
mod sqrt;

pub use fraction::Fraction;
