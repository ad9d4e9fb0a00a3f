// ============================================================================
// Arithmetic Module
// Comparison, addition, multiplication, division and modulo
// ============================================================================
//
// Addition, subtraction and multiplication are exact; division and modulo
// compute a truncated quotient and hand it to the rounding engine together
// with a flag telling whether the remainder was non-zero.

mod add;
mod compare;
mod div;
mod mul;

pub(crate) use compare::compare;
pub(crate) use div::divide;
pub(crate) use mul::MAX_SAFE_INTEGER;
