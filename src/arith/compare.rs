// ============================================================================
// Comparison
// Ordering with NaN unordered and both zeros equal
// ============================================================================

use crate::number::{BigNumber, Repr};
use std::cmp::Ordering;

/// Order two values; `None` when either is NaN.
pub(crate) fn compare(a: &BigNumber, b: &BigNumber) -> Option<Ordering> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    match (a.is_zero(), b.is_zero()) {
        (true, true) => return Some(Ordering::Equal),
        (true, false) => return Some(if b.negative { Ordering::Greater } else { Ordering::Less }),
        (false, true) => return Some(if a.negative { Ordering::Less } else { Ordering::Greater }),
        (false, false) => {}
    }
    if a.negative != b.negative {
        return Some(if a.negative { Ordering::Less } else { Ordering::Greater });
    }

    let magnitude = match (&a.repr, &b.repr) {
        (Repr::Infinite, Repr::Infinite) => Ordering::Equal,
        (Repr::Infinite, _) => Ordering::Greater,
        (_, Repr::Infinite) => Ordering::Less,
        (
            Repr::Finite {
                exponent: ea,
                limbs: la,
            },
            Repr::Finite {
                exponent: eb,
                limbs: lb,
            },
        ) => ea.cmp(eb).then_with(|| la.as_slice().cmp(lb.as_slice())),
        _ => return None,
    };
    Some(if a.negative {
        magnitude.reverse()
    } else {
        magnitude
    })
}

#[allow(clippy::should_implement_trait)]
impl BigNumber {
    /// Compare with `other`; `None` when either value is NaN.
    pub fn cmp(&self, other: &BigNumber) -> Option<Ordering> {
        compare(self, other)
    }

    /// Whether the values are numerically equal (false for NaN).
    pub fn eq(&self, other: &BigNumber) -> bool {
        compare(self, other) == Some(Ordering::Equal)
    }

    /// Whether `self > other`.
    pub fn gt(&self, other: &BigNumber) -> bool {
        compare(self, other) == Some(Ordering::Greater)
    }

    /// Whether `self >= other`.
    pub fn gte(&self, other: &BigNumber) -> bool {
        matches!(
            compare(self, other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Whether `self < other`.
    pub fn lt(&self, other: &BigNumber) -> bool {
        compare(self, other) == Some(Ordering::Less)
    }

    /// Whether `self <= other`.
    pub fn lte(&self, other: &BigNumber) -> bool {
        matches!(compare(self, other), Some(Ordering::Less | Ordering::Equal))
    }

    /// Largest of `values`; NaN if any is NaN or the slice is empty.
    pub fn max(values: &[BigNumber]) -> BigNumber {
        Self::extreme(values, Ordering::Greater)
    }

    /// Smallest of `values`; NaN if any is NaN or the slice is empty.
    pub fn min(values: &[BigNumber]) -> BigNumber {
        Self::extreme(values, Ordering::Less)
    }

    fn extreme(values: &[BigNumber], wanted: Ordering) -> BigNumber {
        let Some((first, rest)) = values.split_first() else {
            return BigNumber::nan();
        };
        let mut best = first;
        for value in rest {
            match compare(value, best) {
                None => return BigNumber::nan(),
                Some(ordering) if ordering == wanted => best = value,
                Some(_) => {}
            }
        }
        best.clone()
    }
}
