// ============================================================================
// Limbs
// Fixed-width decimal chunks forming the significand
// ============================================================================
//
// A finite value stores its significant digits as big-endian limbs of
// LOG_BASE decimal digits each. Limbs are aligned to the decimal point: limb
// `k` weighs BASE^(floor(exponent / LOG_BASE) - k), so the first limb holds
// `exponent.rem_euclid(LOG_BASE) + 1` digits and the last limb may carry
// trailing zeros.

use smallvec::SmallVec;

/// Decimal digits per limb.
pub(crate) const LOG_BASE: usize = 14;

/// Limb radix, 10^LOG_BASE. Products of two limbs fit in a `u128`.
pub(crate) const BASE: u64 = 100_000_000_000_000;

/// Powers of ten below BASE.
pub(crate) const POWS_TEN: [u64; LOG_BASE] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
];

/// Limb storage; most values fit inline.
pub(crate) type Limbs = SmallVec<[u64; 4]>;

/// Number of decimal digits of a limb (1 for zero).
#[inline]
pub(crate) fn digit_count(mut limb: u64) -> usize {
    let mut n = 1;
    while limb >= 10 {
        limb /= 10;
        n += 1;
    }
    n
}

/// Limb exponent of the limb holding the digit of weight 10^exponent.
#[inline]
pub(crate) fn limb_exponent(exponent: i64) -> i64 {
    exponent.div_euclid(LOG_BASE as i64)
}

/// Significant digits without trailing zeros ("0" for zero).
pub(crate) fn coefficient_string(limbs: &[u64]) -> String {
    let mut s = String::with_capacity(limbs.len() * LOG_BASE);
    if let Some((first, rest)) = limbs.split_first() {
        s.push_str(&first.to_string());
        for limb in rest {
            s.push_str(&format!("{:0>width$}", limb, width = LOG_BASE));
        }
    }
    let trimmed = s.trim_end_matches('0').len();
    s.truncate(trimmed.max(1));
    s
}

/// Chunk a digit string (no leading zero) whose first digit weighs
/// 10^exponent into aligned limbs.
pub(crate) fn limbs_from_digits(digits: &str, exponent: i64) -> Limbs {
    let lead = exponent.rem_euclid(LOG_BASE as i64) as usize + 1;
    let mut padded = String::with_capacity(digits.len() + LOG_BASE);
    padded.push_str(digits);
    while padded.len() < lead || (padded.len() - lead) % LOG_BASE != 0 {
        padded.push('0');
    }

    let bytes = padded.as_bytes();
    let mut limbs = Limbs::new();
    limbs.push(parse_chunk(&bytes[..lead]));
    for chunk in bytes[lead..].chunks(LOG_BASE) {
        limbs.push(parse_chunk(chunk));
    }
    trim_trailing_zeros(&mut limbs);
    limbs
}

fn parse_chunk(chunk: &[u8]) -> u64 {
    chunk
        .iter()
        .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

/// Drop zero limbs from the end, keeping at least one limb.
pub(crate) fn trim_trailing_zeros(limbs: &mut Limbs) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Decimal digit at `index` (0-based over significant digits), where
/// `offset` is the number of leading padding digits in the first limb.
#[inline]
pub(crate) fn digit_at(limbs: &[u64], offset: usize, index: usize) -> u32 {
    let pos = index + offset;
    match limbs.get(pos / LOG_BASE) {
        Some(limb) => ((limb / POWS_TEN[LOG_BASE - 1 - pos % LOG_BASE]) % 10) as u32,
        None => 0,
    }
}

// ============================================================================
// Magnitude Helpers
// ============================================================================

/// Multiply big-endian limbs by a small factor, returning one extra leading limb.
pub(crate) fn mul_small(limbs: &[u64], factor: u64) -> Vec<u64> {
    let mut out = vec![0u64; limbs.len() + 1];
    let mut carry: u128 = 0;
    for (i, &limb) in limbs.iter().enumerate().rev() {
        let t = limb as u128 * factor as u128 + carry;
        out[i + 1] = (t % BASE as u128) as u64;
        carry = t / BASE as u128;
    }
    out[0] = carry as u64;
    out
}

/// Compare two big-endian magnitudes of arbitrary lengths (leading zeros allowed).
pub(crate) fn cmp_magnitude(a: &[u64], b: &[u64]) -> std::cmp::Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Subtract `b` from `a` in place; requires `a >= b`.
pub(crate) fn sub_in_place(a: &mut [u64], b: &[u64]) {
    let offset = a.len() - strip_leading_zeros(b).len();
    let b = strip_leading_zeros(b);
    let mut borrow = 0u64;
    for i in (0..a.len()).rev() {
        let sub = if i >= offset { b[i - offset] } else { 0 } + borrow;
        if a[i] >= sub {
            a[i] -= sub;
            borrow = 0;
        } else {
            a[i] = a[i] + BASE - sub;
            borrow = 1;
        }
    }
}

pub(crate) fn strip_leading_zeros(limbs: &[u64]) -> &[u64] {
    let first = limbs.iter().position(|&l| l != 0).unwrap_or(limbs.len());
    &limbs[first..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(BASE - 1), LOG_BASE);
    }

    #[test]
    fn test_limbs_from_digits_alignment() {
        // 123.45: exponent 2, three digits in the first limb
        let limbs = limbs_from_digits("12345", 2);
        assert_eq!(limbs.as_slice(), &[123, 45_000_000_000_000]);

        // 0.5: exponent -1, first limb is the whole fraction limb
        let limbs = limbs_from_digits("5", -1);
        assert_eq!(limbs.as_slice(), &[50_000_000_000_000]);

        // 10^14: a single digit limb one place up
        let limbs = limbs_from_digits("1", 14);
        assert_eq!(limbs.as_slice(), &[1]);
    }

    #[test]
    fn test_coefficient_string() {
        assert_eq!(coefficient_string(&[123, 45_000_000_000_000]), "12345");
        assert_eq!(coefficient_string(&[0]), "0");
        assert_eq!(coefficient_string(&[1, 0, 7]), format!("1{}7", "0".repeat(27)));
    }

    #[test]
    fn test_digit_at() {
        let limbs = limbs_from_digits("98765", 16);
        let offset = LOG_BASE - digit_count(limbs[0]);
        let digits: Vec<u32> = (0..6).map(|i| digit_at(&limbs, offset, i)).collect();
        assert_eq!(digits, vec![9, 8, 7, 6, 5, 0]);
    }

    #[test]
    fn test_magnitude_helpers() {
        assert_eq!(mul_small(&[BASE - 1], 2), vec![1, BASE - 2]);

        let mut a = vec![1, 0];
        sub_in_place(&mut a, &[1]);
        assert_eq!(a, vec![0, BASE - 1]);

        assert_eq!(cmp_magnitude(&[0, 5], &[5]), std::cmp::Ordering::Equal);
        assert_eq!(cmp_magnitude(&[1, 0], &[BASE - 1]), std::cmp::Ordering::Greater);
    }
}
