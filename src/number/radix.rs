// ============================================================================
// Radix Conversion
// Digit-array conversion between bases 2 to 64
// ============================================================================

/// Digit alphabet for bases up to 64.
pub(crate) const ALPHABET: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ$_";

pub(crate) const MIN_RADIX: u32 = 2;
pub(crate) const MAX_RADIX: u32 = 64;

/// Value of `c` in `radix`, if it is a digit of that base.
///
/// Below base 37 letters are case-insensitive.
pub(crate) fn digit_value(c: u8, radix: u32) -> Option<u8> {
    let c = if radix < 37 { c.to_ascii_lowercase() } else { c };
    ALPHABET[..radix as usize]
        .iter()
        .position(|&a| a == c)
        .map(|p| p as u8)
}

/// Convert big-endian digits from one base to another (integers only).
///
/// Returns at least one digit; leading zeros are removed.
pub(crate) fn convert_base(digits: &[u8], from: u32, to: u32) -> Vec<u8> {
    // Little-endian accumulator in the target base
    let mut acc: Vec<u32> = vec![0];
    for &d in digits {
        for x in acc.iter_mut() {
            *x *= from;
        }
        acc[0] += u32::from(d);
        let mut i = 0;
        while i < acc.len() {
            if acc[i] >= to {
                let carry = acc[i] / to;
                acc[i] %= to;
                if i + 1 == acc.len() {
                    acc.push(0);
                }
                acc[i + 1] += carry;
            }
            i += 1;
        }
    }
    while acc.len() > 1 && acc.last() == Some(&0) {
        acc.pop();
    }
    acc.iter().rev().map(|&d| d as u8).collect()
}

/// Render digit values with the alphabet.
pub(crate) fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&d| ALPHABET[d as usize] as char).collect()
}

/// Decimal digit values of an ASCII digit string.
pub(crate) fn decimal_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}
