// ============================================================================
// Notation Helpers
// Placement of the decimal point or exponent around a digit string
// ============================================================================

/// `d.ddde±x` from significant digits and the exponent of the first one.
pub(crate) fn exponential(digits: &str, exponent: i64) -> String {
    let mut out = String::with_capacity(digits.len() + 8);
    let (first, rest) = digits.split_at(1.min(digits.len()));
    out.push_str(first);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&exponent.to_string());
    out
}

/// Fixed-point form of significant digits whose first digit weighs 10^exponent.
pub(crate) fn positional(digits: &str, exponent: i64) -> String {
    if exponent < 0 {
        let zeros = (-exponent - 1) as usize;
        let mut out = String::with_capacity(digits.len() + zeros + 2);
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(zeros));
        out.push_str(digits);
        return out;
    }
    let int_len = exponent as usize + 1;
    if int_len >= digits.len() {
        let mut out = String::with_capacity(int_len);
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take(int_len - digits.len()));
        out
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Append zeros so that at least `min_decimals` digits follow the point.
pub(crate) fn pad_decimals(mut s: String, min_decimals: i64) -> String {
    let current = s.find('.').map_or(0, |p| s.len() - p - 1) as i64;
    if min_decimals > current {
        if current == 0 {
            s.push('.');
        }
        s.extend(std::iter::repeat('0').take((min_decimals - current) as usize));
    }
    s
}

/// Append zeros so that `digits` has at least `len` digits.
pub(crate) fn pad_digits(mut digits: String, len: i64) -> String {
    let missing = len - digits.len() as i64;
    if missing > 0 {
        digits.extend(std::iter::repeat('0').take(missing as usize));
    }
    digits
}
