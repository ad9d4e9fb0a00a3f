// ============================================================================
// Base-n Output
// Integer digits by exact conversion, fraction digits by repeated scaling
// ============================================================================

use crate::config::Config;
use crate::number::limbs::coefficient_string;
use crate::number::radix::{convert_base, decimal_digits, render_digits};
use crate::number::BigNumber;

/// Unsigned digits of a finite `x` in `base`, with at most
/// `cfg.decimal_places()` fraction digits rounded by `cfg.rounding_mode()`.
pub(super) fn to_radix(x: &BigNumber, base: u32, cfg: &Config) -> String {
    let Some((limbs, exponent)) = x.finite_parts() else {
        return String::new();
    };
    if limbs[0] == 0 {
        return "0".to_string();
    }

    let digits = decimal_digits(&coefficient_string(limbs));
    let (int_dec, frac_dec) = if exponent >= 0 {
        let int_len = exponent as usize + 1;
        let mut int = digits[..int_len.min(digits.len())].to_vec();
        int.resize(int_len, 0);
        let frac = digits.get(int_len..).map(<[u8]>::to_vec).unwrap_or_default();
        (int, frac)
    } else {
        let mut frac = vec![0u8; (-exponent - 1) as usize];
        frac.extend_from_slice(&digits);
        (vec![0], frac)
    };

    let mut int = convert_base(&int_dec, 10, base);
    let dp = cfg.decimal_places as usize;
    let (mut frac, sticky) = fraction_digits(frac_dec, base, dp + 1);

    if frac.len() > dp {
        let digit = u32::from(frac[dp]);
        frac.truncate(dp);
        let prev = frac.last().or(int.last()).copied().unwrap_or(0);
        if cfg
            .rounding_mode
            .rounds_up(digit, base, sticky, prev % 2 == 1, x.negative)
        {
            increment(&mut int, &mut frac, base);
        }
    }
    while frac.last() == Some(&0) {
        frac.pop();
    }

    let mut out = render_digits(&int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&render_digits(&frac));
    }
    out
}

/// First `count` digits in `base` of the decimal fraction `0.frac`, and
/// whether anything non-zero remains after them.
fn fraction_digits(mut frac: Vec<u8>, base: u32, count: usize) -> (Vec<u8>, bool) {
    let mut out = Vec::with_capacity(count);
    while frac.last() == Some(&0) {
        frac.pop();
    }
    while out.len() < count && !frac.is_empty() {
        let mut carry = 0u32;
        for d in frac.iter_mut().rev() {
            let t = u32::from(*d) * base + carry;
            *d = (t % 10) as u8;
            carry = t / 10;
        }
        out.push(carry as u8);
        while frac.last() == Some(&0) {
            frac.pop();
        }
    }
    (out, !frac.is_empty())
}

/// Add one unit in the last place, carrying into the integer digits.
fn increment(int: &mut Vec<u8>, frac: &mut [u8], base: u32) {
    for d in frac.iter_mut().rev().chain(int.iter_mut().rev()) {
        if u32::from(*d) + 1 < base {
            *d += 1;
            return;
        }
        *d = 0;
    }
    int.insert(0, 1);
}
