//! Conversion of values to numbers.
//!
//! | Value                  | Number                                              |
//! |------------------------|-----------------------------------------------------|
//! | `Null`                 | `0`                                                 |
//! | `Bool(false)`, `true`  | `0`, `1`                                            |
//! | `Number(n)`            | `n`, unless `n` is `NaN`                            |
//! | `String(s)`            | see below                                           |
//! | `Array(_)`, `Object(_)`| not convertible                                     |
//!
//! Strings are trimmed of surrounding whitespace (Unicode `White_Space` except U+0085, plus the
//! byte order mark U+FEFF) and then read as:
//!
//! - the empty string: `0`
//! - `Infinity`, `+Infinity`, `-Infinity`: the matching infinity
//! - `0x`, `0o`, `0b` (either case) followed by at least one digit of that radix, without sign:
//!   an unsigned integer, rounded once to the nearest `f64` (ties to even) when it exceeds 2^53
//! - `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`: a decimal number, which
//!   overflows to infinity
//!
//! Every other string, including `NaN`, `inf` and `1_000`, is not convertible.

use crate::Value;

/// Convert a value to a number, returning `None` when the conversion does not yield one.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s)?,
        Value::Array(_) | Value::Object(_) => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// Read a string as a number, see the module documentation for the accepted forms.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim_matches(is_whitespace);
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some((radix, digits)) = split_radix_prefix(s) {
        return parse_radix(digits, radix);
    }

    if is_decimal_literal(s) {
        s.parse().ok()
    } else {
        None
    }
}

fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Read the digits of a power-of-two radix, rounding once to the nearest `f64`.
///
/// The leading 128 bits are kept exactly. Digits past them only shift the binary exponent and
/// set a sticky bit, which sits far below the 53 bit mantissa and only breaks ties.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let bits = radix.trailing_zeros();

    let mut mantissa: u128 = 0;
    let mut exp: u32 = 0;
    let mut sticky = false;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        if exp == 0 && mantissa >> (u128::BITS - bits) == 0 {
            mantissa = (mantissa << bits) | u128::from(d);
        } else {
            exp = exp.saturating_add(bits);
            sticky |= d != 0;
        }
    }

    let n = (mantissa | u128::from(sticky)) as f64;
    Some(if exp == 0 { n } else { n * pow2(exp) })
}

/// `2^exp` built from its bit pattern, infinite past the largest finite power
fn pow2(exp: u32) -> f64 {
    const MAX_EXP: u32 = f64::MAX_EXP as u32 - 1;

    if exp > MAX_EXP {
        f64::INFINITY
    } else {
        f64::from_bits(u64::from(exp + MAX_EXP) << 52)
    }
}

fn is_decimal_literal(s: &str) -> bool {
    let mut rest = s.strip_prefix(['+', '-']).unwrap_or(s);

    let int_digits = leading_digits(rest);
    rest = &rest[int_digits..];

    let mut frac_digits = 0;
    if let Some(frac) = rest.strip_prefix('.') {
        frac_digits = leading_digits(frac);
        rest = &frac[frac_digits..];
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if let Some(exp) = rest.strip_prefix(['e', 'E']) {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        let exp_digits = leading_digits(exp);
        if exp_digits == 0 {
            return false;
        }
        rest = &exp[exp_digits..];
    }

    rest.is_empty()
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
