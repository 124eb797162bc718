//! Canonical string form of values, the key used when counting.
//!
//! Numbers are written the way ECMAScript's `Number.prototype.toString` writes them: the shortest
//! digits that round-trip, in plain notation when the decimal exponent is in `-6..21` and in
//! exponent notation (`1e+21`, `1.5e-7`) otherwise. Arrays join their items with `,`, writing
//! `Null` items as nothing, and every object is written as `[object Object]`.

use std::fmt::{self, Display, Write};

use crate::Value;

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    if !matches!(item, Value::Null) {
                        Display::fmt(item, f)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

fn write_number(f: &mut impl Write, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n == 0.0 {
        return f.write_char('0');
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n < 0.0 {
        f.write_char('-')?;
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();

    let k = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let point = exp + 1;

    if k <= point && point <= 21 {
        f.write_str(&digits)?;
        write_zeros(f, point - k)
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{int}.{frac}")
    } else if -6 < point && point <= 0 {
        f.write_str("0.")?;
        write_zeros(f, -point)?;
        f.write_str(&digits)
    } else {
        let (first, rest) = digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }
        let sign = if exp >= 0 { '+' } else { '-' };
        write!(f, "e{sign}{}", exp.abs())
    }
}

fn write_zeros(f: &mut impl Write, count: i32) -> fmt::Result {
    (0..count).try_for_each(|_| f.write_char('0'))
}
