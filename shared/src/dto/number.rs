//! Numbers typed into form fields.
//!
//! Form input is parsed leniently: whatever the user typed becomes an `f64`,
//! and text that is not a number becomes NaN. The value is sent to the server
//! untouched, so parsing follows JavaScript's `Number(text.trim())` and
//! encoding follows what a browser's `JSON.stringify` does with the result.
//!
//! One deliberate difference: empty text is NaN here, where `Number("")` is 0.

use serde::{Serialize, Serializer};
use std::fmt;

/// Integral values below this magnitude print as plain digits; larger ones
/// switch to exponent notation.
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

/// A number entered by the user. May be NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormNumber(f64);

impl FormNumber {
    pub const NAN: FormNumber = FormNumber(f64::NAN);

    /// Trim `text` and parse it. Empty or non-numeric text yields NaN.
    ///
    /// Accepts decimal and exponent notation, the `Infinity` literal with an
    /// optional sign, and unsigned `0x`/`0o`/`0b` radix literals.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::NAN;
        }
        Self(parse_number_literal(trimmed))
    }

    /// True when the text did not parse as a number.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    fn as_integer(self) -> Option<i128> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() < PLAIN_INTEGER_LIMIT {
            Some(value as i128)
        } else {
            None
        }
    }
}

fn parse_number_literal(text: &str) -> f64 {
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(text) {
        return value;
    }

    // `str::parse` also takes `inf`, `infinity` and `nan` in any case; the
    // only letters a decimal literal may contain are the exponent markers.
    if text
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x1F`, `0o17`, `0b101`. `None` if `text` has no radix prefix.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

impl From<f64> for FormNumber {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for FormNumber {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl Serialize for FormNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(integer) = self.as_integer() {
            serializer.serialize_i128(integer)
        } else if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Renders the number the way it appears in a URL path segment.
impl fmt::Display for FormNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(integer) = self.as_integer() {
            write!(f, "{}", integer)
        } else if self.0.is_nan() {
            f.write_str("NaN")
        } else if self.0.is_infinite() {
            f.write_str(if self.0 > 0.0 { "Infinity" } else { "-Infinity" })
        } else if self.0.abs() >= PLAIN_INTEGER_LIMIT {
            // 1e21 -> "1e+21"
            let exponent = format!("{:e}", self.0);
            match exponent.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{}e+{}", mantissa, power),
                _ => f.write_str(&exponent),
            }
        } else {
            write!(f, "{}", self.0)
        }
    }
}
