//! Raw input values and their coercion to text.
//!
//! Callers may hand the trie a mix of strings and numbers. Every raw value is
//! first lifted into the closed [`InputValue`] enum, so coercion is a single
//! exhaustive match instead of runtime type probing.
//!
//! License: MIT

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A value that could not be coerced to text.
///
/// `kind` names the observed type (e.g. `"null"`, `"bool"`, `"array"`) and
/// `repr` is a stable rendering of the value used for reporting and ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsupportedValue {
    pub kind: String,
    pub repr: String,
}

impl UnsupportedValue {
    pub fn new(kind: impl Into<String>, repr: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            repr: repr.into(),
        }
    }
}

// Ordered by rendering first, then type name, which gives a total order even
// across values of unrelated types.
impl Ord for UnsupportedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr
            .cmp(&other.repr)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for UnsupportedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UnsupportedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.repr, self.kind)
    }
}

/// A raw value offered for insertion into a [`crate::Trie`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Unsupported(UnsupportedValue),
}

impl InputValue {
    /// Coerces the value to its canonical text form.
    ///
    /// Integers render in decimal. Floats render in their shortest round-trip
    /// form, which always keeps a fractional part or an exponent: `1.0`
    /// becomes `"1.0"`, `1e20` becomes `"1e+20"` and `1e-5` becomes `"1e-05"`.
    pub fn coerce(self) -> Result<String, UnsupportedValue> {
        match self {
            InputValue::Text(text) => Ok(text),
            InputValue::Integer(n) => Ok(n.to_string()),
            InputValue::Float(x) => Ok(format_float(x)),
            InputValue::Unsupported(value) => Err(value),
        }
    }
}

/// Decimal exponents in this range render positionally, others in
/// scientific notation with a signed, two-digit-minimum exponent.
const POSITIONAL_EXPONENTS: std::ops::RangeInclusive<i32> = -4..=15;

fn format_float(x: f64) -> String {
    let sign = if x.is_sign_negative() { "-" } else { "" };

    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return format!("{}inf", sign);
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", x.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !POSITIONAL_EXPONENTS.contains(&exponent) {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, rest)
        };
        return format!("{}{}e{:+03}", sign, mantissa, exponent);
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let point = exponent as usize + 1;
    if digits.len() > point {
        let (int_part, frac_part) = digits.split_at(point);
        format!("{}{}.{}", sign, int_part, frac_part)
    } else {
        format!("{}{:0<width$}.0", sign, digits, width = point)
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<&String> for InputValue {
    fn from(value: &String) -> Self {
        InputValue::Text(value.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for InputValue {
                fn from(value: $ty) -> Self {
                    InputValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for InputValue {
    fn from(value: f32) -> Self {
        InputValue::Float(f64::from(value))
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Float(value)
    }
}

impl From<UnsupportedValue> for InputValue {
    fn from(value: UnsupportedValue) -> Self {
        InputValue::Unsupported(value)
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => InputValue::Text(text),
            Value::Number(number) => {
                if number.is_f64() {
                    InputValue::Float(number.as_f64().unwrap_or(f64::NAN))
                } else if let Some(n) = number.as_i64() {
                    InputValue::Integer(n)
                } else {
                    // u64 beyond i64::MAX: keep the exact digits.
                    InputValue::Text(number.to_string())
                }
            }
            Value::Null => InputValue::Unsupported(UnsupportedValue::new("null", "null")),
            Value::Bool(b) => InputValue::Unsupported(UnsupportedValue::new("bool", b.to_string())),
            other @ Value::Array(_) => {
                InputValue::Unsupported(UnsupportedValue::new("array", other.to_string()))
            }
            other @ Value::Object(_) => {
                InputValue::Unsupported(UnsupportedValue::new("object", other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_scalars() {
        assert_eq!(InputValue::from("foo").coerce(), Ok("foo".to_string()));
        assert_eq!(InputValue::from(1).coerce(), Ok("1".to_string()));
        assert_eq!(InputValue::from(-42i64).coerce(), Ok("-42".to_string()));
        assert_eq!(InputValue::from(1.0).coerce(), Ok("1.0".to_string()));
        assert_eq!(InputValue::from(2.5).coerce(), Ok("2.5".to_string()));
        assert_eq!(InputValue::from(f64::INFINITY).coerce(), Ok("inf".to_string()));
        assert_eq!(InputValue::from(f64::NAN).coerce(), Ok("nan".to_string()));
    }

    #[test]
    fn test_float_text() {
        let cases = [
            (100.0, "100.0"),
            (123.456, "123.456"),
            (0.0001, "0.0001"),
            (0.00012, "0.00012"),
            (1e-5, "1e-05"),
            (1.5e-7, "1.5e-07"),
            (1234567890123456.0, "1234567890123456.0"),
            (1e16, "1e+16"),
            (1e20, "1e+20"),
            (1.5e300, "1.5e+300"),
            (-2.5, "-2.5"),
            (-0.0, "-0.0"),
            (0.0, "0.0"),
            (f64::NEG_INFINITY, "-inf"),
        ];

        for (x, expected) in cases {
            assert_eq!(format_float(x), expected, "formatting {:e}", x);
        }
    }

    #[test]
    fn test_coerce_unsupported() {
        let value = UnsupportedValue::new("null", "null");
        assert_eq!(InputValue::from(value.clone()).coerce(), Err(value));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(InputValue::from(json!("foo")), InputValue::Text("foo".into()));
        assert_eq!(InputValue::from(json!(7)), InputValue::Integer(7));
        assert_eq!(InputValue::from(json!(1.0)), InputValue::Float(1.0));
        assert_eq!(InputValue::from(json!(u64::MAX)), InputValue::Text(u64::MAX.to_string()));
        assert_eq!(
            InputValue::from(json!(null)),
            InputValue::Unsupported(UnsupportedValue::new("null", "null"))
        );
        assert_eq!(
            InputValue::from(json!(true)),
            InputValue::Unsupported(UnsupportedValue::new("bool", "true"))
        );
        assert_eq!(
            InputValue::from(json!([1, 2])),
            InputValue::Unsupported(UnsupportedValue::new("array", "[1,2]"))
        );
    }

    #[test]
    fn test_unsupported_total_order() {
        let mut values = vec![
            UnsupportedValue::new("null", "null"),
            UnsupportedValue::new("array", "[]"),
            UnsupportedValue::new("bool", "false"),
        ];
        values.sort();
        let reprs: Vec<&str> = values.iter().map(|v| v.repr.as_str()).collect();
        assert_eq!(reprs, vec!["[]", "false", "null"]);
    }
}
