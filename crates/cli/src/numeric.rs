//! `tint convert`: parse a number from text and convert it by type name.

use crate::error::CliError;
use serde_json::Value;
use std::fmt;
use tint_core::{parse_numeric, Convert, ConvertFrom, ExactFrom};

/// Type names accepted by `--to`.
pub const TYPE_NAMES: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32", "f64",
];

/// A number read from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Scalar {
    /// Tries `i64`, then `u64`, then `f64`.
    pub fn parse(text: &str) -> Option<Self> {
        parse_numeric::<i64>(text)
            .map(Scalar::Signed)
            .or_else(|| parse_numeric::<u64>(text).map(Scalar::Unsigned))
            .or_else(|| parse_numeric::<f64>(text).map(Scalar::Float))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Signed(v) => write!(f, "{v}"),
            Scalar::Unsigned(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A converted number, as text and as a JSON value.
///
/// Non-finite floats have no JSON number form and become `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub text: String,
    pub json: Value,
}

fn render<T>(value: Scalar, exact: bool) -> Option<Converted>
where
    T: ConvertFrom<i64> + ConvertFrom<u64> + ConvertFrom<f64>,
    T: ExactFrom<i64> + ExactFrom<u64> + ExactFrom<f64>,
    T: fmt::Display + Into<Value>,
{
    let converted: Option<T> = match (value, exact) {
        (Scalar::Signed(v), false) => Some(v.convert()),
        (Scalar::Unsigned(v), false) => Some(v.convert()),
        (Scalar::Float(v), false) => Some(v.convert()),
        (Scalar::Signed(v), true) => v.exact(),
        (Scalar::Unsigned(v), true) => v.exact(),
        (Scalar::Float(v), true) => v.exact(),
    };
    converted.map(|v| Converted {
        text: v.to_string(),
        json: v.into(),
    })
}

/// Converts `value` to the type named `target`.
///
/// With `exact`, fails when the value is not exactly representable.
pub fn convert_scalar(value: Scalar, target: &str, exact: bool) -> Result<Converted, CliError> {
    let converted = match target {
        "i8" => render::<i8>(value, exact),
        "i16" => render::<i16>(value, exact),
        "i32" => render::<i32>(value, exact),
        "i64" => render::<i64>(value, exact),
        "isize" => render::<isize>(value, exact),
        "u8" => render::<u8>(value, exact),
        "u16" => render::<u16>(value, exact),
        "u32" => render::<u32>(value, exact),
        "u64" => render::<u64>(value, exact),
        "usize" => render::<usize>(value, exact),
        "f32" => render::<f32>(value, exact),
        "f64" => render::<f64>(value, exact),
        _ => {
            return Err(CliError::Input(format!(
                "unknown numeric type '{target}' (expected one of {})",
                TYPE_NAMES.join(", ")
            )))
        }
    };
    converted.ok_or_else(|| {
        CliError::Input(format!("{value} is not exactly representable as {target}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_signed_then_unsigned_then_float() {
        assert_eq!(Scalar::parse("-5"), Some(Scalar::Signed(-5)));
        assert_eq!(
            Scalar::parse("18446744073709551615"),
            Some(Scalar::Unsigned(u64::MAX))
        );
        assert_eq!(Scalar::parse("1.5"), Some(Scalar::Float(1.5)));
        assert_eq!(Scalar::parse("NaN").map(|s| matches!(s, Scalar::Float(_))), Some(true));
        assert_eq!(Scalar::parse("abc"), None);
    }

    #[test]
    fn clamping_conversion_by_name() {
        let text = |v, t| convert_scalar(v, t, false).unwrap().text;
        assert_eq!(text(Scalar::Signed(300), "u8"), "255");
        assert_eq!(text(Scalar::Signed(-5), "u8"), "0");
        assert_eq!(text(Scalar::Float(f64::NAN), "i32"), "0");
        assert_eq!(text(Scalar::Float(1.5), "i32"), "2");
    }

    #[test]
    fn exact_conversion_by_name() {
        assert_eq!(convert_scalar(Scalar::Signed(200), "u8", true).unwrap().text, "200");
        let err = convert_scalar(Scalar::Float(1.5), "i32", true).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn json_value_is_a_number() {
        let c = convert_scalar(Scalar::Signed(300), "u8", false).unwrap();
        assert_eq!(c.json, serde_json::json!(255));
        assert!(c.json.is_number());

        let c = convert_scalar(Scalar::Signed(3), "f64", false).unwrap();
        assert_eq!(c.json, serde_json::json!(3.0));
    }

    #[test]
    fn non_finite_float_has_null_json() {
        let c = convert_scalar(Scalar::Float(f64::INFINITY), "f64", false).unwrap();
        assert_eq!(c.text, "inf");
        assert_eq!(c.json, Value::Null);
    }

    #[test]
    fn unknown_type_is_input_error() {
        let err = convert_scalar(Scalar::Signed(1), "i128", false).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("i128"));
    }

    #[test]
    fn every_listed_type_is_accepted() {
        for name in TYPE_NAMES {
            assert!(convert_scalar(Scalar::Signed(7), name, true).is_ok(), "{name}");
        }
    }
}
