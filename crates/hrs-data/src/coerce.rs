// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Coercion of spreadsheet-exported JSON cells into record fields.
//!
//! The inventory export is loosely typed: identifiers are sometimes numbers,
//! prices are sometimes strings, and blanks show up as `null` or `""`.

use hrs_app::dollars_to_micros;
use serde_json::Value;

// 2^63; integral floats below this fit in an i64.
const I64_FLOAT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// String form of a cell. Numbers are spelled the way a user would type
/// them, so an integral float such as `30210.0` reads `30210`.
pub fn text_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float)
                if number.is_f64() && float.fract() == 0.0 && float.abs() < I64_FLOAT_LIMIT =>
            {
                (float as i64).to_string()
            }
            _ => number.to_string(),
        },
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Unrounded price in millionths of a dollar, or `None` when the cell is
/// blank or not a number.
pub fn micros_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_f64().and_then(dollars_to_micros),
        Value::String(text) => parse_money_text(text).and_then(dollars_to_micros),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Parses `1234.5`, `1,234.50`, `$1,234.50` and `-$12`. Anything else,
/// including `NaN` and `inf`, is not a price.
pub fn parse_money_text(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
    if rest.is_empty() || !rest.bytes().any(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if !rest
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }

    let value = rest.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::{is_blank, micros_value, parse_money_text, text_value};
    use serde_json::json;

    #[test]
    fn text_value_stringifies_scalars() {
        assert_eq!(text_value(&json!("WDT750SAKZ")), "WDT750SAKZ");
        assert_eq!(text_value(&json!(30210)), "30210");
        assert_eq!(text_value(&json!(12.5)), "12.5");
        assert_eq!(text_value(&json!(true)), "true");
        assert_eq!(text_value(&json!(null)), "");
    }

    #[test]
    fn text_value_spells_integral_floats_as_integers() {
        assert_eq!(text_value(&json!(30210.0)), "30210");
        assert_eq!(text_value(&json!(1e3)), "1000");
        assert_eq!(text_value(&json!(-42.0)), "-42");
        assert_eq!(text_value(&json!(-0.0)), "0");
        assert_eq!(text_value(&json!(0.5)), "0.5");
        assert_eq!(text_value(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn text_value_keeps_compound_cells_as_json() {
        assert_eq!(text_value(&json!([1, 2])), "[1,2]");
        assert_eq!(text_value(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn micros_value_accepts_numbers_and_numeric_strings() {
        assert_eq!(micros_value(&json!(500)), Some(500_000_000));
        assert_eq!(micros_value(&json!(1849.99)), Some(1_849_990_000));
        assert_eq!(micros_value(&json!("1,849.00")), Some(1_849_000_000));
        assert_eq!(micros_value(&json!("$2,399.99")), Some(2_399_990_000));
        assert_eq!(micros_value(&json!(" 75 ")), Some(75_000_000));
        assert_eq!(micros_value(&json!("-$12")), Some(-12_000_000));
    }

    #[test]
    fn micros_value_keeps_fractions_of_a_cent() {
        assert_eq!(micros_value(&json!(0.333)), Some(333_000));
        assert_eq!(micros_value(&json!("12.3456")), Some(12_345_600));
    }

    #[test]
    fn micros_value_treats_non_numeric_cells_as_missing() {
        for cell in [
            json!(null),
            json!(""),
            json!("   "),
            json!("call for price"),
            json!("NaN"),
            json!("inf"),
            json!("$"),
            json!(true),
            json!([100]),
            json!({"amount": 100}),
        ] {
            assert_eq!(micros_value(&cell), None, "cell {cell}");
        }
    }

    #[test]
    fn parse_money_text_rejects_mixed_text() {
        assert_eq!(parse_money_text("12 dollars"), None);
        assert_eq!(parse_money_text("1.2.3"), None);
        assert_eq!(parse_money_text("1e3"), Some(1000.0));
        assert_eq!(parse_money_text("0.99"), Some(0.99));
    }

    #[test]
    fn blank_cells() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("  ")));
        assert!(!is_blank(&json!("n/a")));
        assert!(!is_blank(&json!(0)));
    }
}
