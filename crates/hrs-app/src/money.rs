// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub const MISSING_MONEY: &str = "-";

/// Prices are stored in millionths of a dollar so sums of sub-cent source
/// values round only once, when displayed.
pub const MICROS_PER_CENT: i64 = 10_000;
const MICROS_PER_DOLLAR: f64 = 1_000_000.0;

pub fn format_cents(cents: i64) -> String {
    let (sign, cents) = normalize_sign(cents);
    let dollars = cents / 100;
    let remainder = cents % 100;
    format!("{sign}${}.{:02}", comma_format(dollars), remainder)
}

pub fn format_optional_cents(cents: Option<i64>) -> String {
    cents.map_or_else(|| MISSING_MONEY.to_owned(), format_cents)
}

pub fn format_micros(micros: i64) -> String {
    format_cents(micros_to_cents(micros))
}

pub fn format_optional_micros(micros: Option<i64>) -> String {
    format_optional_cents(micros.map(micros_to_cents))
}

/// Fixed-point form of a dollar amount. Non-finite input has no value.
pub fn dollars_to_micros(dollars: f64) -> Option<i64> {
    if !dollars.is_finite() {
        return None;
    }
    // `as` saturates at the i64 bounds.
    Some((dollars * MICROS_PER_DOLLAR).round() as i64)
}

pub fn cents_to_micros(cents: i64) -> i64 {
    cents.saturating_mul(MICROS_PER_CENT)
}

/// Rounds half away from zero to whole cents.
pub fn micros_to_cents(micros: i64) -> i64 {
    let cents = micros / MICROS_PER_CENT;
    let remainder = micros % MICROS_PER_CENT;
    let half = MICROS_PER_CENT / 2;
    if remainder >= half {
        cents + 1
    } else if remainder <= -half {
        cents - 1
    } else {
        cents
    }
}

fn comma_format(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let mut chars = digits.chars().collect::<Vec<_>>();
    let mut count = 0usize;
    while let Some(ch) = chars.pop() {
        if count == 3 {
            out.push(',');
            count = 0;
        }
        out.push(ch);
        count += 1;
    }
    out.chars().rev().collect()
}

fn normalize_sign(cents: i64) -> (&'static str, u64) {
    if cents >= 0 {
        ("", cents.unsigned_abs())
    } else {
        ("-", cents.unsigned_abs())
    }
}
