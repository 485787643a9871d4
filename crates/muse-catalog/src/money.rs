//! Price display.
//!
//! Catalogue prices are whole Rupiah with no minor unit, so they are carried
//! as plain `u64` and only formatted at the presentation boundary.

/// Currency code shown in front of every price.
pub const CURRENCY_CODE: &str = "IDR";

/// Format a whole-Rupiah price the way the storefront shows it.
///
/// Thousands are grouped with `.` and a fixed `.00` suffix is appended,
/// e.g. `150000` becomes `IDR 150.000.00`.
pub fn format_price(price: u64) -> String {
    format!("{} {}.00", CURRENCY_CODE, group_thousands(price))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}
