//! Grouped, fixed-decimal number rendering.
//!
//! The separators are parameters so the translator can supply the glyphs its
//! table maps `.` and `,` to; see [`crate::Translator::format_number`].

/// Most fractional digits [`format_grouped`] renders; larger requests are clamped.
pub const MAX_DECIMALS: usize = u16::MAX as usize;

/// Round `value` to `decimals` places, with halves rounded away from zero.
///
/// Values whose scaled form would overflow are returned unchanged.
#[must_use]
pub fn round_half_away_from_zero(value: f64, decimals: usize) -> f64 {
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let scale = 10_f64.powi(exponent);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Render `value` with `decimals` fractional digits and grouped thousands.
///
/// ```
/// use parlance::number::format_grouped;
///
/// assert_eq!(format_grouped(1234.5, 2, ".", ","), "1,234.50");
/// assert_eq!(format_grouped(1234.5, 2, ",", "."), "1.234,50");
/// assert_eq!(format_grouped(-1234567.0, 0, ".", " "), "-1 234 567");
/// ```
#[must_use]
pub fn format_grouped(value: f64, decimals: usize, decimal_point: &str, thousands: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let rounded = round_half_away_from_zero(value, decimals);
    let plain = format!("{:.decimals$}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let negative = rounded < 0.0 && plain.bytes().any(|digit| matches!(digit, b'1'..=b'9'));

    let mut output = String::with_capacity(plain.len() + integer.len() / 3 * thousands.len() + 1);
    if negative {
        output.push('-');
    }
    let leading = match integer.len() % 3 {
        0 => 3,
        remainder => remainder,
    };
    let (head, tail) = integer.split_at(leading.min(integer.len()));
    output.push_str(head);
    for group in tail.as_bytes().chunks(3) {
        output.push_str(thousands);
        output.extend(group.iter().map(|&digit| char::from(digit)));
    }
    if decimals > 0 {
        output.push_str(decimal_point);
        output.push_str(fraction);
    }
    output
}
