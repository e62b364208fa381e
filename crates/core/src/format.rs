//! Number formatting that matches what a browser prints for the same values.

/// Minus sign used by integer tick labels.
const MINUS: char = '\u{2212}';

/// Shortest round-trip decimal, as JavaScript prints a number.
///
/// Exponent notation (|x| >= 1e21 or |x| < 1e-6) is not reproduced; the
/// chart never prints values in those ranges.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Integer tick label: rounded, no grouping, typographic minus.
#[allow(clippy::cast_possible_truncation)]
pub fn format_integer(value: f64) -> String {
    if !value.is_finite() {
        return js_number(value);
    }
    // Magnitude is rounded half up, so halves move away from zero.
    let magnitude = (value.abs() + 0.5).floor() as u64;
    if value < 0.0 && magnitude > 0 {
        format!("{MINUS}{magnitude}")
    } else {
        magnitude.to_string()
    }
}

/// Fixed-point text like JavaScript's `toFixed`: exact halfway values round
/// away from zero instead of to even.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return js_number(value);
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let factor = 10_f64.powi(digits as i32);
    let scaled = value.abs() * factor;
    let exact = value.abs().mul_add(factor, -scaled) == 0.0;

    if !(exact && scaled.fract() == 0.5 && scaled < 9.0e15) {
        return format!("{value:.digits$}");
    }

    let units = scaled.floor() as u64 + 1;
    let mut text = units.to_string();
    if digits > 0 {
        if text.len() <= digits {
            text = format!("{}{text}", "0".repeat(digits + 1 - text.len()));
        }
        text.insert(text.len() - digits, '.');
    }
    if value < 0.0 {
        text.insert(0, '-');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{format_integer, js_number, to_fixed};

    #[test]
    fn js_number_uses_shortest_representation() {
        assert_eq!(js_number(8.66), "8.66");
        assert_eq!(js_number(900.5), "900.5");
        assert_eq!(js_number(6.0), "6");
        assert_eq!(js_number(-6.0), "-6");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn integer_labels_have_no_grouping() {
        assert_eq!(format_integer(1760.0), "1760");
        assert_eq!(format_integer(2015.0), "2015");
        assert_eq!(format_integer(2.584), "3");
        assert_eq!(format_integer(2.5), "3");
        assert_eq!(format_integer(-2.5), "\u{2212}3");
        assert_eq!(format_integer(-0.2), "0");
    }

    #[test]
    fn to_fixed_rounds_exact_halves_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.25, 1), "2.3");
        assert_eq!(to_fixed(-2.25, 1), "-2.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.05, 1), "0.1");
    }

    #[test]
    fn to_fixed_follows_binary_value_when_not_a_tie() {
        // 0.15 is stored slightly below the halfway point.
        assert_eq!(to_fixed(0.15, 1), "0.1");
        assert_eq!(to_fixed(2.584, 1), "2.6");
        assert_eq!(to_fixed(10.435, 1), "10.4");
        assert_eq!(to_fixed(8.0, 1), "8.0");
        assert_eq!(to_fixed(-0.01, 1), "-0.0");
        assert_eq!(to_fixed(-0.0, 1), "0.0");
    }
}
