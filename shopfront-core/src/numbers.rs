//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// 2^127; `i128::MAX` is not representable as f64 and rounds up to this.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Round a f64 and clamp it to the i128 range, returning `None` for non-finite values.
#[must_use]
pub fn round_f64_to_i128(value: f64) -> Option<i128> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded >= I128_BOUND {
        return Some(i128::MAX);
    }
    if rounded <= -I128_BOUND {
        return Some(i128::MIN);
    }
    cast::<f64, i128>(rounded)
}

/// Convert an index into the signed domain used for cursor arithmetic.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    cast::<usize, i64>(value).unwrap_or(i64::MAX)
}

/// Convert a non-negative signed value back into an index, clamping negatives to zero.
#[must_use]
pub fn i64_to_usize(value: i64) -> usize {
    cast::<i64, usize>(value.max(0)).unwrap_or(usize::MAX)
}

/// Read the longest leading decimal number of `raw`, the way browsers'
/// `parseFloat` does: leading whitespace is skipped, trailing garbage is
/// ignored, and a string without leading digits yields `None`.
#[must_use]
pub fn parse_leading_f64(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_rejects_non_finite() {
        assert_eq!(round_f64_to_i128(1.6), Some(2));
        assert_eq!(round_f64_to_i128(-2.5), Some(-3));
        assert_eq!(round_f64_to_i128(f64::NAN), None);
        assert_eq!(round_f64_to_i128(f64::INFINITY), None);
    }

    #[test]
    fn rounding_clamps_at_the_i128_edges() {
        assert_eq!(round_f64_to_i128(1e300), Some(i128::MAX));
        assert_eq!(round_f64_to_i128(-1e300), Some(i128::MIN));
        assert_eq!(round_f64_to_i128(I128_BOUND), Some(i128::MAX));
        assert_eq!(round_f64_to_i128(-I128_BOUND), Some(i128::MIN));
        assert_eq!(round_f64_to_i128(1e19), Some(10_000_000_000_000_000_000));
    }

    #[test]
    fn index_conversions_clamp() {
        assert_eq!(i64_to_usize(-4), 0);
        assert_eq!(i64_to_usize(7), 7);
        assert_eq!(usize_to_i64(3), 3);
    }

    #[test]
    fn leading_float_matches_browser_parsing() {
        assert_eq!(parse_leading_f64("15000"), Some(15000.0));
        assert_eq!(parse_leading_f64("  15000.50 IDR"), Some(15000.5));
        assert_eq!(parse_leading_f64("15000abc"), Some(15000.0));
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("5."), Some(5.0));
        assert_eq!(parse_leading_f64("-12"), Some(-12.0));
        assert_eq!(parse_leading_f64("1e3x"), Some(1000.0));
        assert_eq!(parse_leading_f64("1e"), Some(1.0));
        assert_eq!(parse_leading_f64("abc"), None);
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64("-Infinity"), Some(f64::NEG_INFINITY));
    }
}
