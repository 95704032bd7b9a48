//! Rupiah price formatting and variant price ranges.
use crate::numbers::{parse_leading_f64, round_f64_to_i128};
use crate::product::Variant;
use std::fmt;

/// Label shown wherever a price cannot be read.
pub const PRICE_UNAVAILABLE: &str = "Harga tidak tersedia";

const CURRENCY_PREFIX: &str = "Rp\u{a0}";

/// A price in hundredths of a rupiah (sen), so comparisons stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i128);

impl Amount {
    #[must_use]
    pub const fn from_sen(sen: i128) -> Self {
        Self(sen)
    }

    #[must_use]
    pub const fn sen(self) -> i128 {
        self.0
    }

    /// Parse a decimal price string. Leading numeric text is accepted the
    /// way a browser's `parseFloat` accepts it; non-finite values are rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value = parse_leading_f64(raw)?;
        round_f64_to_i128(value * 100.0).map(Self)
    }
}

impl fmt::Display for Amount {
    /// Indonesian currency style: `Rp 15.000`, `Rp 15.000,5`, `-Rp 1.250`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / 100;
        let frac = abs % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}{CURRENCY_PREFIX}{grouped}")?;
        match frac {
            0 => Ok(()),
            f_ if f_ % 10 == 0 => write!(f, ",{}", f_ / 10),
            f_ => write!(f, ",{f_:02}"),
        }
    }
}

/// Format a raw price for display, or the unavailable label when it does not parse.
#[must_use]
pub fn format_price(raw: &str) -> String {
    Amount::parse(raw).map_or_else(|| PRICE_UNAVAILABLE.to_string(), |a| a.to_string())
}

/// Price label for a product whose variant is not chosen yet: `min - max`
/// across parseable variant prices, a single price when they agree, and the
/// product's flat price when no variant price can be read.
#[must_use]
pub fn price_range(variants: &[Variant], fallback_price: &str) -> String {
    let mut prices = variants.iter().filter_map(|v| Amount::parse(&v.price));
    let Some(first) = prices.next() else {
        return format_price(fallback_price);
    };
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    if min == max {
        min.to_string()
    } else {
        format!("{min} - {max}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ItemId;

    fn priced(prices: &[&str]) -> Vec<Variant> {
        prices
            .iter()
            .enumerate()
            .map(|(idx, price)| Variant {
                id: ItemId::new(idx.to_string()),
                price: (*price).to_string(),
                option1_value: String::new(),
                option2_value: String::new(),
                option3_value: String::new(),
            })
            .collect()
    }

    #[test]
    fn formats_whole_rupiah_without_decimals() {
        assert_eq!(format_price("15000"), "Rp\u{a0}15.000");
        assert_eq!(format_price("15000.00"), "Rp\u{a0}15.000");
        assert_eq!(format_price("999"), "Rp\u{a0}999");
        assert_eq!(format_price("1250000"), "Rp\u{a0}1.250.000");
        assert_eq!(format_price("0"), "Rp\u{a0}0");
    }

    #[test]
    fn keeps_significant_fraction_digits() {
        assert_eq!(format_price("15000.5"), "Rp\u{a0}15.000,5");
        assert_eq!(format_price("15000.05"), "Rp\u{a0}15.000,05");
        assert_eq!(format_price("-1250"), "-Rp\u{a0}1.250");
    }

    #[test]
    fn formats_prices_beyond_the_i64_range() {
        assert_eq!(
            format_price("100000000000000000"),
            "Rp\u{a0}100.000.000.000.000.000"
        );
        assert!(Amount::parse("100000000000000000").is_some_and(|a| a.sen() > i128::from(i64::MAX)));
    }

    #[test]
    fn non_numeric_prices_are_unavailable() {
        assert_eq!(format_price("gratis"), PRICE_UNAVAILABLE);
        assert_eq!(format_price(""), PRICE_UNAVAILABLE);
        assert_eq!(format_price("Infinity"), PRICE_UNAVAILABLE);
    }

    #[test]
    fn range_spans_min_and_max() {
        let variants = priced(&["15000", "25000", "15000"]);
        assert_eq!(
            price_range(&variants, ""),
            "Rp\u{a0}15.000 - Rp\u{a0}25.000"
        );
    }

    #[test]
    fn range_collapses_single_price() {
        let variants = priced(&["15000", "15000.00"]);
        assert_eq!(price_range(&variants, ""), "Rp\u{a0}15.000");
    }

    #[test]
    fn range_falls_back_to_flat_price() {
        assert_eq!(price_range(&[], "30000"), "Rp\u{a0}30.000");
        let unreadable = priced(&["n/a", ""]);
        assert_eq!(price_range(&unreadable, "30000"), "Rp\u{a0}30.000");
        assert_eq!(price_range(&[], ""), PRICE_UNAVAILABLE);
    }
}
