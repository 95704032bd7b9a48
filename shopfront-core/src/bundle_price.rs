//! Bundle price lookup.
//!
//! Bundle records carry no price of their own; the storefront ships it in a
//! separate framework state blob (`__NUXT_DATA__`), a flat JSON array in
//! which a bundle's price string sits a fixed distance after its id.
use crate::price::{Amount, PRICE_UNAVAILABLE};
use crate::product::ItemId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Distance between a bundle id and its price in the state array.
pub const PRICE_OFFSET: usize = 3;

static PRICE_SHAPE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\d+(\.\d{2})?$").ok());

/// Anything able to tell the price of a bundle.
pub trait BundlePriceSource {
    /// Raw decimal price of `bundle_id`, if known.
    fn bundle_price(&self, bundle_id: &ItemId) -> Option<String>;
}

/// No auxiliary data on the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBundlePrices;

impl BundlePriceSource for NoBundlePrices {
    fn bundle_price(&self, _bundle_id: &ItemId) -> Option<String> {
        None
    }
}

/// Positional scan over the framework state array.
#[derive(Debug, Clone, Default)]
pub struct StateArrayScan {
    entries: Vec<Value>,
}

impl StateArrayScan {
    /// Parse the text of the state script. Anything other than a JSON array
    /// yields an empty scan.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(entries)) => Self { entries },
            Ok(_) => {
                log::warn!("bundle price data is not an array");
                Self::default()
            }
            Err(err) => {
                log::warn!("bundle price data unreadable: {err}");
                Self::default()
            }
        }
    }
}

fn looks_like_price(candidate: &str) -> bool {
    PRICE_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(candidate))
}

impl BundlePriceSource for StateArrayScan {
    fn bundle_price(&self, bundle_id: &ItemId) -> Option<String> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| bundle_id.matches_json(entry))
            .find_map(|(idx, _)| {
                self.entries
                    .get(idx + PRICE_OFFSET)
                    .and_then(Value::as_str)
                    .filter(|candidate| looks_like_price(candidate))
                    .map(str::to_string)
            })
    }
}

/// Display label for a bundle's price; unavailable on any lookup failure.
#[must_use]
pub fn bundle_price_label(source: &dyn BundlePriceSource, bundle_id: &ItemId) -> String {
    source
        .bundle_price(bundle_id)
        .and_then(|raw| Amount::parse(&raw))
        .map_or_else(
            || {
                log::warn!("no price found for bundle {bundle_id}");
                PRICE_UNAVAILABLE.to_string()
            },
            |amount| amount.to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_price_three_entries_after_id() {
        let scan = StateArrayScan::from_json(r#"[1, "x", 77, true, null, "n/a", 77, "a", "b", "45000.00"]"#);
        assert_eq!(scan.bundle_price(&ItemId::number(77)), Some("45000.00".into()));
        assert_eq!(
            bundle_price_label(&scan, &ItemId::number(77)),
            "Rp\u{a0}45.000"
        );
    }

    #[test]
    fn rejects_non_price_strings_and_wrong_types() {
        let scan = StateArrayScan::from_json(r#"["77", 0, 0, "45000.5", 77, 0, 0, 45000]"#);
        assert_eq!(scan.bundle_price(&ItemId::number(77)), None);
    }

    #[test]
    fn numeric_bundle_id_skips_string_entries() {
        let scan = StateArrayScan::from_json(r#"["7788", 0, 0, "10000"]"#);
        assert_eq!(scan.bundle_price(&ItemId::number(7788)), None);
        assert_eq!(scan.bundle_price(&ItemId::new("7788")), Some("10000".into()));
    }

    #[test]
    fn failures_degrade_to_unavailable() {
        let broken = StateArrayScan::from_json("{oops");
        assert_eq!(bundle_price_label(&broken, &ItemId::new("1")), PRICE_UNAVAILABLE);
        assert_eq!(bundle_price_label(&NoBundlePrices, &ItemId::new("1")), PRICE_UNAVAILABLE);
    }
}
