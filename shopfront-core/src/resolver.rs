//! Variant resolution from the shopper's option selection.
use crate::product::{ProductRecord, Variant};
use serde::Serialize;
use std::collections::BTreeMap;

/// Chosen value per option display name. A cleared option has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    chosen: BTreeMap<String, String>,
}

/// What a click on an option button did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Replaced,
    Cleared,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on the `value` button of the `option` row.
    ///
    /// Clicking the active value clears the row; any other value replaces
    /// whatever the row held.
    pub fn toggle(&mut self, option: &str, value: &str) -> SelectionChange {
        match self.chosen.get(option) {
            Some(current) if current == value => {
                self.chosen.remove(option);
                SelectionChange::Cleared
            }
            Some(_) => {
                self.chosen.insert(option.to_string(), value.to_string());
                SelectionChange::Replaced
            }
            None => {
                self.chosen.insert(option.to_string(), value.to_string());
                SelectionChange::Selected
            }
        }
    }

    pub fn clear(&mut self, option: &str) -> bool {
        self.chosen.remove(option).is_some()
    }

    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.chosen.get(option).map(String::as_str)
    }

    #[must_use]
    pub fn is_selected(&self, option: &str, value: &str) -> bool {
        self.get(option) == Some(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Outcome of matching a selection against the product's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Not every named option has a value yet.
    Incomplete,
    Matched(&'a Variant),
    /// Every option is chosen but no variant carries that combination.
    NoMatch,
}

impl Resolution<'_> {
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

fn variant_agrees(product: &ProductRecord, variant: &Variant, selection: &Selection) -> bool {
    product
        .named_slots()
        .all(|(slot, name)| selection.get(name) == Some(variant.value(slot)))
}

/// Match `selection` against `product`'s variants. When several variants
/// carry the same combination the first in payload order wins.
///
/// A product without named options offers nothing to pick, so only a sole
/// variant can ever match it.
#[must_use]
pub fn resolve<'a>(selection: &Selection, product: &'a ProductRecord) -> Resolution<'a> {
    let required = product.required_selections();
    if required == 0 {
        return product
            .sole_variant()
            .map_or(Resolution::Incomplete, Resolution::Matched);
    }
    if selection.len() < required {
        return Resolution::Incomplete;
    }
    product
        .variants
        .iter()
        .find(|variant| variant_agrees(product, variant, selection))
        .map_or(Resolution::NoMatch, Resolution::Matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ItemId;

    fn shirt() -> ProductRecord {
        let variant = |id: &str, price: &str, color: &str, size: &str| Variant {
            id: ItemId::new(id),
            price: price.into(),
            option1_value: color.into(),
            option2_value: size.into(),
            option3_value: String::new(),
        };
        ProductRecord {
            name: "Kaos".into(),
            option1_name: "Warna".into(),
            option2_name: "Ukuran".into(),
            variants: vec![
                variant("101", "15000", "Merah", "S"),
                variant("102", "25000", "Merah", "M"),
                variant("103", "15000", "Biru", "S"),
            ],
            ..ProductRecord::default()
        }
    }

    #[test]
    fn toggle_selects_replaces_and_clears() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle("Warna", "Merah"), SelectionChange::Selected);
        assert_eq!(selection.toggle("Warna", "Biru"), SelectionChange::Replaced);
        assert_eq!(selection.get("Warna"), Some("Biru"));
        assert_eq!(selection.toggle("Warna", "Biru"), SelectionChange::Cleared);
        assert!(selection.is_empty());
    }

    #[test]
    fn partial_selection_is_incomplete() {
        let product = shirt();
        let mut selection = Selection::new();
        assert_eq!(resolve(&selection, &product), Resolution::Incomplete);
        selection.toggle("Warna", "Merah");
        assert_eq!(resolve(&selection, &product), Resolution::Incomplete);
    }

    #[test]
    fn full_selection_matches_variant() {
        let product = shirt();
        let mut selection = Selection::new();
        selection.toggle("Warna", "Merah");
        selection.toggle("Ukuran", "M");
        match resolve(&selection, &product) {
            Resolution::Matched(v) => {
                assert_eq!(v.id.as_str(), "102");
                assert_eq!(v.price, "25000");
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn missing_combination_is_no_match() {
        let product = shirt();
        let mut selection = Selection::new();
        selection.toggle("Warna", "Biru");
        selection.toggle("Ukuran", "M");
        assert_eq!(resolve(&selection, &product), Resolution::NoMatch);
    }

    #[test]
    fn deselecting_returns_to_incomplete() {
        let product = shirt();
        let mut selection = Selection::new();
        selection.toggle("Warna", "Merah");
        selection.toggle("Ukuran", "S");
        assert!(resolve(&selection, &product).is_matched());
        selection.toggle("Ukuran", "S");
        assert_eq!(resolve(&selection, &product), Resolution::Incomplete);
    }

    #[test]
    fn unnamed_options_never_pick_among_several_variants() {
        let mut product = shirt();
        product.option1_name.clear();
        product.option2_name.clear();
        assert_eq!(resolve(&Selection::new(), &product), Resolution::Incomplete);

        product.variants.truncate(1);
        let resolved = resolve(&Selection::new(), &product);
        assert!(matches!(resolved, Resolution::Matched(v) if v.id.as_str() == "101"));
    }
}
