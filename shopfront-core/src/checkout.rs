//! Checkout link derivation.
use crate::product::ItemId;
use serde::Serialize;

/// What a purchase click checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CheckoutTarget {
    Variant(ItemId),
    Bundle(ItemId),
}

impl CheckoutTarget {
    #[must_use]
    pub fn id(&self) -> &ItemId {
        match self {
            Self::Variant(id) | Self::Bundle(id) => id,
        }
    }

    const fn query_key(&self) -> &'static str {
        match self {
            Self::Variant(_) => "variant_ids",
            Self::Bundle(_) => "bpo_ids",
        }
    }

    /// Absolute checkout URL on `origin`, e.g.
    /// `https://shop.example/c/checkout?variant_ids=42`.
    #[must_use]
    pub fn url(&self, origin: &str) -> String {
        let origin = origin.trim_end_matches('/');
        format!("{origin}/c/checkout?{}={}", self.query_key(), self.id())
    }
}
