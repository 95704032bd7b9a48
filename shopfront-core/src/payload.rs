//! The JSON document embedded in the host page.
use crate::product::{BundleRecord, ProductRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CDN serving store logos.
pub const LOGO_CDN: &str = "https://cdn.scalev.id";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("data-scalev attribute is missing or empty")]
    Missing,
    #[error("data-scalev is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("payload carries neither a product nor a bundle")]
    NoItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default)]
    pub logo: Option<String>,
}

impl StoreInfo {
    /// Favicon URL for the store logo, if one is set.
    #[must_use]
    pub fn favicon_url(&self) -> Option<String> {
        self.logo
            .as_deref()
            .filter(|logo| !logo.is_empty())
            .map(|logo| format!("{LOGO_CDN}/{logo}"))
    }
}

/// Top-level payload: `{ store?, bundle_price_option?, product? }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePayload {
    #[serde(default)]
    pub store: Option<StoreInfo>,
    #[serde(default)]
    pub bundle_price_option: Option<BundleRecord>,
    #[serde(default)]
    pub product: Option<ProductRecord>,
}

/// The one item a page sells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    Bundle(BundleRecord),
    Product(ProductRecord),
}

impl PageItem {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bundle(bundle) => bundle.display_name(),
            Self::Product(product) => &product.name,
        }
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        match self {
            Self::Bundle(bundle) => bundle.display_images(),
            Self::Product(product) => &product.images,
        }
    }

    #[must_use]
    pub fn rich_description(&self) -> &str {
        match self {
            Self::Bundle(bundle) => bundle.display_description(),
            Self::Product(product) => &product.rich_description,
        }
    }

    #[must_use]
    pub const fn is_bundle(&self) -> bool {
        matches!(self, Self::Bundle(_))
    }
}

impl PagePayload {
    /// Parse the raw attribute value. An absent, blank or `"null"` attribute
    /// counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Missing`] or [`PayloadError::Malformed`].
    pub fn parse(raw: Option<&str>) -> Result<Self, PayloadError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .ok_or(PayloadError::Missing)?;
        let payload: Self = serde_json::from_str(raw)?;
        log::debug!(
            "payload parsed: bundle={} product={}",
            payload.bundle_price_option.is_some(),
            payload.product.is_some()
        );
        Ok(payload)
    }

    /// The authoritative item; a bundle wins over a product.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::NoItem`] when neither is present.
    pub fn into_item(self) -> Result<(PageItem, Option<StoreInfo>), PayloadError> {
        let item = match (self.bundle_price_option, self.product) {
            (Some(bundle), _) => PageItem::Bundle(bundle),
            (None, Some(product)) => PageItem::Product(product),
            (None, None) => return Err(PayloadError::NoItem),
        };
        Ok((item, self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_attributes_are_missing() {
        assert!(matches!(PagePayload::parse(None), Err(PayloadError::Missing)));
        assert!(matches!(PagePayload::parse(Some("  ")), Err(PayloadError::Missing)));
        assert!(matches!(PagePayload::parse(Some("null")), Err(PayloadError::Missing)));
    }

    #[test]
    fn malformed_json_reports_cause() {
        let err = PagePayload::parse(Some("{not json")).unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
        assert!(err.to_string().starts_with("data-scalev is not valid JSON"));
    }

    #[test]
    fn bundle_takes_precedence() {
        let payload = PagePayload::parse(Some(
            r#"{"bundle_price_option": {"id": 9, "public_name": "Paket"},
                "product": {"name": "Kaos", "variants": []}}"#,
        ))
        .unwrap();
        let (item, store) = payload.into_item().unwrap();
        assert!(item.is_bundle());
        assert_eq!(item.name(), "Paket");
        assert!(store.is_none());
    }

    #[test]
    fn empty_payload_has_no_item() {
        let payload = PagePayload::parse(Some(r#"{"store": {"logo": "a.png"}}"#)).unwrap();
        assert_eq!(
            payload.store.as_ref().and_then(StoreInfo::favicon_url).as_deref(),
            Some("https://cdn.scalev.id/a.png")
        );
        assert!(matches!(payload.into_item(), Err(PayloadError::NoItem)));
    }
}
