//! Page session: the state a rendered product page mutates in response to
//! shopper input.
//!
//! A session owns the selection, both gallery cursors and the lightbox and
//! warning flags. Every handler takes `&mut self`; rendering reads the
//! derived getters and never holds state of its own.
use crate::bundle_price::{BundlePriceSource, bundle_price_label};
use crate::checkout::CheckoutTarget;
use crate::gallery::GalleryCursor;
use crate::payload::{PageItem, PagePayload, PayloadError, StoreInfo};
use crate::price::{format_price, price_range};
use crate::product::{OptionAxes, ProductRecord, Variant, gallery_images};
use crate::resolver::{Resolution, Selection, SelectionChange, resolve};
use crate::text::description_html;

/// Heading shown when the item has no name.
pub const FALLBACK_NAME: &str = "Nama Produk";
/// Document title used when the item has no name.
pub const FALLBACK_TITLE: &str = "Halaman Produk";

/// How the page arrives at a price and checkout target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pricing {
    /// Bundles have one price and one id.
    Bundle {
        label: String,
        target: CheckoutTarget,
    },
    /// A product with exactly one variant needs no selection.
    Fixed(Variant),
    /// The shopper picks options until a variant matches.
    Selectable,
}

/// Result of a click on the buy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuyOutcome {
    Navigate(String),
    ShowWarning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSession {
    item: PageItem,
    store: Option<StoreInfo>,
    images: Vec<String>,
    pricing: Pricing,
    axes: OptionAxes,
    selection: Selection,
    main: GalleryCursor,
    lightbox: GalleryCursor,
    lightbox_open: bool,
    warning_visible: bool,
}

impl PageSession {
    /// Build the initial state for `item`.
    #[must_use]
    pub fn new(
        item: PageItem,
        store: Option<StoreInfo>,
        bundle_prices: &dyn BundlePriceSource,
    ) -> Self {
        let images = gallery_images(item.images());
        let (pricing, axes) = match &item {
            PageItem::Bundle(bundle) => (
                Pricing::Bundle {
                    label: bundle_price_label(bundle_prices, &bundle.id),
                    target: CheckoutTarget::Bundle(bundle.id.clone()),
                },
                OptionAxes::new(),
            ),
            PageItem::Product(product) => match product.sole_variant() {
                Some(only) => (Pricing::Fixed(only.clone()), OptionAxes::new()),
                None => (Pricing::Selectable, product.option_axes()),
            },
        };
        log::debug!(
            "session for {:?}: {} images, {} option rows",
            item.name(),
            images.len(),
            axes.len()
        );
        let len = images.len();
        Self {
            item,
            store,
            images,
            pricing,
            axes,
            selection: Selection::new(),
            main: GalleryCursor::new(len),
            lightbox: GalleryCursor::new(len),
            lightbox_open: false,
            warning_visible: false,
        }
    }

    /// Parse the payload attribute and build the session for its item.
    ///
    /// # Errors
    ///
    /// Propagates [`PayloadError`] from parsing or item selection.
    pub fn from_payload(
        raw: Option<&str>,
        bundle_prices: &dyn BundlePriceSource,
    ) -> Result<Self, PayloadError> {
        let (item, store) = PagePayload::parse(raw)?.into_item()?;
        Ok(Self::new(item, store, bundle_prices))
    }

    #[must_use]
    pub const fn item(&self) -> &PageItem {
        &self.item
    }

    #[must_use]
    pub const fn store(&self) -> Option<&StoreInfo> {
        self.store.as_ref()
    }

    #[must_use]
    pub const fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.item.name() {
            "" => FALLBACK_NAME,
            name => name,
        }
    }

    #[must_use]
    pub fn document_title(&self) -> &str {
        match self.item.name() {
            "" => FALLBACK_TITLE,
            name => name,
        }
    }

    #[must_use]
    pub fn description_html(&self) -> String {
        description_html(self.item.rich_description())
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    fn product(&self) -> Option<&ProductRecord> {
        match &self.item {
            PageItem::Product(product) => Some(product),
            PageItem::Bundle(_) => None,
        }
    }

    /// Option rows to render; empty when the variant picker stays hidden.
    #[must_use]
    pub fn option_axes(&self) -> &OptionAxes {
        &self.axes
    }

    #[must_use]
    pub fn shows_variant_picker(&self) -> bool {
        matches!(self.pricing, Pricing::Selectable)
            && self.product().is_some_and(|p| !p.variants.is_empty())
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current resolution of the selection. Bundles and fixed products never
    /// resolve through the selection and report [`Resolution::Incomplete`].
    #[must_use]
    pub fn resolution(&self) -> Resolution<'_> {
        match (&self.pricing, self.product()) {
            (Pricing::Selectable, Some(product)) => resolve(&self.selection, product),
            _ => Resolution::Incomplete,
        }
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        match &self.pricing {
            Pricing::Bundle { label, .. } => label.clone(),
            Pricing::Fixed(variant) => format_price(&variant.price),
            Pricing::Selectable => match (self.resolution(), self.product()) {
                (Resolution::Matched(variant), _) => format_price(&variant.price),
                (_, Some(product)) => price_range(&product.variants, &product.price),
                (_, None) => String::new(),
            },
        }
    }

    /// Where a buy click goes, when the page is ready to sell.
    #[must_use]
    pub fn checkout_target(&self) -> Option<CheckoutTarget> {
        match &self.pricing {
            Pricing::Bundle { target, .. } => Some(target.clone()),
            Pricing::Fixed(variant) => Some(CheckoutTarget::Variant(variant.id.clone())),
            Pricing::Selectable => match self.resolution() {
                Resolution::Matched(variant) => Some(CheckoutTarget::Variant(variant.id.clone())),
                Resolution::Incomplete | Resolution::NoMatch => None,
            },
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.checkout_target().is_some()
    }

    #[must_use]
    pub const fn warning_visible(&self) -> bool {
        self.warning_visible
    }

    /// Click on the `value` button of the `option` row.
    ///
    /// A match hides the variant warning and a complete selection without a
    /// match shows it; an incomplete selection leaves it as it was.
    pub fn select_option(&mut self, option: &str, value: &str) -> SelectionChange {
        let change = self.selection.toggle(option, value);
        match self.resolution() {
            Resolution::Matched(variant) => {
                log::debug!("selection matched variant {}", variant.id);
                self.warning_visible = false;
            }
            Resolution::NoMatch => {
                log::debug!("selection has no matching variant");
                self.warning_visible = true;
            }
            Resolution::Incomplete => {}
        }
        change
    }

    /// Click on the buy button.
    pub fn buy(&mut self, origin: &str) -> BuyOutcome {
        match self.checkout_target() {
            Some(target) => BuyOutcome::Navigate(target.url(origin)),
            None => {
                self.warning_visible = true;
                BuyOutcome::ShowWarning
            }
        }
    }

    #[must_use]
    pub const fn main_gallery(&self) -> &GalleryCursor {
        &self.main
    }

    #[must_use]
    pub const fn lightbox_gallery(&self) -> &GalleryCursor {
        &self.lightbox
    }

    pub fn main_go_to(&mut self, requested: i64) -> usize {
        self.main.go_to(requested)
    }

    pub fn main_step(&mut self, delta: i64) -> usize {
        self.main.step(delta)
    }

    pub fn main_swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        self.main.swipe(start_x, end_x)
    }

    #[must_use]
    pub const fn lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    /// Open the lightbox on the image the main gallery shows.
    pub fn open_lightbox(&mut self) {
        let start = self.main.index();
        self.lightbox.go_to(crate::numbers::usize_to_i64(start));
        self.lightbox_open = true;
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox_open = false;
    }

    pub fn lightbox_go_to(&mut self, requested: i64) -> usize {
        self.lightbox.go_to(requested)
    }

    pub fn lightbox_step(&mut self, delta: i64) -> usize {
        self.lightbox.step(delta)
    }

    pub fn lightbox_swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        self.lightbox.swipe(start_x, end_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle_price::{NoBundlePrices, StateArrayScan};
    use crate::price::PRICE_UNAVAILABLE;

    const SHIRT: &str = r#"{
        "store": {"logo": "logo.png"},
        "product": {
            "name": "Kaos Polos",
            "rich_description": "&lt;p&gt;Katun&lt;/p&gt;",
            "images": ["a.jpg", "b.jpg", "c.jpg"],
            "option1_name": "Warna",
            "option2_name": "Ukuran",
            "variants": [
                {"id": 11, "price": "15000", "option1_value": "Merah", "option2_value": "S"},
                {"id": 12, "price": "25000", "option1_value": "Merah", "option2_value": "M"},
                {"id": 13, "price": "15000", "option1_value": "Biru", "option2_value": "S"}
            ]
        }
    }"#;

    fn shirt() -> PageSession {
        PageSession::from_payload(Some(SHIRT), &NoBundlePrices).unwrap()
    }

    #[test]
    fn initial_state_shows_range_and_blocks_purchase() {
        let session = shirt();
        assert_eq!(session.display_name(), "Kaos Polos");
        assert_eq!(session.description_html(), "<p>Katun</p>");
        assert!(session.shows_variant_picker());
        assert_eq!(session.option_axes().len(), 2);
        assert_eq!(session.price_label(), "Rp\u{a0}15.000 - Rp\u{a0}25.000");
        assert!(!session.is_ready());
        assert!(!session.warning_visible());
    }

    #[test]
    fn matching_selection_enables_checkout() {
        let mut session = shirt();
        session.select_option("Warna", "Merah");
        session.select_option("Ukuran", "M");
        assert_eq!(session.price_label(), "Rp\u{a0}25.000");
        assert_eq!(
            session.buy("https://toko.example"),
            BuyOutcome::Navigate("https://toko.example/c/checkout?variant_ids=12".into())
        );
    }

    #[test]
    fn impossible_combination_warns_until_matched() {
        let mut session = shirt();
        session.select_option("Warna", "Biru");
        session.select_option("Ukuran", "M");
        assert!(session.warning_visible());
        assert_eq!(session.resolution(), Resolution::NoMatch);
        assert!(!session.is_ready());

        session.select_option("Ukuran", "M");
        assert_eq!(session.resolution(), Resolution::Incomplete);
        assert!(session.warning_visible());

        session.select_option("Ukuran", "S");
        assert!(!session.warning_visible());
        assert!(session.is_ready());
    }

    #[test]
    fn buying_early_shows_warning() {
        let mut session = shirt();
        assert_eq!(session.buy("https://toko.example"), BuyOutcome::ShowWarning);
        assert!(session.warning_visible());
    }

    #[test]
    fn single_variant_is_fixed() {
        let raw = r#"{"product": {"name": "Topi", "option1_name": "Warna",
            "variants": [{"id": "v1", "price": "50000", "option1_value": "Hitam"}]}}"#;
        let mut session = PageSession::from_payload(Some(raw), &NoBundlePrices).unwrap();
        assert!(!session.shows_variant_picker());
        assert!(session.option_axes().is_empty());
        assert_eq!(session.price_label(), "Rp\u{a0}50.000");
        assert_eq!(
            session.buy("https://t.example"),
            BuyOutcome::Navigate("https://t.example/c/checkout?variant_ids=v1".into())
        );
    }

    #[test]
    fn several_variants_without_option_names_stay_unready() {
        let raw = r#"{"product": {"variants": [
            {"id": 1, "price": "15000"}, {"id": 2, "price": "25000"}]}}"#;
        let mut session = PageSession::from_payload(Some(raw), &NoBundlePrices).unwrap();
        assert!(session.option_axes().is_empty());
        assert_eq!(session.resolution(), Resolution::Incomplete);
        assert_eq!(session.price_label(), "Rp\u{a0}15.000 - Rp\u{a0}25.000");
        assert!(!session.is_ready());
        assert_eq!(session.buy("https://toko.example"), BuyOutcome::ShowWarning);
        assert!(session.warning_visible());
    }

    #[test]
    fn bundle_uses_its_own_id_and_price_source() {
        let raw = r#"{"bundle_price_option": {"id": 500, "bundle": {"public_name": "Paket Hemat"}}}"#;
        let prices = StateArrayScan::from_json(r#"[500, 0, 0, "99000.00"]"#);
        let mut session = PageSession::from_payload(Some(raw), &prices).unwrap();
        assert_eq!(session.display_name(), "Paket Hemat");
        assert_eq!(session.price_label(), "Rp\u{a0}99.000");
        assert!(!session.shows_variant_picker());
        assert_eq!(session.images().len(), 1);
        assert_eq!(
            session.buy("https://t.example"),
            BuyOutcome::Navigate("https://t.example/c/checkout?bpo_ids=500".into())
        );

        let unpriced = PageSession::from_payload(Some(raw), &NoBundlePrices).unwrap();
        assert_eq!(unpriced.price_label(), PRICE_UNAVAILABLE);
    }

    #[test]
    fn lightbox_opens_on_main_image_and_moves_independently() {
        let mut session = shirt();
        session.main_step(-1);
        assert_eq!(session.main_gallery().index(), 2);
        session.open_lightbox();
        assert!(session.lightbox_open());
        assert_eq!(session.lightbox_gallery().index(), 2);
        session.lightbox_step(1);
        assert_eq!(session.lightbox_gallery().index(), 0);
        assert_eq!(session.main_gallery().index(), 2);
        session.close_lightbox();
        assert!(!session.lightbox_open());
    }

    #[test]
    fn unnamed_item_uses_fallback_titles() {
        let raw = r#"{"product": {"variants": []}}"#;
        let session = PageSession::from_payload(Some(raw), &NoBundlePrices).unwrap();
        assert_eq!(session.display_name(), FALLBACK_NAME);
        assert_eq!(session.document_title(), FALLBACK_TITLE);
        assert!(!session.shows_variant_picker());
        assert!(!session.is_ready());
    }
}
