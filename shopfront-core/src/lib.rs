//! Shopfront product page engine
//!
//! Platform-agnostic logic behind a single product or bundle detail page:
//! payload parsing, variant resolution, gallery cursors, price formatting and
//! checkout links. This crate has no DOM or browser dependencies.

pub mod bundle_price;
pub mod checkout;
pub mod gallery;
pub mod numbers;
pub mod payload;
pub mod price;
pub mod product;
pub mod resolver;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use bundle_price::{BundlePriceSource, NoBundlePrices, StateArrayScan, bundle_price_label};
pub use checkout::CheckoutTarget;
pub use gallery::{GalleryCursor, SWIPE_THRESHOLD_PX, SwipeTracker, advance, swipe_step};
pub use payload::{PageItem, PagePayload, PayloadError, StoreInfo};
pub use price::{Amount, PRICE_UNAVAILABLE, format_price, price_range};
pub use product::{
    BundleDetails, BundleRecord, ItemId, OptionAxes, OptionAxis, OptionSlot, PLACEHOLDER_IMAGE,
    ProductRecord, Variant, gallery_images,
};
pub use resolver::{Resolution, Selection, SelectionChange, resolve};
pub use session::{BuyOutcome, PageSession, Pricing};
pub use text::{decode_html_entities, description_html};
