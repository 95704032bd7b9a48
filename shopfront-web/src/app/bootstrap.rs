use crate::i18n::{t, tr};
use shopfront_core::{BundlePriceSource, NoBundlePrices, PageSession, PayloadError, StateArrayScan};
use std::collections::BTreeMap;

/// What start-up should do with the raw page inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLoad {
    Ready(Box<PageSession>),
    /// Replace the page with this message.
    Fatal(String),
    /// Nothing to render; the cause was logged.
    Halted,
}

fn price_source(state_blob: Option<&str>) -> Box<dyn BundlePriceSource> {
    match state_blob {
        Some(raw) if !raw.trim().is_empty() => Box::new(StateArrayScan::from_json(raw)),
        _ => Box::new(NoBundlePrices),
    }
}

const fn reason_key(err: &PayloadError) -> &'static str {
    match err {
        PayloadError::Missing => "load.missing",
        PayloadError::Malformed(_) => "load.malformed",
        PayloadError::NoItem => "load.no_item",
    }
}

fn failure_message(err: &PayloadError) -> String {
    log::error!("{err}");
    let reason = t(reason_key(err));
    let mut vars = BTreeMap::new();
    vars.insert("reason", reason.as_str());
    tr("load.failed", Some(&vars))
}

/// Turn the payload attribute and the optional state script into a session.
#[must_use]
pub fn load_page(payload: Option<&str>, state_blob: Option<&str>) -> PageLoad {
    let prices = price_source(state_blob);
    match PageSession::from_payload(payload, prices.as_ref()) {
        Ok(session) => PageLoad::Ready(Box::new(session)),
        Err(err @ PayloadError::NoItem) => {
            log::error!("{}", t(reason_key(&err)));
            PageLoad::Halted
        }
        Err(err) => PageLoad::Fatal(failure_message(&err)),
    }
}

/// Read both inputs from the live document.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn load_from_document() -> PageLoad {
    let payload = crate::dom::payload_attribute();
    let state = crate::dom::state_script_text();
    load_page(payload.as_deref(), state.as_deref())
}

/// Render a ready page into the host element, or put the failure on screen.
#[cfg(target_arch = "wasm32")]
pub fn mount(load: PageLoad) {
    match load {
        PageLoad::Ready(session) => {
            let props = super::Props {
                session: std::rc::Rc::new(*session),
            };
            match crate::dom::host_element() {
                Some(host) => {
                    yew::Renderer::<super::App>::with_root_and_props(host, props).render();
                }
                None => log::error!("#{} disappeared before mount", crate::dom::PAYLOAD_ELEMENT_ID),
            }
        }
        PageLoad::Fatal(message) => {
            crate::dom::console_error(&message);
            crate::dom::replace_body_with_message(&message);
        }
        PageLoad::Halted => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = include_str!("../../../fixtures/product.json");
    const BUNDLE: &str = include_str!("../../../fixtures/bundle.json");
    const BUNDLE_STATE: &str = include_str!("../../../fixtures/bundle_state.json");

    #[test]
    fn product_payload_is_ready() {
        let PageLoad::Ready(session) = load_page(Some(PRODUCT), None) else {
            panic!("product fixture should load");
        };
        assert_eq!(session.display_name(), "Kemeja Flanel Kotak");
        assert!(session.shows_variant_picker());
    }

    #[test]
    fn bundle_uses_state_blob_when_present() {
        let PageLoad::Ready(with_state) = load_page(Some(BUNDLE), Some(BUNDLE_STATE)) else {
            panic!("bundle fixture should load");
        };
        assert_eq!(with_state.price_label(), "Rp\u{a0}45.000");

        let PageLoad::Ready(without) = load_page(Some(BUNDLE), Some("   ")) else {
            panic!("bundle fixture should load");
        };
        assert_eq!(without.price_label(), shopfront_core::PRICE_UNAVAILABLE);
    }

    #[test]
    fn missing_and_malformed_payloads_are_fatal() {
        crate::i18n::set_lang("id");
        for raw in [None, Some(""), Some("null"), Some("{not json")] {
            match load_page(raw, None) {
                PageLoad::Fatal(message) => assert!(message.starts_with("Gagal memuat data.")),
                other => panic!("{raw:?} should be fatal, got {other:?}"),
            }
        }
    }

    #[test]
    fn fatal_messages_are_translated() {
        crate::i18n::set_lang("id");
        assert_eq!(
            load_page(None, None),
            PageLoad::Fatal(
                "Gagal memuat data. Atribut data-scalev tidak ditemukan atau kosong.".to_string()
            )
        );
        assert_eq!(
            load_page(Some("{not json"), None),
            PageLoad::Fatal(
                "Gagal memuat data. Data di atribut data-scalev bukan JSON yang valid.".to_string()
            )
        );

        crate::i18n::set_lang("en");
        assert_eq!(
            load_page(Some(""), None),
            PageLoad::Fatal(
                "Failed to load data. The data-scalev attribute is missing or empty.".to_string()
            )
        );
        crate::i18n::set_lang("id");
    }

    #[test]
    fn payload_without_item_halts() {
        assert_eq!(
            load_page(Some(r#"{"store":{"logo":"x.png"}}"#), None),
            PageLoad::Halted
        );
    }
}
