#![cfg(target_arch = "wasm32")]

use shopfront_core::{NoBundlePrices, PageSession};
use shopfront_web::app::{App, LIGHTBOX_BODY_CLASS, Props};
use shopfront_web::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

const PRODUCT: &str = include_str!("../../fixtures/product.json");

fn ensure_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("shopfront-test-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id("shopfront-test-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn render_product() {
    shopfront_web::i18n::set_lang("en");
    let session = PageSession::from_payload(Some(PRODUCT), &NoBundlePrices).expect("fixture");
    let props = Props {
        session: Rc::new(session),
    };
    Renderer::<App>::with_root_and_props(ensure_root(), props).render();
}

fn click(selector: &str) {
    let el = dom::document()
        .query_selector(selector)
        .expect("valid selector")
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    el.click();
}

fn text_of(id: &str) -> String {
    dom::document()
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn choosing_options_updates_price() {
    render_product();
    dom::sleep_ms(20).await.expect("sleep");
    click("[data-option='Warna'] [data-value='Hijau']");
    click("[data-option='Ukuran'] [data-value='XL']");
    dom::sleep_ms(20).await.expect("sleep");
    assert_eq!(text_of("product-price").trim(), "Rp\u{a0}27.500");
}

#[wasm_bindgen_test]
async fn lightbox_toggles_body_class() {
    render_product();
    dom::sleep_ms(20).await.expect("sleep");
    click("#main-image-area");
    dom::sleep_ms(20).await.expect("sleep");
    let body = dom::document().body().expect("body");
    assert!(body.class_list().contains(LIGHTBOX_BODY_CLASS));
    click("#lightbox");
    dom::sleep_ms(20).await.expect("sleep");
    assert!(!body.class_list().contains(LIGHTBOX_BODY_CLASS));
}

#[wasm_bindgen_test]
async fn page_mounts_inside_the_host_element() {
    let doc = dom::document();
    let body = doc.body().expect("body");
    let sibling = doc.create_element("aside").expect("create sibling");
    sibling.set_id("host-template");
    body.append_child(&sibling).expect("append sibling");
    let host = doc.create_element("div").expect("create host");
    host.set_id(dom::PAYLOAD_ELEMENT_ID);
    host.set_attribute(dom::PAYLOAD_ATTRIBUTE, PRODUCT).expect("payload attribute");
    body.append_child(&host).expect("append host");

    shopfront_web::app::bootstrap::mount(shopfront_web::app::bootstrap::load_from_document());
    dom::sleep_ms(20).await.expect("sleep");

    let heading = doc
        .query_selector(&format!("#{} #header-product-name", dom::PAYLOAD_ELEMENT_ID))
        .expect("valid selector");
    assert!(heading.is_some());
    assert!(doc.get_element_by_id("host-template").is_some());
}
