use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Host element carrying the page payload.
pub const PAYLOAD_ELEMENT_ID: &str = "scalev";
/// Attribute on the host element holding the JSON payload.
pub const PAYLOAD_ATTRIBUTE: &str = "data-scalev";
/// Script element holding the framework state blob with bundle prices.
pub const STATE_SCRIPT_ID: &str = "__NUXT_DATA__";

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Host element the page is rendered into.
#[must_use]
pub fn host_element() -> Option<Element> {
    document().get_element_by_id(PAYLOAD_ELEMENT_ID)
}

/// Raw payload attribute, if the host element and attribute exist.
#[must_use]
pub fn payload_attribute() -> Option<String> {
    host_element().and_then(|el| el.get_attribute(PAYLOAD_ATTRIBUTE))
}

/// Text of the framework state script, if present.
#[must_use]
pub fn state_script_text() -> Option<String> {
    document()
        .get_element_by_id(STATE_SCRIPT_ID)
        .and_then(|el| el.text_content())
}

/// Origin of the current page, e.g. `https://toko.example`.
///
/// # Errors
/// Returns an error if the location cannot be read.
pub fn origin() -> Result<String, JsValue> {
    window().location().origin()
}

/// Full-page navigation to `url`.
///
/// # Errors
/// Returns an error if the browser rejects the new location.
pub fn navigate(url: &str) -> Result<(), JsValue> {
    window().location().set_href(url)
}

pub fn set_document_title(title: &str) {
    document().set_title(title);
}

/// Replace every icon link in `<head>` with one pointing at `href`.
///
/// # Errors
/// Returns an error if the link element cannot be created or attached.
pub fn set_favicon(href: &str) -> Result<(), JsValue> {
    let doc = document();
    let existing = doc.query_selector_all("link[rel~='icon']")?;
    for idx in 0..existing.length() {
        if let Some(node) = existing.item(idx)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            el.remove();
        }
    }
    let link = doc.create_element("link")?;
    link.set_attribute("rel", "icon")?;
    link.set_attribute("href", href)?;
    if let Some(head) = doc.head() {
        head.append_child(&link)?;
    }
    Ok(())
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = document().body() {
        let classes = body.class_list();
        let _ = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}

/// Replace the whole page with a single centered message.
pub fn replace_body_with_message(message: &str) {
    let doc = document();
    let Some(body) = doc.body() else {
        return;
    };
    body.set_inner_html("");
    if let Ok(p) = doc.create_element("p") {
        let _ = p.set_attribute("style", "text-align:center; padding: 50px;");
        p.set_text_content(Some(message));
        let _ = body.append_child(&p);
    }
}

/// Smoothly bring the element with `id` into view without jumping the page.
pub fn scroll_into_view_nearest(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Nearest);
    opts.set_inline(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
