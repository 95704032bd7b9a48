use crate::dom;
use yew::prelude::*;

/// Set the document title and favicon once after the first render.
#[hook]
pub fn use_page_chrome(title: String, favicon: Option<String>) {
    use_effect_with((), move |()| {
        dom::set_document_title(&title);
        if let Some(href) = favicon
            && let Err(err) = dom::set_favicon(&href)
        {
            log::warn!("favicon not updated: {}", dom::js_error_message(&err));
        }
        || {}
    });
}

/// Keep `class` on `<body>` while `enabled` holds.
#[hook]
pub fn use_body_class(class: &'static str, enabled: bool) {
    use_effect_with(enabled, move |on| {
        dom::set_body_class(class, *on);
        move || dom::set_body_class(class, false)
    });
}
