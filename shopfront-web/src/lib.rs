#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod input;
pub mod logging;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    // Follow the language declared on <html lang>
    crate::i18n::set_lang(&crate::i18n::current_lang());

    app::bootstrap::mount(app::bootstrap::load_from_document());
}
