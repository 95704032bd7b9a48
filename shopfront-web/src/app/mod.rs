use shopfront_core::PageSession;
use std::rc::Rc;
use yew::prelude::*;

pub mod bootstrap;
pub mod effects;
pub mod handlers;
pub mod view;

pub use bootstrap::{PageLoad, load_page};
pub use handlers::AppHandlers;

/// Body class present while the lightbox covers the page.
pub const LIGHTBOX_BODY_CLASS: &str = "lightbox-open";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Session built from the page payload at start-up.
    pub session: Rc<PageSession>,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let session = use_state(|| (*props.session).clone());

    effects::use_page_chrome(
        session.document_title().to_string(),
        session.store().and_then(shopfront_core::StoreInfo::favicon_url),
    );
    effects::use_body_class(LIGHTBOX_BODY_CLASS, session.lightbox_open());

    let handlers = AppHandlers::new(&session);
    view::render_page(&session, &handlers)
}
