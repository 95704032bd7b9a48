use crate::app::handlers::AppHandlers;
use crate::components::buy_panel::BuyPanel;
use crate::components::description::Description;
use crate::components::gallery::MainGallery;
use crate::components::lightbox::Lightbox;
use crate::components::page_header::PageHeader;
use crate::components::price_tag::PriceTag;
use crate::components::variant_picker::VariantPicker;
use shopfront_core::PageSession;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_page(session: &PageSession, handlers: &AppHandlers) -> Html {
    let images: Rc<[String]> = Rc::from(session.images());
    let name = AttrValue::from(session.display_name().to_string());

    html! {
        <main id="product-page" class="product-page">
            <PageHeader name={name.clone()} />
            <div class="product-layout">
                <MainGallery
                    images={images.clone()}
                    cursor={*session.main_gallery()}
                    on_select={handlers.main_select.clone()}
                    on_swipe={handlers.main_swipe.clone()}
                    on_open={handlers.open_lightbox.clone()}
                />
                <div class="product-info">
                    <PriceTag label={session.price_label()} ready={session.is_ready()} />
                    if session.shows_variant_picker() {
                        <VariantPicker
                            axes={session.option_axes().clone()}
                            selection={session.selection().clone()}
                            on_toggle={handlers.toggle_option.clone()}
                        />
                    }
                    <BuyPanel
                        ready={session.is_ready()}
                        warning_visible={session.warning_visible()}
                        on_buy={handlers.buy.clone()}
                    />
                </div>
            </div>
            <Description html={session.description_html()} />
            <Lightbox
                open={session.lightbox_open()}
                {name}
                {images}
                cursor={*session.lightbox_gallery()}
                on_close={handlers.close_lightbox.clone()}
                on_select={handlers.lightbox_select.clone()}
                on_step={handlers.lightbox_step.clone()}
                on_swipe={handlers.lightbox_swipe.clone()}
            />
        </main>
    }
}
