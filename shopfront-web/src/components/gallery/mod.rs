mod slider;
mod thumbnails;

pub use slider::ImageSlider;
pub use thumbnails::{ThumbnailStrip, thumb_id};

use crate::i18n::t;
use shopfront_core::GalleryCursor;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub images: Rc<[String]>,
    pub cursor: GalleryCursor,
    pub on_select: Callback<usize>,
    pub on_swipe: Callback<(f64, f64)>,
    pub on_open: Callback<()>,
}

/// Main image slider with its counter badge and thumbnail strip.
#[function_component(MainGallery)]
pub fn main_gallery(p: &Props) -> Html {
    let open = {
        let cb = p.on_open.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let open_with_key = {
        let cb = p.on_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    html! {
        <section class="product-gallery">
            <div
                id="main-image-area"
                class="main-image-area"
                role="button"
                tabindex="0"
                aria-label={t("gallery.open")}
                onclick={open}
                onkeydown={open_with_key}
            >
                <ImageSlider
                    id="main-image-slider"
                    images={p.images.clone()}
                    cursor={p.cursor}
                    alt={t("gallery.main_alt")}
                    on_swipe={p.on_swipe.clone()}
                />
                <span id="main-image-counter" class="image-counter">{ p.cursor.counter_label() }</span>
            </div>
            <ThumbnailStrip
                id_prefix="main-thumb"
                images={p.images.clone()}
                active={p.cursor.index()}
                on_select={p.on_select.clone()}
                scroll_arrows=true
                class="main-thumbs"
            />
        </section>
    }
}
