use crate::components::gallery::{ImageSlider, ThumbnailStrip};
use crate::i18n::t;
use shopfront_core::GalleryCursor;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub name: AttrValue,
    pub images: Rc<[String]>,
    pub cursor: GalleryCursor,
    pub on_close: Callback<()>,
    pub on_select: Callback<usize>,
    pub on_step: Callback<i64>,
    pub on_swipe: Callback<(f64, f64)>,
}

/// Full-screen image viewer with its own cursor.
///
/// Thumbnails render twice, once for the mobile bottom row and once for the
/// desktop side column; both follow the same cursor. A click on the backdrop
/// closes the viewer while clicks inside the content do not.
#[function_component(Lightbox)]
pub fn lightbox(p: &Props) -> Html {
    let container_ref = use_node_ref();
    {
        let container_ref = container_ref.clone();
        use_effect_with(p.open, move |is_open| {
            if *is_open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    if !p.open {
        return Html::default();
    }

    let on_backdrop = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let cb = p.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let step = |delta: i64| {
        let cb = p.on_step.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(delta);
        })
    };
    let on_keydown = {
        let close = p.on_close.clone();
        let step = p.on_step.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => {
                e.prevent_default();
                close.emit(());
            }
            "ArrowLeft" => step.emit(-1),
            "ArrowRight" => step.emit(1),
            _ => {}
        })
    };
    let thumbs = |prefix: &'static str, class: &'static str| {
        html! {
            <ThumbnailStrip
                id_prefix={prefix}
                images={p.images.clone()}
                active={p.cursor.index()}
                on_select={p.on_select.clone()}
                thumb_class="lightbox-thumbnail"
                class={classes!("lightbox-thumbs", class)}
            />
        }
    };

    html! {
        <div
            id="lightbox"
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label={p.name.clone()}
            tabindex="-1"
            onclick={on_backdrop}
            onkeydown={on_keydown}
            ref={container_ref}
        >
            <div class="lightbox__content" onclick={keep_open}>
                <button type="button" class="lightbox__close" aria-label={t("lightbox.close")} onclick={on_close_button}>
                    { "×" }
                </button>
                <div class="lightbox__stage">
                    <button type="button" class="lightbox__nav lightbox__nav--prev" aria-label={t("gallery.prev")} onclick={step(-1)}>
                        { "‹" }
                    </button>
                    <ImageSlider
                        id="lightbox-image-slider"
                        images={p.images.clone()}
                        cursor={p.cursor}
                        alt={t("gallery.zoom_alt")}
                        slide_class="lightbox-slide"
                        on_swipe={p.on_swipe.clone()}
                    />
                    <button type="button" class="lightbox__nav lightbox__nav--next" aria-label={t("gallery.next")} onclick={step(1)}>
                        { "›" }
                    </button>
                    <span id="lightbox-counter" class="image-counter">{ p.cursor.counter_label() }</span>
                </div>
                { thumbs("lightbox-thumb-mobile", "lightbox-thumbs--mobile") }
                { thumbs("lightbox-thumb-desktop", "lightbox-thumbs--desktop") }
            </div>
        </div>
    }
}
