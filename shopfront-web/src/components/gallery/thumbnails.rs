use crate::i18n::{t, tr};
use crate::input::{OVERFLOW_CHECK_DELAY_MS, thumbnail_scroll_step};
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Prefix of the per-thumbnail element ids, `{prefix}-{index}`.
    pub id_prefix: AttrValue,
    pub images: Rc<[String]>,
    pub active: usize,
    pub on_select: Callback<usize>,
    #[prop_or(AttrValue::Static("thumbnail"))]
    pub thumb_class: AttrValue,
    /// Show scroll arrows once the strip overflows its container.
    #[prop_or_default]
    pub scroll_arrows: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[must_use]
pub fn thumb_id(prefix: &str, idx: usize) -> String {
    format!("{prefix}-{idx}")
}

fn thumb_label(idx: usize) -> String {
    let n = (idx + 1).to_string();
    let mut vars = BTreeMap::new();
    vars.insert("n", n.as_str());
    tr("gallery.thumb_alt", Some(&vars))
}

fn scroll_strip(scroller: &NodeRef, thumb_class: &str, direction: f64) {
    let Some(scroller) = scroller.cast::<Element>() else {
        return;
    };
    let width = scroller
        .query_selector(&format!(".{thumb_class}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0, |el| el.offset_width());
    scroller.scroll_by_with_x_and_y(direction * thumbnail_scroll_step(width), 0.0);
}

#[function_component(ThumbnailStrip)]
pub fn thumbnail_strip(p: &Props) -> Html {
    let overflowing = use_state(|| false);
    let scroller_ref = use_node_ref();
    let track_ref = use_node_ref();

    {
        let overflowing = overflowing.clone();
        let scroller_ref = scroller_ref.clone();
        let track_ref = track_ref.clone();
        let enabled = p.scroll_arrows;
        use_effect_with(p.images.len(), move |_| {
            if enabled {
                wasm_bindgen_futures::spawn_local(async move {
                    if crate::dom::sleep_ms(OVERFLOW_CHECK_DELAY_MS).await.is_err() {
                        return;
                    }
                    if let (Some(scroller), Some(track)) =
                        (scroller_ref.cast::<Element>(), track_ref.cast::<Element>())
                    {
                        overflowing.set(track.scroll_width() > scroller.client_width());
                    }
                });
            }
            || {}
        });
    }

    {
        let active_id = thumb_id(&p.id_prefix, p.active);
        use_effect_with(active_id, |id| {
            crate::dom::scroll_into_view_nearest(id);
            || {}
        });
    }

    let arrow = |direction: f64, class: &'static str, label: String, glyph: &'static str| {
        let scroller_ref = scroller_ref.clone();
        let thumb_class = p.thumb_class.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            scroll_strip(&scroller_ref, &thumb_class, direction);
        });
        html! {
            <button type="button" class={classes!("thumb-scroll", class)} aria-label={label} {onclick}>
                { glyph }
            </button>
        }
    };
    let show_arrows = p.scroll_arrows && *overflowing;

    let thumbs = p.images.iter().enumerate().map(|(idx, src)| {
        let is_active = idx == p.active;
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                cb.emit(idx);
            })
        };
        let label = thumb_label(idx);
        html! {
            <button
                key={idx}
                type="button"
                id={thumb_id(&p.id_prefix, idx)}
                class={classes!(p.thumb_class.to_string(), is_active.then_some("active"))}
                aria-label={label.clone()}
                aria-current={is_active.then_some("true")}
                {onclick}
            >
                <img src={src.clone()} alt={label} loading="lazy" draggable="false" />
            </button>
        }
    });

    html! {
        <div class={classes!("thumb-strip", p.class.clone())}>
            if show_arrows {
                { arrow(-1.0, "thumb-scroll--prev", t("gallery.scroll_prev"), "‹") }
            }
            <div class="thumb-scroller" ref={scroller_ref.clone()}>
                <div class="thumb-track" ref={track_ref}>
                    { for thumbs }
                </div>
            </div>
            if show_arrows {
                { arrow(1.0, "thumb-scroll--next", t("gallery.scroll_next"), "›") }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_ids_are_prefixed_and_indexed() {
        assert_eq!(thumb_id("main-thumb", 0), "main-thumb-0");
        assert_eq!(thumb_id("lightbox-thumb-desktop", 12), "lightbox-thumb-desktop-12");
    }

    #[test]
    fn labels_are_one_based() {
        crate::i18n::set_lang("en");
        assert_eq!(thumb_label(0), "Thumbnail 1");
        assert_eq!(thumb_label(3), "Thumbnail 4");
    }
}
