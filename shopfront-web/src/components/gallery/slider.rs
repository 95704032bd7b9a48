use crate::input::touch_screen_x;
use shopfront_core::{GalleryCursor, SwipeTracker};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub images: Rc<[String]>,
    pub cursor: GalleryCursor,
    pub alt: AttrValue,
    #[prop_or(AttrValue::Static("gallery-slide"))]
    pub slide_class: AttrValue,
    /// Completed touch gesture as `(start_x, end_x)`.
    pub on_swipe: Callback<(f64, f64)>,
}

/// Horizontal strip of full-size images translated to the active slide.
#[function_component(ImageSlider)]
pub fn image_slider(p: &Props) -> Html {
    let tracker = use_mut_ref(SwipeTracker::default);

    let on_touch_start = {
        let tracker = tracker.clone();
        let enabled = p.cursor.accepts_swipe();
        Callback::from(move |e: TouchEvent| {
            if enabled && let Some(x) = touch_screen_x(&e) {
                tracker.borrow_mut().begin(x);
            }
        })
    };
    let on_touch_end = {
        let cb = p.on_swipe.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(x) = touch_screen_x(&e) else {
                return;
            };
            let gesture = tracker.borrow_mut().finish(x);
            if let Some(gesture) = gesture {
                cb.emit(gesture);
            }
        })
    };

    let slides = p.images.iter().enumerate().map(|(idx, src)| {
        html! {
            <div key={idx} class={classes!(p.slide_class.to_string(), p.cursor.is_active(idx).then_some("active"))}>
                <img
                    src={src.clone()}
                    alt={p.alt.clone()}
                    loading={if idx == 0 { "eager" } else { "lazy" }}
                    draggable="false"
                />
            </div>
        }
    });

    html! {
        <div class="gallery-viewport" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
            <div
                id={p.id.clone()}
                class="gallery-track"
                style={format!("transform: {};", p.cursor.transform())}
            >
                { for slides }
            </div>
        </div>
    }
}
