use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Decoded rich description markup, inserted without escaping.
    pub html: AttrValue,
}

#[function_component(Description)]
pub fn description(p: &Props) -> Html {
    html! {
        <section class="product-description">
            <h2>{ t("description.title") }</h2>
            <div id="product-description" class="product-description__body">
                { Html::from_html_unchecked(p.html.clone()) }
            </div>
        </section>
    }
}
