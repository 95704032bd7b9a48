use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub ready: bool,
}

#[function_component(PriceTag)]
pub fn price_tag(p: &Props) -> Html {
    html! {
        <div id="product-price" class={classes!("product-price", p.ready.then_some("product-price--resolved"))} aria-live="polite">
            { p.label.clone() }
        </div>
    }
}
