use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// A checkout target exists for the current selection.
    pub ready: bool,
    pub warning_visible: bool,
    pub on_buy: Callback<()>,
}

#[function_component(BuyPanel)]
pub fn buy_panel(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_buy.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="buy-panel">
            <p
                id="variant-warning"
                class="variant-warning"
                role="alert"
                hidden={!p.warning_visible}
            >
                { t("variants.warning") }
            </p>
            <button
                id="buy-now-button"
                type="button"
                class={classes!("buy-now-button", (!p.ready).then_some("buy-now-button--pending"))}
                onclick={on_click}
            >
                { t("buy.now") }
            </button>
        </div>
    }
}
