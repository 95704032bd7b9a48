use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub name: AttrValue,
    pub values: Vec<String>,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_toggle: Callback<(String, String)>,
}

/// Label plus one toggle button per offered value.
#[function_component(OptionRow)]
pub fn option_row(p: &Props) -> Html {
    let buttons = p.values.iter().map(|value| {
        let is_selected = p.selected.as_deref() == Some(value.as_str());
        let onclick = {
            let cb = p.on_toggle.clone();
            let name = p.name.to_string();
            let value = value.clone();
            Callback::from(move |_: MouseEvent| cb.emit((name.clone(), value.clone())))
        };
        html! {
            <button
                key={value.clone()}
                type="button"
                class={classes!("variant-btn", is_selected.then_some("selected"))}
                data-value={value.clone()}
                aria-pressed={is_selected.to_string()}
                {onclick}
            >
                { value.clone() }
            </button>
        }
    });
    html! {
        <div class="variant-row" data-option={p.name.clone()}>
            <span class="variant-row__label">{ p.name.clone() }</span>
            <div class="variant-row__values" role="group" aria-label={p.name.clone()}>
                { for buttons }
            </div>
        </div>
    }
}
