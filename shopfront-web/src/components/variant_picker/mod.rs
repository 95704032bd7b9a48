mod option_row;

pub use option_row::OptionRow;

use shopfront_core::{OptionAxes, Selection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub axes: OptionAxes,
    pub selection: Selection,
    /// Emits `(option name, value)` for every button press.
    pub on_toggle: Callback<(String, String)>,
}

#[function_component(VariantPicker)]
pub fn variant_picker(p: &Props) -> Html {
    html! {
        <div id="variant-options" class="variant-options">
            { for p.axes.iter().map(|axis| html! {
                <OptionRow
                    key={axis.name.clone()}
                    name={AttrValue::from(axis.name.clone())}
                    values={axis.values.clone()}
                    selected={p.selection.get(&axis.name).map(|v| AttrValue::from(v.to_string()))}
                    on_toggle={p.on_toggle.clone()}
                />
            }) }
        </div>
    }
}
