//! Pure Yew view components for the Pizza Calculator UI.

use pizza_calculator::config::PROTEIN_FORMAT;
use pizza_calculator::flour::FlourStrength;
use pizza_calculator::utils::{format_locale, FormatOptions};
use yew::prelude::*;

/// Labeled free-text numeric input. The text is owned by the caller.
#[derive(Properties, PartialEq)]
pub struct NumericInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    pub onblur: Callback<FocusEvent>,
}

#[function_component(NumericInput)]
pub fn numeric_input(props: &NumericInputProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                type="text"
                inputmode="decimal"
                class="numeric-input"
                id={props.id.clone()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                onblur={props.onblur.clone()}
            />
        </div>
    }
}

/// Renders one computed weight. Non-finite values show as an empty cell.
pub fn render_weight(label: &str, grams: f64, format: &FormatOptions) -> Html {
    html! {
        <div class="output-row">
            <span class="output-label">{ label.to_string() }</span>
            <span class="output-value">{ format_locale(grams, format) }</span>
        </div>
    }
}

/// Renders the suggested flour strength, if the rise is long enough to need one.
pub fn render_flour_recommendation(recommendation: Option<FlourStrength>) -> Html {
    match recommendation {
        Some(flour) => html! {
            <div class="output-row flour-recommendation">
                <span class="output-label">{ "Suggested Flour:" }</span>
                <span class="output-value">{
                    format!("W {} ({}% protein)", flour.w, format_locale(flour.protein_perc, &PROTEIN_FORMAT))
                }</span>
            </div>
        },
        None => html! {},
    }
}
