//! Main module for the Pizza Calculator application using Yew.
//! Wires the calculator state to the inputs and the computed weights.

use pizza_calculator::config::{
    self, FLOUR_WATER_FORMAT, SALT_OIL_FORMAT, TOTAL_WEIGHT_FORMAT, YEAST_FORMAT,
};
use pizza_calculator::Field;
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_flour_recommendation, render_weight, NumericInput};
use hooks::{numeric_input_handle, use_calculator, CalculatorAction, CalculatorState};

/// Renders the input bound to `field`.
fn render_field(calculator: &UseReducerHandle<CalculatorState>, field: Field) -> Html {
    let input = numeric_input_handle(calculator, field);
    html! {
        <NumericInput
            id={field.key()}
            label={field.label()}
            value={input.text}
            oninput={input.on_text_input}
            onblur={input.on_commit}
        />
    }
}

/// Primary application component.
#[function_component(Main)]
fn main_component() -> Html {
    let calculator = use_calculator();
    let weights = *calculator.weights();

    let on_reset = {
        let calculator = calculator.clone();
        Callback::from(move |_: MouseEvent| calculator.dispatch(CalculatorAction::Reset))
    };

    html! {
        <div class="container">
            <h1 class="title">{ "🍕 Pizza Calculator 🍕" }</h1>

            <div class="calculator">
                { render_field(&calculator, Field::BallCount) }
                { render_field(&calculator, Field::BallWeightGrams) }
                { render_weight("Dough Total (g):", weights.total_weight, &TOTAL_WEIGHT_FORMAT) }

                { render_field(&calculator, Field::HydrationPerc) }
                { render_weight("Flour (g):", weights.flour_weight, &FLOUR_WATER_FORMAT) }
                { render_weight("Water (g):", weights.water_weight, &FLOUR_WATER_FORMAT) }

                { render_field(&calculator, Field::SaltGpl) }
                { render_field(&calculator, Field::OilGpl) }
                { render_weight("Salt (g):", weights.salt_weight, &SALT_OIL_FORMAT) }
                { render_weight("Oil (g):", weights.oil_weight, &SALT_OIL_FORMAT) }

                { render_field(&calculator, Field::LevitationTemperatureC) }
                { render_field(&calculator, Field::LevitationTimeHrs) }
                { render_flour_recommendation(calculator.flour_recommendation()) }

                { render_weight("Fresh Yeast (g):", weights.yeast_weight, &YEAST_FORMAT) }

                <button class="btn-secondary" onclick={on_reset}>{ "Reset Values" }</button>
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders `Main`.
fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(config::LOG_LEVEL);
    yew::Renderer::<Main>::new().render();
}
