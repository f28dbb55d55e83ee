use pizza_calculator::query::BrowserLocation;
use pizza_calculator::{Calculator, Field};
use std::ops::Deref;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Events the calculator state reacts to.
pub enum CalculatorAction {
    /// Page mounted: read the address once.
    Mount,
    /// Keystroke in a field, with the raw text.
    Input(Field, String),
    /// Focus left a field.
    Blur(Field),
    /// "Reset Values" button.
    Reset,
}

/// Reducer state wrapping the calculator bound to the browser address.
pub struct CalculatorState(Calculator<BrowserLocation>);

impl Default for CalculatorState {
    fn default() -> Self {
        Self(Calculator::new(BrowserLocation))
    }
}

impl Deref for CalculatorState {
    type Target = Calculator<BrowserLocation>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for CalculatorState {
    type Action = CalculatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut calculator = self.0.clone();
        match action {
            CalculatorAction::Mount => calculator.mount(),
            CalculatorAction::Input(field, text) => calculator.input(field, text),
            CalculatorAction::Blur(field) => {
                calculator.blur(field);
            }
            CalculatorAction::Reset => calculator.reset(),
        }
        Rc::new(Self(calculator))
    }
}

/// Holds the text and callbacks for one numeric input.
#[derive(Clone)]
pub struct NumericInputHandle {
    /// Text to display, either the formatted value or what is being typed.
    pub text: String,
    /// Callback for the input's `oninput` event. Only updates the buffer.
    pub on_text_input: Callback<InputEvent>,
    /// Callback for the input's `onblur` event. Parses and commits.
    pub on_commit: Callback<FocusEvent>,
}

/// Calculator state for the page. Loads the address once after the first
/// render and keeps it updated afterwards.
#[hook]
pub fn use_calculator() -> UseReducerHandle<CalculatorState> {
    let calculator = use_reducer(CalculatorState::default);

    {
        let calculator = calculator.clone();
        use_effect_with((), move |_| {
            calculator.dispatch(CalculatorAction::Mount);
            || ()
        });
    }

    calculator
}

/// Wire one field of `calculator` to an input element.
pub fn numeric_input_handle(
    calculator: &UseReducerHandle<CalculatorState>,
    field: Field,
) -> NumericInputHandle {
    let on_text_input = {
        let calculator = calculator.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            calculator.dispatch(CalculatorAction::Input(field, input.value()));
        })
    };

    let on_commit = {
        let calculator = calculator.clone();
        Callback::from(move |_: FocusEvent| {
            calculator.dispatch(CalculatorAction::Blur(field));
        })
    };

    NumericInputHandle {
        text: calculator.field(field).text().to_string(),
        on_text_input,
        on_commit,
    }
}
