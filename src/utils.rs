use once_cell::sync::Lazy;
use regex::Regex;

// Longest leading decimal number, the way a browser's parseFloat reads it.
// ASCII digits only: `\d` would also match other scripts' digits.
static NUMERIC_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap());

/// Number parsing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    EmptyInput,
    InvalidNumber(String),
}

impl std::fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseNumberError::EmptyInput => write!(f, "Number cannot be empty"),
            ParseNumberError::InvalidNumber(text) => write!(f, "'{}' is not a number", text),
        }
    }
}

impl std::error::Error for ParseNumberError {}

/// Parse a number written with either "," or "." as the decimal separator.
///
/// Whichever separator occurs last is the decimal point and the other one is
/// treated as digit grouping. A comma with no period anywhere is a decimal
/// comma. Trailing garbage after the number is ignored.
///
/// # Examples
/// ```
/// use pizza_calculator::utils::parse_float_locale;
/// assert_eq!(parse_float_locale("1,000.50"), Ok(1000.5));
/// assert_eq!(parse_float_locale("1.000,50"), Ok(1000.5));
/// assert_eq!(parse_float_locale("1000,5"), Ok(1000.5));
/// assert!(parse_float_locale("abc").is_err());
/// ```
pub fn parse_float_locale(input: &str) -> Result<f64, ParseNumberError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseNumberError::EmptyInput);
    }

    let normalized = normalize_decimal_separator(trimmed);
    NUMERIC_PREFIX_REGEX
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseNumberError::InvalidNumber(trimmed.to_string()))
}

/// Rewrite `text` so that "." is the only decimal separator and grouping
/// separators are gone.
fn normalize_decimal_separator(text: &str) -> String {
    let last_period = text.rfind('.');
    let last_comma = text.rfind(',');

    match (last_period, last_comma) {
        (Some(period), Some(comma)) if period > comma => text.replace(',', ""),
        (_, Some(_)) => {
            let stripped = text.replace('.', "");
            match stripped.rfind(',') {
                Some(idx) => format!("{}.{}", &stripped[..idx], &stripped[idx + 1..]),
                None => stripped,
            }
        }
        (_, None) => text.to_string(),
    }
}

/// Pull `value` into `[min, max]`; either bound may be absent.
pub fn clamp_optional(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut clamped = value;
    if let Some(min_val) = min {
        clamped = clamped.max(min_val);
    }
    if let Some(max_val) = max {
        clamped = clamped.min(max_val);
    }
    clamped
}

/// Precision settings for locale-aware number display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
    pub use_grouping: bool,
}

impl FormatOptions {
    pub const fn new(min_fraction_digits: u8, max_fraction_digits: u8) -> Self {
        Self {
            min_fraction_digits,
            max_fraction_digits,
            use_grouping: true,
        }
    }

    pub const fn without_grouping(self) -> Self {
        Self {
            use_grouping: false,
            ..self
        }
    }

    /// Upper fraction bound, never below the lower one.
    fn effective_max(&self) -> u8 {
        self.max_fraction_digits.max(self.min_fraction_digits)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(0, 3)
    }
}

/// Render `value` for display. Non-finite values render as an empty string.
///
/// In the browser this goes through `Intl.NumberFormat` with the user's
/// locale; elsewhere an en-US style rendering is used.
pub fn format_locale(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return String::new();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(text) = intl::format(value, options) {
            return text;
        }
    }

    format_en(value, options)
}

/// en-US style rendering: "," groups thousands, "." separates decimals.
pub fn format_en(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let max_digits = options.effective_max() as usize;
    let min_digits = options.min_fraction_digits as usize;
    let fixed = format!("{:.*}", max_digits, round_ties_away(value.abs(), max_digits));

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), ""),
    };
    let mut frac = frac_part.to_string();
    while frac.len() > min_digits && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    if options.use_grouping {
        out.push_str(&group_thousands(int_part));
    } else {
        out.push_str(int_part);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Nudge an exact tie at `digits` fraction digits one ulp up, so fixed-point
/// formatting (ties to even) rounds it away from zero like `Intl.NumberFormat`.
fn round_ties_away(abs: f64, digits: usize) -> f64 {
    // A tie is exactly representable only as an odd multiple of 2^-(digits + 1).
    let scaled = abs * 2f64.powi(digits as i32 + 1);
    if scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0 {
        f64::from_bits(abs.to_bits() + 1)
    } else {
        abs
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(target_arch = "wasm32")]
mod intl {
    use super::FormatOptions;
    use js_sys::{Array, Intl, Object, Reflect};
    use wasm_bindgen::JsValue;

    pub(super) fn format(value: f64, options: &FormatOptions) -> Option<String> {
        let js_options = Object::new();
        let set = |key: &str, val: JsValue| Reflect::set(&js_options, &JsValue::from_str(key), &val);
        set(
            "minimumFractionDigits",
            JsValue::from(options.min_fraction_digits),
        )
        .ok()?;
        set(
            "maximumFractionDigits",
            JsValue::from(options.effective_max()),
        )
        .ok()?;
        set("useGrouping", JsValue::from_bool(options.use_grouping)).ok()?;

        let formatter = Intl::NumberFormat::new(&Array::new(), &js_options);
        formatter
            .format()
            .call1(&formatter, &JsValue::from_f64(value))
            .ok()?
            .as_string()
    }
}
