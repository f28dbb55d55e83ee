//! Pizza dough calculator core.
//!
//! Holds the recipe parameter model, the dough formula, the query-string
//! codec and the numeric edit-field state machine. Everything in here is
//! pure or goes through the [`query::Location`] seam, so it builds and is
//! tested on the native target as well as on `wasm32`.

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod calculator;
pub mod config;
pub mod dough;
pub mod edit_field;
pub mod flour;
pub mod query;
pub mod utils;

pub use calculator::Calculator;
pub use dough::{calculate_weights, WeightSet};

/// The authoritative recipe configuration.
///
/// Missing fields fall back to the defaults when deserialized, so a host page
/// can hand over a partial object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    pub ball_count: u32,
    pub ball_weight_grams: f64,
    pub hydration_perc: f64,
    pub levitation_temperature_c: f64,
    pub levitation_time_hrs: f64,
    pub salt_gpl: f64,
    pub oil_gpl: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            ball_count: config::DEFAULT_BALL_COUNT,
            ball_weight_grams: config::DEFAULT_BALL_WEIGHT_GRAMS,
            hydration_perc: config::DEFAULT_HYDRATION_PERC,
            levitation_temperature_c: config::DEFAULT_LEVITATION_TEMPERATURE_C,
            levitation_time_hrs: config::DEFAULT_LEVITATION_TIME_HRS,
            salt_gpl: config::DEFAULT_SALT_GPL,
            oil_gpl: config::DEFAULT_OIL_GPL,
        }
    }
}

impl ParameterSet {
    /// Read a field as a plain number.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::BallCount => f64::from(self.ball_count),
            Field::BallWeightGrams => self.ball_weight_grams,
            Field::HydrationPerc => self.hydration_perc,
            Field::LevitationTemperatureC => self.levitation_temperature_c,
            Field::LevitationTimeHrs => self.levitation_time_hrs,
            Field::SaltGpl => self.salt_gpl,
            Field::OilGpl => self.oil_gpl,
        }
    }

    /// Overwrite a field. The ball count is rounded to the nearest whole
    /// ball and saturates at the bounds of `u32`.
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::BallCount => self.ball_count = value.round() as u32,
            Field::BallWeightGrams => self.ball_weight_grams = value,
            Field::HydrationPerc => self.hydration_perc = value,
            Field::LevitationTemperatureC => self.levitation_temperature_c = value,
            Field::LevitationTimeHrs => self.levitation_time_hrs = value,
            Field::SaltGpl => self.salt_gpl = value,
            Field::OilGpl => self.oil_gpl = value,
        }
    }
}

/// The seven recipe fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    BallCount,
    BallWeightGrams,
    HydrationPerc,
    LevitationTemperatureC,
    LevitationTimeHrs,
    SaltGpl,
    OilGpl,
}

impl Field {
    pub const COUNT: usize = 7;

    pub const ALL: [Field; Field::COUNT] = [
        Field::BallCount,
        Field::BallWeightGrams,
        Field::HydrationPerc,
        Field::LevitationTemperatureC,
        Field::LevitationTimeHrs,
        Field::SaltGpl,
        Field::OilGpl,
    ];

    /// Query-string key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::BallCount => "ballCount",
            Field::BallWeightGrams => "ballWeightGrams",
            Field::HydrationPerc => "hydrationPerc",
            Field::LevitationTemperatureC => "levitationTemperatureC",
            Field::LevitationTimeHrs => "levitationTimeHrs",
            Field::SaltGpl => "saltGpl",
            Field::OilGpl => "oilGpl",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Human readable label used next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::BallCount => "Dough Balls:",
            Field::BallWeightGrams => "Dough Ball Weight (g):",
            Field::HydrationPerc => "Hydration (%):",
            Field::LevitationTemperatureC => "Levitation Temperature (C):",
            Field::LevitationTimeHrs => "Levitation Time (h):",
            Field::SaltGpl => "Salt (Grams per Liter):",
            Field::OilGpl => "Oil (Grams per Liter):",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parameter record where every field may be absent, e.g. the result of
/// decoding a query string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialParameterSet {
    values: [Option<f64>; Field::COUNT],
}

impl PartialParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[field.index()]
    }

    pub fn insert(&mut self, field: Field, value: f64) {
        self.values[field.index()] = Some(value);
    }

    pub fn remove(&mut self, field: Field) -> Option<f64> {
        self.values[field.index()].take()
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present entries in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// Overlay the present, finite values onto `base`.
    pub fn merge_over(&self, base: ParameterSet) -> ParameterSet {
        let mut merged = base;
        for field in Field::ALL {
            if let Some(value) = self.get(field).filter(|v| v.is_finite()) {
                merged.set(field, value);
            }
        }
        merged
    }
}

/// Formula entry point for host pages.
///
/// Takes a (possibly partial) camelCase parameter object and returns the
/// camelCase weight object, or an error string if the input could not be
/// deserialized.
#[wasm_bindgen(js_name = calculateWeights)]
pub fn calculate_weights_js(params_js: JsValue) -> JsValue {
    let params: ParameterSet = match serde_wasm_bindgen::from_value(params_js) {
        Ok(p) => p,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize parameters: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    serde_wasm_bindgen::to_value(&calculate_weights(&params)).unwrap_or(JsValue::NULL)
}
