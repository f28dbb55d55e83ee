//! Dough weight formula.
//!
//! Weights are derived from the ratio of each ingredient to flour. The yeast
//! amount comes from the RafCalc "Japi2" regression
//! (<https://pizzanapo.fr/topic/3-rafcalc/>), whose coefficients are kept
//! exactly as published.

use crate::ParameterSet;
use serde::{Deserialize, Serialize};

/// Ingredient weights in grams, derived from a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSet {
    pub total_weight: f64,
    pub flour_weight: f64,
    pub water_weight: f64,
    pub salt_weight: f64,
    pub oil_weight: f64,
    /// Fresh yeast. Not finite when the regression's denominator vanishes or
    /// turns negative.
    pub yeast_weight: f64,
}

/// Compute the ingredient weights for `params`.
///
/// Never panics; degenerate inputs produce `NaN` or infinities which the
/// display layer renders as empty text.
pub fn calculate_weights(params: &ParameterSet) -> WeightSet {
    let flour_relative = 1.0;
    let water_relative = params.hydration_perc / 100.0;
    let salt_relative = (params.salt_gpl / 1000.0) * water_relative;
    let oil_relative = (params.oil_gpl / 1000.0) * water_relative;
    let total_relative = water_relative + flour_relative + salt_relative + oil_relative;

    let total_weight = f64::from(params.ball_count) * params.ball_weight_grams;
    let flour_weight = total_weight * (flour_relative / total_relative);
    let water_weight = total_weight * (water_relative / total_relative);
    let salt_weight = total_weight * (salt_relative / total_relative);
    let oil_weight = total_weight * (oil_relative / total_relative);

    WeightSet {
        total_weight,
        flour_weight,
        water_weight,
        salt_weight,
        oil_weight,
        yeast_weight: yeast_weight(params, flour_weight),
    }
}

/// Fresh yeast in grams for `flour_weight` grams of flour.
fn yeast_weight(params: &ParameterSet, flour_weight: f64) -> f64 {
    let hydration = params.hydration_perc;
    let hydration_term = -80.0 + 4.2 * hydration - 0.0305 * hydration.powi(2);
    let denominator = hydration_term
        * params.levitation_temperature_c.powf(2.5)
        * params.levitation_time_hrs.powf(1.2);

    (flour_weight * 2250.0 * (1.0 + params.salt_gpl / 200.0) * (1.0 + params.oil_gpl / 300.0))
        / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recipe_weights() {
        let weights = calculate_weights(&ParameterSet::default());
        assert_eq!(weights.total_weight, 1000.0);
        assert!((weights.flour_weight - 596.66).abs() < 0.01, "{}", weights.flour_weight);
        assert!((weights.water_weight - 387.83).abs() < 0.01, "{}", weights.water_weight);
        assert!((weights.salt_weight - 15.51).abs() < 0.01, "{}", weights.salt_weight);
        assert_eq!(weights.oil_weight, 0.0);
        assert_eq!(weights.flour_weight.round(), 597.0);
        assert_eq!(weights.water_weight.round(), 388.0);
    }

    #[test]
    fn default_recipe_yeast_matches_closed_form() {
        let weights = calculate_weights(&ParameterSet::default());
        let expected = (weights.flour_weight * 2250.0 * (1.0 + 40.0 / 200.0) * (1.0 + 0.0 / 300.0))
            / ((-80.0 + 4.2 * 65.0 - 0.0305 * 65.0 * 65.0)
                * 20f64.powf(2.5)
                * 6f64.powf(1.2));
        assert!((weights.yeast_weight - expected).abs() <= expected * 1e-12);
        assert!(weights.yeast_weight > 1.0 && weights.yeast_weight < 2.0);
    }

    #[test]
    fn oil_adds_to_the_dough() {
        let params = ParameterSet {
            oil_gpl: 30.0,
            ..ParameterSet::default()
        };
        let weights = calculate_weights(&params);
        assert!(weights.oil_weight > 0.0);
        let sum = weights.flour_weight
            + weights.water_weight
            + weights.salt_weight
            + weights.oil_weight;
        assert!((sum - weights.total_weight).abs() < 1e-9);
    }

    #[test]
    fn zero_time_gives_non_finite_yeast() {
        let params = ParameterSet {
            levitation_time_hrs: 0.0,
            ..ParameterSet::default()
        };
        let weights = calculate_weights(&params);
        assert!(!weights.yeast_weight.is_finite());
        assert_eq!(weights.total_weight, 1000.0);
    }

    #[test]
    fn negative_temperature_gives_nan_yeast() {
        let params = ParameterSet {
            levitation_temperature_c: -5.0,
            ..ParameterSet::default()
        };
        assert!(calculate_weights(&params).yeast_weight.is_nan());
    }

    #[test]
    fn low_hydration_flips_the_regression_sign() {
        // -80 + 4.2h - 0.0305h² is negative below roughly 21%.
        let params = ParameterSet {
            hydration_perc: 10.0,
            ..ParameterSet::default()
        };
        assert!(calculate_weights(&params).yeast_weight < 0.0);
    }

    #[test]
    fn weights_serialize_camel_case() {
        let json = serde_json::to_value(calculate_weights(&ParameterSet::default())).unwrap();
        assert_eq!(json["totalWeight"], 1000.0);
        assert!(json.get("yeastWeight").is_some());
    }
}
