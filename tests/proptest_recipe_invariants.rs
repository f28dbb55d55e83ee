//! Property-based invariant tests for the dough formula and the query codec.
//!
//! 1. Total weight is exactly ball count × ball weight
//! 2. Ingredient weights add up to the total
//! 3. Query round-trip reproduces every field
//! 4. Double round-trip equals single round-trip
//! 5. Unknown keys never change the decoded values
//! 6. Locale parsing agrees across both grouping conventions
//! 7. Committed edit-field values always respect the bounds

use pizza_calculator::edit_field::{FieldConfig, NumericEditField};
use pizza_calculator::query::{deserialize, serialize};
use pizza_calculator::utils::{parse_float_locale, FormatOptions};
use pizza_calculator::{calculate_weights, Field, ParameterSet};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_params() -> impl Strategy<Value = ParameterSet> {
    (
        1u32..200,
        1.0f64..2000.0,
        0.0f64..=100.0,
        1.0f64..45.0,
        0.5f64..96.0,
        0.0f64..100.0,
        0.0f64..100.0,
    )
        .prop_map(
            |(ball_count, ball_weight_grams, hydration_perc, temp, time, salt, oil)| {
                ParameterSet {
                    ball_count,
                    ball_weight_grams,
                    hydration_perc,
                    levitation_temperature_c: temp,
                    levitation_time_hrs: time,
                    salt_gpl: salt,
                    oil_gpl: oil,
                }
            },
        )
}

/// en-US style text for `whole` thousands and a two-digit fraction.
fn grouped(whole: u32, frac: u32, group: char, decimal: char) -> String {
    let digits = whole.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(group);
        }
        out.push(ch);
    }
    format!("{}{}{:02}", out, decimal, frac)
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Formula
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_is_count_times_weight(params in arb_params()) {
        let weights = calculate_weights(&params);
        prop_assert_eq!(
            weights.total_weight,
            f64::from(params.ball_count) * params.ball_weight_grams
        );
    }

    #[test]
    fn ingredients_sum_to_total(params in arb_params()) {
        let w = calculate_weights(&params);
        let sum = w.flour_weight + w.water_weight + w.salt_weight + w.oil_weight;
        prop_assert!(
            (sum - w.total_weight).abs() <= w.total_weight * 1e-12,
            "sum {} vs total {}", sum, w.total_weight
        );
    }

    #[test]
    fn weights_are_non_negative(params in arb_params()) {
        let w = calculate_weights(&params);
        for value in [w.total_weight, w.flour_weight, w.water_weight, w.salt_weight, w.oil_weight] {
            prop_assert!(value >= 0.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–5. Query codec
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn query_round_trip_is_exact(params in arb_params()) {
        let decoded = deserialize(&serialize(&params));
        for field in Field::ALL {
            prop_assert_eq!(decoded.get(field), Some(params.get(field)), "field {}", field);
        }
        prop_assert_eq!(decoded.merge_over(ParameterSet::default()), params);
    }

    #[test]
    fn double_round_trip_is_idempotent(params in arb_params()) {
        let once = deserialize(&serialize(&params)).merge_over(ParameterSet::default());
        let twice = deserialize(&serialize(&once)).merge_over(ParameterSet::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unknown_keys_are_ignored(params in arb_params(), junk in "[a-z]{1,8}", value in "[ -~]{0,8}") {
        prop_assume!(Field::from_key(&junk).is_none());
        let base = serialize(&params);
        let noisy = format!(
            "{}&{}",
            base,
            form_urlencoded::Serializer::new(String::new())
                .append_pair(&junk, &value)
                .finish()
        );
        prop_assert_eq!(deserialize(&noisy), deserialize(&base));
    }

    #[test]
    fn arbitrary_query_never_yields_non_finite(query in ".{0,64}") {
        for (_, value) in deserialize(&query).iter() {
            prop_assert!(value.is_finite());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–7. Locale parsing and edit fields
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grouping_conventions_agree(whole in 0u32..10_000_000, frac in 0u32..100) {
        let expected = f64::from(whole) + f64::from(frac) / 100.0;
        let en = parse_float_locale(&grouped(whole, frac, ',', '.')).unwrap();
        let eu = parse_float_locale(&grouped(whole, frac, '.', ',')).unwrap();
        prop_assert!((en - expected).abs() < 1e-6);
        prop_assert_eq!(en, eu);
    }

    #[test]
    fn committed_value_is_within_bounds(text in "[-0-9.,]{1,10}", min in 0.0f64..50.0, span in 0.0f64..100.0) {
        let config = FieldConfig::new(FormatOptions::new(0, 2))
            .with_min(min)
            .with_max(min + span);
        let mut field = NumericEditField::new(min, config);
        field.input(text);
        if let Some(value) = field.blur() {
            prop_assert!(value >= min && value <= min + span);
        }
        prop_assert!(!field.state().is_editing());
    }
}
