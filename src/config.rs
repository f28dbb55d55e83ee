//! Application-level configuration constants.

use crate::edit_field::FieldConfig;
use crate::utils::FormatOptions;
use crate::Field;

// Default recipe
pub const DEFAULT_BALL_COUNT: u32 = 4;
pub const DEFAULT_BALL_WEIGHT_GRAMS: f64 = 250.0;
pub const DEFAULT_HYDRATION_PERC: f64 = 65.0;
pub const DEFAULT_LEVITATION_TEMPERATURE_C: f64 = 20.0;
pub const DEFAULT_LEVITATION_TIME_HRS: f64 = 6.0;
pub const DEFAULT_SALT_GPL: f64 = 40.0;
pub const DEFAULT_OIL_GPL: f64 = 0.0;

// Min/Max limits for input fields
pub const MIN_BALL_COUNT: f64 = 1.0;
pub const MAX_BALL_COUNT: f64 = 1000.0;
pub const MIN_BALL_WEIGHT_GRAMS: f64 = 1.0;
pub const MIN_HYDRATION_PERC: f64 = 0.0;
pub const MAX_HYDRATION_PERC: f64 = 100.0;
pub const MIN_LEVITATION_TEMPERATURE_C: f64 = 0.0;
pub const MAX_LEVITATION_TEMPERATURE_C: f64 = 50.0;
pub const MIN_LEVITATION_TIME_HRS: f64 = 0.0;
pub const MIN_DOSAGE_GPL: f64 = 0.0;
pub const MAX_DOSAGE_GPL: f64 = 200.0;

// Input precision. Inputs never group digits: "1,000" would read back as 1.
pub const WHOLE_INPUT: FormatOptions = FormatOptions::new(0, 0).without_grouping();
pub const DECIMAL_INPUT: FormatOptions = FormatOptions::new(0, 2).without_grouping();

// Output precision
pub const TOTAL_WEIGHT_FORMAT: FormatOptions = FormatOptions::new(0, 1);
pub const FLOUR_WATER_FORMAT: FormatOptions = FormatOptions::new(0, 0);
pub const SALT_OIL_FORMAT: FormatOptions = FormatOptions::new(1, 1);
pub const YEAST_FORMAT: FormatOptions = FormatOptions::new(1, 1);
pub const PROTEIN_FORMAT: FormatOptions = FormatOptions::new(1, 1);

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Edit limits and display precision for each input field.
pub fn field_config(field: Field) -> FieldConfig {
    match field {
        Field::BallCount => FieldConfig::new(WHOLE_INPUT)
            .with_min(MIN_BALL_COUNT)
            .with_max(MAX_BALL_COUNT),
        Field::BallWeightGrams => FieldConfig::new(DECIMAL_INPUT).with_min(MIN_BALL_WEIGHT_GRAMS),
        Field::HydrationPerc => FieldConfig::new(DECIMAL_INPUT)
            .with_min(MIN_HYDRATION_PERC)
            .with_max(MAX_HYDRATION_PERC),
        Field::LevitationTemperatureC => FieldConfig::new(DECIMAL_INPUT)
            .with_min(MIN_LEVITATION_TEMPERATURE_C)
            .with_max(MAX_LEVITATION_TEMPERATURE_C),
        Field::LevitationTimeHrs => FieldConfig::new(DECIMAL_INPUT).with_min(MIN_LEVITATION_TIME_HRS),
        Field::SaltGpl | Field::OilGpl => FieldConfig::new(DECIMAL_INPUT)
            .with_min(MIN_DOSAGE_GPL)
            .with_max(MAX_DOSAGE_GPL),
    }
}
