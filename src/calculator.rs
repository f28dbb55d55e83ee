//! Form orchestration: one parameter record, its derived weights, an edit
//! field per parameter and the address it is mirrored into.

use crate::config;
use crate::edit_field::NumericEditField;
use crate::flour::{recommend_flour, FlourStrength};
use crate::query::{load_from_location, store_to_location, Location};
use crate::{calculate_weights, Field, ParameterSet, WeightSet};
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct Calculator<L: Location> {
    location: L,
    params: ParameterSet,
    weights: WeightSet,
    fields: [NumericEditField; Field::COUNT],
}

impl<L: Location> Calculator<L> {
    /// Start from the default recipe. The address is neither read nor
    /// written until [`Calculator::mount`].
    pub fn new(location: L) -> Self {
        let params = ParameterSet::default();
        Self {
            location,
            weights: calculate_weights(&params),
            fields: Field::ALL
                .map(|field| NumericEditField::new(params.get(field), config::field_config(field))),
            params,
        }
    }

    /// Seed the record from the address, then write the full record back.
    pub fn mount(&mut self) {
        let loaded = load_from_location(&self.location);
        self.params = loaded.merge_over(self.params);
        for field in Field::ALL {
            self.fields[field.index()].sync(self.params.get(field));
        }
        info!("Mounted with {:?}", self.params);
        self.commit();
    }

    /// A keystroke in `field`.
    pub fn input(&mut self, field: Field, text: impl Into<String>) {
        self.fields[field.index()].input(text);
    }

    /// Focus left `field`. Returns whether a value was committed.
    pub fn blur(&mut self, field: Field) -> bool {
        let Some(value) = self.fields[field.index()].blur() else {
            return false;
        };
        self.params.set(field, value);
        // The record may round (ball count), show what was actually stored.
        self.fields[field.index()].reset(self.params.get(field));
        debug!("{} committed as {}", field, self.params.get(field));
        self.commit();
        true
    }

    /// Programmatic change of one field. Non-finite values are ignored.
    pub fn set(&mut self, field: Field, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.params.set(field, value);
        self.fields[field.index()].sync(self.params.get(field));
        self.commit();
    }

    /// Back to the default recipe, every field forced to Idle.
    pub fn reset(&mut self) {
        self.params = ParameterSet::default();
        for field in Field::ALL {
            self.fields[field.index()].reset(self.params.get(field));
        }
        info!("Reset to default values");
        self.commit();
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    pub fn field(&self, field: Field) -> &NumericEditField {
        &self.fields[field.index()]
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Flour strength suited to the current rising time.
    pub fn flour_recommendation(&self) -> Option<FlourStrength> {
        let hours = self.params.levitation_time_hrs;
        if hours.is_finite() {
            recommend_flour(hours)
        } else {
            None
        }
    }

    fn commit(&mut self) {
        self.weights = calculate_weights(&self.params);
        store_to_location(&self.location, &self.params);
    }
}
