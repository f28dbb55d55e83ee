//! Query-string codec for the recipe parameters.
//!
//! The query string is a best-effort hint: unknown keys are ignored and
//! values that do not parse are dropped without complaint. Defaults are not
//! applied here; callers merge the partial result over their own record.

use crate::{Field, ParameterSet, PartialParameterSet};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Read/replace access to the current page address.
pub trait Location {
    /// Query component of the address, with or without the leading `?`.
    /// `None` when there is no address to read.
    fn query(&self) -> Option<String>;

    /// Replace the query component without adding a history entry.
    fn replace_query(&self, query: &str);
}

/// Encode every field as `key=value`, keys in alphabetical order.
///
/// Values use the shortest text that parses back to the same `f64`.
pub fn serialize(params: &ParameterSet) -> String {
    let mut fields = Field::ALL;
    fields.sort_by_key(|field| field.key());

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for field in fields {
        serializer.append_pair(field.key(), &params.get(field).to_string());
    }
    serializer.finish()
}

/// Decode the known fields from `query`. A leading `?` is allowed.
///
/// A key that appears more than once is ambiguous and is dropped.
pub fn deserialize(query: &str) -> PartialParameterSet {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut values = PartialParameterSet::new();
    let mut occurrences = [0usize; Field::COUNT];

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Some(field) = Field::from_key(&key) else {
            debug!("Ignoring unknown query key '{}'", key);
            continue;
        };
        occurrences[field.index()] += 1;

        match value.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => values.insert(field, number),
            _ => {
                debug!("Dropping unparseable value '{}' for {}", value, field);
                values.remove(field);
            }
        }
    }

    for field in Field::ALL {
        if occurrences[field.index()] > 1 {
            debug!("Dropping repeated query key {}", field);
            values.remove(field);
        }
    }
    values
}

/// Decode the parameters present in the current address.
pub fn load_from_location(location: &impl Location) -> PartialParameterSet {
    match location.query() {
        Some(query) => {
            let values = deserialize(&query);
            info!("Loaded {} parameter(s) from the query string", values.len());
            values
        }
        None => {
            warn!("No page location available, starting from defaults");
            PartialParameterSet::new()
        }
    }
}

/// Write `params` into the current address, replacing the history entry.
pub fn store_to_location(location: &impl Location, params: &ParameterSet) {
    location.replace_query(&format!("?{}", serialize(params)));
}

/// The browser's `window.location`, written through `history.replaceState`.
///
/// Off the `wasm32` target there is no window: reads yield nothing and
/// writes are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    #[cfg(target_arch = "wasm32")]
    fn query(&self) -> Option<String> {
        let window = web_sys::window()?;
        match window.location().search() {
            Ok(search) => Some(search),
            Err(e) => {
                warn!("Could not read location.search: {:?}", e);
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn query(&self) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn replace_query(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let history = match window.history() {
            Ok(history) => history,
            Err(e) => {
                warn!("History API unavailable: {:?}", e);
                return;
            }
        };
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(query))
        {
            warn!("Could not replace the query string: {:?}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn replace_query(&self, _query: &str) {}
}

/// In-memory address for tests and non-browser hosts.
///
/// Clones share the same address, so a test can keep a handle while the
/// calculator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<RefCell<MemoryAddress>>,
}

#[derive(Debug, Default)]
struct MemoryAddress {
    query: Option<String>,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryAddress {
                query: Some(query.into()),
                replacements: 0,
            })),
        }
    }

    /// A host without any address. Reads yield nothing and writes are
    /// dropped.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.inner.borrow().query.clone()
    }

    /// Number of writes that actually replaced the address.
    pub fn replacements(&self) -> usize {
        self.inner.borrow().replacements
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> Option<String> {
        self.current()
    }

    fn replace_query(&self, query: &str) {
        let mut address = self.inner.borrow_mut();
        if address.query.is_some() {
            address.query = Some(query.to_string());
            address.replacements += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_defaults_in_key_order() {
        assert_eq!(
            serialize(&ParameterSet::default()),
            "ballCount=4&ballWeightGrams=250&hydrationPerc=65&levitationTemperatureC=20\
             &levitationTimeHrs=6&oilGpl=0&saltGpl=40"
        );
    }

    #[test]
    fn serializes_fractions_without_loss() {
        let params = ParameterSet {
            hydration_perc: 62.5,
            salt_gpl: 0.1 + 0.2,
            ..ParameterSet::default()
        };
        let query = serialize(&params);
        assert!(query.contains("hydrationPerc=62.5"));
        assert!(query.contains("saltGpl=0.30000000000000004"));
    }

    #[test]
    fn deserializes_partial_query() {
        let values = deserialize("?ballCount=8&ballWeightGrams=300&oilGpl=5");
        assert_eq!(values.len(), 3);
        assert_eq!(values.get(Field::BallCount), Some(8.0));
        assert_eq!(values.get(Field::BallWeightGrams), Some(300.0));
        assert_eq!(values.get(Field::OilGpl), Some(5.0));
        assert_eq!(values.get(Field::HydrationPerc), None);
    }

    #[test]
    fn ignores_unknown_keys() {
        let values = deserialize("utm_source=mail&saltGpl=35&flourWeight=500");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get(Field::SaltGpl), Some(35.0));
    }

    #[test]
    fn drops_malformed_values() {
        let values = deserialize("hydrationPerc=lots&saltGpl=&oilGpl=NaN&ballCount=inf&levitationTimeHrs=8");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get(Field::LevitationTimeHrs), Some(8.0));
    }

    #[test]
    fn decodes_percent_encoding_and_whitespace() {
        let values = deserialize("levitationTemperatureC=%2021.5%20&ballWeightGrams=+280");
        assert_eq!(values.get(Field::LevitationTemperatureC), Some(21.5));
        assert_eq!(values.get(Field::BallWeightGrams), Some(280.0));
    }

    #[test]
    fn drops_repeated_keys() {
        let values = deserialize("ballCount=2&ballCount=3&oilGpl=1");
        assert_eq!(values.get(Field::BallCount), None);
        assert_eq!(values.get(Field::OilGpl), Some(1.0));
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(deserialize("").is_empty());
        assert!(deserialize("?").is_empty());
    }

    #[test]
    fn round_trips_defaults() {
        let params = ParameterSet::default();
        assert_eq!(deserialize(&serialize(&params)).merge_over(params), params);
    }

    #[test]
    fn load_and_store_through_memory_location() {
        let location = MemoryLocation::new("?hydrationPerc=70");
        let values = load_from_location(&location);
        assert_eq!(values.get(Field::HydrationPerc), Some(70.0));

        store_to_location(&location, &ParameterSet::default());
        assert_eq!(location.replacements(), 1);
        assert_eq!(
            location.current(),
            Some(format!("?{}", serialize(&ParameterSet::default())))
        );
    }

    #[test]
    fn detached_location_is_harmless() {
        let location = MemoryLocation::detached();
        assert!(load_from_location(&location).is_empty());
        store_to_location(&location, &ParameterSet::default());
        assert_eq!(location.current(), None);
        assert_eq!(location.replacements(), 0);
    }

    #[test]
    fn browser_location_off_wasm_is_empty() {
        assert!(load_from_location(&BrowserLocation).is_empty());
        store_to_location(&BrowserLocation, &ParameterSet::default());
    }
}
