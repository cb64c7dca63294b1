//! Per-component service configuration.
//!
//! Set once when the host builds the component and never mutated by a
//! tick. All rates are per simulated day; the contract multiplier scales
//! them at service time.

use serde::{Deserialize, Serialize};

use super::CarTypeFilter;

/// Configuration for one loader or unloader component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Identifier of this track component. Waybills must name it as
    /// destination for a car to be serviced.
    pub identifier: String,
    /// Quantity produced into storage per day (loaders).
    pub production_rate: f32,
    /// Quantity loaded into each car per day (loaders).
    pub car_load_rate: f32,
    /// Quantity unloaded from each car per day (unloaders).
    pub car_unload_rate: f32,
    /// Storage capacity before the contract multiplier.
    pub max_storage: f32,
    /// Quantity the industry consumes from its own storage per day (unloaders).
    pub storage_consumption_rate: f32,
    /// Car types this component services.
    pub car_type_filter: CarTypeFilter,
    /// Order full cars away instead of clearing their waybill.
    pub order_away_loaded: bool,
    /// Order empty cars away instead of clearing completed waybills.
    pub order_away_empties: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            production_rate: 0.0,
            car_load_rate: 0.0,
            car_unload_rate: 0.0,
            max_storage: 0.0,
            storage_consumption_rate: 0.0,
            car_type_filter: CarTypeFilter::any(),
            order_away_loaded: false,
            order_away_empties: false,
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration for the component `identifier`.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_production_rate(mut self, rate: f32) -> Self {
        self.production_rate = rate;
        self
    }

    pub fn with_car_load_rate(mut self, rate: f32) -> Self {
        self.car_load_rate = rate;
        self
    }

    pub fn with_car_unload_rate(mut self, rate: f32) -> Self {
        self.car_unload_rate = rate;
        self
    }

    pub fn with_max_storage(mut self, max_storage: f32) -> Self {
        self.max_storage = max_storage;
        self
    }

    pub fn with_storage_consumption_rate(mut self, rate: f32) -> Self {
        self.storage_consumption_rate = rate;
        self
    }

    /// Sets the car type filter from a pattern list (e.g. `"HT*,GB"`).
    pub fn with_car_types(mut self, filter: impl Into<CarTypeFilter>) -> Self {
        self.car_type_filter = filter.into();
        self
    }

    pub fn with_order_away_loaded(mut self, enabled: bool) -> Self {
        self.order_away_loaded = enabled;
        self
    }

    pub fn with_order_away_empties(mut self, enabled: bool) -> Self {
        self.order_away_empties = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ServiceConfig::new("coal-mine")
            .with_production_rate(200.0)
            .with_car_load_rate(50.0)
            .with_max_storage(1000.0)
            .with_car_types("HT*")
            .with_order_away_loaded(true);

        assert_eq!(config.identifier, "coal-mine");
        assert!((config.production_rate - 200.0).abs() < 1e-6);
        assert!(config.car_type_filter.matches("HTC"));
        assert!(!config.car_type_filter.matches("TM"));
        assert!(config.order_away_loaded);
        assert!(!config.order_away_empties);
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{
            "identifier": "power-plant",
            "car_unload_rate": 120.0,
            "max_storage": 800.0,
            "car_type_filter": "HT*"
        }"#;
        let config: ServiceConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.identifier, "power-plant");
        assert!((config.car_unload_rate - 120.0).abs() < 1e-6);
        assert!((config.storage_consumption_rate - 0.0).abs() < 1e-6);
        assert!(config.car_type_filter.matches("HTC"));
        assert!(!config.order_away_empties);
    }
}
