//! Load (bulk material type) model.
//!
//! A load identifies what is being moved: coal, grain, crude oil.
//! Quantities themselves live on the host's storage and cars.

use serde::{Deserialize, Serialize};

/// A bulk material type tracked by quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique load identifier.
    pub id: String,
    /// Smallest quantity treated as meaningful.
    ///
    /// Transfers below this are negligible: they never count as progress
    /// and never trigger lifecycle transitions.
    #[serde(default = "Load::default_zero_threshold")]
    pub zero_threshold: f32,
    /// Revenue per unit delivered. `0.0` disables unload counters.
    #[serde(default)]
    pub pay_per_quantity: f32,
}

impl Load {
    const fn default_zero_threshold() -> f32 {
        0.001
    }

    /// Creates a load with the default zero threshold and no pay rate.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            zero_threshold: Self::default_zero_threshold(),
            pay_per_quantity: 0.0,
        }
    }

    /// Sets the zero threshold.
    pub fn with_zero_threshold(mut self, zero_threshold: f32) -> Self {
        self.zero_threshold = zero_threshold;
        self
    }

    /// Sets the pay rate per unit.
    pub fn with_pay_per_quantity(mut self, pay: f32) -> Self {
        self.pay_per_quantity = pay;
        self
    }

    /// Whether deliveries of this load earn revenue.
    pub fn is_paid(&self) -> bool {
        self.pay_per_quantity > 0.0
    }

    /// Counter key accumulating the total quantity unloaded.
    pub fn unloaded_total_key(&self) -> String {
        format!("unloaded-total-{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builder() {
        let load = Load::new("coal")
            .with_zero_threshold(0.01)
            .with_pay_per_quantity(2.5);

        assert_eq!(load.id, "coal");
        assert!((load.zero_threshold - 0.01).abs() < 1e-9);
        assert!(load.is_paid());
        assert_eq!(load.unloaded_total_key(), "unloaded-total-coal");
    }

    #[test]
    fn test_unpaid_by_default() {
        assert!(!Load::new("water").is_paid());
    }

    #[test]
    fn test_deserialize_defaults() {
        let load: Load = serde_json::from_str(r#"{ "id": "grain" }"#).unwrap();
        assert_eq!(load, Load::new("grain"));
    }
}
