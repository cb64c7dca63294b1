//! Per-tick service summary.
//!
//! Hosts can ignore it; it exists for diagnostics and tests.
//!
//! # Fields
//!
//! | Field | Definition |
//! |-------|-----------|
//! | Storage before/after | Quantity in storage around the whole tick |
//! | Produced | Production added before the car loop (loaders) |
//! | Consumed | Self-consumption requested after the car loop (unloaders) |
//! | Transfers | Per-car requested and actual amounts, in service order |
//! | Early stop | Whether the loop ended before the last eligible car |

use super::transfer::{Lifecycle, Transfer};

/// One car's part in a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CarTransfer {
    pub car_id: String,
    /// Amount offered by the distribution policy.
    pub offered: f32,
    /// Amount the car actually loaded or unloaded.
    pub actual: f32,
    pub lifecycle: Lifecycle,
}

impl CarTransfer {
    pub(crate) fn new(car_id: &str, transfer: Transfer) -> Self {
        Self {
            car_id: car_id.to_string(),
            offered: transfer.requested,
            actual: transfer.actual,
            lifecycle: transfer.lifecycle,
        }
    }
}

/// What one `IndustryService::service` call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSummary {
    /// Contract multiplier read at the start of the tick.
    pub contract_multiplier: f32,
    /// Per-tick quantity after contract adjustment (and floor, for unloaders).
    pub quantity: f32,
    /// Number of eligible cars.
    pub car_count: usize,
    pub storage_before: f32,
    pub storage_after: f32,
    pub produced: f32,
    pub consumed: f32,
    /// Whether the zero-threshold floor replaced the nominal quantity.
    pub floored: bool,
    /// Whether the car loop stopped on a negligible offer.
    pub stopped_early: bool,
    /// Transfers in service order.
    pub transfers: Vec<CarTransfer>,
}

impl TickSummary {
    /// Sum of actual amounts moved across all cars.
    pub fn total_transferred(&self) -> f32 {
        self.transfers.iter().map(|t| t.actual).sum()
    }

    /// Transfer entry for a car, if it was serviced this tick.
    pub fn transfer_for(&self, car_id: &str) -> Option<&CarTransfer> {
        self.transfers.iter().find(|t| t.car_id == car_id)
    }

    /// Number of cars that were ordered away or had their waybill cleared.
    pub fn released_count(&self) -> usize {
        self.transfers
            .iter()
            .filter(|t| {
                matches!(
                    t.lifecycle,
                    Lifecycle::OrderedAway | Lifecycle::WaybillCleared
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, actual: f32, lifecycle: Lifecycle) -> CarTransfer {
        CarTransfer {
            car_id: id.to_string(),
            offered: actual,
            actual,
            lifecycle,
        }
    }

    #[test]
    fn test_totals() {
        let summary = TickSummary {
            transfers: vec![
                entry("a", 2.5, Lifecycle::Unchanged),
                entry("b", 1.5, Lifecycle::OrderedAway),
                entry("c", 0.0, Lifecycle::EmptyPending),
                entry("d", 0.0, Lifecycle::WaybillCleared),
            ],
            ..Default::default()
        };

        assert!((summary.total_transferred() - 4.0).abs() < 1e-6);
        assert_eq!(summary.released_count(), 2);
        assert!(summary.transfer_for("b").is_some());
        assert!(summary.transfer_for("z").is_none());
    }

    #[test]
    fn test_empty_summary() {
        let summary = TickSummary::default();
        assert_eq!(summary.total_transferred(), 0.0);
        assert_eq!(summary.released_count(), 0);
    }
}
