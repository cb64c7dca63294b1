//! Single-car transfer execution and lifecycle transitions.
//!
//! A transfer asks the car for an amount, mirrors the amount the car
//! actually accepted (or gave up) against storage, then checks whether the
//! car became full or empty:
//!
//! - **Full** (loading): order the car away, or clear its waybill ("Full").
//! - **Empty** (unloading, less than the zero threshold came out): order
//!   the car away, or clear its waybill ("Empty completed") only if the
//!   waybill is already completed.

use log::info;
use serde::{Deserialize, Serialize};

use crate::distribution::is_negligible;
use crate::models::{Load, Waybill};

use super::{IndustryContext, OpsCar};

/// Waybill clear reason for cars that filled up.
pub const REASON_FULL: &str = "Full";
/// Waybill clear reason for cars emptied against a completed waybill.
pub const REASON_EMPTY_COMPLETED: &str = "Empty completed";

/// Lifecycle transition raised by a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Car keeps its spot and waybill.
    #[default]
    Unchanged,
    /// Car was ordered away from the industry.
    OrderedAway,
    /// Car's waybill was cleared.
    WaybillCleared,
    /// Car is empty but its waybill is still pending, so it was left alone.
    EmptyPending,
}

/// Outcome of one car's transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer {
    /// Amount asked of the car.
    pub requested: f32,
    /// Amount the car actually loaded or unloaded.
    pub actual: f32,
    pub lifecycle: Lifecycle,
}

/// Applies transfers for one component and load.
#[derive(Debug, Clone, Copy)]
pub struct TransferExecutor<'a> {
    pub load: &'a Load,
    /// Component identifier, used as the waybill change source.
    pub source: &'a str,
    /// Order cars away instead of clearing waybills.
    pub order_away: bool,
}

impl TransferExecutor<'_> {
    /// Loads up to `amount` into `car` and removes what it took from storage.
    pub fn load_car<X, C>(&self, ctx: &mut X, car: &mut C, amount: f32) -> Transfer
    where
        X: IndustryContext,
        C: OpsCar,
    {
        let requested = sanitize(amount);
        let actual = sanitize(car.load(self.load, requested));

        let mut lifecycle = Lifecycle::Unchanged;
        if car.is_full(self.load) {
            lifecycle = if self.order_away {
                info!("{}: {} is full, ordering away", self.source, car.display_name());
                ctx.order_away_loaded(car.id());
                Lifecycle::OrderedAway
            } else {
                info!("{}: {} is full, clearing waybill", self.source, car.display_name());
                car.set_waybill(Waybill::Absent, self.source, REASON_FULL);
                Lifecycle::WaybillCleared
            };
        }

        ctx.remove_from_storage(self.load, actual);

        Transfer {
            requested,
            actual,
            lifecycle,
        }
    }

    /// Unloads up to `amount` from `car` into storage capped at `max_storage`.
    pub fn unload_car<X, C>(
        &self,
        ctx: &mut X,
        car: &mut C,
        amount: f32,
        max_storage: f32,
    ) -> Transfer
    where
        X: IndustryContext,
        C: OpsCar,
    {
        let requested = sanitize(amount);
        let actual = sanitize(car.unload(self.load, requested));

        let mut lifecycle = Lifecycle::Unchanged;
        if is_negligible(actual, self.load.zero_threshold) {
            lifecycle = if self.order_away {
                info!("{}: {} is empty, ordering away", self.source, car.display_name());
                ctx.order_away_empty(car.id());
                Lifecycle::OrderedAway
            } else if car.waybill().is_completed() {
                info!("{}: {} is empty, clearing waybill", self.source, car.display_name());
                car.set_waybill(Waybill::Absent, self.source, REASON_EMPTY_COMPLETED);
                Lifecycle::WaybillCleared
            } else {
                Lifecycle::EmptyPending
            };
        }

        ctx.add_to_storage(self.load, actual, max_storage);

        Transfer {
            requested,
            actual,
            lifecycle,
        }
    }
}

/// Negative and non-finite amounts become zero.
fn sanitize(amount: f32) -> f32 {
    if amount.is_finite() {
        amount.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{coal, MockCar, MockYard};

    fn executor(load: &Load, order_away: bool) -> TransferExecutor<'_> {
        TransferExecutor {
            load,
            source: "mill",
            order_away,
        }
    }

    #[test]
    fn test_load_mirrors_actual_amount() {
        let load = coal();
        let mut yard = MockYard::new().with_storage(100.0);
        let mut car = MockCar::new("c1").holding(45.0).with_capacity(50.0).bound_for("mill");

        let t = executor(&load, false).load_car(&mut yard, &mut car, 10.0);

        assert!((t.requested - 10.0).abs() < 1e-6);
        assert!((t.actual - 5.0).abs() < 1e-6);
        assert!((yard.storage - 95.0).abs() < 1e-6);
        assert_eq!(t.lifecycle, Lifecycle::WaybillCleared);
        assert_eq!(car.waybill, Waybill::Absent);
        assert_eq!(car.waybill_changes, vec![("mill".to_string(), REASON_FULL.to_string())]);
    }

    #[test]
    fn test_load_full_orders_away() {
        let load = coal();
        let mut yard = MockYard::new().with_storage(100.0);
        let mut car = MockCar::new("c1").holding(50.0).with_capacity(50.0).bound_for("mill");

        let t = executor(&load, true).load_car(&mut yard, &mut car, 0.0);

        assert_eq!(t.actual, 0.0);
        assert_eq!(t.lifecycle, Lifecycle::OrderedAway);
        assert_eq!(yard.ordered_away_loaded, vec!["c1".to_string()]);
        assert!(car.waybill.is_present());
    }

    #[test]
    fn test_negative_request_is_zero() {
        let load = coal();
        let mut yard = MockYard::new().with_storage(10.0);
        let mut car = MockCar::new("c1").bound_for("mill");

        let t = executor(&load, false).load_car(&mut yard, &mut car, -3.0);
        assert_eq!(t.requested, 0.0);
        assert_eq!(t.actual, 0.0);
        assert!((yard.storage - 10.0).abs() < 1e-6);
        assert_eq!(t.lifecycle, Lifecycle::Unchanged);
    }

    #[test]
    fn test_unload_into_storage() {
        let load = coal();
        let mut yard = MockYard::new().with_storage(10.0);
        let mut car = MockCar::new("c1").holding(30.0).completed_for("mill");

        let t = executor(&load, false).unload_car(&mut yard, &mut car, 8.0, 100.0);

        assert!((t.actual - 8.0).abs() < 1e-6);
        assert!((yard.storage - 18.0).abs() < 1e-6);
        assert!((car.quantity - 22.0).abs() < 1e-6);
        assert_eq!(t.lifecycle, Lifecycle::Unchanged);
    }

    #[test]
    fn test_unload_empty_completed_clears_waybill() {
        let load = coal();
        let mut yard = MockYard::new();
        let mut car = MockCar::new("c1").completed_for("mill");

        let t = executor(&load, false).unload_car(&mut yard, &mut car, 5.0, 100.0);

        assert_eq!(t.lifecycle, Lifecycle::WaybillCleared);
        assert_eq!(car.waybill, Waybill::Absent);
        assert_eq!(
            car.waybill_changes,
            vec![("mill".to_string(), REASON_EMPTY_COMPLETED.to_string())]
        );
    }

    #[test]
    fn test_unload_empty_pending_untouched() {
        let load = coal();
        let mut yard = MockYard::new();
        let mut car = MockCar::new("c1").bound_for("mill");

        let t = executor(&load, false).unload_car(&mut yard, &mut car, 5.0, 100.0);

        assert_eq!(t.lifecycle, Lifecycle::EmptyPending);
        assert_eq!(car.waybill, Waybill::pending("mill"));
        assert!(car.waybill_changes.is_empty());
    }

    #[test]
    fn test_unload_empty_orders_away() {
        let load = coal();
        let mut yard = MockYard::new();
        let mut car = MockCar::new("c1").bound_for("mill");

        let t = executor(&load, true).unload_car(&mut yard, &mut car, 5.0, 100.0);

        assert_eq!(t.lifecycle, Lifecycle::OrderedAway);
        assert_eq!(yard.ordered_away_empty, vec!["c1".to_string()]);
    }
}
