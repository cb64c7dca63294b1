//! Eligible car selection.
//!
//! Narrows the cars spotted at a component down to the ones it services
//! this tick. Ordering is left to `CarOrder`.

use crate::models::{CarTypeFilter, Load};

use super::OpsCar;

/// Speed above which the moving loader ignores a car.
pub const MOVING_SPEED_TOLERANCE: f32 = 0.75;

/// Filter applied to the cars at a component.
#[derive(Debug, Clone, Copy)]
pub struct SelectionCriteria<'a> {
    /// Component identifier waybills must name.
    pub identifier: &'a str,
    pub car_types: &'a CarTypeFilter,
    /// Skip cars with `|velocity|` above this limit.
    pub max_speed: Option<f32>,
    /// Only cars with a waybill destined for this component.
    pub require_waybill: bool,
}

impl SelectionCriteria<'_> {
    /// Whether `car` passes the position, type and waybill filters.
    pub fn accepts<C: OpsCar>(&self, car: &C) -> bool {
        if let Some(limit) = self.max_speed {
            if car.velocity().abs() > limit {
                return false;
            }
        }
        if !self.car_types.matches(car.car_type()) {
            return false;
        }
        if self.require_waybill && !car.waybill().is_destined_for(self.identifier) {
            return false;
        }
        true
    }
}

/// Returns indices of the cars eligible to exchange `load`, in host order.
pub fn select_cars<C: OpsCar>(
    cars: &[C],
    criteria: &SelectionCriteria<'_>,
    load: &Load,
) -> Vec<usize> {
    cars.iter()
        .enumerate()
        .filter(|(_, car)| criteria.accepts(*car) && car.is_empty_or_contains(load))
        .map(|(i, _)| i)
        .collect()
}
