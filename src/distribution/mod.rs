//! Distribution policies: how a tick's quantity is shared among cars.
//!
//! Every loader and unloader runs the same loop. What differs is the
//! service order (`CarOrder`) and the fairness formula
//! (`DistributionPolicy`) that turns the tick quantity into per-car offers.
//!
//! # Policies
//!
//! | Policy | Per-car base | Per-car scaling |
//! |--------|--------------|-----------------|
//! | EqualPriority | full quantity, or `quantity / n` when storage is scarce | none |
//! | EqualDivision | `quantity / n` | none |
//! | Proportional | `quantity / n` | `car / total in cars` |
//! | HopperProportional | full quantity | `car` (current holding) |
//!
//! Every offer is then clamped to the residual: storage left to load
//! from, or free capacity left to unload into.
//!
//! # Usage
//!
//! ```
//! use u_transload::distribution::DistributionPolicy;
//!
//! // 20 units to unload, two cars holding 30 and 10.
//! let plan = DistributionPolicy::Proportional.plan(20.0, 20.0, 2, 0.0, 40.0);
//! let a = plan.offer(100.0, 30.0);
//! let b = plan.offer(100.0, 10.0);
//! assert!((a.amount - 7.5).abs() < 1e-6);
//! assert!((b.amount - 2.5).abs() < 1e-6);
//! ```

mod ordering;
mod rate;
mod threshold;

pub use ordering::CarOrder;
pub use rate::rate_to_value;
pub use threshold::{is_negligible, Floored, ThresholdGuard};

use serde::{Deserialize, Serialize};

/// Fairness formula for sharing a tick's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionPolicy {
    /// Each car is offered the full per-car quantity; when storage cannot
    /// cover every car at the per-car rate, offers are divided by car count.
    EqualPriority,
    /// The quantity is divided evenly by car count.
    EqualDivision,
    /// Even division, then scaled by the car's share of the load held
    /// across all eligible cars.
    Proportional,
    /// The quantity is scaled by the car's current holding; no division.
    HopperProportional,
}

impl DistributionPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualPriority => "equal-priority",
            Self::EqualDivision => "equal-division",
            Self::Proportional => "proportional",
            Self::HopperProportional => "hopper-proportional",
        }
    }

    /// Builds the tick plan.
    ///
    /// # Arguments
    /// * `quantity` - Per-tick quantity (rate already converted for `dt`).
    /// * `car_rate` - Contract-adjusted per-car rate per day. Only used by
    ///   `EqualPriority` for its scarcity test.
    /// * `car_count` - Number of eligible cars.
    /// * `storage` - Quantity in storage when the plan is made.
    /// * `total_in_cars` - Sum of the load held by all eligible cars.
    pub fn plan(
        self,
        quantity: f32,
        car_rate: f32,
        car_count: usize,
        storage: f32,
        total_in_cars: f32,
    ) -> DistributionPlan {
        let divided = if car_count == 0 {
            0.0
        } else {
            quantity / car_count as f32
        };

        let per_car = match self {
            Self::EqualPriority => {
                // Compares storage with the per-day rate, then divides the
                // per-tick quantity.
                if car_count > 0 && storage < car_rate * car_count as f32 {
                    divided
                } else {
                    quantity
                }
            }
            Self::EqualDivision | Self::Proportional => divided,
            Self::HopperProportional => quantity,
        };

        DistributionPlan {
            policy: self,
            per_car,
            total_in_cars,
        }
    }
}

/// A tick's distribution, fixed before the car loop starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionPlan {
    /// Policy that produced this plan.
    pub policy: DistributionPolicy,
    /// Base amount offered to each car.
    pub per_car: f32,
    /// Load held across all eligible cars at plan time.
    pub total_in_cars: f32,
}

/// Amount offered to one car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    /// Amount clamped to the residual that early stop is judged on.
    ///
    /// The proportional share is applied after this value; the hopper
    /// holding-level scaling is applied before it.
    pub capped: f32,
    /// Amount to request from the car.
    pub amount: f32,
}

impl DistributionPlan {
    /// Computes the offer for a car holding `car_quantity`, given the
    /// `residual` still available this tick.
    pub fn offer(&self, residual: f32, car_quantity: f32) -> Offer {
        let residual = residual.max(0.0);

        let (capped, amount) = match self.policy {
            DistributionPolicy::EqualPriority | DistributionPolicy::EqualDivision => {
                let capped = self.per_car.min(residual);
                (capped, capped)
            }
            DistributionPolicy::Proportional => {
                let capped = self.per_car.min(residual);
                (capped, capped * self.share(car_quantity))
            }
            DistributionPolicy::HopperProportional => {
                let scaled = (self.per_car * car_quantity.max(0.0)).min(residual);
                (scaled, scaled)
            }
        };

        Offer {
            capped,
            amount: amount.max(0.0),
        }
    }

    /// Fraction of the eligible cars' total load held by one car.
    ///
    /// Zero when no car holds any of the load.
    pub fn share(&self, car_quantity: f32) -> f32 {
        if self.total_in_cars > 0.0 {
            car_quantity.max(0.0) / self.total_in_cars
        } else {
            0.0
        }
    }
}
