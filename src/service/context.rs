//! Host interfaces consumed by a service tick.
//!
//! The host simulation owns storage, cars and waybills. A tick reaches
//! them only through these two traits, so the distribution logic can run
//! against a game engine, a headless simulator, or test fixtures alike.

use crate::models::{Load, Waybill};

/// Industry-side state for one tick.
///
/// Storage mutations are capacity-clamped by the implementor: adding never
/// raises storage above `max_capacity`, removing never drops it below zero.
pub trait IndustryContext {
    /// Simulated time since the previous tick, in days.
    fn delta_time(&self) -> f32;

    /// Contract multiplier of the owning industry (0.0 = idle).
    fn contract_multiplier(&self) -> f32;

    /// Quantity of `load` currently in storage.
    fn quantity_in_storage(&self, load: &Load) -> f32;

    /// Adds `amount` of `load` to storage, clamped to `max_capacity`.
    fn add_to_storage(&mut self, load: &Load, amount: f32, max_capacity: f32);

    /// Removes `amount` of `load` from storage, clamped at zero.
    fn remove_from_storage(&mut self, load: &Load, amount: f32);

    /// Adds `amount` to the named monotonically increasing counter.
    fn counter_increment(&mut self, key: &str, amount: f32);

    /// Orders a full car away from the industry.
    fn order_away_loaded(&mut self, car_id: &str);

    /// Orders an empty car away from the industry.
    fn order_away_empty(&mut self, car_id: &str);
}

/// Capabilities of a car spotted at the industry.
pub trait OpsCar {
    /// Stable identifier passed back to `IndustryContext` dispatch calls.
    fn id(&self) -> &str;

    fn display_name(&self) -> &str;

    /// Car type tag matched against the component's `CarTypeFilter`.
    fn car_type(&self) -> &str;

    /// Current speed; cars rolling through are not serviced by every component.
    fn velocity(&self) -> f32;

    /// Quantity of `load` on board.
    fn quantity_of_load(&self, load: &Load) -> f32;

    /// Whether the car cannot take more of `load`.
    fn is_full(&self, load: &Load) -> bool;

    /// Whether the car is empty or already carries `load`.
    fn is_empty_or_contains(&self, load: &Load) -> bool;

    /// Loads up to `amount`; returns the quantity actually loaded.
    fn load(&mut self, load: &Load, amount: f32) -> f32;

    /// Unloads up to `amount`; returns the quantity actually unloaded.
    fn unload(&mut self, load: &Load, amount: f32) -> f32;

    fn waybill(&self) -> &Waybill;

    /// Replaces the waybill. `source` names the component making the
    /// change and `reason` is a short human-readable cause.
    fn set_waybill(&mut self, waybill: Waybill, source: &str, reason: &str);
}
