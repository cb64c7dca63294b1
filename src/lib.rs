//! Load distribution framework for industry track components.
//!
//! Moves bulk material between an industry's storage buffer and the cars
//! spotted at it, once per simulation tick. Computes per-car transfer
//! amounts under contract multipliers, storage and car capacity limits,
//! fairness policies, and zero-threshold truncation, then raises the
//! resulting lifecycle transitions (order away, waybill cleared).
//!
//! # Modules
//!
//! - **`models`**: Reference data: `Load`, `Waybill`, `CarTypeFilter`, `ServiceConfig`
//! - **`distribution`**: Rate conversion, car ordering, threshold handling,
//!   and the `DistributionPolicy` fairness variants
//! - **`service`**: Host interfaces (`IndustryContext`, `OpsCar`), car
//!   selection, transfer execution, and the per-tick `IndustryService`
//! - **`validation`**: Configuration integrity checks
//!
//! # Architecture
//!
//! The crate owns no simulation state. Storage, cars, waybills and the
//! contract multiplier belong to the host and are reached through traits;
//! the only cross-tick state is kept on each `IndustryService` instance.

pub mod distribution;
pub mod models;
pub mod service;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use distribution::{DistributionPlan, DistributionPolicy, Offer};
pub use models::{CarTypeFilter, Load, ServiceConfig, Waybill};
pub use service::{IndustryContext, IndustryService, OpsCar, ServiceKind, TickSummary};
