//! Per-tick industry service.
//!
//! Wires the distribution policies to the host: selects eligible cars,
//! executes transfers against storage, raises lifecycle transitions, and
//! reports what happened.
//!
//! # Usage
//!
//! ```
//! use u_transload::{IndustryContext, Load, OpsCar, Waybill};
//!
//! struct Plant {
//!     storage: f32,
//! }
//!
//! impl IndustryContext for Plant {
//!     fn delta_time(&self) -> f32 { 1.0 / 24.0 }
//!     fn contract_multiplier(&self) -> f32 { 1.0 }
//!     fn quantity_in_storage(&self, _load: &Load) -> f32 { self.storage }
//!     fn add_to_storage(&mut self, _load: &Load, amount: f32, max: f32) {
//!         self.storage = (self.storage + amount).min(max.max(self.storage));
//!     }
//!     fn remove_from_storage(&mut self, _load: &Load, amount: f32) {
//!         self.storage = (self.storage - amount).max(0.0);
//!     }
//!     fn counter_increment(&mut self, _key: &str, _amount: f32) {}
//!     fn order_away_loaded(&mut self, _car_id: &str) {}
//!     fn order_away_empty(&mut self, _car_id: &str) {}
//! }
//!
//! struct Hopper {
//!     quantity: f32,
//!     waybill: Waybill,
//! }
//!
//! impl OpsCar for Hopper {
//!     fn id(&self) -> &str { "HT-101" }
//!     fn display_name(&self) -> &str { "HT 101" }
//!     fn car_type(&self) -> &str { "HT" }
//!     fn velocity(&self) -> f32 { 0.0 }
//!     fn quantity_of_load(&self, _load: &Load) -> f32 { self.quantity }
//!     fn is_full(&self, _load: &Load) -> bool { self.quantity >= 100.0 }
//!     fn is_empty_or_contains(&self, _load: &Load) -> bool { true }
//!     fn load(&mut self, _load: &Load, amount: f32) -> f32 {
//!         let taken = amount.min(100.0 - self.quantity);
//!         self.quantity += taken;
//!         taken
//!     }
//!     fn unload(&mut self, _load: &Load, amount: f32) -> f32 {
//!         let given = amount.min(self.quantity);
//!         self.quantity -= given;
//!         given
//!     }
//!     fn waybill(&self) -> &Waybill { &self.waybill }
//!     fn set_waybill(&mut self, waybill: Waybill, _source: &str, _reason: &str) {
//!         self.waybill = waybill;
//!     }
//! }
//!
//! # fn main() -> Result<(), u_transload::validation::ConfigError> {
//! use u_transload::{IndustryService, ServiceConfig, ServiceKind};
//!
//! let config = ServiceConfig::new("power-plant")
//!     .with_car_unload_rate(240.0)
//!     .with_max_storage(2000.0)
//!     .with_storage_consumption_rate(180.0)
//!     .with_car_types("HT*");
//! let mut unloader = IndustryService::new(ServiceKind::HopperUnloader, Load::new("coal"), config)?;
//!
//! let mut plant = Plant { storage: 0.0 };
//! let mut cars = vec![Hopper { quantity: 80.0, waybill: Waybill::pending("power-plant") }];
//!
//! // host tick loop
//! for _ in 0..24 {
//!     unloader.service(&mut plant, &mut cars);
//! }
//! assert!(cars[0].quantity < 80.0);
//! # Ok(())
//! # }
//! ```

mod context;
mod industry;
mod selector;
mod summary;
mod transfer;

pub use context::{IndustryContext, OpsCar};
pub use industry::{IndustryService, ServiceKind, TransferDirection};
pub use selector::{select_cars, SelectionCriteria, MOVING_SPEED_TOLERANCE};
pub use summary::{CarTransfer, TickSummary};
pub use transfer::{Lifecycle, Transfer, TransferExecutor, REASON_EMPTY_COMPLETED, REASON_FULL};
