//! Reference data models.
//!
//! Immutable inputs to the distribution core: what is moved (`Load`),
//! where a car is headed (`Waybill`), which cars a component services
//! (`CarTypeFilter`), and how fast it works (`ServiceConfig`).
//!
//! # Domain Mappings
//!
//! | u-transload | Railroad ops | Mining | Port |
//! |-------------|--------------|--------|------|
//! | Load | Commodity | Ore grade | Bulk cargo |
//! | Car | Freight car | Haul truck | Barge |
//! | Waybill | Waybill | Dispatch ticket | Bill of lading |
//! | ServiceConfig | Industry track | Loading pocket | Berth |

mod car_type;
mod config;
mod load;
mod waybill;

pub use car_type::CarTypeFilter;
pub use config::ServiceConfig;
pub use load::Load;
pub use waybill::Waybill;
