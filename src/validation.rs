//! Configuration validation.
//!
//! Checks a component's configuration before it is put into service.
//! Detects:
//! - Missing identifiers (component or load)
//! - Negative or non-finite rates and capacities
//! - Non-positive zero thresholds
//!
//! All problems are collected rather than stopping at the first one, so a
//! host can report a broken industry definition in one pass.

use thiserror::Error;

use crate::models::{Load, ServiceConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The component has no identifier, so no waybill could name it.
    #[error("component identifier is empty")]
    EmptyIdentifier,
    /// The load has no identifier.
    #[error("load id is empty")]
    EmptyLoadId,
    /// A rate or capacity is negative, NaN or infinite.
    #[error("{field} must be finite and non-negative (got {value})")]
    InvalidQuantity { field: &'static str, value: f32 },
    /// The zero threshold cannot separate progress from noise.
    #[error("zero threshold of load '{load}' must be finite and positive (got {value})")]
    InvalidZeroThreshold { load: String, value: f32 },
}

/// Rejected configuration, with every problem found.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid configuration for '{identifier}': {}", join(.errors))]
pub struct ConfigError {
    pub identifier: String,
    pub errors: Vec<ValidationError>,
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates a component configuration and the load it handles.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &ServiceConfig, load: &Load) -> ValidationResult {
    let mut errors = Vec::new();

    if config.identifier.trim().is_empty() {
        errors.push(ValidationError::EmptyIdentifier);
    }
    if load.id.trim().is_empty() {
        errors.push(ValidationError::EmptyLoadId);
    }

    let quantities = [
        ("production_rate", config.production_rate),
        ("car_load_rate", config.car_load_rate),
        ("car_unload_rate", config.car_unload_rate),
        ("max_storage", config.max_storage),
        ("storage_consumption_rate", config.storage_consumption_rate),
        ("pay_per_quantity", load.pay_per_quantity),
    ];
    for (field, value) in quantities {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::InvalidQuantity { field, value });
        }
    }

    if !load.zero_threshold.is_finite() || load.zero_threshold <= 0.0 {
        errors.push(ValidationError::InvalidZeroThreshold {
            load: load.id.clone(),
            value: load.zero_threshold,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
