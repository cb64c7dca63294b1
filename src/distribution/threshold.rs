//! Zero-threshold handling.
//!
//! Two rules keep near-zero floating point quantities from churning:
//!
//! - **Floor**: a per-tick unload quantity below the load's zero threshold
//!   is replaced by `2 * zero_threshold`, so a tiny nominal rate still
//!   makes progress. The substitution is reported once per component.
//! - **Early stop**: inside an unloading loop, a car whose offer is below
//!   the threshold ends the loop; later cars get nothing this tick.

use log::warn;

/// Result of applying the threshold floor to a per-tick quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floored {
    /// Quantity to work with this tick.
    pub quantity: f32,
    /// Whether the floor replaced the nominal quantity.
    pub applied: bool,
    /// Whether this call emitted the one-time warning.
    pub warned: bool,
}

/// Per-component floor state.
///
/// Holds the one-time warning flag, which lives as long as the component.
#[derive(Debug, Clone, Default)]
pub struct ThresholdGuard {
    warned: bool,
}

impl ThresholdGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the warning has already been emitted.
    pub fn has_warned(&self) -> bool {
        self.warned
    }

    /// Applies the floor to `quantity`.
    ///
    /// A zero `contract_multiplier` means the industry is idle on purpose;
    /// the floor still applies but no warning is logged.
    pub fn floor(
        &mut self,
        quantity: f32,
        zero_threshold: f32,
        contract_multiplier: f32,
        identifier: &str,
    ) -> Floored {
        if quantity >= zero_threshold {
            return Floored {
                quantity,
                applied: false,
                warned: false,
            };
        }

        let mut warned = false;
        if !self.warned && contract_multiplier > 0.0 {
            warn!(
                "Industry {identifier} {quantity} is less than {zero_threshold}, this will be corrected each tick"
            );
            self.warned = true;
            warned = true;
        }

        Floored {
            quantity: zero_threshold * 2.0,
            applied: true,
            warned,
        }
    }
}

/// Whether `amount` is too small to count as progress.
#[inline]
pub fn is_negligible(amount: f32, zero_threshold: f32) -> bool {
    amount < zero_threshold
}
