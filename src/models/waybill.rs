//! Waybill (delivery assignment) model.

use serde::{Deserialize, Serialize};

/// A car's current delivery instruction.
///
/// Only a `Completed` waybill may be cleared when a car runs empty; a
/// `Pending` one is left for the routing layer to finish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Waybill {
    /// No assignment.
    #[default]
    Absent,
    /// Assigned to `destination`, not yet fulfilled.
    Pending {
        /// Identifier of the destination track component.
        destination: String,
    },
    /// Assigned to `destination` and marked fulfilled.
    Completed {
        /// Identifier of the destination track component.
        destination: String,
    },
}

impl Waybill {
    /// Creates a pending waybill.
    pub fn pending(destination: impl Into<String>) -> Self {
        Self::Pending {
            destination: destination.into(),
        }
    }

    /// Creates a completed waybill.
    pub fn completed(destination: impl Into<String>) -> Self {
        Self::Completed {
            destination: destination.into(),
        }
    }

    /// Destination identifier, if any.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Pending { destination } | Self::Completed { destination } => Some(destination),
        }
    }

    /// Whether this waybill sends the car to `identifier`.
    pub fn is_destined_for(&self, identifier: &str) -> bool {
        self.destination() == Some(identifier)
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
