//! Car service order.
//!
//! Within a tick, cars are serviced one after another against a shrinking
//! residual (storage left to load from, or capacity left to unload into),
//! so the order decides who gets served when supply runs short.
//!
//! # Score Convention
//! **Lower score = serviced first**, as with dispatching rules.

use serde::{Deserialize, Serialize};

use crate::models::Load;
use crate::service::OpsCar;

/// Ordering key applied to the eligible cars each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarOrder {
    /// Descending current quantity of the load (fullest first).
    #[default]
    MostLoadedFirst,
    /// Ascending current quantity of the load (emptiest first).
    LeastLoadedFirst,
}

impl CarOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MostLoadedFirst => "most-loaded-first",
            Self::LeastLoadedFirst => "least-loaded-first",
        }
    }

    /// Priority score of a car; lower is serviced first.
    pub fn score<C: OpsCar>(&self, car: &C, load: &Load) -> f32 {
        let quantity = car.quantity_of_load(load);
        match self {
            Self::MostLoadedFirst => -quantity,
            Self::LeastLoadedFirst => quantity,
        }
    }

    /// Sorts `indices` (into `cars`) into service order.
    ///
    /// The sort is stable: cars with equal quantities keep the order the
    /// host listed them in.
    pub fn sort_indices<C: OpsCar>(
        &self,
        cars: &[C],
        mut indices: Vec<usize>,
        load: &Load,
    ) -> Vec<usize> {
        if indices.len() < 2 {
            return indices;
        }

        let scores: Vec<f32> = cars.iter().map(|car| self.score(car, load)).collect();
        indices.sort_by(|&a, &b| {
            scores[a]
                .partial_cmp(&scores[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        indices
    }
}
