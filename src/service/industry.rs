//! Per-tick loader and unloader service.
//!
//! # Algorithm
//!
//! 1. Read the contract multiplier once; scale rates and max storage by it.
//! 2. Select eligible cars and sort them into service order.
//! 3. Loaders add the tick's production to storage first.
//! 4. Unloaders apply the zero-threshold floor to the tick quantity.
//! 5. Build the distribution plan, then for each car in order: compute
//!    its offer against the residual, transfer, raise lifecycle events,
//!    and shrink the residual by what actually moved.
//! 6. Unloaders then deduct storage self-consumption and, for paid loads,
//!    add the amount unloaded to the `unloaded-total-<load>` counter.
//!
//! # Complexity
//! O(n log n) per tick for n cars at the component (the sort).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distribution::{
    is_negligible, rate_to_value, CarOrder, DistributionPlan, DistributionPolicy, ThresholdGuard,
};
use crate::models::{Load, ServiceConfig};
use crate::validation::{validate_config, ConfigError};

use super::selector::{select_cars, SelectionCriteria, MOVING_SPEED_TOLERANCE};
use super::summary::{CarTransfer, TickSummary};
use super::transfer::TransferExecutor;
use super::{IndustryContext, OpsCar};

/// Which way material flows between storage and cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferDirection {
    /// Storage to cars.
    Loading,
    /// Cars to storage.
    Unloading,
}

/// The concrete component variants.
///
/// | Kind | Direction | Policy | Order |
/// |------|-----------|--------|-------|
/// | AllCarsLoader | loading | EqualPriority | most loaded first |
/// | MovingLoader | loading | EqualDivision | most loaded first, stopped cars only |
/// | AllCarsPercentLoader | loading | Proportional | most loaded first |
/// | AllCarsUnloader | unloading | EqualDivision | least loaded first |
/// | AllCarsPercentUnloader | unloading | Proportional | least loaded first |
/// | HopperUnloader | unloading | HopperProportional | least loaded first |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    AllCarsLoader,
    MovingLoader,
    AllCarsPercentLoader,
    AllCarsUnloader,
    AllCarsPercentUnloader,
    HopperUnloader,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AllCarsLoader => "all-cars-loader",
            Self::MovingLoader => "moving-loader",
            Self::AllCarsPercentLoader => "all-cars-percent-loader",
            Self::AllCarsUnloader => "all-cars-unloader",
            Self::AllCarsPercentUnloader => "all-cars-percent-unloader",
            Self::HopperUnloader => "hopper-unloader",
        }
    }

    pub fn direction(&self) -> TransferDirection {
        match self {
            Self::AllCarsLoader | Self::MovingLoader | Self::AllCarsPercentLoader => {
                TransferDirection::Loading
            }
            Self::AllCarsUnloader | Self::AllCarsPercentUnloader | Self::HopperUnloader => {
                TransferDirection::Unloading
            }
        }
    }

    pub fn policy(&self) -> DistributionPolicy {
        match self {
            Self::AllCarsLoader => DistributionPolicy::EqualPriority,
            Self::MovingLoader | Self::AllCarsUnloader => DistributionPolicy::EqualDivision,
            Self::AllCarsPercentLoader | Self::AllCarsPercentUnloader => {
                DistributionPolicy::Proportional
            }
            Self::HopperUnloader => DistributionPolicy::HopperProportional,
        }
    }

    pub fn order(&self) -> CarOrder {
        match self.direction() {
            TransferDirection::Loading => CarOrder::MostLoadedFirst,
            TransferDirection::Unloading => CarOrder::LeastLoadedFirst,
        }
    }

    /// Speed limit for cars to be serviced, if the kind has one.
    pub fn max_speed(&self) -> Option<f32> {
        match self {
            Self::MovingLoader => Some(MOVING_SPEED_TOLERANCE),
            _ => None,
        }
    }
}

/// One loader or unloader component bound to a load.
///
/// Call [`service`](Self::service) once per simulation tick.
///
/// # Example
///
/// ```no_run
/// # use u_transload::{IndustryContext, Load, OpsCar, Waybill};
/// #
/// # struct Plant {
/// #     storage: f32,
/// # }
/// #
/// # impl IndustryContext for Plant {
/// #     fn delta_time(&self) -> f32 { 1.0 / 24.0 }
/// #     fn contract_multiplier(&self) -> f32 { 1.0 }
/// #     fn quantity_in_storage(&self, _load: &Load) -> f32 { self.storage }
/// #     fn add_to_storage(&mut self, _load: &Load, amount: f32, max: f32) {
/// #         self.storage = (self.storage + amount).min(max.max(self.storage));
/// #     }
/// #     fn remove_from_storage(&mut self, _load: &Load, amount: f32) {
/// #         self.storage = (self.storage - amount).max(0.0);
/// #     }
/// #     fn counter_increment(&mut self, _key: &str, _amount: f32) {}
/// #     fn order_away_loaded(&mut self, _car_id: &str) {}
/// #     fn order_away_empty(&mut self, _car_id: &str) {}
/// # }
/// #
/// # struct Hopper {
/// #     quantity: f32,
/// #     waybill: Waybill,
/// # }
/// #
/// # impl OpsCar for Hopper {
/// #     fn id(&self) -> &str { "HT-101" }
/// #     fn display_name(&self) -> &str { "HT 101" }
/// #     fn car_type(&self) -> &str { "HT" }
/// #     fn velocity(&self) -> f32 { 0.0 }
/// #     fn quantity_of_load(&self, _load: &Load) -> f32 { self.quantity }
/// #     fn is_full(&self, _load: &Load) -> bool { self.quantity >= 100.0 }
/// #     fn is_empty_or_contains(&self, _load: &Load) -> bool { true }
/// #     fn load(&mut self, _load: &Load, amount: f32) -> f32 {
/// #         let taken = amount.min(100.0 - self.quantity);
/// #         self.quantity += taken;
/// #         taken
/// #     }
/// #     fn unload(&mut self, _load: &Load, amount: f32) -> f32 {
/// #         let given = amount.min(self.quantity);
/// #         self.quantity -= given;
/// #         given
/// #     }
/// #     fn waybill(&self) -> &Waybill { &self.waybill }
/// #     fn set_waybill(&mut self, waybill: Waybill, _source: &str, _reason: &str) {
/// #         self.waybill = waybill;
/// #     }
/// # }
/// # fn main() -> Result<(), u_transload::validation::ConfigError> {
/// use u_transload::{IndustryService, ServiceConfig, ServiceKind};
///
/// let config = ServiceConfig::new("coal-mine")
///     .with_production_rate(200.0)
///     .with_car_load_rate(100.0)
///     .with_max_storage(1000.0);
/// let mut loader = IndustryService::new(ServiceKind::AllCarsLoader, Load::new("coal"), config)?;
/// # let mut industry_ctx = Plant { storage: 0.0 };
/// # let mut cars_at_track = vec![Hopper { quantity: 0.0, waybill: Waybill::pending("coal-mine") }];
///
/// // each tick:
/// let summary = loader.service(&mut industry_ctx, &mut cars_at_track);
/// # let _ = summary;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IndustryService {
    kind: ServiceKind,
    load: Load,
    config: ServiceConfig,
    threshold: ThresholdGuard,
}

impl IndustryService {
    /// Creates a component after validating its configuration.
    pub fn new(kind: ServiceKind, load: Load, config: ServiceConfig) -> Result<Self, ConfigError> {
        validate_config(&config, &load).map_err(|errors| ConfigError {
            identifier: config.identifier.clone(),
            errors,
        })?;

        Ok(Self {
            kind,
            load,
            config,
            threshold: ThresholdGuard::new(),
        })
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    pub fn load(&self) -> &Load {
        &self.load
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Whether the sub-threshold rate warning has been emitted.
    pub fn has_warned(&self) -> bool {
        self.threshold.has_warned()
    }

    /// Runs one tick against the host's storage and the cars at the component.
    pub fn service<X, C>(&mut self, ctx: &mut X, cars: &mut [C]) -> TickSummary
    where
        X: IndustryContext,
        C: OpsCar,
    {
        match self.kind.direction() {
            TransferDirection::Loading => self.service_loading(ctx, cars),
            TransferDirection::Unloading => self.service_unloading(ctx, cars),
        }
    }

    /// Eligible cars in service order, as indices into `cars`.
    pub fn eligible_cars<C: OpsCar>(&self, cars: &[C]) -> Vec<usize> {
        let criteria = SelectionCriteria {
            identifier: &self.config.identifier,
            car_types: &self.config.car_type_filter,
            max_speed: self.kind.max_speed(),
            require_waybill: true,
        };
        let selected = select_cars(cars, &criteria, &self.load);
        self.kind.order().sort_indices(cars, selected, &self.load)
    }

    fn total_in_cars<C: OpsCar>(&self, cars: &[C], order: &[usize]) -> f32 {
        order
            .iter()
            .map(|&i| cars[i].quantity_of_load(&self.load))
            .sum()
    }

    fn service_loading<X, C>(&mut self, ctx: &mut X, cars: &mut [C]) -> TickSummary
    where
        X: IndustryContext,
        C: OpsCar,
    {
        let multiplier = ctx.contract_multiplier();
        let dt = ctx.delta_time();
        let car_rate = self.config.car_load_rate * multiplier;
        let quantity = rate_to_value(car_rate, dt);
        let produced = rate_to_value(self.config.production_rate * multiplier, dt);
        let max_storage = self.config.max_storage * multiplier;

        let order = self.eligible_cars(cars);
        let total_in_cars = self.total_in_cars(cars, &order);

        let storage_before = ctx.quantity_in_storage(&self.load);
        ctx.add_to_storage(&self.load, produced, max_storage);
        let mut storage = ctx.quantity_in_storage(&self.load);

        let plan = self
            .kind
            .policy()
            .plan(quantity, car_rate, order.len(), storage, total_in_cars);
        debug!(
            "{} {} loading {} per tick ({} per day); {} cars able to be loaded, {} per car with {} in storage",
            self.kind.name(),
            self.config.identifier,
            quantity,
            car_rate,
            order.len(),
            plan.per_car,
            storage
        );

        let executor = TransferExecutor {
            load: &self.load,
            source: &self.config.identifier,
            order_away: self.config.order_away_loaded,
        };

        let mut transfers = Vec::with_capacity(order.len());
        for &i in &order {
            let car = &mut cars[i];
            let offer = plan.offer(storage, car.quantity_of_load(&self.load));
            log_car_offer(&plan, car.display_name(), offer.amount);

            let transfer = executor.load_car(ctx, car, offer.amount);
            storage = (storage - transfer.actual).max(0.0);
            transfers.push(CarTransfer::new(car.id(), transfer));
        }

        TickSummary {
            contract_multiplier: multiplier,
            quantity,
            car_count: order.len(),
            storage_before,
            storage_after: ctx.quantity_in_storage(&self.load),
            produced,
            consumed: 0.0,
            floored: false,
            stopped_early: false,
            transfers,
        }
    }

    fn service_unloading<X, C>(&mut self, ctx: &mut X, cars: &mut [C]) -> TickSummary
    where
        X: IndustryContext,
        C: OpsCar,
    {
        let multiplier = ctx.contract_multiplier();
        let dt = ctx.delta_time();
        let car_rate = self.config.car_unload_rate * multiplier;
        let max_storage = self.config.max_storage * multiplier;
        let zero_threshold = self.load.zero_threshold;

        let order = self.eligible_cars(cars);
        let total_in_cars = self.total_in_cars(cars, &order);

        let storage_before = ctx.quantity_in_storage(&self.load);
        let mut storage = storage_before;

        let floored = self.threshold.floor(
            rate_to_value(car_rate, dt),
            zero_threshold,
            multiplier,
            &self.config.identifier,
        );
        let quantity = floored.quantity;

        let plan = self
            .kind
            .policy()
            .plan(quantity, car_rate, order.len(), storage, total_in_cars);
        debug!(
            "{} {} unloading {} per tick ({} per day); {} cars able to be unloaded, {} per car",
            self.kind.name(),
            self.config.identifier,
            quantity,
            car_rate,
            order.len(),
            plan.per_car
        );

        let executor = TransferExecutor {
            load: &self.load,
            source: &self.config.identifier,
            order_away: self.config.order_away_empties,
        };

        let mut transfers = Vec::with_capacity(order.len());
        let mut unloaded = 0.0;
        let mut stopped_early = false;
        for &i in &order {
            let car = &mut cars[i];
            let offer = plan.offer(max_storage - storage, car.quantity_of_load(&self.load));
            if is_negligible(offer.capped, zero_threshold) {
                stopped_early = true;
                break;
            }
            log_car_offer(&plan, car.display_name(), offer.amount);

            let transfer = executor.unload_car(ctx, car, offer.amount, max_storage);
            storage += transfer.actual;
            unloaded += transfer.actual;
            transfers.push(CarTransfer::new(car.id(), transfer));
        }

        if self.load.is_paid() {
            ctx.counter_increment(&self.load.unloaded_total_key(), unloaded);
        }

        let consumed = rate_to_value(multiplier * self.config.storage_consumption_rate, dt);
        ctx.remove_from_storage(&self.load, consumed);

        TickSummary {
            contract_multiplier: multiplier,
            quantity,
            car_count: order.len(),
            storage_before,
            storage_after: ctx.quantity_in_storage(&self.load),
            produced: 0.0,
            consumed,
            floored: floored.applied,
            stopped_early,
            transfers,
        }
    }
}

fn log_car_offer(plan: &DistributionPlan, car: &str, amount: f32) {
    if matches!(
        plan.policy,
        DistributionPolicy::Proportional | DistributionPolicy::HopperProportional
    ) {
        debug!(
            "{}: {} per car base, adjusted to {} for car {}",
            plan.policy.name(),
            plan.per_car,
            amount,
            car
        );
    }
}
