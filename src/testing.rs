//! In-memory host fixtures for unit tests.

use std::collections::HashMap;

use crate::models::{Load, Waybill};
use crate::service::{IndustryContext, OpsCar};

pub(crate) fn coal() -> Load {
    Load::new("coal")
}

/// Single-load industry storage with dispatch and counter logs.
#[derive(Debug, Clone)]
pub(crate) struct MockYard {
    pub delta_time: f32,
    pub multiplier: f32,
    pub storage: f32,
    /// Total actually removed from storage.
    pub removed: f32,
    pub counters: HashMap<String, f32>,
    pub ordered_away_loaded: Vec<String>,
    pub ordered_away_empty: Vec<String>,
}

impl MockYard {
    pub fn new() -> Self {
        Self {
            delta_time: 1.0,
            multiplier: 1.0,
            storage: 0.0,
            removed: 0.0,
            counters: HashMap::new(),
            ordered_away_loaded: Vec::new(),
            ordered_away_empty: Vec::new(),
        }
    }

    pub fn with_storage(mut self, storage: f32) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }

    pub fn counter(&self, key: &str) -> f32 {
        self.counters.get(key).copied().unwrap_or(0.0)
    }
}

impl IndustryContext for MockYard {
    fn delta_time(&self) -> f32 {
        self.delta_time
    }

    fn contract_multiplier(&self) -> f32 {
        self.multiplier
    }

    fn quantity_in_storage(&self, _load: &Load) -> f32 {
        self.storage
    }

    fn add_to_storage(&mut self, _load: &Load, amount: f32, max_capacity: f32) {
        let room = (max_capacity - self.storage).max(0.0);
        self.storage += amount.max(0.0).min(room);
    }

    fn remove_from_storage(&mut self, _load: &Load, amount: f32) {
        let taken = amount.max(0.0).min(self.storage);
        self.storage -= taken;
        self.removed += taken;
    }

    fn counter_increment(&mut self, key: &str, amount: f32) {
        *self.counters.entry(key.to_string()).or_insert(0.0) += amount;
    }

    fn order_away_loaded(&mut self, car_id: &str) {
        self.ordered_away_loaded.push(car_id.to_string());
    }

    fn order_away_empty(&mut self, car_id: &str) {
        self.ordered_away_empty.push(car_id.to_string());
    }
}

/// Single-compartment car.
#[derive(Debug, Clone)]
pub(crate) struct MockCar {
    pub id: String,
    pub car_type: String,
    pub velocity: f32,
    /// Load id on board, `None` when empty.
    pub contents: Option<String>,
    pub quantity: f32,
    pub capacity: f32,
    pub waybill: Waybill,
    /// `(source, reason)` of every waybill change.
    pub waybill_changes: Vec<(String, String)>,
}

impl MockCar {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            car_type: "HT".to_string(),
            velocity: 0.0,
            contents: None,
            quantity: 0.0,
            capacity: 100.0,
            waybill: Waybill::Absent,
            waybill_changes: Vec::new(),
        }
    }

    /// Puts `quantity` of coal on board.
    pub fn holding(self, quantity: f32) -> Self {
        self.carrying("coal", quantity)
    }

    pub fn carrying(mut self, load_id: &str, quantity: f32) -> Self {
        self.contents = Some(load_id.to_string());
        self.quantity = quantity;
        self
    }

    pub fn with_capacity(mut self, capacity: f32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn of_type(mut self, car_type: &str) -> Self {
        self.car_type = car_type.to_string();
        self
    }

    pub fn moving(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn bound_for(mut self, destination: &str) -> Self {
        self.waybill = Waybill::pending(destination);
        self
    }

    pub fn completed_for(mut self, destination: &str) -> Self {
        self.waybill = Waybill::completed(destination);
        self
    }

    fn holds(&self, load: &Load) -> bool {
        self.contents.as_deref() == Some(load.id.as_str())
    }
}

impl OpsCar for MockCar {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.id
    }

    fn car_type(&self) -> &str {
        &self.car_type
    }

    fn velocity(&self) -> f32 {
        self.velocity
    }

    fn quantity_of_load(&self, load: &Load) -> f32 {
        if self.holds(load) {
            self.quantity
        } else {
            0.0
        }
    }

    fn is_full(&self, load: &Load) -> bool {
        self.holds(load) && self.capacity - self.quantity < load.zero_threshold
    }

    fn is_empty_or_contains(&self, load: &Load) -> bool {
        self.contents.is_none() || self.holds(load)
    }

    fn load(&mut self, load: &Load, amount: f32) -> f32 {
        if !self.is_empty_or_contains(load) {
            return 0.0;
        }
        let actual = amount.max(0.0).min((self.capacity - self.quantity).max(0.0));
        if actual > 0.0 {
            self.contents = Some(load.id.clone());
            self.quantity += actual;
        }
        actual
    }

    fn unload(&mut self, load: &Load, amount: f32) -> f32 {
        if !self.holds(load) {
            return 0.0;
        }
        let actual = amount.max(0.0).min(self.quantity);
        self.quantity -= actual;
        actual
    }

    fn waybill(&self) -> &Waybill {
        &self.waybill
    }

    fn set_waybill(&mut self, waybill: Waybill, source: &str, reason: &str) {
        self.waybill = waybill;
        self.waybill_changes
            .push((source.to_string(), reason.to_string()));
    }
}
