use std::fmt::Display;

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Mapon `unit_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct VehicleId(u64);

impl VehicleId {
    pub fn new(value: u64) -> Self {
        VehicleId(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive time window, `from <= till`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteWindow {
    from: Timestamp,
    till: Timestamp,
}

impl RouteWindow {
    pub fn new(from: Timestamp, till: Timestamp) -> Result<Self, RouteError> {
        if from > till {
            return Err(RouteError::InvalidWindow { from, till });
        }

        Ok(RouteWindow { from, till })
    }

    pub fn from(&self) -> Timestamp {
        self.from
    }

    pub fn till(&self) -> Timestamp {
        self.till
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteRequest {
    pub vehicle_id: VehicleId,
    pub window: RouteWindow,
}

impl RouteRequest {
    pub fn new(vehicle_id: VehicleId, window: RouteWindow) -> Self {
        RouteRequest { vehicle_id, window }
    }
}
