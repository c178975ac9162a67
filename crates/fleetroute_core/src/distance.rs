use std::{
    borrow::Cow,
    iter::Sum,
    ops::{Add, AddAssign},
};

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MILLIMETERS_PER_METER: f64 = 1_000.0;
const MILLIMETERS_PER_KILOMETER: f64 = 1_000_000.0;

/// Distance as reported by the telemetry provider, stored as whole
/// millimetres so that sums are exact in any order.
///
/// Values are taken as-is: a negative distance from upstream is summed like
/// any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Meters {
    millimeters: i64,
}

impl Meters {
    pub const ZERO: Meters = Meters { millimeters: 0 };

    pub fn new(value: f64) -> Self {
        Meters {
            millimeters: (value * MILLIMETERS_PER_METER).round() as i64,
        }
    }

    pub fn value(&self) -> f64 {
        self.millimeters as f64 / MILLIMETERS_PER_METER
    }

    /// No rounding, formatting belongs to the caller.
    pub fn to_kilometers(&self) -> f64 {
        self.millimeters as f64 / MILLIMETERS_PER_KILOMETER
    }
}

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Meters::new(value)
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, other: Meters) -> Meters {
        Meters {
            millimeters: self.millimeters + other.millimeters,
        }
    }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, other: Meters) {
        self.millimeters += other.millimeters;
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Meters>>(iter: I) -> Meters {
        iter.fold(Meters::ZERO, |acc, x| acc + x)
    }
}

impl Serialize for Meters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// `null` reads as zero.
impl<'de> Deserialize<'de> for Meters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.map(Meters::new).unwrap_or_default())
    }
}

impl JsonSchema for Meters {
    fn schema_name() -> Cow<'static, str> {
        "Meters".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        f64::json_schema(generator)
    }
}
