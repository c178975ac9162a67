use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use fleetroute_core::request::VehicleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vehicle {
    pub unit_id: u64,

    /// Registration plate shown in the vehicle picker.
    #[serde(default)]
    pub number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_title: Option<String>,
}

impl Vehicle {
    pub fn id(&self) -> VehicleId {
        VehicleId::new(self.unit_id)
    }

    pub fn display_name(&self) -> &str {
        if !self.number.is_empty() {
            &self.number
        } else if let Some(label) = self.label.as_deref() {
            label
        } else {
            self.vehicle_title.as_deref().unwrap_or_default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UnitList {
    #[serde(default)]
    pub units: Vec<Vehicle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_unit_list() {
        let list: UnitList = serde_json::from_str(
            r#"{ "units": [
                { "unit_id": 199200, "number": "KL-4411", "label": "Van 2", "mileage": 120331 },
                { "unit_id": 199201, "label": "Trailer" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(list.units.len(), 2);
        assert_eq!(list.units[0].id(), VehicleId::new(199200));
        assert_eq!(list.units[0].display_name(), "KL-4411");
        assert_eq!(list.units[1].display_name(), "Trailer");
    }
}
