use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Model;
use crate::Record;

/// Rental category of a car.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarCategory {
    #[default]
    #[serde(rename = "City Car")]
    CityCar,
    #[serde(rename = "LCGC")]
    Lcgc,
    Compact,
    #[serde(rename = "MPV")]
    Mpv,
    #[serde(rename = "SUV")]
    Suv,
    Crossover,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    Toyota,
    Honda,
    Mercedes,
    Wuling,
    Mitsubishi,
    Volkswagen,
    Jeep,
    Subaru,
    Hyundai,
    Kia,
    Renault,
    Volvo,
    Chevrolet,
    Ford,
    #[serde(rename = "BMW")]
    Bmw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionType {
    #[default]
    Automatic,
    Manual,
}

/// A rental car row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
pub struct Car {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: CarCategory,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub price_per_month: f64,
    pub brand: Brand,
    pub model: String,
    pub transmission: TransmissionType,
    pub year: i32,
    pub license_plate: String,
    pub machine_number: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model for Car {
    fn table_name() -> &'static str {
        "cars"
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&CarCategory::CityCar).unwrap(), "\"City Car\"");
        assert_eq!(serde_json::to_string(&CarCategory::Suv).unwrap(), "\"SUV\"");
        assert_eq!(serde_json::to_string(&Brand::Bmw).unwrap(), "\"BMW\"");
        assert_eq!(
            serde_json::from_str::<TransmissionType>("\"Manual\"").unwrap(),
            TransmissionType::Manual
        );
        assert!(serde_json::from_str::<Brand>("\"Tesla\"").is_err());
    }
}
