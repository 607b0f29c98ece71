use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::{Brand, CarCategory, TransmissionType};
use crate::Record;

/// Payload for registering a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, Record)]
pub struct CreateCarRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(min = 10, max = 500))]
    pub description: String,
    pub category: CarCategory,
    #[validate(range(min = 0.0))]
    pub price_per_day: f64,
    #[validate(range(min = 0.0))]
    pub price_per_week: f64,
    #[validate(range(min = 0.0))]
    pub price_per_month: f64,
    pub brand: Brand,
    #[validate(length(min = 3, max = 100))]
    pub model: String,
    pub transmission: TransmissionType,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(length(min = 3, max = 10))]
    pub license_plate: String,
    #[validate(length(min = 3, max = 10))]
    pub machine_number: String,
    pub is_available: bool,
}

/// Payload for a partial car update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, Record)]
pub struct UpdateCarRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 100))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10, max = 500))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CarCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub price_per_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub price_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub price_per_month: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 100))]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<TransmissionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 10))]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 10))]
    pub machine_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
