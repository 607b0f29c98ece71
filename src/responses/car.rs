use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::car::{Brand, Car, CarCategory, TransmissionType};
use crate::pagination::PaginationMeta;

/// A single car as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarResponse {
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

impl From<&Car> for CarResponse {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id,
            name: car.name.clone(),
            description: car.description.clone(),
            category: car.category,
            price_per_day: car.price_per_day,
            price_per_week: car.price_per_week,
            price_per_month: car.price_per_month,
            brand: car.brand,
            model: car.model.clone(),
            transmission: car.transmission,
            year: car.year,
            license_plate: car.license_plate.clone(),
            machine_number: car.machine_number.clone(),
            is_available: car.is_available,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// One page of cars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarsListResponse {
    pub data: Vec<CarResponse>,
    pub pagination: PaginationMeta,
}

impl CarsListResponse {
    pub fn new(cars: &[Car], total: u64, page: u32, limit: u32) -> Self {
        Self {
            data: cars.iter().map(CarResponse::from).collect(),
            pagination: PaginationMeta::new(total, page, limit),
        }
    }
}
