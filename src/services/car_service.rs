use serde_json::{json, Value};
use tracing::info;

use super::{ServiceError, PROTECTED_FIELDS};
use crate::mapper::{map_fields, map_fields_with_exclusions};
use crate::models::car::Car;
use crate::pagination::{clamp_page_limit, Page};
use crate::repositories::car::CarRepositoryInterface;
use crate::requests::car::{CreateCarRequest, UpdateCarRequest};

const ENTITY: &str = "car";

/// Business operations on cars.
pub trait CarServiceInterface: Send + Sync {
    fn create(&self, req: &CreateCarRequest) -> Result<Car, ServiceError>;
    fn get_by_id(&self, id: u32) -> Result<Car, ServiceError>;
    /// List cars, optionally only those whose availability equals `available`.
    fn list(&self, page: i64, limit: i64, available: Option<bool>)
        -> Result<Page<Car>, ServiceError>;
    fn update(&self, id: u32, req: &UpdateCarRequest) -> Result<Car, ServiceError>;
    fn delete(&self, id: u32) -> Result<(), ServiceError>;
    fn stats(&self) -> Result<Value, ServiceError>;
}

pub struct CarService {
    repository: Box<dyn CarRepositoryInterface>,
}

impl CarService {
    pub fn new(repository: Box<dyn CarRepositoryInterface>) -> Self {
        Self { repository }
    }
}

impl CarServiceInterface for CarService {
    fn create(&self, req: &CreateCarRequest) -> Result<Car, ServiceError> {
        let mut car = Car::default();
        map_fields(req, &mut car);

        self.repository.create(&mut car)?;
        info!(id = car.id, plate = %car.license_plate, "car created");
        Ok(car)
    }

    fn get_by_id(&self, id: u32) -> Result<Car, ServiceError> {
        if id == 0 {
            return Err(ServiceError::InvalidId { entity: ENTITY });
        }
        self.repository
            .get_by_id(id)
            .map_err(|err| ServiceError::from_lookup(ENTITY, err))
    }

    fn list(
        &self,
        page: i64,
        limit: i64,
        available: Option<bool>,
    ) -> Result<Page<Car>, ServiceError> {
        let (page, limit) = clamp_page_limit(page, limit);
        let (items, total) = self.repository.get_all(page, limit, available)?;
        Ok(Page {
            items,
            total,
            page,
            limit,
        })
    }

    fn update(&self, id: u32, req: &UpdateCarRequest) -> Result<Car, ServiceError> {
        let mut car = self
            .repository
            .get_by_id(id)
            .map_err(|err| ServiceError::from_lookup(ENTITY, err))?;

        map_fields_with_exclusions(req, &mut car, PROTECTED_FIELDS);

        self.repository.update(&mut car)?;
        info!(id, "car updated");
        Ok(car)
    }

    fn delete(&self, id: u32) -> Result<(), ServiceError> {
        if !self.repository.exists_by_id(id)? {
            return Err(ServiceError::NotFound { entity: ENTITY });
        }
        self.repository.delete(id)?;
        info!(id, "car deleted");
        Ok(())
    }

    fn stats(&self) -> Result<Value, ServiceError> {
        let total = self.repository.count()?;
        Ok(json!({ "total_cars": total }))
    }
}
