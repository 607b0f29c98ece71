use crate::models::car::Car;
use crate::store::StoreError;

/// Data operations on cars.
pub trait CarRepositoryInterface: Send + Sync {
    fn create(&self, car: &mut Car) -> Result<(), StoreError>;
    fn get_by_id(&self, id: u32) -> Result<Car, StoreError>;
    /// One page of cars and the number of cars matching `available`.
    ///
    /// `None` lists every car regardless of availability.
    fn get_all(
        &self,
        page: u32,
        limit: u32,
        available: Option<bool>,
    ) -> Result<(Vec<Car>, u64), StoreError>;
    fn update(&self, car: &mut Car) -> Result<(), StoreError>;
    fn delete(&self, id: u32) -> Result<(), StoreError>;
    fn count(&self) -> Result<u64, StoreError>;
    fn exists_by_id(&self, id: u32) -> Result<bool, StoreError>;
}
