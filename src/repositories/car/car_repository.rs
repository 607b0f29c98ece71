use std::sync::Arc;

use super::car_repository_interface::CarRepositoryInterface;
use crate::models::car::Car;
use crate::pagination::PaginationMeta;
use crate::store::{StoreError, Table};

/// [`CarRepositoryInterface`] over an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct CarRepository {
    table: Arc<Table<Car>>,
}

impl CarRepository {
    pub fn new(table: Arc<Table<Car>>) -> Self {
        Self { table }
    }
}

impl CarRepositoryInterface for CarRepository {
    fn create(&self, car: &mut Car) -> Result<(), StoreError> {
        self.table.insert(car)
    }

    fn get_by_id(&self, id: u32) -> Result<Car, StoreError> {
        self.table.first(id)
    }

    fn get_all(
        &self,
        page: u32,
        limit: u32,
        available: Option<bool>,
    ) -> Result<(Vec<Car>, u64), StoreError> {
        let matches = |car: &Car| match available {
            Some(wanted) => car.is_available == wanted,
            None => true,
        };
        let total = self.table.count(matches)?;
        let cars = self
            .table
            .find(PaginationMeta::offset(page, limit), limit as usize, matches)?;
        Ok((cars, total))
    }

    fn update(&self, car: &mut Car) -> Result<(), StoreError> {
        self.table.save(car)
    }

    fn delete(&self, id: u32) -> Result<(), StoreError> {
        self.table.delete(id)
    }

    fn count(&self) -> Result<u64, StoreError> {
        self.table.count(|_| true)
    }

    fn exists_by_id(&self, id: u32) -> Result<bool, StoreError> {
        Ok(self.table.count(|car| car.id == id)? > 0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn car(name: &str, is_available: bool) -> Car {
        Car {
            name: name.to_string(),
            is_available,
            ..Car::default()
        }
    }

    #[test]
    fn test_availability_filter() {
        let repo = CarRepository::default();
        repo.create(&mut car("a", true)).unwrap();
        repo.create(&mut car("b", false)).unwrap();
        repo.create(&mut car("c", true)).unwrap();

        let (available, total) = repo.get_all(1, 10, Some(true)).unwrap();
        assert_eq!(total, 2);
        let names: Vec<_> = available.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);

        let (rented, total) = repo.get_all(1, 10, Some(false)).unwrap();
        assert_eq!(total, 1);
        assert_eq!(rented[0].name, "b");

        let (all, total) = repo.get_all(1, 10, None).unwrap();
        assert_eq!((all.len(), total), (3, 3));
    }

    #[test]
    fn test_update_persists() {
        let repo = CarRepository::default();
        let mut row = car("before", true);
        repo.create(&mut row).unwrap();
        row.name = "after".to_string();
        repo.update(&mut row).unwrap();
        assert_eq!(repo.get_by_id(row.id).unwrap().name, "after");
    }
}
