use std::sync::Arc;

use super::product_repository_interface::ProductRepositoryInterface;
use crate::models::product::Product;
use crate::pagination::PaginationMeta;
use crate::store::{StoreError, Table};

/// [`ProductRepositoryInterface`] over an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    table: Arc<Table<Product>>,
}

impl ProductRepository {
    pub fn new(table: Arc<Table<Product>>) -> Self {
        Self { table }
    }
}

impl ProductRepositoryInterface for ProductRepository {
    fn create(&self, product: &mut Product) -> Result<(), StoreError> {
        self.table.insert(product)
    }

    fn get_by_id(&self, id: u32) -> Result<Product, StoreError> {
        self.table.first(id)
    }

    fn get_all(&self, page: u32, limit: u32) -> Result<(Vec<Product>, u64), StoreError> {
        let total = self.table.count(|_| true)?;
        let products = self
            .table
            .find(PaginationMeta::offset(page, limit), limit as usize, |_| true)?;
        Ok((products, total))
    }

    fn update(&self, product: &mut Product) -> Result<(), StoreError> {
        self.table.save(product)
    }

    fn delete(&self, id: u32) -> Result<(), StoreError> {
        self.table.delete(id)
    }

    fn count(&self) -> Result<u64, StoreError> {
        self.table.count(|_| true)
    }

    fn exists_by_id(&self, id: u32) -> Result<bool, StoreError> {
        Ok(self.table.count(|product| product.id == id)? > 0)
    }
}
