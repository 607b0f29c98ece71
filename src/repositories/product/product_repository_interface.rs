use crate::models::product::Product;
use crate::store::StoreError;

/// Data operations on products.
pub trait ProductRepositoryInterface: Send + Sync {
    fn create(&self, product: &mut Product) -> Result<(), StoreError>;
    fn get_by_id(&self, id: u32) -> Result<Product, StoreError>;
    /// One page of products and the total number of products.
    fn get_all(&self, page: u32, limit: u32) -> Result<(Vec<Product>, u64), StoreError>;
    fn update(&self, product: &mut Product) -> Result<(), StoreError>;
    fn delete(&self, id: u32) -> Result<(), StoreError>;
    fn count(&self) -> Result<u64, StoreError>;
    fn exists_by_id(&self, id: u32) -> Result<bool, StoreError>;
}
