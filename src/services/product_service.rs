use serde_json::{json, Value};
use tracing::info;

use super::{ServiceError, PROTECTED_FIELDS};
use crate::mapper::{map_fields, map_fields_with_exclusions};
use crate::models::product::Product;
use crate::pagination::{clamp_page_limit, Page};
use crate::repositories::product::ProductRepositoryInterface;
use crate::requests::product::{CreateProductRequest, UpdateProductRequest};

const ENTITY: &str = "product";

/// Business operations on products.
pub trait ProductServiceInterface: Send + Sync {
    fn create(&self, req: &CreateProductRequest) -> Result<Product, ServiceError>;
    fn get_by_id(&self, id: u32) -> Result<Product, ServiceError>;
    /// List products. Out of range paging is clamped, not rejected.
    fn list(&self, page: i64, limit: i64) -> Result<Page<Product>, ServiceError>;
    fn update(&self, id: u32, req: &UpdateProductRequest) -> Result<Product, ServiceError>;
    fn delete(&self, id: u32) -> Result<(), ServiceError>;
    fn stats(&self) -> Result<Value, ServiceError>;
}

pub struct ProductService {
    repository: Box<dyn ProductRepositoryInterface>,
}

impl ProductService {
    pub fn new(repository: Box<dyn ProductRepositoryInterface>) -> Self {
        Self { repository }
    }
}

impl ProductServiceInterface for ProductService {
    fn create(&self, req: &CreateProductRequest) -> Result<Product, ServiceError> {
        let mut product = Product::default();
        map_fields(req, &mut product);

        self.repository.create(&mut product)?;
        info!(id = product.id, "product created");
        Ok(product)
    }

    fn get_by_id(&self, id: u32) -> Result<Product, ServiceError> {
        if id == 0 {
            return Err(ServiceError::InvalidId { entity: ENTITY });
        }
        self.repository
            .get_by_id(id)
            .map_err(|err| ServiceError::from_lookup(ENTITY, err))
    }

    fn list(&self, page: i64, limit: i64) -> Result<Page<Product>, ServiceError> {
        let (page, limit) = clamp_page_limit(page, limit);
        let (items, total) = self.repository.get_all(page, limit)?;
        Ok(Page {
            items,
            total,
            page,
            limit,
        })
    }

    fn update(&self, id: u32, req: &UpdateProductRequest) -> Result<Product, ServiceError> {
        let mut product = self
            .repository
            .get_by_id(id)
            .map_err(|err| ServiceError::from_lookup(ENTITY, err))?;

        map_fields_with_exclusions(req, &mut product, PROTECTED_FIELDS);

        self.repository.update(&mut product)?;
        info!(id, "product updated");
        Ok(product)
    }

    fn delete(&self, id: u32) -> Result<(), ServiceError> {
        if !self.repository.exists_by_id(id)? {
            return Err(ServiceError::NotFound { entity: ENTITY });
        }
        self.repository.delete(id)?;
        info!(id, "product deleted");
        Ok(())
    }

    fn stats(&self) -> Result<Value, ServiceError> {
        let total = self.repository.count()?;
        Ok(json!({ "total_products": total }))
    }
}
