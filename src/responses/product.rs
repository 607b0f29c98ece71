use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::pagination::PaginationMeta;

/// A single product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsListResponse {
    pub data: Vec<ProductResponse>,
    pub pagination: PaginationMeta,
}

impl ProductsListResponse {
    pub fn new(products: &[Product], total: u64, page: u32, limit: u32) -> Self {
        Self {
            data: products.iter().map(ProductResponse::from).collect(),
            pagination: PaginationMeta::new(total, page, limit),
        }
    }
}
