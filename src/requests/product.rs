use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Record;

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, Record)]
pub struct CreateProductRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(min = 10, max = 500))]
    pub description: String,
}

/// Payload for a partial product update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, Record)]
pub struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 100))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10, max = 500))]
    pub description: Option<String>,
}
