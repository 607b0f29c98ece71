//! Business rules for each resource.
//!
//! Services sit between controllers and repositories. They resolve ids,
//! clamp paging and use the [field mapper](crate::mapper) to move request
//! data into models.

pub mod car_service;
pub mod product_service;

use thiserror::Error;

use crate::store::StoreError;

/// Fields a client update must never overwrite.
pub const PROTECTED_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The id cannot name a row (ids start at 1).
    #[error("invalid {entity} ID")]
    InvalidId { entity: &'static str },
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Translate a lookup failure, turning a missing row into [`ServiceError::NotFound`].
    pub fn from_lookup(entity: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::RecordNotFound { .. } => Self::NotFound { entity },
            other => Self::Store(other),
        }
    }
}
