use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Model;
use crate::Record;

/// A product row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model for Product {
    fn table_name() -> &'static str {
        "products"
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
