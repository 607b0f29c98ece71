//! Persistence models, one module per resource.

pub mod car;
pub mod product;

use chrono::{DateTime, Utc};

use crate::mapper::Record;

/// A row stored in a [`Table`](crate::store::Table).
///
/// The store owns the primary key and the audit timestamps; services never set
/// them directly and exclude them when mapping update requests.
pub trait Model: Record + Clone + Send + Sync + 'static {
    /// Name of the backing table.
    fn table_name() -> &'static str;

    fn id(&self) -> u32;

    fn set_id(&mut self, id: u32);

    fn set_created_at(&mut self, at: DateTime<Utc>);

    fn set_updated_at(&mut self, at: DateTime<Utc>);
}
