//! # Field Mapper
//!
//! Copies field values from one record into another by name. Services use it
//! to move data from request DTOs into persistence models without writing a
//! copy function per entity and direction.
//!
//! ## Rules
//!
//! - Fields are matched by **exact** name. `email` never feeds `Email` or
//!   `email_address`.
//! - An optional source field (`Option<T>`) that is `None` is skipped, so the
//!   destination keeps its prior value. This is how partial-update requests
//!   are expressed.
//! - A value is copied only when its type is identical to the destination
//!   field's declared type. Mismatches are skipped silently, never coerced.
//! - Destination fields without a same-named source field are left untouched.
//! - [`map_fields_with_exclusions`] additionally protects the named fields,
//!   typically identity and audit timestamps.
//!
//! Mapping never fails. Skips are reported at `trace` level.
//!
//! ## Example
//!
//! ```rust
//! use crudgen::mapper::map_fields_with_exclusions;
//! use crudgen::Record;
//!
//! #[derive(Record)]
//! pub struct Account {
//!     pub id: u32,
//!     pub name: String,
//! }
//!
//! #[derive(Record)]
//! pub struct UpdateAccount {
//!     pub id: Option<u32>,
//!     pub name: Option<String>,
//! }
//!
//! let mut account = Account { id: 7, name: "old".into() };
//! let update = UpdateAccount { id: Some(99), name: Some("new".into()) };
//! map_fields_with_exclusions(&update, &mut account, &["id"]);
//! assert_eq!(account.id, 7);
//! assert_eq!(account.name, "new");
//! ```

mod record;

pub use record::{FieldDescriptor, FieldKind, FieldValue, Record, TypeTag};

use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Copy every same-named, type-compatible field of `source` into
/// `destination`.
pub fn map_fields<S, D>(source: &S, destination: &mut D)
where
    S: Record + ?Sized,
    D: Record + ?Sized,
{
    map_fields_with_exclusions(source, destination, &[]);
}

/// Same as [`map_fields`], but fields named in `excluded` are never read from
/// `source` nor written into `destination`.
pub fn map_fields_with_exclusions<S, D>(source: &S, destination: &mut D, excluded: &[&str])
where
    S: Record + ?Sized,
    D: Record + ?Sized,
{
    let excluded: HashSet<&str> = excluded.iter().copied().collect();

    let assignable: HashMap<&'static str, FieldDescriptor> = destination
        .descriptors()
        .into_iter()
        .filter(|descriptor| !excluded.contains(descriptor.name))
        .map(|descriptor| (descriptor.name, descriptor))
        .collect();

    let source_name = source.record_name();
    let destination_name = destination.record_name();

    for field in source.values() {
        let name = field.name();

        if excluded.contains(name) {
            trace!(source = source_name, field = name, "field excluded from mapping");
            continue;
        }

        let Some(target) = assignable.get(name) else {
            trace!(
                source = source_name,
                destination = destination_name,
                field = name,
                "no destination field with this name"
            );
            continue;
        };

        let Some(value) = field.value() else {
            trace!(source = source_name, field = name, "optional field absent, keeping destination value");
            continue;
        };

        if !field.value_type().is_assignable_to(&target.type_tag) {
            trace!(
                field = name,
                source_type = field.value_type().name(),
                destination_type = target.type_tag.name(),
                "type mismatch, field skipped"
            );
            continue;
        }

        if !destination.assign(name, value) {
            trace!(destination = destination_name, field = name, "destination rejected value");
        }
    }
}

/// Names of the fields visible to the mapper, in declaration order.
pub fn field_names<R: Record + ?Sized>(record: &R) -> Vec<&'static str> {
    record
        .descriptors()
        .into_iter()
        .map(|descriptor| descriptor.name)
        .collect()
}

/// Whether `record` has a visible field named `name`, ignoring ASCII case.
pub fn has_field<R: Record + ?Sized>(record: &R, name: &str) -> bool {
    record
        .descriptors()
        .iter()
        .any(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
}
