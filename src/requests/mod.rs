//! Request payloads accepted by the controllers.
//!
//! `Create*` requests carry every field. `Update*` requests wrap each field in
//! `Option` so that only the fields a client sends are applied.

pub mod car;
pub mod product;
