//! Data access, one sub-module per resource.
//!
//! Each resource exposes a `<Name>RepositoryInterface` trait and a
//! `<Name>Repository` implementation backed by a shared [`Table`].
//!
//! [`Table`]: crate::store::Table

pub mod car;
pub mod product;
