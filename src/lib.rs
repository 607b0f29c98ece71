//! # crudgen
//!
//! **crudgen** scaffolds layered CRUD resources from an entity name and ships
//! the field mapper those resources use to move request data into models.
//!
//! ## Overview
//!
//! The crate has two halves:
//!
//! - **[`generator`]** - renders the controller, repository interface,
//!   repository implementation, service, request DTOs, response DTOs and model
//!   of a new resource from templates. The `crudgen` binary wraps it.
//! - **[`mapper`]** - copies same-named, same-typed fields from one record
//!   into another, skipping absent optional fields and protected names.
//!   Records implement [`Record`], usually through `#[derive(Record)]`.
//!
//! The `products` and `cars` resources are implemented by hand in the same
//! layout the generator produces:
//!
//! ```text
//! controllers  →  services  →  repositories  →  store
//!     ↑              ↑
//!  requests       mapper
//!  responses
//! ```
//!
//! - **[`models`]** - persistence rows and the [`Model`](models::Model) trait
//! - **[`requests`]** / **[`responses`]** - DTOs, validated with `validator`
//! - **[`repositories`]** - per-resource data access over [`store::Table`]
//! - **[`services`]** - business rules, id checks and paging bounds
//! - **[`controllers`]** - framework-neutral handlers returning a status and
//!   a JSON body
//!
//! ## Example
//!
//! ```rust
//! use crudgen::controllers::product_controller::ProductController;
//! use crudgen::repositories::product::ProductRepository;
//! use crudgen::services::product_service::ProductService;
//!
//! let controller = ProductController::new(Box::new(ProductService::new(Box::new(
//!     ProductRepository::default(),
//! ))));
//!
//! let created = controller.create(r#"{"name": "Widget", "description": "A useful widget"}"#);
//! assert_eq!(created.status, http::StatusCode::CREATED);
//!
//! let updated = controller.update("1", r#"{"name": "Gadget"}"#);
//! assert_eq!(updated.body["data"]["name"], "Gadget");
//! assert_eq!(updated.body["data"]["description"], "A useful widget");
//! ```

// Lets `#[derive(Record)]` refer to `::crudgen` from inside this crate.
extern crate self as crudgen;

pub mod cli;
pub mod config;
pub mod controllers;
pub mod entity;
pub mod generator;
pub mod logging;
pub mod mapper;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod requests;
pub mod responses;
pub mod services;
pub mod store;

pub use crudgen_macros::Record;
pub use mapper::Record;
