//! # Generator Module
//!
//! Scaffolds the layered files of a new CRUD resource from a single entity
//! name.
//!
//! ## Overview
//!
//! For an entity such as `User` the generator renders seven artifacts:
//!
//! ```text
//! controllers/user_controller.rs
//! repositories/user/user_repository_interface.rs
//! repositories/user/user_repository.rs
//! services/user_service.rs
//! requests/user.rs
//! responses/user.rs
//! models/user.rs
//! ```
//!
//! Each template sees exactly two variables: `name` (the entity name as
//! given) and `lower_name` (the whole name lower-cased, so `CarRental`
//! becomes `carrental`). The generated code follows the layout of this crate:
//! models and requests derive [`Record`](crate::Record), services map
//! requests into models with the [field mapper](crate::mapper) and
//! controllers return [`ControllerResponse`](crate::controllers::ControllerResponse).
//!
//! ## Pipeline
//!
//! ```text
//! entity name → EntitySpec → TemplateSet::compile → Renderer::render → file
//! ```
//!
//! 1. **Validate** - [`EntitySpec::new`](crate::entity::EntitySpec::new)
//!    rejects names that are not plain identifiers
//! 2. **Compile** - every template is parsed up front in strict mode
//! 3. **Render** - each artifact is rendered before its file is opened
//! 4. **Write** - parent directories are created and existing files are
//!    overwritten
//!
//! The first error stops the run. Nothing is rolled back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen::entity::EntitySpec;
//! use crudgen::generator::{generate_entity, GenerateOptions, TemplateSet};
//!
//! # fn main() -> Result<(), crudgen::generator::GeneratorError> {
//! let entity = EntitySpec::new("User")?;
//! let templates = TemplateSet::builtin();
//! let renderer = templates.compile()?;
//! generate_entity(&entity, &renderer, &GenerateOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Template Customization
//!
//! [`TemplateSet::with_overrides`] replaces built-in templates with files of
//! the same name from a directory:
//!
//! - `controller.rs.txt`
//! - `repository_interface.rs.txt`
//! - `repository.rs.txt`
//! - `service.rs.txt`
//! - `request.rs.txt`
//! - `response.rs.txt`
//! - `model.rs.txt`

mod artifact;
mod error;
mod project;
mod templates;

pub use artifact::ArtifactKind;
pub use error::GeneratorError;
pub use project::*;
pub use templates::{Renderer, TemplateSet};
