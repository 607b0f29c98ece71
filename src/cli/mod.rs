//! # CLI Module
//!
//! Command line front end of the generator, exposed as the `crudgen` binary.
//!
//! ```bash
//! crudgen User
//! crudgen CarRental --output src --format
//! crudgen Invoice --templates my-templates --dry-run
//! ```
//!
//! Options:
//! - `--output <DIR>` - root for generated files (default: current directory)
//! - `--config <FILE>` - config file (default: `crudgen.toml` if present)
//! - `--templates <DIR>` - directory of template overrides
//! - `--dry-run` - render and list target paths without writing
//! - `--format` - run rustfmt over generated files
//!
//! Progress goes to stdout. The first failure is printed to stderr and the
//! process exits with status 1.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli};
