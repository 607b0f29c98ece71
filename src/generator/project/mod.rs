mod format;
mod generate;

pub use format::format_files;
pub use generate::{generate_entity, GenerateOptions, GeneratedArtifact};
