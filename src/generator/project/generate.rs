use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::format::format_files;
use crate::entity::EntitySpec;
use crate::generator::artifact::ArtifactKind;
use crate::generator::error::GeneratorError;
use crate::generator::templates::Renderer;

/// Where and how to write generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root the artifact paths are joined to.
    pub output_dir: PathBuf,
    /// Render and report without touching the filesystem.
    pub dry_run: bool,
    /// Run rustfmt over the written files.
    pub format: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dry_run: false,
            format: false,
        }
    }
}

/// One file produced (or, in a dry run, planned) by [`generate_entity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// An existing file was replaced.
    pub overwritten: bool,
}

/// Render and write every artifact for `entity`, in [`ArtifactKind::ALL`] order.
///
/// Existing files are overwritten. The first failure stops the run and files
/// already written are left in place.
pub fn generate_entity(
    entity: &EntitySpec,
    renderer: &Renderer<'_>,
    options: &GenerateOptions,
) -> Result<Vec<GeneratedArtifact>, GeneratorError> {
    println!("Generating files for entity: {}", entity.name());
    println!("{}", "=".repeat(40));

    let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
    for kind in ArtifactKind::ALL {
        println!("Generating {}...", kind.label());
        let artifact = write_artifact(kind, entity, renderer, options)?;
        if options.dry_run {
            println!("✓ {} would be written to {}", kind.label(), artifact.path.display());
        } else {
            println!("✓ {} generated successfully", kind.label());
        }
        artifacts.push(artifact);
    }

    if options.format && !options.dry_run {
        let paths: Vec<PathBuf> = artifacts.iter().map(|a| a.path.clone()).collect();
        if let Err(err) = format_files(&paths) {
            warn!(error = %err, "rustfmt failed, generated files left unformatted");
            println!("⚠️  Formatting skipped: {err}");
        }
    }

    Ok(artifacts)
}

fn write_artifact(
    kind: ArtifactKind,
    entity: &EntitySpec,
    renderer: &Renderer<'_>,
    options: &GenerateOptions,
) -> Result<GeneratedArtifact, GeneratorError> {
    // Render first so a template failure never leaves a truncated file behind.
    let rendered = renderer.render(kind, entity)?;
    let path = options.output_dir.join(kind.relative_path(entity));
    let overwritten = path.exists();

    if options.dry_run {
        return Ok(GeneratedArtifact {
            kind,
            path,
            overwritten,
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| GeneratorError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if overwritten {
        warn!(path = %path.display(), "overwriting existing file");
    }
    fs::write(&path, rendered).map_err(|source| GeneratorError::FileCreationFailed {
        path: path.clone(),
        source,
    })?;
    debug!(kind = kind.label(), path = %path.display(), "artifact written");

    Ok(GeneratedArtifact {
        kind,
        path,
        overwritten,
    })
}
