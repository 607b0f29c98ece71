use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::debug;

use super::artifact::ArtifactKind;
use super::error::GeneratorError;
use crate::entity::EntitySpec;

const CONTROLLER: &str = include_str!("../../templates/controller.rs.txt");
const REPOSITORY_INTERFACE: &str = include_str!("../../templates/repository_interface.rs.txt");
const REPOSITORY: &str = include_str!("../../templates/repository.rs.txt");
const SERVICE: &str = include_str!("../../templates/service.rs.txt");
const REQUEST: &str = include_str!("../../templates/request.rs.txt");
const RESPONSE: &str = include_str!("../../templates/response.rs.txt");
const MODEL: &str = include_str!("../../templates/model.rs.txt");

fn builtin_source(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Controller => CONTROLLER,
        ArtifactKind::RepositoryInterface => REPOSITORY_INTERFACE,
        ArtifactKind::RepositoryImplementation => REPOSITORY,
        ArtifactKind::Service => SERVICE,
        ArtifactKind::Request => REQUEST,
        ArtifactKind::Response => RESPONSE,
        ArtifactKind::Model => MODEL,
    }
}

/// Template sources, one per [`ArtifactKind`].
///
/// Starts from the built-in blueprints. Individual templates can be replaced
/// from an override directory or programmatically.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    overrides: BTreeMap<ArtifactKind, String>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    pub fn builtin() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Replace built-in templates with the files of `dir` named after
    /// [`ArtifactKind::template_name`]. Missing files keep the built-in.
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self, GeneratorError> {
        if !dir.is_dir() {
            return Err(GeneratorError::TemplateOverrideUnreadable {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            });
        }

        for kind in ArtifactKind::ALL {
            let path = dir.join(kind.template_name());
            if !path.exists() {
                continue;
            }
            let source = fs::read_to_string(&path)
                .map_err(|source| GeneratorError::TemplateOverrideUnreadable {
                    path: path.clone(),
                    source,
                })?;
            debug!(template = kind.template_name(), path = %path.display(), "template override loaded");
            self.overrides.insert(kind, source);
        }
        Ok(self)
    }

    /// Replace the template for `kind`.
    pub fn set(&mut self, kind: ArtifactKind, source: impl Into<String>) {
        self.overrides.insert(kind, source.into());
    }

    pub fn is_overridden(&self, kind: ArtifactKind) -> bool {
        self.overrides.contains_key(&kind)
    }

    pub fn source(&self, kind: ArtifactKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| builtin_source(kind))
    }

    /// Parse every template. Any syntax error aborts before a file is written.
    pub fn compile(&self) -> Result<Renderer<'_>, GeneratorError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        for kind in ArtifactKind::ALL {
            env.add_template(kind.template_name(), self.source(kind))
                .map_err(|source| GeneratorError::TemplateParseFailed {
                    template: kind.template_name(),
                    source,
                })?;
        }
        Ok(Renderer { env })
    }
}

/// Compiled templates, ready to render entities.
pub struct Renderer<'s> {
    env: Environment<'s>,
}

impl Renderer<'_> {
    /// Render the template for `kind` with `name` and `lower_name` bound.
    pub fn render(&self, kind: ArtifactKind, entity: &EntitySpec) -> Result<String, GeneratorError> {
        let render_failed = |source| GeneratorError::TemplateRenderFailed {
            template: kind.template_name(),
            source,
        };
        let template = self
            .env
            .get_template(kind.template_name())
            .map_err(render_failed)?;
        template.render(entity).map_err(render_failed)
    }
}
