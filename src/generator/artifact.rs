use std::path::PathBuf;

use crate::entity::EntitySpec;

/// The files generated for one entity, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Controller,
    RepositoryInterface,
    RepositoryImplementation,
    Service,
    Request,
    Response,
    Model,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::Controller,
        ArtifactKind::RepositoryInterface,
        ArtifactKind::RepositoryImplementation,
        ArtifactKind::Service,
        ArtifactKind::Request,
        ArtifactKind::Response,
        ArtifactKind::Model,
    ];

    /// Human readable name used in progress output.
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Controller => "Controller",
            ArtifactKind::RepositoryInterface => "Repository Interface",
            ArtifactKind::RepositoryImplementation => "Repository Implementation",
            ArtifactKind::Service => "Service",
            ArtifactKind::Request => "Request",
            ArtifactKind::Response => "Response",
            ArtifactKind::Model => "Model",
        }
    }

    /// File name of the template, also the name an override must use.
    pub fn template_name(self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller.rs.txt",
            ArtifactKind::RepositoryInterface => "repository_interface.rs.txt",
            ArtifactKind::RepositoryImplementation => "repository.rs.txt",
            ArtifactKind::Service => "service.rs.txt",
            ArtifactKind::Request => "request.rs.txt",
            ArtifactKind::Response => "response.rs.txt",
            ArtifactKind::Model => "model.rs.txt",
        }
    }

    /// Target path relative to the output root.
    pub fn relative_path(self, entity: &EntitySpec) -> PathBuf {
        let lower = entity.lower_name();
        match self {
            ArtifactKind::Controller => {
                PathBuf::from("controllers").join(format!("{lower}_controller.rs"))
            }
            ArtifactKind::RepositoryInterface => PathBuf::from("repositories")
                .join(lower)
                .join(format!("{lower}_repository_interface.rs")),
            ArtifactKind::RepositoryImplementation => PathBuf::from("repositories")
                .join(lower)
                .join(format!("{lower}_repository.rs")),
            ArtifactKind::Service => PathBuf::from("services").join(format!("{lower}_service.rs")),
            ArtifactKind::Request => PathBuf::from("requests").join(format!("{lower}.rs")),
            ArtifactKind::Response => PathBuf::from("responses").join(format!("{lower}.rs")),
            ArtifactKind::Model => PathBuf::from("models").join(format!("{lower}.rs")),
        }
    }
}
