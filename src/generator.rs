//! Artifact generation orchestration.
//!
//! One generation resolves the template for a kind, builds the context,
//! renders, and materializes the result under the project's `src/` tree.
//! Failures are isolated per artifact: a missing or malformed template for
//! one kind never prevents sibling kinds from being attempted.

use crate::constants::{ARTIFACT_EXT, MANIFEST_FILE, SOURCE_DIR};
use crate::context::build_context;
use crate::error::{Error, Result};
use crate::fields::FieldSpec;
use crate::materializer::{write_artifact, OverwritePolicy};
use crate::renderer::TemplateRenderer;
use crate::template::{ArtifactKind, TemplateKind, TemplateResolver};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks that `dir` looks like a scaffolded project before generating
/// into it: the manifest file and the `src/` directory must both exist.
///
/// # Errors
/// * `Error::NotInProject` otherwise; the command exits non-zero without
///   writing anything
pub fn ensure_project_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if dir.join(MANIFEST_FILE).is_file() && dir.join(SOURCE_DIR).is_dir() {
        return Ok(());
    }
    Err(Error::NotInProject { current_dir: dir.display().to_string() })
}

/// Generates artifacts for one entity inside an existing project.
pub struct Generator<'a> {
    resolver: &'a TemplateResolver,
    renderer: &'a dyn TemplateRenderer,
    project_root: &'a Path,
}

impl<'a> Generator<'a> {
    pub fn new(
        resolver: &'a TemplateResolver,
        renderer: &'a dyn TemplateRenderer,
        project_root: &'a Path,
    ) -> Self {
        Self { resolver, renderer, project_root }
    }

    /// Deterministic target path for an artifact:
    /// `<project_root>/src/<kind>s/<entity>.<kind>.ts`.
    pub fn target_path(&self, entity: &str, kind: ArtifactKind) -> PathBuf {
        self.project_root
            .join(SOURCE_DIR)
            .join(kind.subdirectory())
            .join(format!("{}.{}.{}", entity, kind.as_str(), ARTIFACT_EXT))
    }

    /// Generates one artifact.
    ///
    /// # Flow
    /// 1. Resolve the template for `kind`
    /// 2. Build the context (`fields` only for model artifacts)
    /// 3. Render
    /// 4. Write to the deterministic target path, overwriting prior content
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written artifact
    pub fn generate(
        &self,
        entity: &str,
        kind: ArtifactKind,
        fields: &[FieldSpec],
    ) -> Result<PathBuf> {
        let template_path = self.resolver.resolve(TemplateKind::Artifact(kind))?;
        debug!("Using template '{}'.", template_path.display());

        let template = fs::read_to_string(&template_path).map_err(Error::IoError)?;

        let context = match kind {
            ArtifactKind::Model => build_context(entity, Some(fields))?,
            _ => build_context(entity, None)?,
        };

        let rendered = self.renderer.render(&template, &context)?;

        let target = self.target_path(entity, kind);
        write_artifact(&target, &rendered, OverwritePolicy::Overwrite)?;
        Ok(target)
    }

    /// Generates every artifact kind for an entity.
    ///
    /// Kinds are attempted in the fixed order router, model, service,
    /// controller. Each outcome is returned to the caller for reporting;
    /// a failure for one kind never aborts the rest of the batch.
    pub fn generate_all(
        &self,
        entity: &str,
        fields: &[FieldSpec],
    ) -> Vec<(ArtifactKind, Result<PathBuf>)> {
        ArtifactKind::ALL
            .into_iter()
            .map(|kind| (kind, self.generate(entity, kind, fields)))
            .collect()
    }
}
