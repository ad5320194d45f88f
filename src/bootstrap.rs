//! Project bootstrap orchestration.
//!
//! Bootstrap runs strictly sequentially: root, directory skeleton, static
//! files, rendered manifest, then the install trigger. An existing project
//! root is reported and merged into; directory creation is idempotent, and
//! files already present are kept with a conflict warning unless `--force`
//! was given. Only real filesystem failures abort the bootstrap. There is
//! no rollback: a failure leaves earlier steps' effects in place.

use crate::constants::{MANIFEST_FILE, SKELETON_DIRS, STATIC_FILES};
use crate::error::Result;
use crate::install::{trigger_install, InstallHandle};
use crate::manifest::ManifestData;
use crate::materializer::{copy_static, ensure_dir, write_artifact, OverwritePolicy};
use crate::renderer::TemplateRenderer;
use crate::template::{TemplateKind, TemplateResolver};
use log::{error, warn};
use std::fs;
use std::path::Path;

/// Creates a full project skeleton from the template pack.
pub struct Bootstrapper<'a> {
    resolver: &'a TemplateResolver,
    renderer: &'a dyn TemplateRenderer,
    /// Policy for file writes when merging into an existing root:
    /// warn-and-keep by default, overwrite when `--force` was given
    file_policy: OverwritePolicy,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(
        resolver: &'a TemplateResolver,
        renderer: &'a dyn TemplateRenderer,
        force: bool,
    ) -> Self {
        let file_policy =
            if force { OverwritePolicy::Overwrite } else { OverwritePolicy::Skip };
        Self { resolver, renderer, file_policy }
    }

    /// Runs the full bootstrap for `project_root`.
    ///
    /// # Flow
    /// 1. Ensure the project root (an existing root logs a conflict and is
    ///    merged into, never deleted)
    /// 2. Create the fixed directory skeleton, in order
    /// 3. Copy the static files verbatim
    /// 4. Render and write the manifest
    /// 5. Trigger the dependency install as a detached child
    ///
    /// Bootstrap is complete once the manifest is written; a failed install
    /// spawn is reported and returned as `None`.
    ///
    /// # Returns
    /// * `Result<Option<InstallHandle>>` - Handle to the running install
    ///   step, if it could be started
    pub fn bootstrap(
        &self,
        project_root: &Path,
        manifest: &ManifestData,
    ) -> Result<Option<InstallHandle>> {
        self.create_skeleton(project_root, manifest)?;

        println!("RUNNING npm install");
        match trigger_install(project_root) {
            Ok(handle) => Ok(Some(handle)),
            Err(e) => {
                error!("{}", e);
                Ok(None)
            }
        }
    }

    /// Steps 1-4 of the bootstrap: root, skeleton, static files, manifest.
    pub fn create_skeleton(&self, project_root: &Path, manifest: &ManifestData) -> Result<()> {
        if project_root.exists() {
            warn!(
                "'{}' already exists, merging into the existing directory.",
                project_root.display()
            );
        } else {
            ensure_dir(project_root)?;
        }
        println!("CREATED '{}'", project_root.display());

        for dir in SKELETON_DIRS {
            ensure_dir(project_root.join(dir))?;
            println!("CREATED '{}'", dir);
        }

        for (from, to) in STATIC_FILES {
            if copy_static(&self.resolver.static_file(from), &project_root.join(to), self.file_policy)? {
                println!("CREATED '{}'", to);
            }
        }

        if self.write_manifest(project_root, manifest)? {
            println!("CREATED '{}'", MANIFEST_FILE);
        }

        Ok(())
    }

    /// Renders the manifest template against the collected manifest data
    /// and writes it to the project root.
    fn write_manifest(&self, project_root: &Path, manifest: &ManifestData) -> Result<bool> {
        let template_path = self.resolver.resolve(TemplateKind::Manifest)?;
        let template = fs::read_to_string(&template_path)?;

        let context = serde_json::to_value(manifest)?;
        let rendered = self.renderer.render(&template, &context)?;

        write_artifact(&project_root.join(MANIFEST_FILE), &rendered, self.file_policy)
    }
}
