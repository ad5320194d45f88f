//! Template pack location resolution.
//!
//! The template root is external configuration: a `--template-root` flag
//! wins, then the `EZPRESSO_TEMPLATES` environment variable, then a
//! `templates/` directory next to the executable.

use crate::constants::{TEMPLATES_DIR, TEMPLATES_ENV_VAR};
use crate::error::{Error, Result};
use log::debug;
use std::path::PathBuf;

/// Resolves the template pack root directory.
///
/// # Arguments
/// * `flag` - Value of the `--template-root` flag, if given
pub fn resolve_template_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = flag {
        debug!("Using template root from flag: '{}'.", root.display());
        return Ok(root);
    }

    if let Ok(root) = std::env::var(TEMPLATES_ENV_VAR) {
        debug!("Using template root from {}: '{}'.", TEMPLATES_ENV_VAR, root);
        return Ok(PathBuf::from(root));
    }

    let exe = std::env::current_exe().map_err(Error::IoError)?;
    let root = match exe.parent() {
        Some(dir) => dir.join(TEMPLATES_DIR),
        None => PathBuf::from(TEMPLATES_DIR),
    };
    debug!("Using template root next to the executable: '{}'.", root.display());
    Ok(root)
}
