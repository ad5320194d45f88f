//! Project manifest data collection.
//! Answers are gathered one prompt at a time; blank answers are replaced
//! by fixed per-field defaults instead of re-prompting.

use crate::error::Result;
use crate::prompt::Prompter;
use serde::Serialize;

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_MAIN: &str = "index.js";
pub const DEFAULT_LICENSE: &str = "ISC";

/// Data rendered into the project manifest template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestData {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub author: String,
    pub license: String,
}

impl ManifestData {
    /// Manifest with every field at its literal fallback default.
    pub fn defaults(project_name: &str) -> Self {
        Self {
            name: project_name.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: String::new(),
            main: DEFAULT_MAIN.to_string(),
            author: String::new(),
            license: DEFAULT_LICENSE.to_string(),
        }
    }
}

fn or_default(answer: String, default: &str) -> String {
    if answer.trim().is_empty() {
        default.to_string()
    } else {
        answer
    }
}

/// Prompts for all manifest fields in order.
///
/// # Arguments
/// * `prompt` - Prompter used to ask each question
/// * `project_name` - Default for the manifest `name` field
///
/// # Errors
/// * `Error::PromptError` if an interaction fails
pub fn collect_manifest_data(prompt: &dyn Prompter, project_name: &str) -> Result<ManifestData> {
    let name = or_default(prompt.text("Project name", project_name)?, project_name);
    let version = or_default(prompt.text("Version", DEFAULT_VERSION)?, DEFAULT_VERSION);
    let description = prompt.text("Description", "")?;
    let main = or_default(prompt.text("Main file", DEFAULT_MAIN)?, DEFAULT_MAIN);
    let author = prompt.text("Author", "")?;
    let license = or_default(prompt.text("License", DEFAULT_LICENSE)?, DEFAULT_LICENSE);

    Ok(ManifestData { name, version, description, main, author, license })
}
