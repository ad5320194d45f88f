//! User input handling.
//! Prompting goes through the `Prompter` trait so tests can substitute
//! canned answers for dialoguer's interactive input.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Trait for synchronous line prompts.
///
/// Each prompt blocks until an answer is available; a blank answer is the
/// caller's signal to fall back to a per-field default.
pub trait Prompter {
    /// Asks one question and returns the raw answer text.
    fn text(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Dialoguer-based interactive prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
