//! Template rendering for ezpresso artifacts.
//! Wraps a MiniJinja environment behind a small trait so orchestration and
//! tests stay independent of the concrete engine.

use crate::context::capitalize;
use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Registers a `capitalize` filter that upper-cases only the first
/// character, shadowing the builtin filter which also lower-cases the
/// remainder. Rendering is deterministic: identical template and context
/// always produce byte-identical output.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the artifact filters installed.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("capitalize", |value: String| capitalize(&value));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template is malformed or rendering
    ///   fails against the given context
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("artifact", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("artifact").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
