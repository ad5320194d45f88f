//! Error handling for the ezpresso application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for ezpresso operations.
///
/// This enum represents all possible errors that can occur within the application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template file for an artifact kind is absent from the template pack
    #[error("Template '{template_file}' not found under '{stack_dir}'.")]
    TemplateNotFound { template_file: String, stack_dir: String },

    /// Represents errors that occur during template rendering
    #[error("Render error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while serializing a rendering context
    #[error("Context error: {0}.")]
    ContextError(#[from] serde_json::Error),

    /// Generation was requested without an entity name
    #[error("Entity name must not be empty.")]
    EmptyEntityName,

    /// The `generate` command was run outside a scaffolded project
    #[error(
        "Not inside a project directory: expected 'package.json' and 'src/' in '{current_dir}'."
    )]
    NotInProject { current_dir: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The dependency install step could not be started
    #[error("Install step failed to start: {0}.")]
    InstallError(String),
}

/// Convenience type alias for Results with ezpresso's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
