//! Command-line interface implementation for ezpresso.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_STACK;
use crate::error::{Error, Result};
use crate::template::ArtifactKind;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for ezpresso.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ezpresso: Express/TypeScript project scaffolding tool",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing the template pack.
    /// Falls back to the EZPRESSO_TEMPLATES environment variable, then to
    /// a `templates` directory next to the executable.
    #[arg(long, global = true, value_name = "DIR")]
    pub template_root: Option<PathBuf>,

    /// Stack subtree of the template pack to generate from
    #[arg(long, global = true, default_value = DEFAULT_STACK, value_name = "STACK")]
    pub stack: String,

    /// Overwrite files that already exist when bootstrapping into an
    /// existing project root
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bootstrap a new project skeleton
    Create {
        /// Name of the project directory to create
        #[arg(value_name = "PROJECT_NAME")]
        project_name: String,
    },

    /// Generate artifacts for an entity inside an existing project
    #[command(alias = "g")]
    Generate {
        /// Artifact kind (controller, service, model, router or all),
        /// or the entity name when no kind is given
        #[arg(value_name = "KIND_OR_NAME")]
        first: String,

        /// Entity name, when a kind was given first
        #[arg(value_name = "NAME")]
        second: Option<String>,

        /// Model fields, comma-separated `name:Type:required` entries,
        /// e.g. "email:String:true, age:Number". Prompted when omitted.
        #[arg(long, value_name = "FIELDS")]
        fields: Option<String>,
    },
}

/// Resolved target of a `generate` invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateTarget {
    /// Every artifact kind for the entity
    All { entity: String },
    /// One specific artifact kind for the entity
    One { kind: ArtifactKind, entity: String },
}

/// Interprets the `generate` positionals.
///
/// When the first positional names a recognized kind (or "all"), the second
/// is the entity name; otherwise the first positional is the entity name
/// and the kind defaults to "all".
///
/// # Errors
/// * `Error::EmptyEntityName` if the resolved entity name is missing or
///   blank; this terminates the command before anything is prompted or
///   written
pub fn resolve_generate_target(first: &str, second: Option<&str>) -> Result<GenerateTarget> {
    if let Some(kind) = ArtifactKind::from_arg(first) {
        let entity = entity_name(second.unwrap_or_default())?;
        return Ok(GenerateTarget::One { kind, entity });
    }

    if first == "all" {
        let entity = entity_name(second.unwrap_or_default())?;
        return Ok(GenerateTarget::All { entity });
    }

    Ok(GenerateTarget::All { entity: entity_name(first)? })
}

fn entity_name(entity: &str) -> Result<String> {
    if entity.trim().is_empty() {
        return Err(Error::EmptyEntityName);
    }
    Ok(entity.to_string())
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
