//! ezpresso's main application entry point and orchestration logic.
//! Handles command-line argument parsing, bootstrap and generation flow,
//! and coordinates interactions between different modules.

use std::path::Path;

use ezpresso::{
    bootstrap::Bootstrapper,
    cli::{get_args, resolve_generate_target, Args, Command, GenerateTarget},
    config::resolve_template_root,
    error::{default_error_handler, Result},
    fields::parse_fields,
    generator::{ensure_project_dir, Generator},
    logger::init_logger,
    manifest::collect_manifest_data,
    prompt::{DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
    template::{ArtifactKind, TemplateResolver},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template pack root and stack subtree
/// 2. Dispatches to project bootstrap or artifact generation
fn run(args: Args) -> Result<()> {
    let template_root = resolve_template_root(args.template_root)?;
    let resolver = TemplateResolver::new(&template_root, &args.stack);
    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();

    match args.command {
        Command::Create { project_name } => {
            create(&resolver, &renderer, &prompter, &project_name, args.force)
        }
        Command::Generate { first, second, fields } => {
            generate(&resolver, &renderer, &prompter, &first, second.as_deref(), fields)
        }
    }
}

/// Bootstraps a new project under the current directory.
fn create(
    resolver: &TemplateResolver,
    renderer: &MiniJinjaRenderer,
    prompter: &dyn Prompter,
    project_name: &str,
    force: bool,
) -> Result<()> {
    println!("Creating new project '{}'.", project_name);

    let manifest = collect_manifest_data(prompter, project_name)?;
    let project_root = std::env::current_dir()?.join(project_name);

    let bootstrapper = Bootstrapper::new(resolver, renderer, force);
    let install = bootstrapper.bootstrap(&project_root, &manifest)?;

    // Fire-and-forget: the install outcome is reported from a background
    // thread and the command may exit before the child finishes.
    if let Some(handle) = install {
        let _ = handle.report_in_background();
    }

    println!("Project created in '{}'.", project_root.display());
    Ok(())
}

/// Generates one artifact kind, or all of them, for an entity.
///
/// Per-artifact failures are reported at the point of occurrence and never
/// abort sibling artifacts.
fn generate(
    resolver: &TemplateResolver,
    renderer: &MiniJinjaRenderer,
    prompter: &dyn Prompter,
    first: &str,
    second: Option<&str>,
    fields_arg: Option<String>,
) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    ensure_project_dir(&current_dir)?;

    let target = resolve_generate_target(first, second)?;

    let needs_fields = matches!(
        target,
        GenerateTarget::All { .. } | GenerateTarget::One { kind: ArtifactKind::Model, .. }
    );
    let fields = if needs_fields {
        let input = match fields_arg {
            Some(input) => input,
            None => prompter.text(
                "Model fields (comma-separated name:Type:required, blank for none)",
                "",
            )?,
        };
        let parsed = parse_fields(&input);
        for fallback in &parsed.fallbacks {
            log::debug!(
                "Field '{}' has no explicit {}, using the default.",
                fallback.field,
                fallback.part
            );
        }
        parsed.fields
    } else {
        Vec::new()
    };

    let generator = Generator::new(resolver, renderer, &current_dir);

    match target {
        GenerateTarget::One { kind, entity } => {
            report_outcome(kind, generator.generate(&entity, kind, &fields), &current_dir);
        }
        GenerateTarget::All { entity } => {
            for (kind, outcome) in generator.generate_all(&entity, &fields) {
                report_outcome(kind, outcome, &current_dir);
            }
        }
    }

    Ok(())
}

fn report_outcome(kind: ArtifactKind, outcome: Result<std::path::PathBuf>, root: &Path) {
    match outcome {
        Ok(target) => {
            let shown = target.strip_prefix(root).unwrap_or(target.as_path());
            println!("CREATED '{}'", shown.display());
        }
        Err(e) => log::error!("{} generation failed: {}", kind, e),
    }
}
