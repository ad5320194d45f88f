//! ezpresso is a project-scaffolding generator for Express/TypeScript
//! services. It bootstraps a full project skeleton from a template pack and
//! generates per-entity artifacts (controllers, services, models, routers)
//! into an existing project.

/// Project bootstrap orchestration: skeleton, static files, manifest, install
pub mod bootstrap;

/// Command-line interface module for the ezpresso application
pub mod cli;

/// Template pack location resolution
pub mod config;

/// Common constants: skeleton layout, static file list, defaults
pub mod constants;

/// Rendering context construction (entity name, capitalized form, fields)
pub mod context;

/// Error types and handling for the ezpresso application
pub mod error;

/// Parser for the `name:Type:required` model field mini-language
pub mod fields;

/// Per-entity artifact generation and batch orchestration
pub mod generator;

/// Dependency install trigger (detached child process)
pub mod install;

/// Logger initialization
pub mod logger;

/// Project manifest data collection and defaults
pub mod manifest;

/// Directory creation and artifact/static file writes
pub mod materializer;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Artifact kinds and template resolution
pub mod template;
