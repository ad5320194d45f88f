//! Artifact kinds and template resolution.
//!
//! Each template kind maps to one fixed file name under the configured
//! stack subtree of the template pack; resolution confirms the file exists
//! before any rendering is attempted.

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Generatable artifact categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Service,
    Model,
    Router,
}

impl ArtifactKind {
    /// Generation order used when "all" kinds are requested
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Router,
        ArtifactKind::Model,
        ArtifactKind::Service,
        ArtifactKind::Controller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Service => "service",
            ArtifactKind::Model => "model",
            ArtifactKind::Router => "router",
        }
    }

    /// Pluralized subdirectory under `src/` that holds this kind
    pub fn subdirectory(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controllers",
            ArtifactKind::Service => "services",
            ArtifactKind::Model => "models",
            ArtifactKind::Router => "routers",
        }
    }

    /// Parses a command-line positional into a kind, if it names one.
    pub fn from_arg(s: &str) -> Option<Self> {
        match s {
            "controller" => Some(ArtifactKind::Controller),
            "service" => Some(ArtifactKind::Service),
            "model" => Some(ArtifactKind::Model),
            "router" => Some(ArtifactKind::Router),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every template the resolver knows about: the four per-entity artifacts
/// plus the project manifest rendered once at bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Artifact(ArtifactKind),
    Manifest,
}

impl TemplateKind {
    /// Fixed template file name for this kind
    pub fn file_name(&self) -> String {
        match self {
            TemplateKind::Artifact(kind) => format!("{}.j2", kind.as_str()),
            TemplateKind::Manifest => format!("{}.j2", MANIFEST_FILE),
        }
    }
}

/// Maps template kinds to files under one stack subtree of the template pack.
pub struct TemplateResolver {
    stack_dir: PathBuf,
}

impl TemplateResolver {
    /// Creates a resolver for `<template_root>/<stack>`.
    pub fn new<P: AsRef<Path>>(template_root: P, stack: &str) -> Self {
        Self { stack_dir: template_root.as_ref().join(stack) }
    }

    /// Resolves the template file for a kind, confirming it exists.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the file is absent; callers report
    ///   this per artifact and continue with sibling kinds.
    pub fn resolve(&self, kind: TemplateKind) -> Result<PathBuf> {
        let template_file = kind.file_name();
        let path = self.stack_dir.join(&template_file);
        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                template_file,
                stack_dir: self.stack_dir.display().to_string(),
            });
        }
        Ok(path)
    }

    /// Location of a static (copied, never rendered) file in the stack subtree.
    pub fn static_file(&self, name: &str) -> PathBuf {
        self.stack_dir.join(name)
    }
}
