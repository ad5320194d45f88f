//! Rendering context construction.
//!
//! A context is a JSON object handed opaquely to the renderer. Every context
//! carries the entity name under `name` and its capitalized form under
//! `Name`; model contexts additionally carry the ordered field list.

use crate::error::{Error, Result};
use crate::fields::FieldSpec;

/// Upper-cases the first character and leaves the remainder unchanged.
///
/// No full Unicode-aware casing is attempted; an already capitalized
/// input passes through as-is.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the rendering context for one artifact generation.
///
/// # Arguments
/// * `entity` - Entity name as supplied by the user
/// * `fields` - Field descriptors for model contexts, `None` otherwise
///
/// # Returns
/// * `Result<serde_json::Value>` - Context object with `name`, `Name` and,
///   when `fields` is given, an order-preserving `fields` array
///
/// # Errors
/// * `Error::EmptyEntityName` if the entity name is empty or blank
pub fn build_context(entity: &str, fields: Option<&[FieldSpec]>) -> Result<serde_json::Value> {
    if entity.trim().is_empty() {
        return Err(Error::EmptyEntityName);
    }

    let mut context = serde_json::Map::new();
    context.insert("name".to_string(), serde_json::Value::String(entity.to_string()));
    context.insert("Name".to_string(), serde_json::Value::String(capitalize(entity)));

    if let Some(fields) = fields {
        context.insert("fields".to_string(), serde_json::to_value(fields)?);
    }

    Ok(serde_json::Value::Object(context))
}
