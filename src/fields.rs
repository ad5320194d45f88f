//! Parser for the model field mini-language.
//!
//! Field definitions are consumed from prompted input as comma-separated
//! entries of the form `name:Type:required`, e.g.
//! `email:String:true, age:Number:false`. Parsing is total: missing parts
//! fall back to defaults and are reported through structured diagnostics
//! rather than errors.

use serde::Serialize;

/// Type tag applied when a field entry omits one
pub const DEFAULT_TYPE_TAG: &str = "String";

/// One parsed model field.
///
/// `type_tag` is exposed to templates as `type` so a model template can
/// write `{{ field.type }}` directly into a schema definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub required: bool,
}

/// Which part of a field entry fell back to its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPart {
    TypeTag,
    Required,
}

impl std::fmt::Display for FieldPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPart::TypeTag => write!(f, "type"),
            FieldPart::Required => write!(f, "required"),
        }
    }
}

/// Diagnostic emitted when a field entry omitted a part.
///
/// The default behavior stays permissive; callers that want a strict mode
/// can inspect these instead of re-parsing the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFallback {
    pub field: String,
    pub part: FieldPart,
}

/// Result of one parse of the field-definition input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub fields: Vec<FieldSpec>,
    pub fallbacks: Vec<FieldFallback>,
}

/// Parses the field-definition input into ordered field descriptors.
///
/// # Arguments
/// * `input` - Raw field-definition text
///
/// # Behavior
/// * Empty or whitespace-only input yields no fields (the valid skip path
///   for non-model generation).
/// * Entries are separated by commas, parts by colons; all parts are
///   trimmed. No escaping is supported.
/// * A missing type defaults to `String`; `required` is true only when the
///   third part equals `"true"` case-insensitively.
/// * Entries whose name trims to empty are dropped. Duplicate names are
///   kept; field order matches input order.
///
/// This function never fails.
pub fn parse_fields(input: &str) -> ParsedFields {
    let mut parsed = ParsedFields::default();

    if input.trim().is_empty() {
        return parsed;
    }

    for entry in input.split(',') {
        let mut parts = entry.split(':');

        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }

        let type_part = parts.next().map(str::trim).filter(|s| !s.is_empty());
        let required_part = parts.next().map(str::trim).filter(|s| !s.is_empty());

        if type_part.is_none() {
            parsed.fallbacks.push(FieldFallback {
                field: name.to_string(),
                part: FieldPart::TypeTag,
            });
        }
        if required_part.is_none() {
            parsed.fallbacks.push(FieldFallback {
                field: name.to_string(),
                part: FieldPart::Required,
            });
        }

        parsed.fields.push(FieldSpec {
            name: name.to_string(),
            type_tag: type_part.unwrap_or(DEFAULT_TYPE_TAG).to_string(),
            required: required_part.is_some_and(|s| s.eq_ignore_ascii_case("true")),
        });
    }

    parsed
}
