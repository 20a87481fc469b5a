//! Parsing raw post documents into metadata and body.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::reader::split_block;
use super::schema::{self, value_kind};
use super::types::{FieldViolation, ParsedPost, PostMetadata};

/// Pseudo-field used when the block itself cannot be read as a mapping.
pub const BLOCK_FIELD: &str = "frontmatter";

/// A metadata block was present but did not describe a valid post.
///
/// Carries every failing field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid frontmatter: {}", join_violations(.fields))]
pub struct FrontmatterParseError {
    pub fields: Vec<FieldViolation>,
}

impl FrontmatterParseError {
    pub fn new(fields: Vec<FieldViolation>) -> Self {
        Self { fields }
    }

    /// Names of the failing fields, in report order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|v| v.field.as_str())
    }

    /// Whether `field` is among the failing fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.field_names().any(|f| f == field)
    }
}

fn join_violations(fields: &[FieldViolation]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Parse a raw post document.
///
/// A document without a leading metadata block is legacy content: it parses
/// to default metadata with the whole trimmed input as body. Once a block is
/// present it is always validated, even when empty.
pub fn parse(raw: &str) -> Result<ParsedPost, FrontmatterParseError> {
    let Some(block) = split_block(raw) else {
        return Ok(ParsedPost { meta: PostMetadata::default(), content: raw.trim().to_string() });
    };

    let data = read_mapping(block.yaml)?;
    let meta = schema::validate(&data).map_err(FrontmatterParseError::new)?;

    Ok(ParsedPost { meta, content: block.body.trim().to_string() })
}

/// Whether `raw` opens with a complete metadata block.
pub fn has_block(raw: &str) -> bool {
    split_block(raw).is_some()
}

fn read_mapping(yaml: &str) -> Result<Mapping, FrontmatterParseError> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let block_error =
        |message: String| FrontmatterParseError::new(vec![FieldViolation::new(BLOCK_FIELD, message)]);

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(other) => Err(block_error(format!(
            "Expected a mapping of fields, received {}",
            value_kind(&other)
        ))),
        Err(e) => Err(block_error(format!("Invalid YAML: {e}"))),
    }
}
