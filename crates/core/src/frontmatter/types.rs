//! Post metadata types and data structures.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    /// Wire names accepted in frontmatter, in declaration order.
    pub const NAMES: [&'static str; 2] = ["DRAFT", "PUBLISHED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Published => "PUBLISHED",
        }
    }

    /// Look up a status by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DRAFT" => Some(PostStatus::Draft),
            "PUBLISHED" => Some(PostStatus::Published),
            _ => None,
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated metadata of a blog post.
///
/// The default value is what a document without a metadata block parses to:
/// empty strings, no keywords, `DRAFT` status and no optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl PostMetadata {
    /// Interpret `publishedAt` as a UTC timestamp.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` (both read
    /// as UTC) and plain `YYYY-MM-DD` (midnight UTC). Returns `None` when the
    /// field is absent or in any other format.
    pub fn published_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.as_deref()?.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

/// Result of parsing a raw post document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPost {
    /// Validated metadata (defaults for legacy documents).
    pub meta: PostMetadata,
    /// The markdown body with the metadata block stripped, trimmed.
    pub content: String,
}

/// Metadata accepted by the serializer.
///
/// Only the fields an editor round-trips are included; `status` and
/// `publishedAt` are managed separately and never written to the block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self { title: title.into(), slug: slug.into(), ..Self::default() }
    }
}

impl From<&PostMetadata> for PostDraft {
    fn from(meta: &PostMetadata) -> Self {
        Self {
            title: meta.title.clone(),
            slug: meta.slug.clone(),
            description: Some(meta.description.clone()),
            keywords: meta.keywords.clone(),
            cover_image: meta.cover_image.clone(),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Frontmatter key as written in the document (e.g. `coverImage`).
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
