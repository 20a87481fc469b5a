//! Post metadata schema.
//!
//! Turns the untyped mapping read from a metadata block into a
//! [`PostMetadata`], collecting one violation per failing field.

use serde_yaml::{Mapping, Value};

use super::types::{FieldViolation, PostMetadata, PostStatus};
use crate::slug::is_valid_slug;

pub const TITLE: &str = "title";
pub const SLUG: &str = "slug";
pub const DESCRIPTION: &str = "description";
pub const KEYWORDS: &str = "keywords";
pub const COVER_IMAGE: &str = "coverImage";
pub const STATUS: &str = "status";
pub const PUBLISHED_AT: &str = "publishedAt";

const REQUIRED: &str = "Required";
const TITLE_EMPTY: &str = "Title is required";
const SLUG_EMPTY: &str = "Slug is required";
const SLUG_FORMAT: &str = "Slug must be lowercase with hyphens (e.g. my-post-title)";

/// Validate a frontmatter mapping against the post schema.
///
/// Unknown keys are ignored and `null` values count as absent. On failure the
/// violations are reported in schema order, at most one per field.
pub fn validate(data: &Mapping) -> Result<PostMetadata, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let title = collect(&mut violations, required_string(data, TITLE, TITLE_EMPTY));
    let slug = collect(
        &mut violations,
        required_string(data, SLUG, SLUG_EMPTY).and_then(|slug| {
            if is_valid_slug(&slug) {
                Ok(slug)
            } else {
                Err(FieldViolation::new(SLUG, SLUG_FORMAT))
            }
        }),
    );
    let description = collect(&mut violations, optional_string(data, DESCRIPTION));
    let keywords = normalize_keywords(lookup(data, KEYWORDS));
    let cover_image = collect(&mut violations, optional_string(data, COVER_IMAGE));
    let status = collect(&mut violations, status(data));
    let published_at = collect(&mut violations, optional_string(data, PUBLISHED_AT));

    match (title, slug, description, cover_image, status, published_at) {
        (
            Some(title),
            Some(slug),
            Some(description),
            Some(cover_image),
            Some(status),
            Some(published_at),
        ) if violations.is_empty() => Ok(PostMetadata {
            title,
            slug,
            description: description.unwrap_or_default(),
            keywords,
            cover_image,
            status,
            published_at,
        }),
        _ => Err(violations),
    }
}

/// Coerce a raw `keywords` value into a list.
///
/// A sequence of strings is kept as-is. A single string is split on commas,
/// each segment trimmed and empty segments dropped. Anything else, including
/// sequences holding non-string items, yields an empty list.
pub fn normalize_keywords(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default(),
        Some(Value::String(s)) => split_keywords(s),
        _ => Vec::new(),
    }
}

/// Split a comma-separated keyword string, trimming and dropping empty parts.
pub fn split_keywords(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|k| !k.is_empty()).map(str::to_string).collect()
}

fn collect<T>(violations: &mut Vec<FieldViolation>, result: Result<T, FieldViolation>) -> Option<T> {
    result.map_err(|v| violations.push(v)).ok()
}

fn lookup<'a>(data: &'a Mapping, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !v.is_null())
}

fn required_string(data: &Mapping, field: &str, empty_message: &str) -> Result<String, FieldViolation> {
    match optional_string(data, field)? {
        None => Err(FieldViolation::new(field, REQUIRED)),
        Some(s) if s.is_empty() => Err(FieldViolation::new(field, empty_message)),
        Some(s) => Ok(s),
    }
}

fn optional_string(data: &Mapping, field: &str) -> Result<Option<String>, FieldViolation> {
    match lookup(data, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FieldViolation::new(
            field,
            format!("Expected string, received {}", value_kind(other)),
        )),
    }
}

fn status(data: &Mapping) -> Result<PostStatus, FieldViolation> {
    let received = match lookup(data, STATUS) {
        None => return Ok(PostStatus::default()),
        Some(Value::String(s)) => match PostStatus::from_name(s) {
            Some(status) => return Ok(status),
            None => format!("'{s}'"),
        },
        Some(other) => value_kind(other).to_string(),
    };
    let expected = PostStatus::NAMES.map(|n| format!("'{n}'")).join(" | ");
    Err(FieldViolation::new(
        STATUS,
        format!("Invalid enum value. Expected {expected}, received {received}"),
    ))
}

/// Human-readable kind of a YAML value.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn minimal_mapping_gets_defaults() {
        let meta = validate(&mapping("title: Hi\nslug: hi")).unwrap();
        assert_eq!(meta.title, "Hi");
        assert_eq!(meta.slug, "hi");
        assert_eq!(meta.description, "");
        assert!(meta.keywords.is_empty());
        assert_eq!(meta.cover_image, None);
        assert_eq!(meta.status, PostStatus::Draft);
        assert_eq!(meta.published_at, None);
    }

    #[test]
    fn full_mapping() {
        let meta = validate(&mapping(
            r#"
title: "My Post"
slug: my-post
description: "A brief description"
keywords: ["saas", "startup"]
coverImage: "https://example.com/image.jpg"
status: PUBLISHED
publishedAt: 2025-01-01
"#,
        ))
        .unwrap();
        assert_eq!(meta.keywords, vec!["saas", "startup"]);
        assert_eq!(meta.cover_image.as_deref(), Some("https://example.com/image.jpg"));
        assert_eq!(meta.status, PostStatus::Published);
        assert_eq!(meta.published_at.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn reports_every_failing_field() {
        let violations = validate(&mapping(
            "title: ''\nslug: Bad Slug\ncoverImage: 3\nstatus: LIVE\npublishedAt: [1]",
        ))
        .unwrap_err();
        assert_eq!(
            fields(&violations),
            vec![TITLE, SLUG, COVER_IMAGE, STATUS, PUBLISHED_AT]
        );
        assert_eq!(violations[0].message, TITLE_EMPTY);
        assert_eq!(violations[1].message, SLUG_FORMAT);
        assert_eq!(violations[2].message, "Expected string, received number");
        assert_eq!(
            violations[3].message,
            "Invalid enum value. Expected 'DRAFT' | 'PUBLISHED', received 'LIVE'"
        );
        assert_eq!(violations[4].message, "Expected string, received array");
    }

    #[test]
    fn missing_required_fields() {
        let violations = validate(&Mapping::new()).unwrap_err();
        assert_eq!(fields(&violations), vec![TITLE, SLUG]);
        assert!(violations.iter().all(|v| v.message == REQUIRED));
    }

    #[test]
    fn null_counts_as_absent() {
        let meta = validate(&mapping("title: T\nslug: t\ndescription:\ncoverImage: ~")).unwrap();
        assert_eq!(meta.description, "");
        assert_eq!(meta.cover_image, None);

        let violations = validate(&mapping("title:\nslug: t")).unwrap_err();
        assert_eq!(violations, vec![FieldViolation::new(TITLE, REQUIRED)]);
    }

    #[test]
    fn empty_slug_reports_once() {
        let violations = validate(&mapping("title: T\nslug: ''")).unwrap_err();
        assert_eq!(violations, vec![FieldViolation::new(SLUG, SLUG_EMPTY)]);
    }

    #[test]
    fn non_string_title_is_type_error() {
        let violations = validate(&mapping("title: 2024\nslug: t")).unwrap_err();
        assert_eq!(violations[0].message, "Expected string, received number");
    }

    #[test]
    fn status_must_be_a_string() {
        let violations = validate(&mapping("title: T\nslug: t\nstatus: true")).unwrap_err();
        assert_eq!(
            violations[0].message,
            "Invalid enum value. Expected 'DRAFT' | 'PUBLISHED', received boolean"
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let meta = validate(&mapping("title: T\nslug: t\nauthor: someone")).unwrap();
        assert_eq!(meta.title, "T");
    }

    #[rstest]
    #[case("a, b ,  c", &["a", "b", "c"])]
    #[case("solo", &["solo"])]
    #[case(" , ,", &[])]
    #[case("b, a, b", &["b", "a", "b"])]
    fn keywords_from_comma_string(#[case] input: &str, #[case] expected: &[&str]) {
        let value = Value::String(input.to_string());
        assert_eq!(normalize_keywords(Some(&value)), expected);
    }

    #[test]
    fn keyword_sequence_kept_as_is() {
        let value: Value = serde_yaml::from_str(r#"[" padded ", "x"]"#).unwrap();
        assert_eq!(normalize_keywords(Some(&value)), vec![" padded ", "x"]);
    }

    #[rstest]
    #[case("42")]
    #[case("[1, 2]")]
    #[case("{a: b}")]
    #[case("true")]
    fn other_keyword_shapes_fall_back_to_empty(#[case] yaml: &str) {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        assert!(normalize_keywords(Some(&value)).is_empty());
    }

    #[test]
    fn absent_keywords() {
        assert!(normalize_keywords(None).is_empty());
    }
}
