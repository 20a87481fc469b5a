//! Shared output formatting for post commands.

use postmatter_core::frontmatter::{FieldViolation, ParsedPost};
use postmatter_core::posts::PostCatalog;
use serde::Serialize;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ProblemRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Problem")]
    problem: String,
}

/// Print parsed metadata as a two-column table.
pub fn print_post_table(parsed: &ParsedPost) {
    let meta = &parsed.meta;
    let published = match (&meta.published_at, meta.published_timestamp()) {
        (Some(raw), Some(ts)) => format!("{} ({})", raw, ts.format("%Y-%m-%d %H:%M UTC")),
        (Some(raw), None) => raw.clone(),
        (None, _) => "-".to_string(),
    };

    let rows = vec![
        FieldRow { field: "title", value: meta.title.clone() },
        FieldRow { field: "slug", value: meta.slug.clone() },
        FieldRow { field: "description", value: meta.description.clone() },
        FieldRow { field: "keywords", value: meta.keywords.join(", ") },
        FieldRow {
            field: "coverImage",
            value: meta.cover_image.clone().unwrap_or_else(|| "-".to_string()),
        },
        FieldRow { field: "status", value: meta.status.to_string() },
        FieldRow { field: "publishedAt", value: published },
        FieldRow {
            field: "body",
            value: format!(
                "{} lines, {} chars",
                parsed.content.lines().count(),
                parsed.content.chars().count()
            ),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

/// Print every violation of a failed parse, one per line.
pub fn print_violations(path: &Path, fields: &[FieldViolation]) {
    eprintln!("Invalid frontmatter in {}:", path.display());
    for v in fields {
        eprintln!("  - {}: {}", v.field, v.message);
    }
}

#[derive(Debug, Serialize)]
pub struct InvalidPostOutput {
    pub path: String,
    pub errors: Vec<FieldViolation>,
}

#[derive(Debug, Serialize)]
pub struct DuplicateSlugOutput {
    pub slug: String,
    pub paths: Vec<String>,
}

/// Result of checking a posts directory.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub checked: usize,
    pub invalid: Vec<InvalidPostOutput>,
    pub legacy: Vec<String>,
    pub duplicate_slugs: Vec<DuplicateSlugOutput>,
}

impl CheckReport {
    pub fn from_catalog(catalog: &PostCatalog, root: &Path) -> Self {
        let rel = |p: &Path| p.strip_prefix(root).unwrap_or(p).display().to_string();

        Self {
            checked: catalog.entries().len(),
            invalid: catalog
                .invalid()
                .map(|(path, err)| InvalidPostOutput { path: rel(path), errors: err.fields.clone() })
                .collect(),
            legacy: catalog.legacy().map(rel).collect(),
            duplicate_slugs: catalog
                .duplicate_slugs()
                .into_iter()
                .map(|d| DuplicateSlugOutput {
                    slug: d.slug,
                    paths: d.paths.iter().map(|p| rel(p.as_path())).collect(),
                })
                .collect(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.invalid.is_empty() || !self.duplicate_slugs.is_empty()
    }
}

/// Print a check report as a problem table plus a summary line.
pub fn print_check_table(report: &CheckReport) {
    let mut rows = Vec::new();
    for post in &report.invalid {
        for v in &post.errors {
            rows.push(ProblemRow { path: post.path.clone(), problem: v.to_string() });
        }
    }
    for dup in &report.duplicate_slugs {
        for path in &dup.paths {
            rows.push(ProblemRow {
                path: path.clone(),
                problem: format!("duplicate slug '{}'", dup.slug),
            });
        }
    }
    for path in &report.legacy {
        rows.push(ProblemRow {
            path: path.clone(),
            problem: "no frontmatter (legacy post)".to_string(),
        });
    }

    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    println!(
        "checked {} posts: {} invalid, {} legacy, {} duplicate slugs",
        report.checked,
        report.invalid.len(),
        report.legacy.len(),
        report.duplicate_slugs.len()
    );
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}
