//! Loading a directory of raw post files and checking it as a whole.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::frontmatter::{FrontmatterParseError, ParsedPost, has_block, parse};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("posts directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read posts directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read post file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Find markdown post files under `root`, sorted by path.
pub fn discover_posts(root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    if !root.is_dir() {
        return Err(CatalogError::MissingDir(root.display().to_string()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| CatalogError::WalkError(root.display().to_string(), e))?;

        let path = entry.path();
        if path.is_file() && is_post_file(path) {
            out.push(path.to_path_buf());
        }
    }
    Ok(out)
}

fn is_post_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("md" | "markdown"))
}

/// How a single post file parsed.
#[derive(Debug, Clone)]
pub enum PostOutcome {
    /// Metadata block present and valid.
    Parsed(ParsedPost),
    /// No metadata block; the file predates the block format.
    Legacy,
    /// Metadata block present but invalid.
    Invalid(FrontmatterParseError),
}

#[derive(Debug, Clone)]
pub struct PostEntry {
    pub path: PathBuf,
    pub outcome: PostOutcome,
}

impl PostEntry {
    /// Parse `raw` and classify it.
    pub fn from_source(path: PathBuf, raw: &str) -> Self {
        let outcome = if !has_block(raw) {
            PostOutcome::Legacy
        } else {
            match parse(raw) {
                Ok(parsed) => PostOutcome::Parsed(parsed),
                Err(e) => PostOutcome::Invalid(e),
            }
        };
        Self { path, outcome }
    }

    pub fn slug(&self) -> Option<&str> {
        match &self.outcome {
            PostOutcome::Parsed(p) => Some(&p.meta.slug),
            _ => None,
        }
    }
}

/// A slug claimed by more than one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSlug {
    pub slug: String,
    pub paths: Vec<PathBuf>,
}

/// All posts found under a directory.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    entries: Vec<PostEntry>,
}

impl PostCatalog {
    /// Read and parse every post file under `root`.
    ///
    /// Parse failures are recorded per entry; only I/O problems fail the load.
    pub fn load(root: &Path) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        for path in discover_posts(root)? {
            let raw = fs::read_to_string(&path)
                .map_err(|source| CatalogError::Io { path: path.clone(), source })?;
            let entry = PostEntry::from_source(path, &raw);
            match &entry.outcome {
                PostOutcome::Parsed(p) => {
                    tracing::debug!(path = %entry.path.display(), slug = %p.meta.slug, "parsed post");
                }
                PostOutcome::Legacy => {
                    tracing::debug!(path = %entry.path.display(), "legacy post without frontmatter");
                }
                PostOutcome::Invalid(e) => {
                    tracing::warn!(path = %entry.path.display(), "{e}");
                }
            }
            entries.push(entry);
        }
        tracing::debug!(root = %root.display(), count = entries.len(), "loaded post catalog");
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<PostEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.entries
    }

    pub fn invalid(&self) -> impl Iterator<Item = (&Path, &FrontmatterParseError)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            PostOutcome::Invalid(err) => Some((e.path.as_path(), err)),
            _ => None,
        })
    }

    pub fn legacy(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PostOutcome::Legacy))
            .map(|e| e.path.as_path())
    }

    /// Slugs used by more than one parsed post, ordered by slug.
    pub fn duplicate_slugs(&self) -> Vec<DuplicateSlug> {
        let mut by_slug: BTreeMap<&str, Vec<PathBuf>> = BTreeMap::new();
        for entry in &self.entries {
            if let Some(slug) = entry.slug() {
                by_slug.entry(slug).or_default().push(entry.path.clone());
            }
        }
        by_slug
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(slug, paths)| DuplicateSlug { slug: slug.to_string(), paths })
            .collect()
    }

    /// Whether a new post may claim `slug`.
    pub fn slug_available(&self, slug: &str) -> bool {
        self.entries.iter().all(|e| e.slug() != Some(slug))
    }

    /// No invalid posts and no duplicate slugs.
    pub fn is_clean(&self) -> bool {
        self.invalid().next().is_none() && self.duplicate_slugs().is_empty()
    }
}
