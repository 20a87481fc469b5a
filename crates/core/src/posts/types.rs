//! Stored post records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::frontmatter::{FrontmatterParseError, PostDraft, PostMetadata, PostStatus, parse};

/// A post as persisted by the application.
///
/// `content` is the raw document, metadata block included, and is the source
/// of truth. The other fields are copies taken from the block when the post
/// was saved. Posts saved before the block format existed have plain
/// markdown in `content`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPost {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl StoredPost {
    /// Build the record to persist for a newly submitted raw document.
    ///
    /// The raw text is kept whole as `content`; metadata columns are filled
    /// from the parsed block. A published post keeps its `publishedAt` or is
    /// stamped with the current time; a draft has no publish date.
    pub fn from_source(raw: &str) -> Result<Self, FrontmatterParseError> {
        Self::from_source_at(raw, Utc::now())
    }

    /// [`StoredPost::from_source`] with an explicit current time.
    pub fn from_source_at(raw: &str, now: DateTime<Utc>) -> Result<Self, FrontmatterParseError> {
        let mut post = Self::from_meta(parse(raw)?.meta, raw);
        post.published_at = match post.status {
            PostStatus::Published => post.published_at.or_else(|| Some(stamp(now))),
            PostStatus::Draft => None,
        };
        Ok(post)
    }

    /// Build the replacement record when this post is edited.
    ///
    /// An explicit `publishedAt` in the new block always wins. Otherwise the
    /// stored date is kept, and a post published for the first time is
    /// stamped with the current time.
    pub fn updated_from_source(&self, raw: &str) -> Result<Self, FrontmatterParseError> {
        self.updated_from_source_at(raw, Utc::now())
    }

    /// [`StoredPost::updated_from_source`] with an explicit current time.
    pub fn updated_from_source_at(
        &self,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, FrontmatterParseError> {
        let mut post = Self::from_meta(parse(raw)?.meta, raw);
        post.published_at = match (post.published_at.take(), &self.published_at) {
            (Some(given), _) => Some(given),
            (None, Some(existing)) => Some(existing.clone()),
            (None, None) if post.status == PostStatus::Published => Some(stamp(now)),
            (None, None) => None,
        };
        Ok(post)
    }

    fn from_meta(meta: PostMetadata, raw: &str) -> Self {
        Self {
            title: meta.title,
            slug: meta.slug,
            description: Some(meta.description),
            keywords: meta.keywords,
            content: raw.to_string(),
            cover_image: meta.cover_image,
            status: meta.status,
            published_at: meta.published_at,
        }
    }
}

fn stamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<&StoredPost> for PostDraft {
    fn from(post: &StoredPost) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            description: post.description.clone(),
            keywords: post.keywords.clone(),
            cover_image: post.cover_image.clone(),
        }
    }
}
