//! Blog post frontmatter parsing and serialization.
//!
//! A raw post is an optional YAML metadata block delimited by `---` lines,
//! followed by a markdown body:
//! ```markdown
//! ---
//! title: "My Post Title"
//! slug: "my-post-title"
//! description: "A brief description"
//! keywords: ["saas", "startup"]
//! coverImage: "https://example.com/image.jpg"
//! status: "DRAFT"
//! publishedAt: "2025-01-01"
//! ---
//! # Body
//! ```
//!
//! - [`parse`] splits and validates a raw document
//! - [`serialize`] renders metadata and body back to a raw document
//! - [`schema::validate`] checks an untyped mapping on its own

pub mod parser;
pub mod reader;
pub mod schema;
pub mod serializer;
pub mod types;

pub use parser::{FrontmatterParseError, has_block, parse};
pub use reader::{DELIMITER, has_leading_delimiter};
pub use schema::{normalize_keywords, split_keywords};
pub use serializer::serialize;
pub use types::{FieldViolation, ParsedPost, PostDraft, PostMetadata, PostStatus};
