//! Post-level policies built on the frontmatter format.

pub mod catalog;
pub mod editing;
pub mod types;

pub use catalog::{CatalogError, DuplicateSlug, PostCatalog, PostEntry, PostOutcome, discover_posts};
pub use editing::editable_source;
pub use types::StoredPost;
