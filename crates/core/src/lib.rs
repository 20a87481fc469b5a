//! Parsing and serialization of blog posts stored as raw markdown with a
//! YAML metadata block, plus the post-level tooling built on top of it.

pub mod config;
pub mod frontmatter;
pub mod posts;
pub mod render;
pub mod slug;
