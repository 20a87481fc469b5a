//! Edit-source command: prepare a stored post record for the editor.

use std::borrow::Cow;
use std::path::Path;

use postmatter_core::posts::{StoredPost, editable_source};

use crate::EditSourceArgs;

pub fn run(config: Option<&Path>, args: &EditSourceArgs) {
    let _rc = super::setup(config);
    let json = super::read_or_exit(&args.record);

    let post: StoredPost = match serde_json::from_str(&json) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error parsing post record {}: {}", args.record.display(), e);
            std::process::exit(1);
        }
    };

    let source = editable_source(&post);
    if let Cow::Owned(_) = source {
        tracing::info!(slug = %post.slug, "synthesized frontmatter for legacy post");
    }
    println!("{source}");
}
