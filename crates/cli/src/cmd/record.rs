//! Record command: build the stored record for a raw post file.

use std::path::Path;

use postmatter_core::posts::StoredPost;

use super::output::{print_json, print_violations};
use crate::RecordArgs;

pub fn run(config: Option<&Path>, args: &RecordArgs) {
    let _rc = super::setup(config);
    let raw = super::read_or_exit(&args.file);

    let result = match &args.existing {
        Some(path) => {
            let json = super::read_or_exit(path);
            let existing: StoredPost = match serde_json::from_str(&json) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing post record {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            existing.updated_from_source(&raw)
        }
        None => StoredPost::from_source(&raw),
    };

    match result {
        Ok(post) => {
            tracing::debug!(slug = %post.slug, status = %post.status, "built post record");
            print_json(&post);
        }
        Err(e) => {
            print_violations(&args.file, &e.fields);
            std::process::exit(1);
        }
    }
}
