//! Parse command implementation.

use std::path::Path;

use postmatter_core::frontmatter::parse;
use serde::Serialize;

use super::output::{print_json, print_post_table, print_violations};
use crate::ParseArgs;

#[derive(Serialize)]
struct ParseFailure<'a> {
    path: String,
    errors: &'a [postmatter_core::frontmatter::FieldViolation],
}

pub fn run(config: Option<&Path>, args: &ParseArgs) {
    let _rc = super::setup(config);
    let raw = super::read_or_exit(&args.file);

    match parse(&raw) {
        Ok(parsed) => {
            tracing::debug!(path = %args.file.display(), slug = %parsed.meta.slug, "parsed post");
            if args.json {
                print_json(&parsed);
            } else {
                print_post_table(&parsed);
            }
        }
        Err(e) => {
            if args.json {
                print_json(&ParseFailure {
                    path: args.file.display().to_string(),
                    errors: &e.fields,
                });
            } else {
                print_violations(&args.file, &e.fields);
            }
            std::process::exit(1);
        }
    }
}
