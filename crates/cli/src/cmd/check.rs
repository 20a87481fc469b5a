//! Check command implementation.

use std::path::Path;

use postmatter_core::posts::PostCatalog;

use super::output::{CheckReport, print_check_table, print_json};
use crate::CheckArgs;

pub fn run(config: Option<&Path>, args: &CheckArgs) {
    let rc = super::setup(config);

    let Some(dir) = args.dir.clone().or(rc.posts_dir) else {
        eprintln!("Error: no posts directory given.");
        eprintln!("Hint: pass a directory or set `dir` under [posts] in config.toml.");
        std::process::exit(1);
    };

    let catalog = match PostCatalog::load(&dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading posts: {}", e);
            std::process::exit(1);
        }
    };

    let report = CheckReport::from_catalog(&catalog, &dir);
    if args.json {
        print_json(&report);
    } else {
        print_check_table(&report);
    }

    if report.has_errors() {
        std::process::exit(1);
    }
}
