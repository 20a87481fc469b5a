//! New command: create a post document from metadata flags.

use std::fs;
use std::path::Path;

use postmatter_core::frontmatter::{PostDraft, serialize, split_keywords};
use postmatter_core::posts::PostCatalog;
use postmatter_core::slug::{is_valid_slug, slugify};

use crate::NewArgs;

pub fn run(config: Option<&Path>, args: &NewArgs) {
    let rc = super::setup(config);

    if args.title.trim().is_empty() {
        eprintln!("Error: --title must not be empty");
        std::process::exit(1);
    }

    let slug = args.slug.clone().unwrap_or_else(|| slugify(&args.title));
    if !is_valid_slug(&slug) {
        eprintln!("Error: invalid slug '{slug}'");
        eprintln!("Hint: use lowercase letters and digits separated by single hyphens (e.g. my-post-title).");
        std::process::exit(1);
    }

    // Slugs must be unique across the configured posts directory.
    if let Some(dir) = rc.posts_dir.as_deref().filter(|d| d.is_dir()) {
        match PostCatalog::load(dir) {
            Ok(catalog) if !catalog.slug_available(&slug) => {
                eprintln!("Error: slug '{slug}' is already used in {}", dir.display());
                std::process::exit(1);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("could not check slug uniqueness: {e}"),
        }
    }

    let draft = PostDraft {
        title: args.title.clone(),
        slug,
        description: args.description.clone(),
        keywords: args.keywords.as_deref().map(split_keywords).unwrap_or_default(),
        cover_image: args.cover_image.clone(),
    };
    let document = serialize(&draft, &args.body);

    let Some(output) = &args.output else {
        println!("{document}");
        return;
    };

    if output.exists() {
        eprintln!("Error: refusing to overwrite existing file {}", output.display());
        std::process::exit(1);
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty())
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("Error creating {}: {}", parent.display(), e);
        std::process::exit(1);
    }
    if let Err(e) = fs::write(output, format!("{document}\n")) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    tracing::info!(slug = %draft.slug, path = %output.display(), "created post");
    println!("OK   pmt new");
    println!("output: {}", output.display());
}
