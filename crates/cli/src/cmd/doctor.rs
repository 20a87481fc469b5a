use postmatter_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            crate::logging::init(&rc);
            println!("OK   pmt doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!("(defaults, no file at {})", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!(
                "posts_dir: {}",
                rc.posts_dir
                    .as_ref()
                    .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
            );
            println!(
                "render: tables={} strikethrough={} autolink={} tasklist={} footnotes={} highlight={}",
                rc.render.tables,
                rc.render.strikethrough,
                rc.render.autolink,
                rc.render.tasklist,
                rc.render.footnotes,
                rc.render.highlight
            );
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL pmt doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
