pub mod check;
pub mod doctor;
pub mod edit_source;
pub mod new;
pub mod output;
pub mod parse;
pub mod record;
pub mod render;

use std::path::Path;

use postmatter_core::config::loader::ConfigLoader;
use postmatter_core::config::types::ResolvedConfig;

/// Load configuration and start logging, exiting on config errors.
pub fn setup(config: Option<&Path>) -> ResolvedConfig {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc);
    rc
}

/// Read a file to a string, exiting with a message on failure.
pub fn read_or_exit(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
