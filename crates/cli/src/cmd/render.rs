//! Render command implementation.

use std::fs;
use std::path::Path;

use postmatter_core::render::render_post;

use crate::RenderArgs;

pub fn run(config: Option<&Path>, args: &RenderArgs) {
    let rc = super::setup(config);
    let raw = super::read_or_exit(&args.file);

    let html = render_post(&raw, &rc.render);

    match &args.output {
        Some(out) => {
            if let Err(e) = fs::write(out, &html) {
                eprintln!("Error writing {}: {}", out.display(), e);
                std::process::exit(1);
            }
            println!("OK   pmt render");
            println!("output: {}", out.display());
        }
        None => print!("{html}"),
    }
}
