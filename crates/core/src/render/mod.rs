//! Rendering post bodies to HTML.

use std::borrow::Cow;
use std::sync::LazyLock;

use comrak::plugins::syntect::SyntectAdapter;
use comrak::{Options, Plugins, markdown_to_html_with_plugins};

use crate::config::types::RenderConfig;
use crate::frontmatter::parse;

/// Markdown body to display for a stored raw document.
///
/// Falls back to the whole text when the metadata block does not validate,
/// so a broken block never hides a published post.
pub fn public_body(raw: &str) -> Cow<'_, str> {
    match parse(raw) {
        Ok(parsed) => Cow::Owned(parsed.content),
        Err(e) => {
            tracing::debug!("rendering raw content: {e}");
            Cow::Borrowed(raw)
        }
    }
}

/// Class-based highlighter; pages bring their own stylesheet.
static HIGHLIGHTER: LazyLock<SyntectAdapter> = LazyLock::new(|| SyntectAdapter::new(None));

/// Render markdown to HTML.
///
/// Raw HTML in the source is never passed through, which keeps the output
/// safe to embed in a page. Fenced code is highlighted when enabled.
pub fn render_markdown(markdown: &str, cfg: &RenderConfig) -> String {
    let mut options = Options::default();
    options.extension.table = cfg.tables;
    options.extension.strikethrough = cfg.strikethrough;
    options.extension.autolink = cfg.autolink;
    options.extension.tasklist = cfg.tasklist;
    options.extension.footnotes = cfg.footnotes;
    options.extension.tagfilter = true;
    options.render.unsafe_ = false;

    let mut plugins = Plugins::default();
    if cfg.highlight {
        plugins.render.codefence_syntax_highlighter = Some(&*HIGHLIGHTER);
    }
    markdown_to_html_with_plugins(markdown, &options, &plugins)
}

/// Extract the public body of `raw` and render it.
pub fn render_post(raw: &str, cfg: &RenderConfig) -> String {
    render_markdown(&public_body(raw), cfg)
}
