//! URL slugs: the accepted pattern and generation from titles.

use std::sync::LazyLock;

use regex::Regex;

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid")
});
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("pattern is valid"));
static HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("pattern is valid"));

/// Whether `slug` is lowercase alphanumeric segments joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// Derive a slug from a post title.
///
/// Characters outside `a-z`, `0-9`, whitespace and `-` are dropped after
/// lowercasing, so titles made only of other characters yield an empty string.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&kept, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
