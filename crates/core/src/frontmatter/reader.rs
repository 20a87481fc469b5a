//! Splitting the leading metadata block from a raw document.

/// Line that opens and closes a metadata block.
pub const DELIMITER: &str = "---";

/// A metadata block and the text that follows it, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// Text between the delimiter lines (not yet parsed as YAML).
    pub yaml: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

/// Split a leading metadata block from `input`.
///
/// A block is recognized only when the very first line is `---` (trailing
/// whitespace allowed) and a later line closes it the same way:
/// ```markdown
/// ---
/// title: "Hello"
/// ---
/// # Body
/// ```
/// Returns `None` when the document does not open with a delimiter line or the
/// block is never closed. A leading byte order mark is ignored.
pub fn split_block(input: &str) -> Option<RawBlock<'_>> {
    let input = strip_bom(input);

    let newline = input.find('\n')?;
    if input[..newline].trim_end() != DELIMITER {
        return None;
    }
    let rest = &input[newline + 1..];

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some(RawBlock { yaml: &rest[..offset], body: &rest[offset + line.len()..] });
        }
        offset += line.len();
    }
    None
}

/// Whether `input` starts with the block delimiter.
///
/// This is a prefix check only; it does not require the block to be closed.
/// A leading byte order mark is ignored, as in [`split_block`].
pub fn has_leading_delimiter(input: &str) -> bool {
    strip_bom(input).starts_with(DELIMITER)
}

fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}
