//! Preparing stored posts for the editor.

use std::borrow::Cow;

use super::types::StoredPost;
use crate::frontmatter::{PostDraft, has_leading_delimiter, serialize};

/// Raw document to load into the editor for `post`.
///
/// Content that already starts with the block delimiter is returned as-is.
/// Legacy content gets a block synthesized from the stored metadata columns,
/// with the stored content as body.
pub fn editable_source(post: &StoredPost) -> Cow<'_, str> {
    if has_leading_delimiter(&post.content) {
        return Cow::Borrowed(&post.content);
    }
    Cow::Owned(serialize(&PostDraft::from(post), &post.content))
}
