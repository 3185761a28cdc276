//! Text rules shared by both sweeps.

use std::borrow::Cow;

use crate::config::TabWidth;

/// Replace every horizontal tab with `width` spaces.
///
/// Every other character, including `\r` and `\n`, is copied through
/// unchanged. Text without tabs is returned borrowed, which is also what
/// makes the transform a fixed point after one application.
pub fn expand_tabs(text: &str, width: TabWidth) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }
    let spaces = " ".repeat(width.get());
    Cow::Owned(text.replace('\t', &spaces))
}

/// Number of tab characters in `text`.
pub fn count_tabs(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\t').count()
}

/// A line counts when something other than whitespace remains after trimming.
#[inline]
pub fn is_non_blank(line: &str) -> bool {
    !line.trim().is_empty()
}
