//! Pure text wrapping utilities and dimensional constants for the InputBox.
//!
//! These are stateless helpers with no dependency on InputBox state.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before the view follows the tail
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Offset from area edge to content (border + padding)
pub(super) const CONTENT_OFFSET: u16 = 2;

/// Build textwrap options configured for the input box inner width.
fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines. A trailing newline yields a trailing empty line,
/// so the cursor lands on the fresh line.
pub(super) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();

    // textwrap doesn't always produce an empty trailing line for a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Count wrapped lines for the given text.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    wrap_lines(text, width).len() as u16
}

/// Display width of a wrapped line, in terminal columns.
pub(super) fn display_width(line: &str) -> u16 {
    line.width() as u16
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}
