//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll.
//! All navigation methods accept `buffer: &str` explicitly; the text is
//! owned by `InputBox`, keeping the dependency visible.
//!
//! Columns are display columns (via `unicode-width`), so wide characters
//! take two cells and combining marks take none.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;

/// Width available for text inside the bordered block. Returns 0 if too narrow.
pub(super) fn inner_width(area_width: u16) -> usize {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD) as usize
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// The part of `text` that fits in `width` columns after skipping `scroll` columns.
pub(super) fn visible_slice(text: &str, scroll: usize, width: usize) -> &str {
    let mut col = 0;
    let mut start = text.len();
    let mut end = text.len();
    for (i, c) in text.char_indices() {
        if col >= scroll && start == text.len() {
            start = i;
        }
        let w = c.width().unwrap_or(0);
        if start != text.len() && col + w > scroll + width {
            end = i;
            break;
        }
        col += w;
    }
    if start > end {
        return "";
    }
    &text[start..end]
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns scrolled off the left edge
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Cursor at the end of `buffer` (used when a box is prefilled).
    pub fn at_end(buffer: &str) -> Self {
        Self {
            pos: buffer.len(),
            scroll: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll = 0;
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Keep the cursor inside the visible window of `width` columns.
    pub fn update_scroll(&mut self, buffer: &str, width: usize) {
        if width == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + width {
            self.scroll = col + 1 - width;
        }
    }

    /// Screen position of the cursor inside `area`. Returns (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let col = self.column(buffer).saturating_sub(self.scroll);
        let x = area.x + BORDER_OFFSET + 1 + col as u16;
        let max_x = area.right().saturating_sub(BORDER_OFFSET + 1);
        (x.min(max_x), area.y + BORDER_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_handle_multibyte() {
        let text = "aé中";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(prev_char_boundary(text, 6), 3);
        assert_eq!(prev_char_boundary(text, 0), 0);
    }

    #[test]
    fn test_column_counts_wide_chars_twice() {
        let buffer = "中a";
        let cursor = CursorState::at_end(buffer);
        assert_eq!(cursor.column(buffer), 3);
    }

    #[test]
    fn test_update_scroll_follows_cursor() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::at_end(buffer);
        cursor.update_scroll(buffer, 4);
        assert_eq!(cursor.scroll, 7);

        cursor.pos = 2;
        cursor.update_scroll(buffer, 4);
        assert_eq!(cursor.scroll, 2);
    }

    #[test]
    fn test_visible_slice() {
        assert_eq!(visible_slice("abcdefghij", 0, 4), "abcd");
        assert_eq!(visible_slice("abcdefghij", 7, 4), "hij");
        assert_eq!(visible_slice("abc", 3, 4), "");
    }
}
