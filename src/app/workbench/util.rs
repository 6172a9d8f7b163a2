use crate::core::event::{Key, KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

pub(super) fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(width_percent).saturating_div(100);
    let min_width = 10.min(area.width);
    let width = width.max(min_width).min(area.width);

    let min_height = 3.min(area.height);
    let height = height.max(min_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

pub(super) fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

pub(super) fn sidebar_width(available: u16, has_preview: bool) -> u16 {
    if !has_preview {
        return available;
    }

    let desired = available
        .saturating_mul(super::SIDEBAR_WIDTH_PERCENT)
        .saturating_div(100);
    let min_width = super::SIDEBAR_MIN_WIDTH.min(available);
    let max_width = available.saturating_sub(10).max(min_width);

    desired.max(min_width).min(max_width)
}

/// Byte range `[start, end)` of `text` that fits into `available` cells and
/// keeps the byte offset `cursor` visible.
pub(super) fn text_window(text: &str, cursor: usize, available: usize) -> (usize, usize) {
    let mut cursor = cursor.min(text.len());
    while cursor > 0 && !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    if available == 0 || text.is_empty() {
        return (cursor, cursor);
    }

    // Leave one cell for the cursor itself.
    let budget = available.saturating_sub(1).max(1);
    let mut start = cursor;
    let mut used = 0usize;
    for (idx, ch) in text[..cursor].char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    let end = start + truncate_to_width(&text[start..], available);
    (start, end)
}

/// How many bytes from the start of `s` fit into `max_width` cells.
pub(super) fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return idx;
        }
        used += w;
    }
    s.len()
}

/// Human readable form of a binding, e.g. `Ctrl+Shift+P`, `F2`, `A`.
pub(super) fn key_label(key: &Key) -> String {
    let mut parts: Vec<String> = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        parts.push("Super".to_string());
    }
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let code = match key.code {
        // A bare shifted letter reads better as the capital.
        KeyCode::Char(ch) if shift && parts.is_empty() && ch.is_ascii_alphabetic() => {
            return ch.to_ascii_uppercase().to_string();
        }
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(ch) if parts.is_empty() && !shift => ch.to_string(),
        KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Unknown => "?".to_string(),
    };
    if shift {
        parts.push("Shift".to_string());
    }
    parts.push(code);
    parts.join("+")
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/util.rs"]
mod tests;
