use super::super::util;
use super::super::Workbench;
use crate::kernel::palette::match_items;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::Host;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";

fn palette_area(area: Rect) -> Rect {
    util::centered_rect(70, 14, area)
}

pub(super) fn render<H: Host>(workbench: &Workbench<H>, frame: &mut Frame, area: Rect) {
    let popup_area = palette_area(area);
    if popup_area.width < 12 || popup_area.height < 4 {
        return;
    }

    let theme = &workbench.theme;
    let base_style = Style::default().bg(theme.palette_bg).fg(theme.palette_fg);
    let muted_style = Style::default().fg(theme.palette_muted_fg);
    let selected_style = Style::default()
        .bg(theme.palette_selected_bg)
        .fg(theme.palette_selected_fg);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.palette_border))
            .title(Span::styled(
                " Command Palette ",
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(base_style),
        popup_area,
    );

    let inner = util::inner(popup_area);
    let palette = &workbench.state().ui.command_palette;
    let matches = match_items(&palette.query);
    let selected = palette.selected.min(matches.len().saturating_sub(1));

    let prompt_w = PROMPT.width();
    let (q_start, q_end) = util::text_window(
        &palette.query,
        palette.query.len(),
        (inner.width as usize).saturating_sub(prompt_w),
    );
    let mut lines = vec![
        Line::from(vec![
            Span::styled(PROMPT, muted_style),
            Span::styled(
                palette.query.get(q_start..q_end).unwrap_or_default().to_string(),
                base_style,
            ),
        ]),
        Line::raw(""),
    ];

    if matches.is_empty() {
        lines.push(Line::from(Span::styled("No matching commands", muted_style)));
    }

    let max_items = (inner.height as usize).saturating_sub(lines.len());
    // Keep the selection on screen when the list is longer than the popup.
    let first = selected.saturating_sub(max_items.saturating_sub(1));
    let width = inner.width as usize;
    for (idx, item) in matches.iter().enumerate().skip(first).take(max_items) {
        let is_selected = idx == selected;
        let row_style = if is_selected { selected_style } else { base_style };
        let prefix = if is_selected { "▸ " } else { "  " };
        let hint = workbench
            .key_hint(
                &[KeybindingContext::Explorer, KeybindingContext::Global],
                item.command,
            )
            .unwrap_or_default();

        let mut label = format!("{prefix}{}", item.label);
        let room = width.saturating_sub(hint.width() + 1);
        if label.width() > room {
            label.truncate(util::truncate_to_width(&label, room));
        }
        let pad = width
            .saturating_sub(label.width())
            .saturating_sub(hint.width());
        lines.push(Line::from(vec![
            Span::styled(label, row_style),
            Span::styled(" ".repeat(pad), row_style),
            Span::styled(hint, row_style.patch(muted_style)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(base_style), inner);
}

pub(super) fn cursor<H: Host>(workbench: &Workbench<H>) -> Option<(u16, u16)> {
    let area = workbench.layout.render_area?;
    let popup_area = palette_area(area);
    if popup_area.width < 12 || popup_area.height < 4 {
        return None;
    }

    let inner = util::inner(popup_area);
    let query = &workbench.state().ui.command_palette.query;
    let prompt_w = PROMPT.width();
    let (start, _end) = util::text_window(
        query,
        query.len(),
        (inner.width as usize).saturating_sub(prompt_w),
    );
    let before = query.get(start..).unwrap_or_default();

    let x = inner
        .x
        .saturating_add((prompt_w + before.width()) as u16)
        .min(inner.x + inner.width.saturating_sub(1));
    Some((x, inner.y))
}
