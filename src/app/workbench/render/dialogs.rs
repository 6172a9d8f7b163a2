use super::super::util;
use super::super::Workbench;
use crate::kernel::services::ports::Host;
use crate::kernel::InputDialogKind;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";

pub(super) fn render_confirm_dialog<H: Host>(
    workbench: &Workbench<H>,
    frame: &mut Frame,
    area: Rect,
) {
    let dialog = &workbench.state().ui.confirm_dialog;
    if !dialog.visible {
        return;
    }

    let width = 56.min(area.width.saturating_sub(4));
    let height = 7.min(area.height.saturating_sub(2));
    if width < 20 || height < 4 {
        return;
    }

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let dialog_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, dialog_area);

    let theme = &workbench.theme;
    let base_style = Style::default().bg(theme.palette_bg).fg(theme.palette_fg);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning_fg))
            .title(Span::styled(
                " Confirm ",
                Style::default()
                    .fg(theme.warning_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(base_style),
        dialog_area,
    );

    let hint_line = Line::from(vec![
        Span::styled("[Enter/y]", Style::default().fg(theme.accent_fg)),
        Span::raw(" Delete  "),
        Span::styled("[Esc/n]", Style::default().fg(theme.palette_muted_fg)),
        Span::raw(" Cancel"),
    ]);
    let content = Paragraph::new(vec![
        Line::from(dialog.message.as_str()),
        Line::raw(""),
        hint_line,
    ])
    .style(base_style)
    .wrap(Wrap { trim: true });
    frame.render_widget(content, util::inner(dialog_area));
}

fn input_dialog_area(area: Rect) -> Rect {
    util::centered_rect(60, 6, area)
}

fn accept_label(kind: Option<&InputDialogKind>) -> &'static str {
    match kind {
        Some(InputDialogKind::SelectRoot) => "Open",
        Some(InputDialogKind::Rename { .. }) => "Rename",
        Some(InputDialogKind::NewFile { .. }) | Some(InputDialogKind::NewFolder { .. }) => {
            "Create"
        }
        None => "OK",
    }
}

pub(super) fn render_input_dialog<H: Host>(
    workbench: &Workbench<H>,
    frame: &mut Frame,
    area: Rect,
) {
    let dialog = &workbench.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let theme = &workbench.theme;
    let base_style = Style::default().bg(theme.palette_bg).fg(theme.palette_fg);
    let muted_style = Style::default().fg(theme.palette_muted_fg);
    let title = if dialog.title.is_empty() {
        "Input"
    } else {
        dialog.title.as_str()
    };

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.focus_border))
            .title(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(base_style),
        popup_area,
    );

    let inner = util::inner(popup_area);
    let prompt_w = PROMPT.width();
    let cursor = dialog.cursor.min(dialog.value.len());
    let (v_start, v_end) = util::text_window(
        &dialog.value,
        cursor,
        (inner.width as usize).saturating_sub(prompt_w),
    );
    let visible_value = dialog.value.get(v_start..v_end).unwrap_or_default();

    let mut lines = vec![Line::from(vec![
        Span::styled(PROMPT, muted_style),
        Span::styled(visible_value, base_style),
    ])];

    match dialog.error.as_deref() {
        Some(err) => lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(theme.error_fg),
        ))),
        None => lines.push(Line::raw("")),
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(theme.accent_fg)),
        Span::raw(format!(" {}  ", accept_label(dialog.kind.as_ref()))),
        Span::styled("[Esc]", muted_style),
        Span::raw(" Cancel"),
    ]));

    frame.render_widget(Paragraph::new(lines).style(base_style), inner);
}

pub(super) fn input_dialog_cursor<H: Host>(workbench: &Workbench<H>) -> Option<(u16, u16)> {
    let area = workbench.layout.render_area?;
    let dialog = &workbench.state().ui.input_dialog;
    if !dialog.visible {
        return None;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return None;
    }

    let inner = util::inner(popup_area);
    let prompt_w = PROMPT.width();
    let cursor = dialog.cursor.min(dialog.value.len());
    let (start, _end) = util::text_window(
        &dialog.value,
        cursor,
        (inner.width as usize).saturating_sub(prompt_w),
    );
    let before = dialog.value.get(start..cursor).unwrap_or_default();

    let x = inner
        .x
        .saturating_add((prompt_w + before.width()) as u16)
        .min(inner.x + inner.width.saturating_sub(1));
    // The value sits on the first inner line.
    Some((x, inner.y))
}
