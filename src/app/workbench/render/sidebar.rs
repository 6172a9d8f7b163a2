use super::super::util;
use super::super::Workbench;
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::Host;
use crate::kernel::ExplorerRow;
use crate::models::NodeIcon;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";
const HINT_CONTEXTS: [KeybindingContext; 2] =
    [KeybindingContext::Global, KeybindingContext::Explorer];

impl<H: Host> Workbench<H> {
    pub(super) fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            self.layout.tree_area = None;
            self.layout.tree_view_height = None;
            return;
        }

        let state = self.state();
        let overlay = state.ui.has_modal() || state.ui.command_palette.visible;
        let border = if overlay {
            self.theme.inactive_border
        } else {
            self.theme.focus_border
        };
        let title = state
            .root
            .as_ref()
            .and_then(|root| root.file_name())
            .map(|name| format!(" {} ", name.to_string_lossy()))
            .unwrap_or_else(|| " URNote ".to_string());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(block, area);

        let inner = util::inner(area);
        if inner.width == 0 || inner.height == 0 {
            self.layout.tree_area = None;
            self.layout.tree_view_height = None;
            return;
        }

        let muted = Style::default().fg(self.theme.palette_muted_fg);
        let explorer = &state.explorer;
        let lines: Vec<Line> = if state.root.is_none() {
            vec![
                Line::from(Span::styled("No root folder.", muted)),
                Line::from(Span::styled(self.select_root_hint(), muted)),
            ]
        } else if explorer.rows.is_empty() {
            vec![Line::from(Span::styled("(empty)", muted))]
        } else {
            let selected = explorer.selected();
            explorer
                .rows
                .iter()
                .enumerate()
                .skip(explorer.scroll_offset)
                .take(inner.height as usize)
                .map(|(idx, row)| self.tree_line(row, selected == Some(idx), inner.width))
                .collect()
        };

        frame.render_widget(Paragraph::new(lines), inner);
        self.layout.tree_area = Some(inner);
        self.layout.tree_view_height = Some(inner.height);
    }

    fn tree_line(&self, row: &ExplorerRow, selected: bool, width: u16) -> Line<'static> {
        let item = row.node.display();
        let (marker, icon_style) = match item.icon {
            NodeIcon::Folder if row.expanded => ("▾ ", Style::default().fg(self.theme.folder_fg)),
            NodeIcon::Folder => ("▸ ", Style::default().fg(self.theme.folder_fg)),
            NodeIcon::Markdown => ("  ", Style::default().fg(self.theme.markdown_fg)),
            NodeIcon::File => ("  ", Style::default()),
        };
        let mut label_style = icon_style;
        if item.collapsible {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let indent = INDENT.repeat(row.depth as usize);
        let mut text = format!("{indent}{marker}{}", item.label);
        let width = width as usize;
        if text.width() > width {
            let end = util::truncate_to_width(&text, width.saturating_sub(1));
            text.truncate(end);
            text.push('…');
        }

        if selected {
            let pad = width.saturating_sub(text.width());
            text.push_str(&" ".repeat(pad));
            let style = Style::default()
                .bg(self.theme.selection_bg)
                .fg(self.theme.selection_fg)
                .add_modifier(Modifier::BOLD);
            return Line::from(Span::styled(text, style));
        }

        Line::from(Span::styled(text, label_style))
    }
}

impl<H: Host> Workbench<H> {
    fn select_root_hint(&self) -> String {
        let select = self.key_hint(&HINT_CONTEXTS, &Command::SelectRootFolder);
        let palette = self.key_hint(&HINT_CONTEXTS, &Command::CommandPalette);
        match (select, palette) {
            (Some(select), Some(palette)) => format!("{select} or {palette} to select one."),
            (Some(key), None) | (None, Some(key)) => format!("{key} to select one."),
            (None, None) => "Bind urnote.selectRootFolder to select one.".to_string(),
        }
    }
}
