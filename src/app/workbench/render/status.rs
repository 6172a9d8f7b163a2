use super::super::Workbench;
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::Host;
use crate::kernel::NotificationLevel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

impl<H: Host> Workbench<H> {
    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let state = self.state();
        let (message, style) = match state.ui.latest_notification() {
            Some(note) => {
                let fg = match note.level {
                    NotificationLevel::Info => self.theme.palette_fg,
                    NotificationLevel::Warning => self.theme.warning_fg,
                    NotificationLevel::Error => self.theme.error_fg,
                };
                (note.message.clone(), Style::default().fg(fg))
            }
            None => (String::new(), Style::default()),
        };

        let staged = state
            .clipboard
            .entry()
            .map(|entry| {
                let name = entry
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| entry.path.display().to_string());
                format!("{}: {name} | ", entry.action.verb())
            })
            .unwrap_or_default();
        let palette_key = self.key_hint(
            &[KeybindingContext::Global, KeybindingContext::Explorer],
            &Command::CommandPalette,
        );
        let right = match palette_key {
            Some(key) => format!("{staged}{key} Commands "),
            None => staged.trim_end_matches("| ").to_string(),
        };

        let width = area.width as usize;
        let gap = width
            .saturating_sub(message.width())
            .saturating_sub(right.width());
        let line = Line::from(vec![
            Span::styled(format!(" {message}"), style),
            Span::raw(" ".repeat(gap.saturating_sub(1))),
            Span::styled(right, Style::default().fg(self.theme.palette_muted_fg)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
