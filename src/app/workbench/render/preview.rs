use super::super::util;
use super::super::Workbench;
use crate::kernel::preview::{PreviewLine, SpanStyle};
use crate::kernel::services::ports::Host;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

impl<H: Host> Workbench<H> {
    pub(super) fn render_preview(&mut self, frame: &mut Frame, area: Rect) {
        let Some(preview) = self.state().ui.preview.as_ref() else {
            self.layout.preview_area = None;
            return;
        };
        if area.width == 0 || area.height == 0 {
            self.layout.preview_area = None;
            return;
        }

        let position = if preview.lines.is_empty() {
            String::new()
        } else {
            format!(" {}/{} ", preview.scroll + 1, preview.lines.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.inactive_border))
            .title(Span::styled(
                format!(" {} ", preview.title()),
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(position).right_aligned());
        frame.render_widget(block, area);

        let inner = util::inner(area);
        let lines: Vec<Line> = preview
            .lines
            .iter()
            .skip(preview.scroll)
            .take(inner.height as usize)
            .map(|line| self.preview_line(line))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
        self.layout.preview_area = Some(inner);
    }

    fn preview_line(&self, line: &PreviewLine) -> Line<'static> {
        Line::from(
            line.spans
                .iter()
                .map(|span| Span::styled(span.text.clone(), self.span_style(span.style)))
                .collect::<Vec<_>>(),
        )
    }

    fn span_style(&self, style: SpanStyle) -> Style {
        let mut out = Style::default();
        if let Some(level) = style.heading {
            out = out.fg(self.theme.header_fg).add_modifier(Modifier::BOLD);
            if level == 1 {
                out = out.add_modifier(Modifier::UNDERLINED);
            }
        }
        if style.code {
            out = out.fg(self.theme.accent_fg);
        }
        if style.link {
            out = out
                .fg(self.theme.focus_border)
                .add_modifier(Modifier::UNDERLINED);
        }
        if style.muted {
            out = out.fg(self.theme.palette_muted_fg);
        }
        if style.bold {
            out = out.add_modifier(Modifier::BOLD);
        }
        if style.italic {
            out = out.add_modifier(Modifier::ITALIC);
        }
        if style.strikethrough {
            out = out.add_modifier(Modifier::CROSSED_OUT);
        }
        if style.underline {
            out = out.add_modifier(Modifier::UNDERLINED);
        }
        out
    }
}
