use super::util;
use super::{Workbench, STATUS_HEIGHT};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::Host;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod dialogs;
mod palette;
mod preview;
mod sidebar;
mod status;

pub(super) fn render<H: Host>(workbench: &mut Workbench<H>, frame: &mut Frame, area: Rect) {
    workbench.layout.render_area = Some(area);
    if area.width == 0 || area.height == 0 {
        workbench.layout.tree_area = None;
        workbench.layout.preview_area = None;
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .split(area);
    let body = rows[0];
    let status_area = rows[1];

    let has_preview = workbench.state().ui.preview.is_some();
    let sidebar_w = util::sidebar_width(body.width, has_preview);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_w), Constraint::Min(0)])
        .split(body);

    workbench.render_sidebar(frame, columns[0]);
    if has_preview {
        workbench.render_preview(frame, columns[1]);
    } else {
        workbench.layout.preview_area = None;
    }
    workbench.render_status(frame, status_area);

    let ui = &workbench.state().ui;
    if ui.command_palette.visible {
        palette::render(workbench, frame, area);
    }
    dialogs::render_input_dialog(workbench, frame, area);
    dialogs::render_confirm_dialog(workbench, frame, area);
}

pub(super) fn cursor_position<H: Host>(workbench: &Workbench<H>) -> Option<(u16, u16)> {
    let ui = &workbench.state().ui;
    if ui.confirm_dialog.visible {
        return None;
    }
    if ui.input_dialog.visible {
        return dialogs::input_dialog_cursor(workbench);
    }
    if ui.command_palette.visible {
        return palette::cursor(workbench);
    }
    None
}

impl<H: Host> Workbench<H> {
    /// Label of the key bound to `command`, looking through `contexts` in order.
    fn key_hint(&self, contexts: &[KeybindingContext], command: &Command) -> Option<String> {
        contexts
            .iter()
            .find_map(|context| self.keybindings.key_for(*context, command))
            .map(|key| util::key_label(&key))
    }
}
