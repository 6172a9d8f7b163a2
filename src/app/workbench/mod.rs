//! 工作台：把输入事件翻译成内核 action，并把内核状态画到终端上

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::Host;
use crate::kernel::{Action as KernelAction, AppState, Session};
use ratatui::layout::Rect;
use ratatui::Frame;

mod input;
mod render;
mod util;

const STATUS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH_PERCENT: u16 = 35;
const SIDEBAR_MIN_WIDTH: u16 = 24;
const SCROLL_STEP: isize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Areas from the last frame, used for mouse hit-testing and cursor placement.
#[derive(Debug, Default)]
struct LayoutCache {
    render_area: Option<Rect>,
    tree_area: Option<Rect>,
    preview_area: Option<Rect>,
    tree_view_height: Option<u16>,
    applied_tree_view_height: Option<u16>,
}

pub struct Workbench<H: Host> {
    session: Session<H>,
    keybindings: KeybindingService,
    theme: UiTheme,
    layout: LayoutCache,
}

impl<H: Host> Workbench<H> {
    pub fn new(session: Session<H>, keybindings: KeybindingService, theme: UiTheme) -> Self {
        Self {
            session,
            keybindings,
            theme,
            layout: LayoutCache::default(),
        }
    }

    /// Load the tree (or warn about a missing root). Call once before the first frame.
    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn state(&self) -> &AppState {
        self.session.state()
    }

    pub fn session(&self) -> &Session<H> {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.state().ui.should_quit
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    pub fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }

    /// Push layout facts learned while drawing back into the kernel. Returns
    /// whether another frame is needed.
    pub fn flush_post_render_sync(&mut self) -> bool {
        let Some(height) = self.layout.tree_view_height else {
            return false;
        };
        if self.layout.applied_tree_view_height == Some(height) {
            return false;
        }
        self.layout.applied_tree_view_height = Some(height);
        self.dispatch_kernel(KernelAction::ExplorerSetViewHeight {
            height: height as usize,
        })
    }

    fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        self.session.dispatch(action)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
