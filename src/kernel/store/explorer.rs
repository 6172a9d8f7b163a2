use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.explorer.set_view_height(height))
            }
            Action::ExplorerMoveSelection { delta } => {
                super::DispatchResult::changed(self.state.explorer.move_selection(delta))
            }
            Action::ExplorerScroll { delta } => {
                super::DispatchResult::changed(self.state.explorer.scroll(delta))
            }
            Action::ExplorerActivate => {
                let (state_changed, effects) = self.state.explorer.activate_selected();
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            Action::ExplorerCollapse => {
                let (state_changed, effects) = self.state.explorer.collapse_selected();
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            Action::ExplorerClickRow { row, now } => {
                if self.state.ui.has_modal() || self.state.ui.command_palette.visible {
                    return super::DispatchResult::unchanged();
                }
                let (state_changed, effects) = self.state.explorer.click_row(row, now);
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }
}
