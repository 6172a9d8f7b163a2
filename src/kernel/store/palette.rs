use crate::kernel::palette::match_items;
use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_palette_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::PaletteAppend(ch) => {
                if !self.state.ui.command_palette.visible {
                    return super::DispatchResult::unchanged();
                }

                self.state.ui.command_palette.query.push(ch);
                self.state.ui.command_palette.selected = 0;
                super::DispatchResult::changed(true)
            }
            Action::PaletteBackspace => {
                if !self.state.ui.command_palette.visible {
                    return super::DispatchResult::unchanged();
                }

                let removed = self.state.ui.command_palette.query.pop().is_some();
                if removed {
                    self.state.ui.command_palette.selected = 0;
                }
                super::DispatchResult::changed(removed)
            }
            Action::PaletteMoveSelection(delta) => {
                if !self.state.ui.command_palette.visible || delta == 0 {
                    return super::DispatchResult::unchanged();
                }

                let matches = match_items(&self.state.ui.command_palette.query).len();
                if matches == 0 {
                    return super::DispatchResult::unchanged();
                }

                let selected = &mut self.state.ui.command_palette.selected;
                let prev = *selected;
                if delta > 0 {
                    *selected = selected.saturating_add(delta as usize).min(matches - 1);
                } else {
                    *selected = selected.saturating_sub((-delta) as usize);
                }

                super::DispatchResult::changed(*selected != prev)
            }
            Action::PaletteConfirm => {
                let palette = &self.state.ui.command_palette;
                if !palette.visible {
                    return super::DispatchResult::unchanged();
                }

                let command = match_items(&palette.query)
                    .get(palette.selected)
                    .map(|m| m.command.clone());
                self.state.ui.command_palette.reset();

                let Some(command) = command else {
                    return super::DispatchResult::changed(true);
                };
                let target = self.state.explorer.selected_node().cloned();
                let mut result = self.dispatch_command(command, target);
                result.state_changed = true;
                result
            }
            Action::PaletteClose => {
                if !self.state.ui.command_palette.visible {
                    return super::DispatchResult::unchanged();
                }

                self.state.ui.command_palette.reset();
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-palette action passed to reduce_palette_action"),
        }
    }
}
