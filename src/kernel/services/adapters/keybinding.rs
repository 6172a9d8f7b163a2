//! 快捷键：按键 → 命令（支持上下文）

use super::settings::parse_keybinding;
use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Explorer,
    CommandPalette,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "explorer" | "tree" | "sidebar.explorer" => Some(Self::Explorer),
            "palette" | "commandpalette" | "command_palette" => Some(Self::CommandPalette),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    explorer: FxHashMap<Key, Command>,
    command_palette: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            explorer: default_explorer_keybindings(),
            command_palette: default_command_palette_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Explorer => {
                self.explorer.get(key).or_else(|| self.global.get(key))
            }
            KeybindingContext::CommandPalette => self
                .command_palette
                .get(key)
                .or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Explorer => &self.explorer,
            KeybindingContext::CommandPalette => &self.command_palette,
        }
    }

    /// Key to show as a hint for `command`: the one with the fewest modifiers,
    /// so the result does not depend on map order.
    pub fn key_for(&self, context: KeybindingContext, command: &Command) -> Option<Key> {
        self.bindings(context)
            .iter()
            .filter(|(_, bound)| *bound == command)
            .map(|(key, _)| *key)
            .min_by_key(|key| (key.modifiers.count(), *key))
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Layer user rules over the defaults. An empty command unbinds the key;
    /// rules with an unparsable key or context are skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with invalid key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(raw) => match KeybindingContext::parse(raw) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %raw, "ignoring keybinding with unknown context");
                        continue;
                    }
                },
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
            } else {
                self.bind(context, key, Command::from_name(rule.command.trim()));
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Explorer => &mut self.explorer,
            KeybindingContext::CommandPalette => &mut self.command_palette,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::simple(KeyCode::F(1)), Command::CommandPalette);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('p')), Command::CommandPalette);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::SelectRootFolder);

    bindings
}

fn default_explorer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(32);

    bindings.insert(Key::simple(KeyCode::Up), Command::ExplorerUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::ExplorerDown);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::ExplorerUp);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::ExplorerDown);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::ExplorerPageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::ExplorerPageDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::ExplorerActivate);
    bindings.insert(Key::simple(KeyCode::Right), Command::ExplorerActivate);
    bindings.insert(Key::simple(KeyCode::Left), Command::ExplorerCollapse);

    bindings.insert(Key::simple(KeyCode::Char(':')), Command::CommandPalette);
    bindings.insert(Key::simple(KeyCode::Char('a')), Command::NewFile);
    bindings.insert(Key::shift(KeyCode::Char('a')), Command::NewFolder);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFileInRoot);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('n')), Command::NewFolderInRoot);
    bindings.insert(Key::simple(KeyCode::F(2)), Command::Rename);
    bindings.insert(Key::simple(KeyCode::Char('r')), Command::Rename);
    bindings.insert(Key::simple(KeyCode::Delete), Command::Delete);
    bindings.insert(Key::simple(KeyCode::Char('d')), Command::Delete);
    bindings.insert(Key::simple(KeyCode::Char('y')), Command::Copy);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Copy);
    bindings.insert(Key::simple(KeyCode::Char('x')), Command::Cut);
    bindings.insert(Key::ctrl(KeyCode::Char('x')), Command::Cut);
    bindings.insert(Key::simple(KeyCode::Char('p')), Command::Paste);
    bindings.insert(Key::ctrl(KeyCode::Char('v')), Command::Paste);
    bindings.insert(Key::shift(KeyCode::Char('y')), Command::CopyPath);
    bindings.insert(Key::simple(KeyCode::Char('o')), Command::ShowInOsExplorer);
    bindings.insert(Key::simple(KeyCode::Char('v')), Command::OpenMarkdownPreview);
    bindings.insert(Key::simple(KeyCode::F(5)), Command::Refresh);
    bindings.insert(Key::shift(KeyCode::Char('r')), Command::Refresh);

    bindings.insert(Key::shift(KeyCode::Up), Command::PreviewScrollUp);
    bindings.insert(Key::shift(KeyCode::Down), Command::PreviewScrollDown);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::ClosePreview);

    bindings
}

fn default_command_palette_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Up), Command::PaletteUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::PaletteDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::PaletteConfirm);
    bindings.insert(Key::simple(KeyCode::Esc), Command::PaletteClose);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
