//! TUI integration layer (crossterm).
//!
//! Kept apart from `kernel`/`models` so the note tree can be driven without a terminal.

pub mod crossterm;
pub mod terminal_guard;
