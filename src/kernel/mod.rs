//! Headless application core (state/action/effect).

pub mod action;
pub mod clipboard;
pub mod effect;
pub mod error;
pub mod naming;
pub mod palette;
pub mod preview;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod tree_source;

pub use action::Action;
pub use clipboard::{ClipboardAction, ClipboardEntry, ClipboardSlot, PastePlan};
pub use effect::{Effect, FsOp, HostOp};
pub use error::KernelError;
pub use preview::{PreviewKind, PreviewLine};
pub use session::Session;
pub use state::{
    AppState, ConfirmDialogState, ExplorerState, InputDialogKind, InputDialogState,
    Notification, NotificationLevel, PendingAction, PreviewState, UiState,
};
pub use store::{DispatchResult, Store};
pub use tree_source::{ExplorerRow, TreeDataSource, TreeSnapshot};
