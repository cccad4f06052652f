//! Shared state types for the egui UI.

mod session;
mod toasts;

pub use session::*;
pub use toasts::*;

use crate::table::TableSnapshot;
use crate::theme_store::ThemePreference;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Upload dialog and in-flight flags.
    pub session: SessionState,
    /// Derived table for the current frame.
    pub table: TableSnapshot,
    /// Text bound to the search field.
    pub search: String,
    pub toasts: ToastState,
    pub theme: ThemePreference,
}
