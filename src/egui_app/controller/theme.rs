use super::*;
use crate::theme_store::ThemePreference;
use tracing::{info, warn};

impl EguiController {
    pub(super) fn load_theme(&mut self) {
        self.ui.theme = self
            .theme_store
            .as_ref()
            .map(ThemeStore::load)
            .unwrap_or_default();
    }

    /// Switch theme and persist the choice.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        if self.ui.theme == preference {
            return;
        }
        info!(theme = %preference, "Theme changed");
        self.ui.theme = preference;
        let Some(store) = &self.theme_store else {
            return;
        };
        if let Err(err) = store.save(preference) {
            warn!("Failed to persist theme: {err}");
        }
    }
}
