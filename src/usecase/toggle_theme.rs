// src/usecase/toggle_theme.rs

use tracing::info;

use crate::domain::error::StorageError;
use crate::domain::model::theme::Theme;
use crate::repository::local_state::PreferenceStore;

/// Current theme plus the durable store it is persisted to.
pub struct ThemeState {
    store: PreferenceStore,
    theme: Theme,
}

impl ThemeState {
    pub fn load(store: PreferenceStore) -> Result<Self, StorageError> {
        let theme = store.get()?;
        Ok(Self { store, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn set(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(theme)?;
        self.theme = theme;
        info!(%theme, "theme changed");
        Ok(())
    }

    /// Flips dark/light and persists the result.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}
