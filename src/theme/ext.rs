use std::sync::Arc;

use tesserae_theme::{ColorRole, DesignTokens, Rgba, TextRole, Typeface};

use crate::theme::{ThemeHandle, ThemeStore};

/// Extension trait for reading the active theme from anything wired to a store.
pub trait ThemeExt {
    fn theme_handle(&self) -> ThemeHandle;

    /// Gets the tokens that are active right now.
    fn get_theme(&self) -> Arc<DesignTokens> {
        self.theme_handle().current()
    }

    fn color(&self, role: ColorRole) -> Rgba {
        self.get_theme().color(role)
    }

    fn typeface(&self, role: TextRole) -> Typeface {
        self.get_theme().typeface(role).clone()
    }
}

impl ThemeExt for ThemeStore {
    fn theme_handle(&self) -> ThemeHandle {
        self.handle()
    }
}

impl ThemeExt for ThemeHandle {
    fn theme_handle(&self) -> ThemeHandle {
        self.clone()
    }

    fn get_theme(&self) -> Arc<DesignTokens> {
        self.current()
    }
}
