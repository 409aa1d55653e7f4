//! Theme propagation: a store holding the active design tokens, and the
//! semantic role tables components read them through.
//!
//! Replacing the tokens in a [`ThemeStore`] notifies every subscriber in
//! registration order. Components re-read the store on each render, so a
//! theme switch never requires rebuilding the tree.

use cfg_if::cfg_if;

mod catalog;
pub use catalog::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod store;
pub use store::*;

pub use tesserae_theme::{
    ColorRole, ColorTokens, ConfigurationError, DesignTokens, DesignTokensPatch, FontStyle,
    FontWeight, Rgba, TextRole, Typeface, TypographyTokens, rgb_a,
};

cfg_if!(
    if #[cfg(feature = "builtin-themes")] {
        pub use tesserae_theme::{DARK, LIGHT};

        impl Default for ThemeStore {
            fn default() -> Self {
                ThemeStore::new(LIGHT.clone())
            }
        }
    }
);
