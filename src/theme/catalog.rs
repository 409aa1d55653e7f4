use indexmap::IndexMap;
use tesserae_theme::{ConfigurationError, DesignTokens, SharedString};
use tracing::debug;

use crate::theme::{ReplaceReport, ThemeStore};

/// An ordered set of named token sets that a store can switch between.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    themes: IndexMap<SharedString, DesignTokens>,
}

impl ThemeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tokens` under their own name, replacing any set with the same name.
    pub fn insert(&mut self, tokens: DesignTokens) {
        self.themes.insert(tokens.name().clone(), tokens);
    }

    pub fn with(mut self, tokens: DesignTokens) -> Self {
        self.insert(tokens);
        self
    }

    /// Loads a catalog from a JSON list of token sets. Each set is validated
    /// as it's parsed.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ConfigurationError> {
        let sets: Vec<DesignTokens> = serde_json::from_str(str.as_ref())?;

        Ok(sets.into_iter().fold(Self::new(), Self::with))
    }

    pub fn get(&self, name: &str) -> Option<&DesignTokens> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &SharedString> {
        self.themes.keys()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Replaces the store's tokens with the set called `name`.
    pub fn switch(
        &self,
        store: &ThemeStore,
        name: &str,
    ) -> Result<ReplaceReport, ConfigurationError> {
        let tokens = self
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownTheme(name.to_string()))?;

        debug!(theme = name, "switching theme");
        Ok(store.replace(tokens.clone()))
    }

    /// Switches to the set after the store's current one, wrapping around.
    ///
    /// Starts from the first set if the current one isn't in the catalog.
    /// Returns `None` when the catalog is empty.
    pub fn cycle(&self, store: &ThemeStore) -> Option<ReplaceReport> {
        let next = match self.themes.get_index_of(store.current().name().as_ref()) {
            Some(index) => (index + 1) % self.themes.len(),
            None => 0,
        };
        let (name, tokens) = self.themes.get_index(next)?;

        debug!(theme = %name, "cycling theme");
        Some(store.replace(tokens.clone()))
    }
}

#[cfg(feature = "builtin-themes")]
impl ThemeCatalog {
    /// The bundled light and dark token sets.
    pub fn builtin() -> Self {
        Self::new()
            .with(tesserae_theme::LIGHT.clone())
            .with(tesserae_theme::DARK.clone())
    }
}

#[cfg(test)]
mod tests {
    use tesserae_theme::{ColorRole, ColorTokens, Rgba, TextRole, Typeface, TypographyTokens};

    use super::*;

    fn tokens(name: &str, color: Rgba) -> DesignTokens {
        let colors = ColorRole::ALL
            .into_iter()
            .fold(ColorTokens::builder(), |builder, role| builder.set(role, color))
            .build()
            .unwrap();
        let typography = TextRole::ALL
            .into_iter()
            .fold(TypographyTokens::builder(), |builder, role| {
                builder.set(role, Typeface::new("Inter", 14.))
            })
            .build()
            .unwrap();

        DesignTokens::new(name, colors, typography).unwrap()
    }

    fn catalog() -> ThemeCatalog {
        ThemeCatalog::new()
            .with(tokens("black", Rgba::BLACK))
            .with(tokens("red", Rgba::RED))
            .with(tokens("white", Rgba::WHITE))
    }

    #[test]
    fn test_switch_by_name() {
        let catalog = catalog();
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));

        let _ = catalog.switch(&store, "red").unwrap();
        assert_eq!(store.current().color(ColorRole::Primary), Rgba::RED);

        let error = catalog.switch(&store, "sepia").unwrap_err();
        assert!(matches!(error, ConfigurationError::UnknownTheme(name) if name == "sepia"));
        assert_eq!(store.current().name().as_ref(), "red");
    }

    #[test]
    fn test_cycle_wraps_around() {
        let catalog = catalog();
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));

        let visited: Vec<String> = (0..4)
            .map(|_| {
                let _ = catalog.cycle(&store).unwrap();
                store.current().name().to_string()
            })
            .collect();

        assert_eq!(visited, ["red", "white", "black", "red"]);
        assert_eq!(catalog.names().count(), 3);
    }

    #[test]
    fn test_cycle_from_unknown_theme_starts_at_first() {
        let catalog = catalog();
        let store = ThemeStore::new(tokens("custom", Rgba::hex(0x336699)));

        let _ = catalog.cycle(&store).unwrap();
        assert_eq!(store.current().name().as_ref(), "black");

        assert!(ThemeCatalog::new().cycle(&store).is_none());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = serde_json::to_string(&[tokens("black", Rgba::BLACK), tokens("red", Rgba::RED)])
            .unwrap();
        let catalog = ThemeCatalog::from_json(&json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("red").unwrap().color(ColorRole::Surface), Rgba::RED);

        let invalid = json.replace("#ff0000", "#ff00");
        assert!(matches!(
            ThemeCatalog::from_json(&invalid),
            Err(ConfigurationError::Parse(_))
        ));

        let mut sets: serde_json::Value = serde_json::from_str(&json).unwrap();
        sets[1]["typography"]["h1"]["size"] = serde_json::json!(-4);
        assert!(ThemeCatalog::from_json(sets.to_string()).is_err());
    }

    #[cfg(feature = "builtin-themes")]
    #[test]
    fn test_builtin_catalog() {
        let catalog = ThemeCatalog::builtin();
        let names: Vec<&str> = catalog.names().map(|name| name.as_ref()).collect();

        assert_eq!(names, ["Light", "Dark"]);
    }
}
