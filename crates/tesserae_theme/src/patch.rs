use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    ColorRole, ColorTokens, ConfigurationError, DesignTokens, Rgba, SharedString, TextRole,
    Typeface, TypographyTokens,
};

/// A partial set of design tokens.
///
/// A patch never stands alone: it's merged over a complete [`DesignTokens`],
/// so every role that the patch leaves out keeps its previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignTokensPatch {
    pub name: Option<SharedString>,
    pub colors: IndexMap<ColorRole, Rgba>,
    pub typography: IndexMap<TextRole, Typeface>,
}

impl DesignTokensPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn name(mut self, name: impl Into<SharedString>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, role: ColorRole, color: Rgba) -> Self {
        self.colors.insert(role, color);
        self
    }

    pub fn typeface(mut self, role: TextRole, typeface: Typeface) -> Self {
        self.typography.insert(role, typeface);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.colors.is_empty() && self.typography.is_empty()
    }
}

impl DesignTokens {
    /// Returns a new set with `patch` applied over this one.
    ///
    /// Halves the patch doesn't touch are shared with `self`.
    pub fn merged(&self, patch: &DesignTokensPatch) -> Result<Self, ConfigurationError> {
        let colors = if patch.colors.is_empty() {
            self.colors.clone()
        } else {
            Arc::new(merge_colors(&self.colors, &patch.colors)?)
        };

        let typography = if patch.typography.is_empty() {
            self.typography.clone()
        } else {
            Arc::new(merge_typography(&self.typography, &patch.typography)?)
        };

        Ok(Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            colors,
            typography,
        })
    }
}

fn merge_colors(
    base: &ColorTokens,
    patch: &IndexMap<ColorRole, Rgba>,
) -> Result<ColorTokens, ConfigurationError> {
    let mut colors = base.clone();

    for (role, color) in patch {
        *colors.get_mut(*role) = *color;
    }
    colors.validate()?;

    Ok(colors)
}

fn merge_typography(
    base: &TypographyTokens,
    patch: &IndexMap<TextRole, Typeface>,
) -> Result<TypographyTokens, ConfigurationError> {
    let mut typography = base.clone();

    for (role, typeface) in patch {
        *typography.get_mut(*role) = typeface.clone();
    }
    typography.validate()?;

    Ok(typography)
}
