use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ColorRole, ConfigurationError, Rgba, SharedString, TextRole, Typeface};

/// A value for every [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorTokens {
    pub primary: Rgba,
    pub primary_variant: Rgba,
    pub secondary: Rgba,
    pub secondary_variant: Rgba,
    pub background: Rgba,
    pub surface: Rgba,
    pub error: Rgba,
    pub on_primary: Rgba,
    pub on_secondary: Rgba,
    pub on_background: Rgba,
    pub on_surface: Rgba,
    pub on_error: Rgba,
}

impl ColorTokens {
    pub fn builder() -> ColorTokensBuilder {
        ColorTokensBuilder::default()
    }

    pub fn get(&self, role: ColorRole) -> Rgba {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryVariant => self.primary_variant,
            ColorRole::Secondary => self.secondary,
            ColorRole::SecondaryVariant => self.secondary_variant,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Error => self.error,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::OnBackground => self.on_background,
            ColorRole::OnSurface => self.on_surface,
            ColorRole::OnError => self.on_error,
        }
    }

    pub(crate) fn get_mut(&mut self, role: ColorRole) -> &mut Rgba {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::PrimaryVariant => &mut self.primary_variant,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::SecondaryVariant => &mut self.secondary_variant,
            ColorRole::Background => &mut self.background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::Error => &mut self.error,
            ColorRole::OnPrimary => &mut self.on_primary,
            ColorRole::OnSecondary => &mut self.on_secondary,
            ColorRole::OnBackground => &mut self.on_background,
            ColorRole::OnSurface => &mut self.on_surface,
            ColorRole::OnError => &mut self.on_error,
        }
    }

    /// Every role paired with its color, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Rgba)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self.iter().find(|(_, color)| !color.is_valid()) {
            Some((role, color)) => Err(ConfigurationError::InvalidColor { role, color }),
            None => Ok(()),
        }
    }
}

/// A [`Typeface`] for every [`TextRole`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypographyTokens {
    pub h1: Typeface,
    pub h2: Typeface,
    pub h3: Typeface,
    pub h4: Typeface,
    pub h5: Typeface,
    pub h6: Typeface,
    pub subtitle1: Typeface,
    pub subtitle2: Typeface,
    pub body1: Typeface,
    pub body2: Typeface,
    pub button: Typeface,
    pub caption: Typeface,
    pub overline: Typeface,
}

impl TypographyTokens {
    pub fn builder() -> TypographyTokensBuilder {
        TypographyTokensBuilder::default()
    }

    pub fn get(&self, role: TextRole) -> &Typeface {
        match role {
            TextRole::H1 => &self.h1,
            TextRole::H2 => &self.h2,
            TextRole::H3 => &self.h3,
            TextRole::H4 => &self.h4,
            TextRole::H5 => &self.h5,
            TextRole::H6 => &self.h6,
            TextRole::Subtitle1 => &self.subtitle1,
            TextRole::Subtitle2 => &self.subtitle2,
            TextRole::Body1 => &self.body1,
            TextRole::Body2 => &self.body2,
            TextRole::Button => &self.button,
            TextRole::Caption => &self.caption,
            TextRole::Overline => &self.overline,
        }
    }

    pub(crate) fn get_mut(&mut self, role: TextRole) -> &mut Typeface {
        match role {
            TextRole::H1 => &mut self.h1,
            TextRole::H2 => &mut self.h2,
            TextRole::H3 => &mut self.h3,
            TextRole::H4 => &mut self.h4,
            TextRole::H5 => &mut self.h5,
            TextRole::H6 => &mut self.h6,
            TextRole::Subtitle1 => &mut self.subtitle1,
            TextRole::Subtitle2 => &mut self.subtitle2,
            TextRole::Body1 => &mut self.body1,
            TextRole::Body2 => &mut self.body2,
            TextRole::Button => &mut self.button,
            TextRole::Caption => &mut self.caption,
            TextRole::Overline => &mut self.overline,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextRole, &Typeface)> + '_ {
        TextRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (role, typeface) in self.iter() {
            if let Some(reason) = typeface.problem() {
                return Err(ConfigurationError::InvalidTypeface { role, reason });
            }
        }

        Ok(())
    }
}

/// One complete theme: colors and typography.
///
/// Every way of getting a token set validates it, so a `DesignTokens` value
/// is always usable. Sets are never edited in place. The `with_*` and
/// [`merged`](Self::merged) methods return new sets, sharing whichever half
/// didn't change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDesignTokens")]
pub struct DesignTokens {
    pub(crate) name: SharedString,
    pub(crate) colors: Arc<ColorTokens>,
    pub(crate) typography: Arc<TypographyTokens>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UncheckedDesignTokens {
    name: SharedString,
    colors: ColorTokens,
    typography: TypographyTokens,
}

impl TryFrom<UncheckedDesignTokens> for DesignTokens {
    type Error = ConfigurationError;

    fn try_from(unchecked: UncheckedDesignTokens) -> Result<Self, Self::Error> {
        DesignTokens::new(unchecked.name, unchecked.colors, unchecked.typography)
    }
}

impl DesignTokens {
    /// Builds a validated token set.
    pub fn new(
        name: impl Into<SharedString>,
        colors: ColorTokens,
        typography: TypographyTokens,
    ) -> Result<Self, ConfigurationError> {
        let tokens = Self {
            name: name.into(),
            colors: Arc::new(colors),
            typography: Arc::new(typography),
        };
        tokens.validate()?;

        Ok(tokens)
    }

    /// Parses and validates a token set. Unlike deserializing a `DesignTokens`
    /// directly, invalid values come back as their own error variant rather
    /// than as [`ConfigurationError::Parse`].
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ConfigurationError> {
        let unchecked: UncheckedDesignTokens = serde_json::from_str(str.as_ref())?;
        unchecked.try_into()
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.colors.validate()?;
        self.typography.validate()
    }

    pub fn name(&self) -> &SharedString {
        &self.name
    }

    pub fn colors(&self) -> &Arc<ColorTokens> {
        &self.colors
    }

    pub fn typography(&self) -> &Arc<TypographyTokens> {
        &self.typography
    }

    pub fn color(&self, role: ColorRole) -> Rgba {
        self.colors.get(role)
    }

    pub fn typeface(&self, role: TextRole) -> &Typeface {
        self.typography.get(role)
    }

    pub fn named(&self, name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a new set with the colors replaced and the typography kept.
    pub fn with_colors(&self, colors: ColorTokens) -> Result<Self, ConfigurationError> {
        colors.validate()?;

        Ok(Self {
            name: self.name.clone(),
            colors: Arc::new(colors),
            typography: self.typography.clone(),
        })
    }

    /// Returns a new set with the typography replaced and the colors kept.
    pub fn with_typography(&self, typography: TypographyTokens) -> Result<Self, ConfigurationError> {
        typography.validate()?;

        Ok(Self {
            name: self.name.clone(),
            colors: self.colors.clone(),
            typography: Arc::new(typography),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorTokensBuilder {
    values: IndexMap<ColorRole, Rgba>,
}

impl ColorTokensBuilder {
    pub fn set(mut self, role: ColorRole, color: Rgba) -> Self {
        self.values.insert(role, color);
        self
    }

    /// Fills every role that hasn't been set yet from `base`.
    pub fn base(mut self, base: &ColorTokens) -> Self {
        for (role, color) in base.iter() {
            self.values.entry(role).or_insert(color);
        }
        self
    }

    pub fn build(self) -> Result<ColorTokens, ConfigurationError> {
        let get = |role: ColorRole| {
            self.values
                .get(&role)
                .copied()
                .ok_or(ConfigurationError::MissingColorRole(role))
        };

        let colors = ColorTokens {
            primary: get(ColorRole::Primary)?,
            primary_variant: get(ColorRole::PrimaryVariant)?,
            secondary: get(ColorRole::Secondary)?,
            secondary_variant: get(ColorRole::SecondaryVariant)?,
            background: get(ColorRole::Background)?,
            surface: get(ColorRole::Surface)?,
            error: get(ColorRole::Error)?,
            on_primary: get(ColorRole::OnPrimary)?,
            on_secondary: get(ColorRole::OnSecondary)?,
            on_background: get(ColorRole::OnBackground)?,
            on_surface: get(ColorRole::OnSurface)?,
            on_error: get(ColorRole::OnError)?,
        };
        colors.validate()?;

        Ok(colors)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypographyTokensBuilder {
    values: IndexMap<TextRole, Typeface>,
}

impl TypographyTokensBuilder {
    pub fn set(mut self, role: TextRole, typeface: Typeface) -> Self {
        self.values.insert(role, typeface);
        self
    }

    pub fn base(mut self, base: &TypographyTokens) -> Self {
        for (role, typeface) in base.iter() {
            self.values.entry(role).or_insert_with(|| typeface.clone());
        }
        self
    }

    pub fn build(mut self) -> Result<TypographyTokens, ConfigurationError> {
        let mut take = |role: TextRole| {
            self.values
                .swap_remove(&role)
                .ok_or(ConfigurationError::MissingTextRole(role))
        };

        let typography = TypographyTokens {
            h1: take(TextRole::H1)?,
            h2: take(TextRole::H2)?,
            h3: take(TextRole::H3)?,
            h4: take(TextRole::H4)?,
            h5: take(TextRole::H5)?,
            h6: take(TextRole::H6)?,
            subtitle1: take(TextRole::Subtitle1)?,
            subtitle2: take(TextRole::Subtitle2)?,
            body1: take(TextRole::Body1)?,
            body2: take(TextRole::Body2)?,
            button: take(TextRole::Button)?,
            caption: take(TextRole::Caption)?,
            overline: take(TextRole::Overline)?,
        };
        typography.validate()?;

        Ok(typography)
    }
}
