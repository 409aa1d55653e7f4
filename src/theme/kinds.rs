#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use tesserae_theme::{ColorRole, DesignTokens, Rgba};

use crate::ContractViolation;

/// The emphasis of a button, which decides the color pair it's drawn with.
///
/// Use `resolve()` to get the `(foreground, background)` colors from a token set.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn foreground(&self) -> ColorRole)]
#[func(pub fn background(&self) -> ColorRole)]
#[serde(rename_all = "lowercase")]
pub enum ButtonRole {
    /// The main action of a view.
    #[assoc(key = "primary")]
    #[assoc(foreground = ColorRole::OnPrimary)]
    #[assoc(background = ColorRole::Primary)]
    Primary,
    /// An alternative to the main action.
    #[assoc(key = "secondary")]
    #[assoc(foreground = ColorRole::OnSecondary)]
    #[assoc(background = ColorRole::Secondary)]
    Secondary,
    /// Low emphasis actions, such as links.
    #[assoc(key = "tertiary")]
    #[assoc(foreground = ColorRole::OnSurface)]
    #[assoc(background = ColorRole::Surface)]
    Tertiary,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 3] = [
        ButtonRole::Primary,
        ButtonRole::Secondary,
        ButtonRole::Tertiary,
    ];

    pub fn resolve(&self, tokens: &DesignTokens) -> (Rgba, Rgba) {
        (
            tokens.color(self.foreground()),
            tokens.color(self.background()),
        )
    }
}

/// Looks up the `(foreground, background)` colors for `role`.
pub fn resolve_button_colors(role: ButtonRole, tokens: &DesignTokens) -> (Rgba, Rgba) {
    role.resolve(tokens)
}

impl FromStr for ButtonRole {
    type Err = ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| ContractViolation::UnknownButtonRole(s.to_string()))
    }
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use tesserae_theme::{ColorTokens, TextRole, Typeface, TypographyTokens};

    use super::*;

    fn tokens() -> DesignTokens {
        let colors = ColorTokens::builder()
            .set(ColorRole::Primary, Rgba::hex(0x6200ee))
            .set(ColorRole::PrimaryVariant, Rgba::hex(0x3700b3))
            .set(ColorRole::Secondary, Rgba::hex(0x03dac6))
            .set(ColorRole::SecondaryVariant, Rgba::hex(0x018786))
            .set(ColorRole::Background, Rgba::WHITE)
            .set(ColorRole::Surface, Rgba::hex(0xf5f5f5))
            .set(ColorRole::Error, Rgba::hex(0xb00020))
            .set(ColorRole::OnPrimary, Rgba::WHITE)
            .set(ColorRole::OnSecondary, Rgba::BLACK)
            .set(ColorRole::OnBackground, Rgba::BLACK)
            .set(ColorRole::OnSurface, Rgba::hex(0x222222))
            .set(ColorRole::OnError, Rgba::WHITE)
            .build()
            .unwrap();
        let typography = TextRole::ALL
            .into_iter()
            .fold(TypographyTokens::builder(), |builder, role| {
                builder.set(role, Typeface::new("Inter", 14.))
            })
            .build()
            .unwrap();

        DesignTokens::new("test", colors, typography).unwrap()
    }

    #[test]
    fn test_button_role_table() {
        let tokens = tokens();

        assert_eq!(
            resolve_button_colors(ButtonRole::Primary, &tokens),
            (tokens.colors().on_primary, tokens.colors().primary)
        );
        assert_eq!(
            resolve_button_colors(ButtonRole::Secondary, &tokens),
            (tokens.colors().on_secondary, tokens.colors().secondary)
        );
        assert_eq!(
            resolve_button_colors(ButtonRole::Tertiary, &tokens),
            (tokens.colors().on_surface, tokens.colors().surface)
        );
    }

    #[test]
    fn test_tertiary_differs_from_filled_roles() {
        let tokens = tokens();
        let tertiary = resolve_button_colors(ButtonRole::Tertiary, &tokens);

        assert_ne!(tertiary, resolve_button_colors(ButtonRole::Primary, &tokens));
        assert_ne!(tertiary, resolve_button_colors(ButtonRole::Secondary, &tokens));
    }

    #[test]
    fn test_button_role_parsing() {
        for role in ButtonRole::ALL {
            assert_eq!(role.to_string().parse::<ButtonRole>(), Ok(role));
        }

        assert_eq!(
            serde_json::from_str::<ButtonRole>("\"tertiary\"").unwrap(),
            ButtonRole::Tertiary
        );
        assert_eq!(
            "ghost".parse::<ButtonRole>(),
            Err(ContractViolation::UnknownButtonRole("ghost".into()))
        );
    }
}
