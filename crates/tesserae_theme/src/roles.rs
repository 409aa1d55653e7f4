#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

/// Semantic color roles. Every token set resolves all of them.
///
/// The `On*` roles are foreground colors meant to sit on top of their
/// counterpart (`OnPrimary` text on a `Primary` fill, and so on).
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[func(pub fn key(&self) -> &'static str)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    #[assoc(key = "primary")]
    Primary,
    #[assoc(key = "primaryVariant")]
    PrimaryVariant,
    #[assoc(key = "secondary")]
    Secondary,
    #[assoc(key = "secondaryVariant")]
    SecondaryVariant,
    #[assoc(key = "background")]
    Background,
    #[assoc(key = "surface")]
    Surface,
    #[assoc(key = "error")]
    Error,
    #[assoc(key = "onPrimary")]
    OnPrimary,
    #[assoc(key = "onSecondary")]
    OnSecondary,
    #[assoc(key = "onBackground")]
    OnBackground,
    #[assoc(key = "onSurface")]
    OnSurface,
    #[assoc(key = "onError")]
    OnError,
}

impl ColorRole {
    /// Every color role, in canonical order.
    pub const ALL: [ColorRole; 12] = [
        ColorRole::Primary,
        ColorRole::PrimaryVariant,
        ColorRole::Secondary,
        ColorRole::SecondaryVariant,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Error,
        ColorRole::OnPrimary,
        ColorRole::OnSecondary,
        ColorRole::OnBackground,
        ColorRole::OnSurface,
        ColorRole::OnError,
    ];
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Semantic text roles, from the largest heading down to overline labels.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[func(pub fn key(&self) -> &'static str)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    #[assoc(key = "h1")]
    H1,
    #[assoc(key = "h2")]
    H2,
    #[assoc(key = "h3")]
    H3,
    #[assoc(key = "h4")]
    H4,
    #[assoc(key = "h5")]
    H5,
    #[assoc(key = "h6")]
    H6,
    #[assoc(key = "subtitle1")]
    Subtitle1,
    #[assoc(key = "subtitle2")]
    Subtitle2,
    #[assoc(key = "body1")]
    Body1,
    #[assoc(key = "body2")]
    Body2,
    #[assoc(key = "button")]
    Button,
    #[assoc(key = "caption")]
    Caption,
    #[assoc(key = "overline")]
    Overline,
}

impl TextRole {
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            TextRole::H1
                | TextRole::H2
                | TextRole::H3
                | TextRole::H4
                | TextRole::H5
                | TextRole::H6
        )
    }

    /// Every text role, in canonical order.
    pub const ALL: [TextRole; 13] = [
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::H4,
        TextRole::H5,
        TextRole::H6,
        TextRole::Subtitle1,
        TextRole::Subtitle2,
        TextRole::Body1,
        TextRole::Body2,
        TextRole::Button,
        TextRole::Caption,
        TextRole::Overline,
    ];
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for role in ColorRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.key()));
        }

        for role in TextRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.key()));
        }
    }

    #[test]
    fn test_only_h_roles_are_headings() {
        let headings: Vec<_> = TextRole::ALL
            .into_iter()
            .filter(TextRole::is_heading)
            .collect();

        assert_eq!(
            headings,
            [
                TextRole::H1,
                TextRole::H2,
                TextRole::H3,
                TextRole::H4,
                TextRole::H5,
                TextRole::H6
            ]
        );
    }
}
