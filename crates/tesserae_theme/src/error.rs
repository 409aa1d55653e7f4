use thiserror::Error;

use crate::{ColorRole, Rgba, TextRole};

/// A token set that can't be used as a theme.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("no color was provided for the `{0}` role.")]
    MissingColorRole(ColorRole),
    #[error("no typeface was provided for the `{0}` role.")]
    MissingTextRole(TextRole),
    #[error("the `{role}` color {color} has a channel outside of 0..=1.")]
    InvalidColor { role: ColorRole, color: Rgba },
    #[error("the `{role}` typeface is invalid: {reason}.")]
    InvalidTypeface {
        role: TextRole,
        reason: &'static str,
    },
    #[error("no theme named \"{0}\" exists.")]
    UnknownTheme(String),
    #[error("could not parse design tokens: {0}")]
    Parse(#[from] serde_json::Error),
}
