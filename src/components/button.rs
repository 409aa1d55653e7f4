use tesserae_theme::{SharedString, TextRole};

use crate::{
    ContractViolation,
    element::{ButtonElement, Element, Render},
    theme::{ButtonRole, ThemeExt, ThemeHandle},
};

/// A labelled action, colored by its [`ButtonRole`].
///
/// Reads `Button` typography plus the color pair of its role.
#[derive(Debug, Clone)]
pub struct Button {
    theme: ThemeHandle,
    label: SharedString,
    role: ButtonRole,
}

impl Button {
    pub fn new(theme: &ThemeHandle) -> Self {
        Self {
            theme: theme.clone(),
            label: SharedString::from("Button"),
            role: ButtonRole::Primary,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    pub fn role(mut self, role: ButtonRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the role from its name, failing for anything but
    /// `primary`, `secondary` or `tertiary`.
    pub fn role_named(self, role: &str) -> Result<Self, ContractViolation> {
        Ok(self.role(role.parse()?))
    }

    pub fn get_role(&self) -> ButtonRole {
        self.role
    }
}

impl ThemeExt for Button {
    fn theme_handle(&self) -> ThemeHandle {
        self.theme.clone()
    }
}

impl Render for Button {
    fn render(&self) -> Element {
        let tokens = self.get_theme();
        let (foreground, background) = self.role.resolve(&tokens);

        ButtonElement {
            label: self.label.clone(),
            role: self.role,
            typeface: tokens.typeface(TextRole::Button).clone(),
            foreground,
            background,
        }
        .into()
    }
}
