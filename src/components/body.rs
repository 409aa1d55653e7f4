use tesserae_theme::{ColorRole, SharedString, TextRole};

use crate::{
    element::{Element, Render, TextElement},
    theme::{ThemeExt, ThemeHandle},
};

/// Running text in one of the text roles, `Body1` unless told otherwise.
#[derive(Debug, Clone)]
pub struct Body {
    theme: ThemeHandle,
    text: SharedString,
    role: TextRole,
}

impl Body {
    pub fn new(theme: &ThemeHandle, text: impl Into<SharedString>) -> Self {
        Self {
            theme: theme.clone(),
            text: text.into(),
            role: TextRole::Body1,
        }
    }

    pub fn role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }
}

impl ThemeExt for Body {
    fn theme_handle(&self) -> ThemeHandle {
        self.theme.clone()
    }
}

impl Render for Body {
    fn render(&self) -> Element {
        let tokens = self.get_theme();

        TextElement {
            content: self.text.clone(),
            role: self.role,
            typeface: tokens.typeface(self.role).clone(),
            color: tokens.color(ColorRole::OnBackground),
        }
        .into()
    }
}
