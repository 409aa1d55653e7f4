use tesserae_theme::{ColorRole, SharedString, TextRole};

use crate::{
    element::{Element, Render, TextElement, vstack},
    theme::{ThemeExt, ThemeHandle},
};

/// A large title with a caption underneath.
///
/// Reads `H1` and `Caption` typography and the `OnBackground` color.
#[derive(Debug, Clone)]
pub struct HeadlineWithCaption {
    theme: ThemeHandle,
    title: SharedString,
    caption: SharedString,
}

impl HeadlineWithCaption {
    pub fn new(
        theme: &ThemeHandle,
        title: impl Into<SharedString>,
        caption: impl Into<SharedString>,
    ) -> Self {
        Self {
            theme: theme.clone(),
            title: title.into(),
            caption: caption.into(),
        }
    }
}

impl ThemeExt for HeadlineWithCaption {
    fn theme_handle(&self) -> ThemeHandle {
        self.theme.clone()
    }
}

impl Render for HeadlineWithCaption {
    fn render(&self) -> Element {
        let tokens = self.get_theme();
        let color = tokens.color(ColorRole::OnBackground);

        vstack()
            .spacing(4.)
            .child(TextElement {
                content: self.title.clone(),
                role: TextRole::H1,
                typeface: tokens.typeface(TextRole::H1).clone(),
                color,
            })
            .child(TextElement {
                content: self.caption.clone(),
                role: TextRole::Caption,
                typeface: tokens.typeface(TextRole::Caption).clone(),
                color,
            })
            .into()
    }
}
