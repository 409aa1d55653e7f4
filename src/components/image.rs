use tesserae_theme::{ColorRole, SharedString};

use crate::{
    element::{Element, ImageElement, Render},
    theme::{ThemeExt, ThemeHandle},
};

/// A reference to an image, drawn over the `Surface` color while it loads.
#[derive(Debug, Clone)]
pub struct ImagePlaceholder {
    theme: ThemeHandle,
    source: SharedString,
}

impl ImagePlaceholder {
    pub fn new(theme: &ThemeHandle, source: impl Into<SharedString>) -> Self {
        Self {
            theme: theme.clone(),
            source: source.into(),
        }
    }
}

impl ThemeExt for ImagePlaceholder {
    fn theme_handle(&self) -> ThemeHandle {
        self.theme.clone()
    }
}

impl Render for ImagePlaceholder {
    fn render(&self) -> Element {
        ImageElement {
            source: self.source.clone(),
            background: self.color(ColorRole::Surface),
        }
        .into()
    }
}
