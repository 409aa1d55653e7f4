use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    SharedString,
    deserializers::{de_font_weight, de_pixels, de_string_or_non_empty_list},
};

/// The thickness of a typeface, on the CSS `1..=1000` scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub f32);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100.);
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200.);
    pub const LIGHT: FontWeight = FontWeight(300.);
    pub const NORMAL: FontWeight = FontWeight(400.);
    pub const MEDIUM: FontWeight = FontWeight(500.);
    pub const SEMIBOLD: FontWeight = FontWeight(600.);
    pub const BOLD: FontWeight = FontWeight(700.);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800.);
    pub const BLACK: FontWeight = FontWeight(900.);

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "thin" => Self::THIN,
            "extra_light" | "extralight" => Self::EXTRA_LIGHT,
            "light" => Self::LIGHT,
            "normal" | "regular" => Self::NORMAL,
            "medium" => Self::MEDIUM,
            "semibold" => Self::SEMIBOLD,
            "bold" => Self::BOLD,
            "extra_bold" | "extrabold" => Self::EXTRA_BOLD,
            "black" | "heavy" => Self::BLACK,
            _ => return None,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && (1.0..=1000.0).contains(&self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// How one semantic text role is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Typeface {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_pixels")]
    pub size: f32,
    #[serde(default, deserialize_with = "de_font_weight")]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
}

impl Typeface {
    pub fn new(family: impl Into<SharedString>, size: f32) -> Self {
        Self {
            family: SmallVec::from_buf([family.into()]),
            size,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Appends a fallback family.
    pub fn fallback(mut self, family: impl Into<SharedString>) -> Self {
        self.family.push(family.into());
        self
    }

    pub fn primary_family(&self) -> Option<&SharedString> {
        self.family.first()
    }

    /// Describes why this typeface can't be used, if it can't.
    pub(crate) fn problem(&self) -> Option<&'static str> {
        if self.family.is_empty() || self.family.iter().any(|family| family.trim().is_empty()) {
            Some("font family can't be empty")
        } else if !(self.size.is_finite() && self.size > 0.) {
            Some("size must be a positive number of pixels")
        } else if !self.weight.is_valid() {
            Some("weight must be between 1 and 1000")
        } else {
            None
        }
    }
}
