use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{FontWeight, SharedString};

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix("px") else {
                return Err(D::Error::custom("expected string to end with 'px'"));
            };

            string
                .parse::<f32>()
                .map_err(|_| D::Error::custom("could not convert string into pixels"))
        }

        StringOrFloat::Float(pixels) => Ok(pixels),
    }
}

pub fn de_font_weight<'de, D>(deserializer: D) -> Result<FontWeight, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(weight) => Ok(FontWeight(weight)),

        StringOrFloat::String(string) => FontWeight::from_name(&string).ok_or_else(|| {
            D::Error::custom(format!(
                "expected a numeric weight or a weight name like \"bold\", found \"{string}\""
            ))
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
