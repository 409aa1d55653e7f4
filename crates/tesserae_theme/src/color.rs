use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

/// A color with straight (non-premultiplied) alpha, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0., 0., 0., 1.);
    pub const WHITE: Rgba = Rgba::new(1., 1., 1., 1.);
    pub const RED: Rgba = Rgba::new(1., 0., 0., 1.);
    pub const TRANSPARENT: Rgba = Rgba::new(0., 0., 0., 0.);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` value.
    pub fn hex(hex: u32) -> Self {
        rgb_a(hex, 1.)
    }

    /// Returns a new color with the specified alpha value.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|channel| channel.is_finite() && (0.0..=1.0).contains(channel))
    }

    fn parse_hex(string: &str) -> Option<Self> {
        let digits = string.strip_prefix('#')?;

        if !digits.bytes().all(|digit| digit.is_ascii_hexdigit()) {
            return None;
        }

        let value = u32::from_str_radix(digits, 16).ok()?;

        match digits.len() {
            6 => Some(rgb_a(value, 1.)),
            8 => Some(rgb_a(value >> 8, (value & 0xff) as f32 / 255.)),
            _ => None,
        }
    }
}

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(|c| (c * 255.).round() as u8);

        if a == u8::MAX {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum HexOrChannels {
            Hex(String),
            Channels {
                r: f32,
                g: f32,
                b: f32,
                #[serde(default = "opaque")]
                a: f32,
            },
        }

        fn opaque() -> f32 {
            1.
        }

        match HexOrChannels::deserialize(deserializer)? {
            HexOrChannels::Hex(string) => Rgba::parse_hex(&string).ok_or_else(|| {
                D::Error::custom(format!(
                    "expected a color like \"#rrggbb\" or \"#rrggbbaa\", found \"{string}\""
                ))
            }),
            HexOrChannels::Channels { r, g, b, a } => Ok(Rgba { r, g, b, a }),
        }
    }
}
