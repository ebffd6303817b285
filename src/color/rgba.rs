use serde::{Deserialize, Serialize, Serializer};

use crate::foundation::error::{CatalystError, CatalystResult};

/// Straight (non-premultiplied) sRGB colour stored as 8-bit channel levels.
///
/// Equality is by levels, so two colours parsed from different notations compare
/// equal when their channels match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub levels: [u8; 4],
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            levels: [r, g, b, 255],
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            levels: [r, g, b, a],
        }
    }

    /// Build from unit-range channels, clamping each to `[0, 1]`.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }

    pub fn r(self) -> u8 {
        self.levels[0]
    }

    pub fn g(self) -> u8 {
        self.levels[1]
    }

    pub fn b(self) -> u8 {
        self.levels[2]
    }

    pub fn a(self) -> u8 {
        self.levels[3]
    }

    pub fn to_unit(self) -> [f64; 4] {
        self.levels.map(|l| f64::from(l) / 255.0)
    }

    pub fn from_hex(s: &str) -> CatalystResult<Self> {
        parse_hex(s).map_err(CatalystError::validation)
    }

    /// `#rrggbb` (or `#rrggbbaa` with `with_alpha`), lowercase.
    pub fn to_hex(self, with_alpha: bool) -> String {
        let n = if with_alpha { 4 } else { 3 };
        let mut out = String::with_capacity(1 + n * 2);
        out.push('#');
        for l in &self.levels[..n] {
            out.push_str(&format!("{l:02x}"));
        }
        out
    }

    /// Relative luminance with Rec. 709 weights on the gamma-encoded levels, in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        let [r, g, b, _] = self.to_unit();
        0.2125 * r + 0.7154 * g + 0.0721 * b
    }

    /// Mean of the three colour levels, in `[0, 255]`.
    pub fn value(self) -> f64 {
        (f64::from(self.r()) + f64::from(self.g()) + f64::from(self.b())) / 3.0
    }

    pub fn random(rng: &mut impl rand::Rng) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.levels.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr(Vec<u8>),
            Hex(String),
            Levels { levels: Vec<u8> },
        }

        fn from_levels<E: serde::de::Error>(v: &[u8]) -> Result<Color, E> {
            match *v {
                [r, g, b] => Ok(Color::rgb(r, g, b)),
                [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
                _ => Err(E::custom(
                    "color levels must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            }
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr(v) | Repr::Levels { levels: v } => from_levels(&v),
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Parse a comma separated list of `#RRGGBB` colours, silently dropping malformed items.
pub fn parse_color_list(s: &str) -> Vec<Color> {
    s.split(',')
        .map(str::trim)
        .filter(|item| item.len() == 7 && item.starts_with('#'))
        .filter_map(|item| parse_hex(item).ok())
        .collect()
}

/// Inverse of [`parse_color_list`]: uppercase `#RRGGBB` joined by commas.
pub fn color_list_to_string(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| c.to_hex(false).to_uppercase())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgba.rs"]
mod tests;
