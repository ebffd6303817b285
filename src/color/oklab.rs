//! OKLab conversions and perceptual interpolation.
//!
//! Reference: <https://bottosson.github.io/posts/oklab/>

use crate::{color::rgba::Color, foundation::math::lerp};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

fn srgb_to_linear(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

impl OkLab {
    /// From gamma-encoded sRGB channels in `[0, 1]`.
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let (r, g, b) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let (l_, m_, s_) = (l.cbrt(), m.cbrt(), s.cbrt());

        Self {
            l: 0.210_454_255_3 * l_ + 0.793_617_785 * m_ - 0.004_072_046_8 * s_,
            a: 1.977_998_495_1 * l_ - 2.428_592_205 * m_ + 0.450_593_709_9 * s_,
            b: 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766 * s_,
        }
    }

    /// Back to gamma-encoded sRGB, unclamped.
    pub fn to_srgb(self) -> [f64; 3] {
        let l_ = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m_ = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s_ = self.l - 0.089_484_177_5 * self.a - 1.291_485_548 * self.b;

        let (l, m, s) = (l_.powi(3), m_.powi(3), s_.powi(3));

        let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
        let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701 * s;

        [linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b)]
    }

    pub fn from_color(c: Color) -> Self {
        let [r, g, b, _] = c.to_unit();
        Self::from_srgb(r, g, b)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            l: lerp(self.l, other.l, t),
            a: lerp(self.a, other.a, t),
            b: lerp(self.b, other.b, t),
        }
    }
}

/// Interpolate two colours through OKLab. The result is opaque; channels are clamped.
pub fn lerp_color_oklab(c1: Color, c2: Color, t: f64) -> Color {
    let lab = OkLab::from_color(c1).lerp(OkLab::from_color(c2), t);
    let [r, g, b] = lab.to_srgb();
    Color::from_unit(r, g, b, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/color/oklab.rs"]
mod tests;
