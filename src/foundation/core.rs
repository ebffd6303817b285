use crate::foundation::error::{CatalystError, CatalystResult};

pub use kurbo::{BezPath, Line, Point, Rect, Vec2};

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> CatalystResult<Self> {
        if width == 0 || height == 0 {
            return Err(CatalystError::validation(format!(
                "canvas must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Scale factor relative to a 1920x1080 reference canvas (by area).
    pub fn reference_scale(self) -> f64 {
        (f64::from(self.width) * f64::from(self.height) / (1920.0 * 1080.0)).sqrt()
    }
}

