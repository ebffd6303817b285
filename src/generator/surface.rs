use std::path::Path;

use kurbo::{Circle, PathEl, Rect, Shape};

use crate::{
    color::rgba::Color,
    foundation::{
        core::{BezPath, Point},
        error::{CatalystError, CatalystResult},
    },
};

const CIRCLE_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRgba {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 {
                px.copy_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn write_png(&self, path: &Path) -> CatalystResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| CatalystError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// Drawing target for a generator.
pub trait RenderSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn background(&mut self, color: Color);
    fn fill_path(&mut self, path: &BezPath, color: Color);

    fn fill_circle(&mut self, center: Point, diameter: f64, color: Color) {
        let path = Circle::new(center, diameter * 0.5).to_path(CIRCLE_TOLERANCE);
        self.fill_path(&path, color);
    }
}

/// CPU raster surface backed by `vello_cpu`.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> CatalystResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| CatalystError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| CatalystError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(CatalystError::render("surface must be at least 1x1"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
        })
    }

    /// Rasterize everything drawn so far (premultiplied RGBA8).
    pub fn into_frame(mut self) -> FrameRgba {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_color(&mut self, color: Color) {
        let [r, g, b, a] = color.levels;
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }
}

impl RenderSurface for CpuSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn background(&mut self, color: Color) {
        let rect = Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.fill_path(&rect.to_path(CIRCLE_TOLERANCE), color);
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/generator/surface.rs"]
mod tests;
