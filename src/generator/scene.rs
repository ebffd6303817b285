use crate::{
    color::rgba::Color,
    foundation::{
        core::{Point, Vec2},
        error::CatalystResult,
    },
    generator::{
        surface::{CpuSurface, FrameRgba, RenderSurface},
        timeline::Timeline,
    },
};

/// Animated drawing driven by GUI values.
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    palette: Vec<Color>,
    color: Color,
    accents: Vec<Color>,
    speed: f64,
    offset: Vec2,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub const NAME: &'static str = "Catalyst Generator";

    pub fn new() -> Self {
        let palette = vec![
            Color::rgb(0x76, 0x85, 0xf7),
            Color::rgb(0xbf, 0xfb, 0x50),
            Color::BLACK,
            Color::WHITE,
        ];
        Self {
            color: palette[0],
            palette,
            accents: Vec::new(),
            speed: 1.0,
            offset: Vec2::ZERO,
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn accents(&self) -> &[Color] {
        &self.accents
    }

    pub fn set_accents(&mut self, accents: Vec<Color>) {
        self.accents = accents;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Normalized `[-1, 1]` shift, a quarter of the canvas per unit.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset = Vec2::new(x, y);
    }

    /// Lowercased, dash-joined [`Generator::NAME`].
    pub fn slug() -> String {
        Self::NAME
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn output_file_name(tag: &str) -> String {
        format!("{}_{tag}", Self::slug())
    }

    /// Centre of the main circle at scene time `t`.
    pub fn position(&self, width: f64, height: f64, t: f64) -> Point {
        let t = t * self.speed;
        Point::new(
            width / 2.0 + t.sin() * 100.0 + self.offset.x * width / 4.0,
            height / 2.0 + (t * 0.7).cos() * 50.0 + self.offset.y * height / 4.0,
        )
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface, t: f64) {
        let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
        let diameter = w.min(h) / 10.0;
        let center = self.position(w, h, t);

        surface.background(Color::WHITE);
        let n = self.accents.len() as f64;
        for (i, accent) in self.accents.iter().enumerate() {
            let angle = t * self.speed + std::f64::consts::TAU * i as f64 / n;
            let orbit = Point::new(
                center.x + angle.cos() * diameter,
                center.y + angle.sin() * diameter,
            );
            surface.fill_circle(orbit, diameter * 0.3, *accent);
        }
        surface.fill_circle(center, diameter, self.color);
    }

    #[tracing::instrument(skip(self, timeline))]
    pub fn render_frame(
        &self,
        width: u32,
        height: u32,
        frame: u64,
        timeline: &Timeline,
    ) -> CatalystResult<FrameRgba> {
        let mut surface = CpuSurface::new(width, height)?;
        self.draw(&mut surface, timeline.time(frame));
        Ok(surface.into_frame())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generator/scene.rs"]
mod tests;
