use kurbo::{Point, Rect, Size, Vec2};

use crate::foundation::math::map_range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FitMode {
    /// Whole content visible, letterboxed.
    Contain,
    /// Container fully covered, content cropped.
    Cover,
}

/// Centered placement of `content` inside `container`.
pub fn fit_rect(container: Size, content: Size, mode: FitMode) -> Rect {
    fit_rect_scaled(container, content, mode, Vec2::ZERO, 1.0)
}

/// Like [`fit_rect`], then scaled about the container center and shifted by `offset`.
pub fn fit_rect_scaled(
    container: Size,
    content: Size,
    mode: FitMode,
    offset: Vec2,
    scale: f64,
) -> Rect {
    if content.width <= 0.0 || content.height <= 0.0 {
        return Rect::from_center_size(container.to_rect().center() + offset, Size::ZERO);
    }
    let container_aspect = container.width / container.height;
    let content_aspect = content.width / content.height;
    // Contain fits the tighter axis; cover flips that choice.
    let fit_vertical = (container_aspect > content_aspect) ^ (mode == FitMode::Cover);

    let s = if fit_vertical {
        container.height / content.height
    } else {
        container.width / content.width
    } * scale;

    let size = Size::new(content.width * s, content.height * s);
    Rect::from_center_size(container.to_rect().center() + offset, size)
}

/// Map a pointer position on the screen to coordinates on a surface drawn
/// centered with [`FitMode::Contain`].
pub fn map_pointer_to_centered_surface(pointer: Point, screen: Size, surface: Size) -> Point {
    let screen_aspect = screen.width / screen.height;
    let surface_aspect = surface.width / surface.height;
    let fit_vertical = screen_aspect > surface_aspect;

    if fit_vertical {
        let s = screen.height / surface.height;
        let half = surface.width * s / 2.0;
        Point::new(
            map_range(
                (pointer.x - screen.width / 2.0) / half,
                -1.0,
                1.0,
                0.0,
                surface.width,
            ),
            map_range(pointer.y, 0.0, screen.height, 0.0, surface.height),
        )
    } else {
        let s = screen.width / surface.width;
        let half = surface.height * s / 2.0;
        Point::new(
            map_range(pointer.x, 0.0, screen.width, 0.0, surface.width),
            map_range(
                (pointer.y - screen.height / 2.0) / half,
                -1.0,
                1.0,
                0.0,
                surface.height,
            ),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
