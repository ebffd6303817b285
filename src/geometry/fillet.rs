use kurbo::{BezPath, Line, Point, Vec2};

/// Control points of the cubic that approximates a circular fillet from `start` to `end`
/// around `center`.
///
/// Returns `None` when `start`, `end` and `center` are collinear.
pub fn bezier_fillet_control_points(start: Point, end: Point, center: Point) -> Option<(Point, Point)> {
    let a = start - center;
    let b = end - center;
    let q1 = a.dot(a);
    let q2 = q1 + a.dot(b);
    let cross = a.cross(b);
    if cross == 0.0 {
        return None;
    }
    let k2 = (4.0 / 3.0) * ((2.0 * q1 * q2).sqrt() - q2) / cross;

    let cp1 = center + a + Vec2::new(-a.y, a.x) * k2;
    let cp2 = center + b + Vec2::new(b.y, -b.x) * k2;
    Some((cp1, cp2))
}

/// Append a fillet curve to `path`, which must currently end at `start`.
/// Degenerate (collinear) fillets fall back to a straight segment.
pub fn append_fillet(path: &mut BezPath, start: Point, end: Point, center: Point) {
    match bezier_fillet_control_points(start, end, center) {
        Some((cp1, cp2)) => path.curve_to(cp1, cp2, end),
        None => path.line_to(end),
    }
}

/// Intersection of two line segments, if they cross within both extents.
pub fn intersection_point(a: Line, b: Line) -> Option<Point> {
    let r = a.p1 - a.p0;
    let s = b.p1 - b.p0;
    let denom = r.cross(s);
    if denom == 0.0 {
        return None;
    }
    let qp = b.p0 - a.p0;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a.p0 + r * t)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fillet.rs"]
mod tests;
