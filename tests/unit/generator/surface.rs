use super::*;

#[test]
fn background_fills_every_pixel() {
    let mut s = CpuSurface::new(8, 4).unwrap();
    s.background(Color::rgb(10, 20, 30));
    let frame = s.into_frame();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert_eq!(frame.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(7, 3), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn circle_covers_its_center_only() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.background(Color::WHITE);
    s.fill_circle(Point::new(16.0, 16.0), 10.0, Color::BLACK);
    let frame = s.into_frame();
    assert_eq!(frame.pixel(16, 16), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn oversized_or_empty_surfaces_are_rejected() {
    assert!(CpuSurface::new(0, 10).is_err());
    assert!(CpuSurface::new(70_000, 10).is_err());
}

#[test]
fn straight_alpha_conversion() {
    let frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 9, 9, 9, 0],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba(), vec![128, 64, 0, 128, 0, 0, 0, 0]);
}

#[test]
fn png_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("frame.png");
    let mut s = CpuSurface::new(4, 4).unwrap();
    s.background(Color::WHITE);
    s.into_frame().write_png(&path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
