use super::*;

fn close(a: Color, b: Color) -> bool {
    a.levels
        .iter()
        .zip(b.levels.iter())
        .all(|(x, y)| (i16::from(*x) - i16::from(*y)).abs() <= 1)
}

#[test]
fn white_has_unit_lightness_and_no_chroma() {
    let lab = OkLab::from_srgb(1.0, 1.0, 1.0);
    assert!((lab.l - 1.0).abs() < 1e-3);
    assert!(lab.a.abs() < 1e-3);
    assert!(lab.b.abs() < 1e-3);
}

#[test]
fn round_trip_preserves_levels() {
    for c in [
        Color::rgb(0x76, 0x85, 0xf7),
        Color::rgb(0xbf, 0xfb, 0x50),
        Color::rgb(12, 200, 99),
    ] {
        let [r, g, b] = OkLab::from_color(c).to_srgb();
        assert!(close(Color::from_unit(r, g, b, 1.0), c));
    }
}

#[test]
fn lerp_endpoints_reproduce_inputs() {
    let a = Color::rgb(0x76, 0x85, 0xf7);
    let b = Color::rgb(0xbf, 0xfb, 0x50);
    assert!(close(lerp_color_oklab(a, b, 0.0), a));
    assert!(close(lerp_color_oklab(a, b, 1.0), b));
}

#[test]
fn black_to_white_midpoint_is_perceptual_grey() {
    let mid = lerp_color_oklab(Color::BLACK, Color::WHITE, 0.5);
    assert_eq!(mid.r(), mid.g());
    assert_eq!(mid.g(), mid.b());
    // OKLab L=0.5 lands well below sRGB 128.
    assert!(mid.r() > 90 && mid.r() < 110);
}
