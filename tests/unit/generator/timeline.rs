use super::*;

#[test]
fn duration_snaps_to_whole_frames() {
    let t = Timeline::new(30.0, 2.51, 1.0).unwrap();
    assert_eq!(t.n_frames(), 75);
    assert!((t.duration_secs() - 2.5).abs() < 1e-12);
}

#[test]
fn time_scales_with_speed() {
    let t = Timeline::new(10.0, 4.0, 2.0).unwrap();
    assert_eq!(t.progress(20), 0.5);
    assert!((t.time(20) - 4.0).abs() < 1e-12);
    assert_eq!(t.time(0), 0.0);
}

#[test]
fn rejects_degenerate_clocks() {
    assert!(Timeline::new(0.0, 1.0, 1.0).is_err());
    assert!(Timeline::new(30.0, 0.0, 1.0).is_err());
    assert!(Timeline::new(30.0, 0.01, 1.0).is_err());
    assert!(Timeline::new(30.0, 1.0, f64::NAN).is_err());
}
