use super::*;

#[test]
fn map_range_handles_degenerate_input_span() {
    assert_eq!(map_range(5.0, 0.0, 10.0, -1.0, 1.0), 0.0);
    assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
}

#[test]
fn constrain_accepts_swapped_bounds() {
    assert_eq!(constrain(12.0, 10.0, 0.0), 10.0);
    assert_eq!(constrain(-1.0, 0.0, 10.0), 0.0);
}

#[test]
fn snap_to_step_clamps_then_aligns() {
    assert_eq!(snap_to_step(2.26, 0.0, 5.0, 0.5), 2.5);
    assert_eq!(snap_to_step(9.0, 0.0, 5.0, 0.5), 5.0);
    assert_eq!(snap_to_step(-3.0, 1.0, 5.0, 1.0), 1.0);
    assert_eq!(snap_to_step(3.3, 1.0, 5.0, 0.0), 3.3);
}

#[test]
fn b64_matches_reference_digits() {
    assert_eq!(to_b64(0), "0");
    assert_eq!(to_b64(63), "_");
    assert_eq!(to_b64(64), "10");
    assert_eq!(from_b64("10"), Some(64));
    assert_eq!(from_b64("a!"), None);
    let n = 1_700_000_000_123;
    assert_eq!(from_b64(&to_b64(n)), Some(n));
}

#[test]
fn capitalize_first_keeps_tail() {
    assert_eq!(capitalize_first("speed slider"), "Speed slider");
    assert_eq!(capitalize_first(""), "");
}
