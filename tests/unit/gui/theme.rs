use super::*;

#[test]
fn theme_cycles_light_dark_auto() {
    let mut mode = ThemeMode::Light;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(mode);
        mode = mode.next();
    }
    assert_eq!(
        seen,
        vec![
            ThemeMode::Light,
            ThemeMode::Dark,
            ThemeMode::Auto,
            ThemeMode::Light
        ]
    );
}

#[test]
fn stored_values_round_trip_and_unknown_means_auto() {
    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto] {
        assert_eq!(ThemeMode::from_stored(Some(mode.as_stored())), mode);
    }
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::Auto);
    assert_eq!(ThemeMode::from_stored(Some("purple")), ThemeMode::Auto);
}

#[test]
fn auto_follows_system_preference() {
    assert!(ThemeMode::Auto.is_dark(true));
    assert!(!ThemeMode::Auto.is_dark(false));
    assert!(ThemeMode::Dark.is_dark(false));
}

#[test]
fn side_toggles() {
    assert_eq!(GuiSide::default().toggled(), GuiSide::Left);
    assert_eq!(GuiSide::Left.toggled(), GuiSide::Right);
}
