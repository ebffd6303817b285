use super::*;

#[test]
fn missing_fields_take_defaults() {
    let c = SketchConfig::from_json(r#"{"width": 640, "seed": 9}"#).unwrap();
    assert_eq!(c.width, 640);
    assert_eq!(c.height, 1080);
    assert_eq!(c.seed, Some(9));
    assert_eq!(c.locale, "en");
    assert!(!c.persist);
}

#[test]
fn invalid_sizes_and_clocks_are_rejected() {
    assert!(SketchConfig::from_json(r#"{"width": 0}"#).is_err());
    assert!(SketchConfig::from_json(r#"{"fps": 0}"#).is_err());
    assert!(SketchConfig::from_json("[]").is_err());
}

#[test]
fn history_depth_flows_into_changeset_config() {
    let c = SketchConfig {
        max_history: Some(20),
        ..SketchConfig::default()
    };
    assert_eq!(c.changeset().max_entries, Some(20));
    assert_eq!(c.changeset().storage_key, "changeset");
}

#[test]
fn loads_from_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("sketch.json");
    std::fs::write(&path, r#"{"duration_secs": 2.0}"#).unwrap();
    let c = SketchConfig::load(&path).unwrap();
    assert_eq!(c.duration_secs, 2.0);
    assert!(SketchConfig::load(&tmp.path().join("missing.json")).is_err());
}
