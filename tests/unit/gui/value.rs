use super::*;
use serde_json::json;

#[test]
fn untagged_layout_round_trips_every_variant() {
    let cases = [
        (ControllerValue::Bool(true), json!(true)),
        (ControllerValue::Number(2.5), json!(2.5)),
        (ControllerValue::Text("Square".into()), json!("Square")),
        (ControllerValue::Color(Color::rgb(1, 2, 3)), json!([1, 2, 3, 255])),
        (
            ControllerValue::Colors(vec![Color::rgb(1, 2, 3)]),
            json!([[1, 2, 3, 255]]),
        ),
        (
            ControllerValue::Range { min: 1.0, max: 4.0 },
            json!({"min": 1.0, "max": 4.0}),
        ),
        (
            ControllerValue::Xy { x: -1.0, y: 0.5 },
            json!({"x": -1.0, "y": 0.5}),
        ),
        (
            ControllerValue::Size { w: 1080, h: 1920 },
            json!({"w": 1080, "h": 1920}),
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(serde_json::to_value(&value).unwrap(), expected);
        let back: ControllerValue = serde_json::from_value(expected).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn empty_color_list_reads_as_colors() {
    let v: ControllerValue = serde_json::from_value(json!([])).unwrap();
    assert_eq!(v, ControllerValue::Colors(vec![]));
}

#[test]
fn gui_state_keeps_insertion_order_in_json() {
    let mut state = GuiState::new();
    state.insert("zeta", ControllerValue::Number(1.0));
    state.insert("alpha", ControllerValue::Bool(false));
    state.insert("zeta", ControllerValue::Number(2.0));

    let text = serde_json::to_string(&state).unwrap();
    assert_eq!(text, r#"{"zeta":2.0,"alpha":false}"#);

    let back: GuiState = serde_json::from_str(&text).unwrap();
    assert_eq!(back, state);
    assert_eq!(
        back.iter().map(|(n, _)| n).collect::<Vec<_>>(),
        vec!["zeta", "alpha"]
    );
}

#[test]
fn settings_document_defaults_missing_gui() {
    let doc = SettingsDocument::from_json("{}").unwrap();
    assert!(doc.gui.is_empty());
    assert!(SettingsDocument::from_json("not json").is_err());
}

#[test]
fn compact_json_is_stable_through_pretty_round_trip() {
    let mut gui = GuiState::new();
    gui.insert("speed", ControllerValue::Number(2.0));
    gui.insert("palette", ControllerValue::Color(Color::rgb(0x76, 0x85, 0xf7)));
    let doc = SettingsDocument::new(gui);

    let compact = doc.to_compact_json().unwrap();
    let pretty = doc.to_pretty_json().unwrap();
    let reparsed = SettingsDocument::from_json(&pretty).unwrap();
    assert_eq!(reparsed.to_compact_json().unwrap(), compact);
}

#[test]
fn malformed_entries_are_dropped_without_failing_the_document() {
    let doc = SettingsDocument::from_json(
        r#"{"gui":{"offset":{"x":0.5},"speed":3.0,"ghost":null,"mode":"b"}}"#,
    )
    .unwrap();
    assert_eq!(doc.gui.len(), 2);
    assert_eq!(doc.gui.get("offset"), None);
    assert_eq!(doc.gui.get("ghost"), None);
    assert_eq!(doc.gui.get("speed"), Some(&ControllerValue::Number(3.0)));
    assert_eq!(doc.gui.get("mode"), Some(&ControllerValue::Text("b".into())));
}
