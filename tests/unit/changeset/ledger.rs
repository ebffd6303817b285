use super::*;
use crate::{
    changeset::storage::MemoryStore,
    foundation::error::CatalystError,
    gui::{controller::Controller, value::ControllerValue},
};

fn speed_gui() -> Gui {
    let mut gui = Gui::default();
    gui.add_controller(Controller::slider("speed", "Speed", 0.0, 10.0, 1.0, 0.5).unwrap())
        .unwrap();
    gui
}

fn speed_mode_gui() -> Gui {
    let mut gui = speed_gui();
    gui.add_controller(
        Controller::select("mode", "Mode", vec!["a".into(), "b".into(), "c".into()], 0).unwrap(),
    )
    .unwrap();
    gui
}

fn live(gui: &Gui, name: &str) -> Option<ControllerValue> {
    gui.controller(name).and_then(|c| c.value_for_json())
}

fn set_speed(gui: &mut Gui, ledger: &mut ChangeSet, v: f64) {
    gui.set_value("speed", ControllerValue::Number(v)).unwrap();
    ledger.capture(gui).unwrap();
}

#[test]
fn empty_ledger_has_no_index() {
    let ledger = ChangeSet::default();
    assert!(ledger.is_empty());
    assert_eq!(ledger.index(), None);
    assert_eq!(ledger.current(), None);
    assert!(!ledger.can_undo());
    assert_eq!(ledger.export_current("x", "y").unwrap(), None);
}

#[test]
fn initialize_captures_live_state_as_entry_zero() {
    let mut gui = speed_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.index(), Some(0));
    assert_eq!(ledger.current(), Some(r#"{"gui":{"speed":1.0}}"#));
}

#[test]
fn max_entries_evicts_oldest() {
    let mut gui = speed_gui();
    let mut ledger = ChangeSet::new(ChangeSetConfig {
        max_entries: Some(3),
        ..ChangeSetConfig::default()
    });
    ledger.initialize(&mut gui, false).unwrap();
    for v in [2.0, 3.0, 4.0, 5.0] {
        set_speed(&mut gui, &mut ledger, v);
    }
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.index(), Some(2));
    assert_eq!(ledger.entries()[0], r#"{"gui":{"speed":3.0}}"#);
}

#[test]
fn captures_are_mirrored_to_the_store() {
    let mut gui = speed_gui();
    let mut ledger = ChangeSet::with_store(ChangeSetConfig::default(), Box::new(MemoryStore::new()));
    ledger.initialize(&mut gui, true).unwrap();
    set_speed(&mut gui, &mut ledger, 2.5);
    let stored = ledger.store().unwrap().get(DEFAULT_STORAGE_KEY);
    assert_eq!(stored.as_deref(), Some(r#"{"gui":{"speed":2.5}}"#));

    ledger.undo(&mut gui).unwrap();
    let stored = ledger.store().unwrap().get(DEFAULT_STORAGE_KEY);
    assert_eq!(stored.as_deref(), Some(r#"{"gui":{"speed":2.5}}"#));
}

#[test]
fn trivial_or_broken_persisted_text_starts_fresh() {
    for persisted in ["", "{}", "{not json"] {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_STORAGE_KEY, persisted).unwrap();
        let mut gui = speed_gui();
        let mut ledger = ChangeSet::with_store(ChangeSetConfig::default(), Box::new(store));
        ledger.initialize(&mut gui, true).unwrap();
        assert_eq!(ledger.current(), Some(r#"{"gui":{"speed":1.0}}"#));
    }
}

#[test]
fn export_names_file_with_prefix_and_suffix() {
    let mut gui = speed_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();
    let export = ledger
        .export_current("my-sketch", "catalyst-generator")
        .unwrap()
        .unwrap();
    assert_eq!(export.file_name, "my-sketch_catalyst-generator.json");
    assert!(export.contents.contains('\n'));
}

#[test]
fn load_external_rejects_invalid_json() {
    let mut gui = speed_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();
    assert!(ledger.load_external(&mut gui, "nope").is_err());
    assert_eq!(ledger.len(), 1);
}

#[test]
fn load_external_with_unknown_option_changes_nothing() {
    let mut gui = speed_mode_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();
    let before = ledger.current().map(str::to_owned);

    let err = ledger
        .load_external(&mut gui, r#"{"gui":{"speed":7.0,"mode":"zzz"}}"#)
        .unwrap_err();
    assert!(matches!(err, CatalystError::InvalidOption { .. }));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.index(), Some(0));
    assert_eq!(ledger.current().map(str::to_owned), before);
    assert_eq!(live(&gui, "speed"), Some(ControllerValue::Number(1.0)));
    assert_eq!(live(&gui, "mode"), Some(ControllerValue::Text("a".into())));
}

#[test]
fn load_external_skips_malformed_entries_and_applies_the_rest() {
    let mut gui = speed_mode_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();

    ledger
        .load_external(&mut gui, r#"{"gui":{"offset":{"x":0.5},"speed":3.0}}"#)
        .unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(live(&gui, "speed"), Some(ControllerValue::Number(3.0)));
}

#[test]
fn undo_into_stale_option_keeps_index_and_gui() {
    let mut gui = speed_mode_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();
    gui.set_value("mode", ControllerValue::Text("b".into())).unwrap();
    ledger.capture(&gui).unwrap();
    set_speed(&mut gui, &mut ledger, 5.0);
    assert_eq!(ledger.len(), 3);

    gui.controller_mut("mode")
        .unwrap()
        .set_options(vec!["b".into(), "c".into()])
        .unwrap();
    gui.set_value("speed", ControllerValue::Number(2.0)).unwrap();
    ledger.capture(&gui).unwrap();
    assert!(ledger.undo(&mut gui).unwrap());
    assert_eq!(ledger.index(), Some(2));
    assert_eq!(live(&gui, "speed"), Some(ControllerValue::Number(5.0)));

    // entry 0 holds mode "a", which is no longer an option
    ledger.undo(&mut gui).unwrap();
    assert_eq!(ledger.index(), Some(1));
    let err = ledger.undo(&mut gui).unwrap_err();
    assert!(matches!(err, CatalystError::InvalidOption { .. }));
    assert_eq!(ledger.index(), Some(1));
    assert_eq!(live(&gui, "speed"), Some(ControllerValue::Number(1.0)));
    assert_eq!(live(&gui, "mode"), Some(ControllerValue::Text("b".into())));
}

#[test]
fn redo_into_stale_option_keeps_index_and_gui() {
    let mut gui = speed_mode_gui();
    let mut ledger = ChangeSet::default();
    ledger.initialize(&mut gui, false).unwrap();
    gui.set_value("speed", ControllerValue::Number(4.0)).unwrap();
    gui.set_value("mode", ControllerValue::Text("c".into())).unwrap();
    ledger.capture(&gui).unwrap();
    ledger.undo(&mut gui).unwrap();

    gui.controller_mut("mode")
        .unwrap()
        .set_options(vec!["a".into(), "b".into()])
        .unwrap();
    assert!(ledger.redo(&mut gui).is_err());
    assert_eq!(ledger.index(), Some(0));
    assert!(ledger.can_redo());
    assert_eq!(live(&gui, "speed"), Some(ControllerValue::Number(1.0)));
    assert_eq!(live(&gui, "mode"), Some(ControllerValue::Text("a".into())));
}

#[test]
fn rejected_persisted_snapshot_leaves_gui_untouched() {
    let mut store = MemoryStore::new();
    store
        .set(DEFAULT_STORAGE_KEY, r#"{"gui":{"speed":6.0,"mode":"zzz"}}"#)
        .unwrap();
    let mut gui = speed_mode_gui();
    let mut ledger = ChangeSet::with_store(ChangeSetConfig::default(), Box::new(store));
    ledger.initialize(&mut gui, true).unwrap();

    assert_eq!(ledger.len(), 1);
    assert_eq!(live(&gui, "speed"), Some(ControllerValue::Number(1.0)));
    assert_eq!(ledger.current(), Some(r#"{"gui":{"speed":1.0,"mode":"a"}}"#));
}
