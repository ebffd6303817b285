use std::{cell::RefCell, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::color::rgba::Color;

fn gui() -> Gui {
    let mut lang = Lang::new("en");
    lang.insert("en", "LANG_SPEED", "Speed");
    let mut gui = Gui::new(lang);
    gui.add_title(2, "Demo", true);
    gui.add_slider("speed", "LANG_SPEED", 0.0, 10.0, 1.0, 1.0, |_, _| {})
        .unwrap()
        .set_randomizable(true);
    gui.add_select(
        "mode",
        "Mode",
        vec!["a".into(), "b".into()],
        0,
        |_, _| {},
    )
    .unwrap();
    gui.add_button("go", "Go", |_| {}).unwrap();
    gui.add_divider();
    gui
}

#[test]
fn state_lists_valued_controllers_in_order() {
    let gui = gui();
    let state = gui.get_state();
    let names: Vec<_> = state.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["speed", "mode"]);
    assert_eq!(gui.controller("speed").unwrap().label(), Some("Speed"));
    assert_eq!(gui.fields().len(), 5);
}

#[test]
fn duplicate_names_are_rejected() {
    let mut gui = gui();
    let err = gui.add_button("speed", "Again", |_| {}).unwrap_err();
    assert!(matches!(err, CatalystError::Validation(_)));
}

#[test]
fn remove_controller_drops_its_field() {
    let mut gui = gui();
    assert!(gui.remove_controller("mode").is_some());
    assert!(!gui.has_name("mode"));
    assert!(gui.fields().iter().all(|f| f.controller_name() != Some("mode")));
    assert!(gui.remove_controller("mode").is_none());
}

#[test]
fn restore_ignores_unknown_and_keeps_missing() {
    let mut gui = gui();
    gui.set_value("mode", ControllerValue::Text("b".into())).unwrap();

    let mut state = GuiState::new();
    state.insert("speed", ControllerValue::Number(4.0));
    state.insert("ghost", ControllerValue::Bool(true));
    gui.restore_state(&state).unwrap();

    assert_eq!(
        gui.controller("speed").unwrap().value_for_json(),
        Some(ControllerValue::Number(4.0))
    );
    assert_eq!(
        gui.controller("mode").unwrap().value_for_json(),
        Some(ControllerValue::Text("b".into()))
    );
}

#[test]
fn restore_skips_malformed_but_fails_on_invalid_option() {
    let mut gui = gui();
    let mut state = GuiState::new();
    state.insert("speed", ControllerValue::Text("fast".into()));
    gui.restore_state(&state).unwrap();
    assert_eq!(
        gui.controller("speed").unwrap().value_for_json(),
        Some(ControllerValue::Number(1.0))
    );

    let mut state = GuiState::new();
    state.insert("mode", ControllerValue::Text("z".into()));
    assert!(matches!(
        gui.restore_state(&state),
        Err(CatalystError::InvalidOption { .. })
    ));
}

#[test]
fn randomize_all_touches_only_randomizable_controllers() {
    let mut gui = gui();
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(gui.randomize_all(&mut rng).unwrap(), Some(Commit::Capture));
    assert_eq!(
        gui.controller("mode").unwrap().value_for_json(),
        Some(ControllerValue::Text("a".into()))
    );

    let mut plain = Gui::default();
    plain
        .add_controller(Controller::textbox("t", "T", "x"))
        .unwrap();
    assert_eq!(plain.randomize_all(&mut rng).unwrap(), None);
}

#[test]
fn setup_announces_initial_values() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut gui = Gui::default();
    gui.add_controller(
        Controller::colour_boxes("bg", "Bg", vec![Color::BLACK, Color::WHITE], 1)
            .unwrap()
            .with_callback(move |_, v| sink.borrow_mut().push(v.clone())),
    )
    .unwrap();
    gui.setup();
    assert_eq!(*seen.borrow(), vec![ControllerValue::Color(Color::WHITE)]);
}

#[test]
fn unknown_controller_is_a_validation_error() {
    let mut gui = gui();
    assert!(gui.click("nope").is_err());
    assert_eq!(gui.click("go").unwrap(), Commit::Capture);
}

#[test]
fn theme_and_side_toggles() {
    let mut gui = Gui::default();
    assert_eq!(gui.theme(), ThemeMode::Auto);
    assert_eq!(gui.toggle_theme(), ThemeMode::Light);
    assert_eq!(gui.toggle_side(), GuiSide::Left);
    gui.set_typing_text(true);
    assert!(gui.is_typing_text());
}

#[test]
fn invalid_option_aborts_restore_before_any_write() {
    let seen = Rc::new(RefCell::new(0usize));
    let count = Rc::clone(&seen);
    let mut gui = Gui::default();
    gui.add_slider("speed", "Speed", 0.0, 10.0, 1.0, 1.0, move |_, _| {
        *count.borrow_mut() += 1;
    })
    .unwrap();
    gui.add_select("mode", "Mode", vec!["a".into(), "b".into()], 0, |_, _| {})
        .unwrap();

    let mut state = GuiState::new();
    state.insert("speed", ControllerValue::Number(5.0));
    state.insert("mode", ControllerValue::Text("z".into()));
    assert!(matches!(
        gui.restore_state(&state),
        Err(CatalystError::InvalidOption { .. })
    ));
    assert_eq!(
        gui.controller("speed").unwrap().value_for_json(),
        Some(ControllerValue::Number(1.0))
    );
    assert_eq!(*seen.borrow(), 0);
}
