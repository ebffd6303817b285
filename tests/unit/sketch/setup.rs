use super::*;
use crate::gui::value::ControllerValue;

#[test]
fn resolution_options_parse() {
    assert_eq!(
        parse_resolution_option("Landscape: 1920 x 1080"),
        Some((1920, 1080))
    );
    assert_eq!(parse_resolution_option("Custom"), None);
    assert_eq!(parse_resolution_option("Bad: ax1"), None);
}

#[test]
fn resize_ignores_unchanged_and_empty_sizes() {
    let canvas = Cell::new(Canvas::new(10, 10).unwrap());
    assert!(!resize_canvas(&canvas, 10, 10));
    assert!(!resize_canvas(&canvas, 0, 10));
    assert!(resize_canvas(&canvas, 20, 10));
    assert_eq!(canvas.get(), Canvas::new(20, 10).unwrap());
}

#[test]
fn default_gui_wires_callbacks() {
    let handles = SketchHandles::new(Canvas::new(1080, 1080).unwrap());
    let mut gui = build_default_gui(default_lang("nl"), &handles).unwrap();
    assert_eq!(gui.controller("speed").unwrap().label(), Some("Snelheid"));

    gui.set_value("resolution", ControllerValue::Text(RESOLUTION_OPTIONS[2].into()))
        .unwrap();
    assert_eq!(handles.canvas.get(), Canvas::new(1080, 1920).unwrap());

    gui.set_value("speed", ControllerValue::Number(2.5)).unwrap();
    assert_eq!(handles.generator.borrow().speed(), 2.5);

    gui.click("undo").unwrap();
    assert_eq!(
        handles.actions.borrow().front().copied(),
        Some(ButtonAction::Undo)
    );
}

#[test]
fn persisted_state_skips_buttons() {
    let handles = SketchHandles::new(Canvas::new(1920, 1080).unwrap());
    let gui = build_default_gui(default_lang("en"), &handles).unwrap();
    let state = gui.get_state();
    let names: Vec<_> = state.iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec!["resolution", "palette", "accents", "speed", "offset", "caption"]
    );
    assert_eq!(
        state.get("resolution"),
        Some(&ControllerValue::Text(RESOLUTION_OPTIONS[1].into()))
    );
}
