use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use crate::{
    foundation::{core::Canvas, error::CatalystResult},
    generator::scene::Generator,
    gui::{
        controller::{Axis, Controller},
        registry::Gui,
        value::ControllerValue,
    },
    i18n::Lang,
};

pub const RESOLUTION_OPTIONS: [&str; 3] = [
    "Square: 1080 x 1080",
    "Landscape: 1920 x 1080",
    "Portrait: 1080 x 1920",
];

/// Work a button asks of the sketch; buttons cannot reach the ledger themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    RandomizeAll,
    Undo,
    Redo,
}

/// State shared between the sketch and controller callbacks.
#[derive(Clone, Debug)]
pub struct SketchHandles {
    pub generator: Rc<RefCell<Generator>>,
    pub canvas: Rc<Cell<Canvas>>,
    pub actions: Rc<RefCell<VecDeque<ButtonAction>>>,
}

impl SketchHandles {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            generator: Rc::new(RefCell::new(Generator::new())),
            canvas: Rc::new(Cell::new(canvas)),
            actions: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

/// `"Label: W x H"` -> `(W, H)`.
pub fn parse_resolution_option(option: &str) -> Option<(u32, u32)> {
    let (_, dims) = option.rsplit_once(':')?;
    let (w, h) = dims.split_once('x')?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

/// Apply a new canvas size. Unchanged or empty sizes are ignored.
pub fn resize_canvas(canvas: &Cell<Canvas>, width: u32, height: u32) -> bool {
    let current = canvas.get();
    if width < 1 || height < 1 || (current.width == width && current.height == height) {
        return false;
    }
    tracing::info!(width, height, "resizing canvas");
    canvas.set(Canvas { width, height });
    true
}

pub fn default_lang(locale: &str) -> Lang {
    let mut lang = Lang::new(locale);
    for (key, en, nl) in [
        ("LANG_RESOLUTION", "Resolution", "Resolutie"),
        ("LANG_COLOUR", "Colour", "Kleur"),
        ("LANG_SPEED", "Speed", "Snelheid"),
        ("LANG_OFFSET", "Offset", "Verschuiving"),
        ("LANG_ACCENTS", "Accents", "Accenten"),
        ("LANG_CAPTION", "Caption", "Bijschrift"),
        ("LANG_RANDOMIZE", "Randomize", "Willekeurig"),
        ("LANG_UNDO", "Undo", "Ongedaan maken"),
        ("LANG_REDO", "Redo", "Opnieuw"),
        (
            "LANG_HELPME_MSG",
            "Ctrl+Z undo, Ctrl+Shift+Z redo, space play/pause, s save frame, b move panel, m theme",
            "Ctrl+Z ongedaan maken, Ctrl+Shift+Z opnieuw, spatie afspelen/pauzeren, s frame opslaan, b paneel verplaatsen, m thema",
        ),
    ] {
        lang.insert("en", key, en);
        lang.insert("nl", key, nl);
    }
    lang
}

fn queue(
    actions: &Rc<RefCell<VecDeque<ButtonAction>>>,
    action: ButtonAction,
) -> impl FnMut(&Controller) + 'static {
    let actions = Rc::clone(actions);
    move |_| actions.borrow_mut().push_back(action)
}

/// The stock controller set wired to the generator and canvas.
pub fn build_default_gui(lang: Lang, handles: &SketchHandles) -> CatalystResult<Gui> {
    let mut gui = Gui::new(lang);
    gui.add_title(1, Generator::NAME, false);

    let canvas = Rc::clone(&handles.canvas);
    let current = handles.canvas.get();
    let default_index = RESOLUTION_OPTIONS
        .iter()
        .position(|o| parse_resolution_option(o) == Some((current.width, current.height)))
        .unwrap_or(0);
    gui.add_select(
        "resolution",
        "LANG_RESOLUTION",
        RESOLUTION_OPTIONS.iter().map(|s| s.to_string()).collect(),
        default_index,
        move |_, v| {
            if let Some((w, h)) = v.as_text().and_then(parse_resolution_option) {
                resize_canvas(&canvas, w, h);
            }
        },
    )?;

    gui.add_divider();

    let generator = Rc::clone(&handles.generator);
    let palette = handles.generator.borrow().palette().to_vec();
    gui.add_controller(
        Controller::colour_boxes("palette", "LANG_COLOUR", palette.clone(), 0)?
            .randomizable(true)
            .with_callback(move |_, v| {
                if let Some(c) = v.as_color() {
                    generator.borrow_mut().set_color(c);
                }
            }),
    )?;

    let generator = Rc::clone(&handles.generator);
    gui.add_controller(
        Controller::multi_colour_boxes("accents", "LANG_ACCENTS", palette, vec![1])?
            .randomizable(true)
            .with_callback(move |_, v| {
                if let Some(cs) = v.as_colors() {
                    generator.borrow_mut().set_accents(cs.to_vec());
                }
            }),
    )?;

    let generator = Rc::clone(&handles.generator);
    gui.add_controller(
        Controller::slider("speed", "LANG_SPEED", 0.0, 5.0, 1.0, 0.1)?
            .randomizable(true)
            .with_tooltip("Animation speed multiplier")
            .with_callback(move |_, v| {
                if let Some(s) = v.as_number() {
                    generator.borrow_mut().set_speed(s);
                }
            }),
    )?;

    let generator = Rc::clone(&handles.generator);
    let axis = Axis::new(-1.0, 1.0, 0.01)?;
    gui.add_controller(
        Controller::xy_slider("offset", "LANG_OFFSET", axis, axis, 0.0, 0.0)
            .randomizable(true)
            .with_callback(move |_, v| {
                if let ControllerValue::Xy { x, y } = *v {
                    generator.borrow_mut().set_offset(x, y);
                }
            }),
    )?;

    gui.add_textbox("caption", "LANG_CAPTION", "", |_, v| {
        tracing::debug!(caption = v.as_text().unwrap_or_default(), "caption changed");
    })?;

    gui.add_divider();
    for (name, label, action) in [
        ("randomize", "LANG_RANDOMIZE", ButtonAction::RandomizeAll),
        ("undo", "LANG_UNDO", ButtonAction::Undo),
        ("redo", "LANG_REDO", ButtonAction::Redo),
    ] {
        gui.add_button(name, label, queue(&handles.actions, action))?;
    }

    Ok(gui)
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/setup.rs"]
mod tests;
