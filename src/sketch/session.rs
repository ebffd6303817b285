use std::{
    cell::{Cell, Ref, RefCell},
    collections::VecDeque,
    path::{Path, PathBuf},
    rc::Rc,
};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    changeset::{
        ledger::{ChangeSet, ExportedSettings},
        storage::{FileStore, KeyValueStore, MemoryStore},
    },
    foundation::{
        core::{Canvas, Point, Rect},
        error::{CatalystError, CatalystResult},
        math::timestamp_b64,
    },
    geometry::fit::{FitMode, fit_rect, map_pointer_to_centered_surface},
    generator::{scene::Generator, surface::FrameRgba, timeline::Timeline},
    gui::{
        controller::{Commit, ControllerKind},
        registry::Gui,
        theme::{THEME_STORAGE_KEY, ThemeMode},
        value::{ControllerValue, SettingsDocument},
    },
    sketch::{
        config::SketchConfig,
        input::{KeyAction, KeyPress, action_for},
        setup::{ButtonAction, SketchHandles, build_default_gui, default_lang, resize_canvas},
    },
};

pub const UTILITY_FLAGS: usize = 10;

/// A running sketch: owns the GUI, its changeset, and the shared generator.
///
/// Every user-facing mutation goes through here so that committed changes reach the
/// changeset while restores (undo, redo, loaded settings) never do.
pub struct Sketch {
    config: SketchConfig,
    gui: Gui,
    changeset: ChangeSet,
    generator: Rc<RefCell<Generator>>,
    canvas: Rc<Cell<Canvas>>,
    actions: Rc<RefCell<VecDeque<ButtonAction>>>,
    timeline: Timeline,
    rng: StdRng,
    seed: u64,
    frame: u64,
    playing: bool,
    flags: [bool; UTILITY_FLAGS],
    counter: u32,
}

impl std::fmt::Debug for Sketch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketch")
            .field("canvas", &self.canvas.get())
            .field("seed", &self.seed)
            .field("frame", &self.frame)
            .field("changeset", &self.changeset)
            .finish_non_exhaustive()
    }
}

impl Sketch {
    /// Build from config; `persist` selects a file store under `storage_dir` or an in-memory one.
    pub fn new(config: SketchConfig) -> CatalystResult<Self> {
        let store: Option<Box<dyn KeyValueStore>> = match (config.persist, &config.storage_dir) {
            (false, _) => None,
            (true, Some(dir)) => Some(Box::new(FileStore::new(dir))),
            (true, None) => Some(Box::new(MemoryStore::new())),
        };
        Self::build(config, store)
    }

    /// Build with an explicit persistence backend; the session resumes from it.
    pub fn with_store(config: SketchConfig, store: Box<dyn KeyValueStore>) -> CatalystResult<Self> {
        Self::build(config, Some(store))
    }

    #[tracing::instrument(skip_all)]
    fn build(config: SketchConfig, store: Option<Box<dyn KeyValueStore>>) -> CatalystResult<Self> {
        config.validate()?;
        let canvas = config.canvas()?;
        let timeline = config.timeline(1.0)?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());

        let handles = SketchHandles::new(canvas);
        let mut gui = build_default_gui(default_lang(&config.locale), &handles)?;
        gui.setup();
        resize_canvas(&handles.canvas, canvas.width, canvas.height);

        if let Some(store) = &store {
            gui.set_theme(ThemeMode::from_stored(
                store.get(THEME_STORAGE_KEY).as_deref(),
            ));
        }

        let from_persisted = store.is_some();
        let mut changeset = match store {
            Some(store) => ChangeSet::with_store(config.changeset(), store),
            None => ChangeSet::new(config.changeset()),
        };
        changeset.initialize(&mut gui, from_persisted)?;

        tracing::info!(name = Generator::NAME, seed, "sketch ready");
        Ok(Self {
            config,
            gui,
            changeset,
            generator: handles.generator,
            canvas: handles.canvas,
            actions: handles.actions,
            timeline,
            rng: StdRng::seed_from_u64(seed),
            seed,
            frame: 0,
            playing: true,
            flags: [false; UTILITY_FLAGS],
            counter: 0,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn gui(&self) -> &Gui {
        &self.gui
    }

    /// For dynamic UIs (option lists, palettes). Edits made here are not recorded.
    pub fn gui_mut(&mut self) -> &mut Gui {
        &mut self.gui
    }

    pub fn changeset(&self) -> &ChangeSet {
        &self.changeset
    }

    pub fn generator(&self) -> Ref<'_, Generator> {
        self.generator.borrow()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas.get()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn flags(&self) -> &[bool; UTILITY_FLAGS] {
        &self.flags
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn settings(&self) -> SettingsDocument {
        SettingsDocument::new(self.gui.get_state())
    }

    fn commit(&mut self, commit: Commit) -> CatalystResult<()> {
        if commit == Commit::Capture {
            self.changeset.capture(&self.gui)?;
        }
        Ok(())
    }

    pub fn set_value(&mut self, name: &str, value: ControllerValue) -> CatalystResult<()> {
        let commit = self.gui.set_value(name, value)?;
        self.commit(commit)
    }

    /// Click a button or toggle. Button work (randomize, undo, redo) runs right after.
    pub fn click(&mut self, name: &str) -> CatalystResult<()> {
        let is_button = self
            .gui
            .controller(name)
            .is_some_and(|c| matches!(c.kind(), ControllerKind::Button));
        let commit = self.gui.click(name)?;
        if is_button {
            self.run_button_actions()
        } else {
            self.commit(commit)
        }
    }

    fn run_button_actions(&mut self) -> CatalystResult<()> {
        loop {
            let next = self.actions.borrow_mut().pop_front();
            let Some(action) = next else {
                return Ok(());
            };
            match action {
                ButtonAction::RandomizeAll => self.randomize()?,
                ButtonAction::Undo => {
                    self.undo()?;
                }
                ButtonAction::Redo => {
                    self.redo()?;
                }
            }
        }
    }

    pub fn press(&mut self, name: &str) -> CatalystResult<()> {
        self.gui.press(name)
    }

    pub fn drag_to(&mut self, name: &str, x: f64, y: f64) -> CatalystResult<()> {
        let commit = self.gui.drag_to(name, x, y)?;
        self.commit(commit)
    }

    pub fn release(&mut self, name: &str, x: f64, y: f64) -> CatalystResult<()> {
        let commit = self.gui.release(name, x, y)?;
        self.commit(commit)
    }

    /// Randomize every randomizable controller as one undo step.
    pub fn randomize(&mut self) -> CatalystResult<()> {
        if let Some(commit) = self.gui.randomize_all(&mut self.rng)? {
            self.commit(commit)?;
        }
        Ok(())
    }

    pub fn randomize_controller(&mut self, name: &str) -> CatalystResult<()> {
        if let Some(commit) = self.gui.randomize(name, &mut self.rng)? {
            self.commit(commit)?;
        }
        Ok(())
    }

    pub fn undo(&mut self) -> CatalystResult<bool> {
        self.changeset.undo(&mut self.gui)
    }

    pub fn redo(&mut self) -> CatalystResult<bool> {
        self.changeset.redo(&mut self.gui)
    }

    /// Focus moved into a text field: shortcuts are suspended.
    pub fn begin_text_input(&mut self) {
        self.gui.set_typing_text(true);
    }

    /// Live typing; the callback sees the text but nothing is recorded.
    pub fn input_text(&mut self, name: &str, text: &str) -> CatalystResult<()> {
        self.gui
            .controller_mut(name)
            .ok_or_else(|| CatalystError::validation(format!("no controller named '{name}'")))?
            .input_text(text)
    }

    /// Focus left the text field: store the text as one change.
    pub fn commit_text(&mut self, name: &str, text: &str) -> CatalystResult<()> {
        self.gui.set_typing_text(false);
        self.set_value(name, ControllerValue::Text(text.to_owned()))
    }

    pub fn export_settings(&self, prefix: &str) -> CatalystResult<Option<ExportedSettings>> {
        self.changeset
            .export_current(prefix, &Generator::output_file_name("settings"))
    }

    pub fn load_settings(&mut self, text: &str) -> CatalystResult<()> {
        self.changeset.load_external(&mut self.gui, text)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        resize_canvas(&self.canvas, width, height)
    }

    fn canvas_size(&self) -> kurbo::Size {
        let c = self.canvas.get();
        kurbo::Size::new(f64::from(c.width), f64::from(c.height))
    }

    /// Letterboxed placement of the canvas inside a `viewport`.
    pub fn preview_rect(&self, viewport: kurbo::Size) -> Rect {
        fit_rect(viewport, self.canvas_size(), FitMode::Contain)
    }

    /// Viewport pointer position in canvas pixels.
    pub fn pointer_to_canvas(&self, pointer: Point, viewport: kurbo::Size) -> Point {
        map_pointer_to_centered_surface(pointer, viewport, self.canvas_size())
    }

    pub fn render_frame(&self, frame: u64) -> CatalystResult<FrameRgba> {
        let canvas = self.canvas.get();
        self.generator
            .borrow()
            .render_frame(canvas.width, canvas.height, frame, &self.timeline)
    }

    pub fn render_current(&self) -> CatalystResult<FrameRgba> {
        self.render_frame(self.frame)
    }

    /// Advance one frame while playing, wrapping at the end of the timeline.
    pub fn tick(&mut self) {
        if self.playing {
            self.frame = (self.frame + 1) % self.timeline.n_frames();
        }
    }

    /// Write the current frame as `catalyst-generator_<timestamp>.png` under `dir`.
    #[tracing::instrument(skip(self), fields(frame = self.frame))]
    pub fn save_frame(&self, dir: &Path) -> CatalystResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            CatalystError::render(format!("create output dir '{}': {e}", dir.display()))
        })?;
        let path = dir.join(format!("{}.png", Generator::output_file_name(&timestamp_b64())));
        self.render_current()?.write_png(&path)?;
        tracing::info!(path = %path.display(), "frame saved");
        Ok(path)
    }

    /// Help text in the active locale.
    pub fn help_text(&self) -> String {
        self.gui.lang().process("LANG_HELPME_MSG")
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.gui.toggle_theme();
        if let Some(store) = self.changeset.store_mut()
            && let Err(err) = store.set(THEME_STORAGE_KEY, mode.as_stored())
        {
            tracing::warn!(error = %err, "persisting theme failed");
        }
        mode
    }

    /// Apply a keyboard shortcut. Ignored while a text field has focus.
    pub fn handle_key(&mut self, press: KeyPress) -> CatalystResult<Option<KeyAction>> {
        if self.gui.is_typing_text() {
            return Ok(None);
        }
        let Some(action) = action_for(press) else {
            return Ok(None);
        };
        match action {
            KeyAction::Undo => {
                if let Err(err) = self.undo() {
                    tracing::warn!(error = %err, "undo skipped");
                }
            }
            KeyAction::Redo => {
                if let Err(err) = self.redo() {
                    tracing::warn!(error = %err, "redo skipped");
                }
            }
            KeyAction::ToggleSide => {
                self.gui.toggle_side();
            }
            KeyAction::ToggleTheme => {
                self.toggle_theme();
            }
            KeyAction::TogglePlay => self.playing = !self.playing,
            KeyAction::ToggleFlag(i) => {
                if let Some(flag) = self.flags.get_mut(i) {
                    *flag = !*flag;
                }
            }
            KeyAction::StepCounter(delta) => {
                self.counter = self.counter.saturating_add_signed(delta);
                tracing::info!(counter = self.counter, "counter");
            }
            KeyAction::JumpFrames(delta) => {
                self.frame = self.frame.saturating_add_signed(delta);
            }
            KeyAction::SaveFrame => {
                self.save_frame(&self.config.output_dir)?;
            }
            KeyAction::Help => tracing::info!("{}", self.help_text()),
        }
        Ok(Some(action))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/session.rs"]
mod tests;
