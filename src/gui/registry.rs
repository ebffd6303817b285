use rand::Rng;

use crate::{
    foundation::error::{CatalystError, CatalystResult},
    gui::{
        controller::{Commit, Controller, ControllerKind},
        field::Field,
        theme::{GuiSide, ThemeMode},
        value::{ControllerValue, GuiState},
    },
    i18n::Lang,
};

/// Registry of controllers plus the layout fields around them.
///
/// The registry never talks to the changeset: every mutating call hands a [`Commit`] back to
/// the owner, which decides whether to capture. Restores return nothing to capture.
#[derive(Debug, Default)]
pub struct Gui {
    lang: Lang,
    fields: Vec<Field>,
    controllers: Vec<Controller>,
    theme: ThemeMode,
    side: GuiSide,
    typing_text: bool,
}

impl Gui {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            ..Self::default()
        }
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn controllers(&self) -> impl Iterator<Item = &Controller> {
        self.controllers.iter()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.controllers.iter().any(|c| c.name() == name)
    }

    pub fn controller(&self, name: &str) -> Option<&Controller> {
        self.controllers.iter().find(|c| c.name() == name)
    }

    pub fn controller_mut(&mut self, name: &str) -> Option<&mut Controller> {
        self.controllers.iter_mut().find(|c| c.name() == name)
    }

    fn expect_mut(&mut self, name: &str) -> CatalystResult<&mut Controller> {
        self.controller_mut(name)
            .ok_or_else(|| CatalystError::validation(format!("no controller named '{name}'")))
    }

    /// Register a controller, resolving its text through the active [`Lang`].
    pub fn add_controller(&mut self, mut controller: Controller) -> CatalystResult<&mut Controller> {
        if self.has_name(controller.name()) {
            return Err(CatalystError::validation(format!(
                "duplicate controller name '{}'",
                controller.name()
            )));
        }
        let label = controller.label().map(|l| self.lang.process(l));
        controller.set_label(label);
        if let ControllerKind::Toggle { labels, .. } = controller.kind_mut() {
            for l in labels.iter_mut() {
                *l = self.lang.process(l);
            }
        }
        tracing::debug!(
            name = controller.name(),
            kind = controller.kind().type_name(),
            "controller registered"
        );
        self.fields
            .push(Field::Controller(controller.name().to_owned()));
        self.controllers.push(controller);
        let last = self.controllers.len() - 1;
        Ok(&mut self.controllers[last])
    }

    pub fn remove_controller(&mut self, name: &str) -> Option<Controller> {
        let pos = self.controllers.iter().position(|c| c.name() == name)?;
        self.fields.retain(|f| f.controller_name() != Some(name));
        Some(self.controllers.remove(pos))
    }

    pub fn add_label(&mut self, text: &str) {
        let text = self.lang.process(text);
        self.fields.push(Field::Label(text));
    }

    pub fn add_title(&mut self, level: u8, text: &str, centered: bool) {
        let text = self.lang.process(text);
        self.fields.push(Field::Title {
            level: level.clamp(1, 6),
            text,
            centered,
        });
    }

    pub fn add_textfield(&mut self, text: &str, class: Option<&str>, centered: bool) {
        let text = self.lang.process(text);
        self.fields.push(Field::Textfield {
            text,
            class: class.map(str::to_owned),
            centered,
        });
    }

    pub fn add_image(&mut self, url: &str, alt: &str, centered: bool) {
        let alt = self.lang.process(alt);
        self.fields.push(Field::Image {
            url: url.to_owned(),
            alt,
            centered,
        });
    }

    pub fn add_divider(&mut self) {
        self.fields.push(Field::Divider);
    }

    pub fn add_button(
        &mut self,
        name: &str,
        label: &str,
        on_click: impl FnMut(&Controller) + 'static,
    ) -> CatalystResult<&mut Controller> {
        self.add_controller(Controller::button(name, label).on_click(on_click))
    }

    pub fn add_toggle(
        &mut self,
        name: &str,
        label_off: &str,
        label_on: &str,
        value: bool,
        callback: impl FnMut(&Controller, &ControllerValue) + 'static,
    ) -> CatalystResult<&mut Controller> {
        self.add_controller(Controller::toggle(name, label_off, label_on, value).with_callback(callback))
    }

    pub fn add_select(
        &mut self,
        name: &str,
        label: &str,
        options: Vec<String>,
        default_index: usize,
        callback: impl FnMut(&Controller, &ControllerValue) + 'static,
    ) -> CatalystResult<&mut Controller> {
        let c = Controller::select(name, label, options, default_index)?.with_callback(callback);
        self.add_controller(c)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_slider(
        &mut self,
        name: &str,
        label: &str,
        min: f64,
        max: f64,
        value: f64,
        step: f64,
        callback: impl FnMut(&Controller, &ControllerValue) + 'static,
    ) -> CatalystResult<&mut Controller> {
        let c = Controller::slider(name, label, min, max, value, step)?.with_callback(callback);
        self.add_controller(c)
    }

    pub fn add_textbox(
        &mut self,
        name: &str,
        label: &str,
        value: &str,
        callback: impl FnMut(&Controller, &ControllerValue) + 'static,
    ) -> CatalystResult<&mut Controller> {
        self.add_controller(Controller::textbox(name, label, value).with_callback(callback))
    }

    /// Announce every controller's starting value to its callback.
    pub fn setup(&mut self) {
        for c in &mut self.controllers {
            c.emit_current();
        }
    }

    /// Snapshot of all valued controllers, in registration order.
    pub fn get_state(&self) -> GuiState {
        self.controllers
            .iter()
            .filter_map(|c| c.value_for_json().map(|v| (c.name().to_owned(), v)))
            .collect()
    }

    /// Apply a snapshot without producing any commit.
    ///
    /// Unknown names are skipped and malformed entries are logged and skipped. A value outside
    /// a controller's options aborts the restore before any controller is touched.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = state.len()))]
    pub fn restore_state(&mut self, state: &GuiState) -> CatalystResult<()> {
        let mut staged = Vec::with_capacity(state.len());
        for (name, value) in state.iter() {
            let Some(c) = self.controller(name) else {
                tracing::debug!(name, "snapshot entry has no controller");
                continue;
            };
            if c.value_for_json().is_none() {
                continue;
            }
            match c.check_value(value.clone()) {
                Ok(v) => staged.push((name, v)),
                Err(err) if err.is_malformed() => {}
                Err(err) => return Err(err),
            }
        }
        for (name, value) in staged {
            if let Some(c) = self.controller_mut(name) {
                c.commit_checked(&value);
            }
        }
        Ok(())
    }

    pub fn set_value(&mut self, name: &str, value: ControllerValue) -> CatalystResult<Commit> {
        self.expect_mut(name)?.set_value(value)
    }

    pub fn click(&mut self, name: &str) -> CatalystResult<Commit> {
        self.expect_mut(name)?.click()
    }

    pub fn press(&mut self, name: &str) -> CatalystResult<()> {
        self.expect_mut(name)?.press()
    }

    pub fn drag_to(&mut self, name: &str, x: f64, y: f64) -> CatalystResult<Commit> {
        self.expect_mut(name)?.drag_to(x, y)
    }

    pub fn release(&mut self, name: &str, x: f64, y: f64) -> CatalystResult<Commit> {
        self.expect_mut(name)?.release(x, y)
    }

    pub fn randomize(&mut self, name: &str, rng: &mut impl Rng) -> CatalystResult<Option<Commit>> {
        self.expect_mut(name)?.randomize(rng)
    }

    /// Randomize every randomizable controller; the batch is one commit.
    pub fn randomize_all(&mut self, rng: &mut impl Rng) -> CatalystResult<Option<Commit>> {
        let mut changed = false;
        for c in self.controllers.iter_mut().filter(|c| c.is_randomizable()) {
            changed |= c.randomize(rng)?.is_some();
        }
        Ok(changed.then_some(Commit::Capture))
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.next();
        self.theme
    }

    pub fn side(&self) -> GuiSide {
        self.side
    }

    pub fn toggle_side(&mut self) -> GuiSide {
        self.side = self.side.toggled();
        self.side
    }

    pub fn is_typing_text(&self) -> bool {
        self.typing_text
    }

    pub fn set_typing_text(&mut self, typing: bool) {
        self.typing_text = typing;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui/registry.rs"]
mod tests;
