use std::fmt;

use rand::Rng;

use crate::{
    color::rgba::{Color, color_list_to_string, parse_color_list},
    foundation::{
        error::{CatalystError, CatalystResult},
        math::{lerp, snap_to_step},
    },
    gui::value::ControllerValue,
};

pub type ValueCallback = Box<dyn FnMut(&Controller, &ControllerValue)>;
pub type ClickCallback = Box<dyn FnMut(&Controller)>;
pub type FileCallback = Box<dyn FnMut(&Controller, &LoadedFile)>;

/// Whether a committed change should be recorded in the changeset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    Capture,
    /// Mid-gesture update; the gesture's release produces the capture.
    Deferred,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Normalized `[min, max]` domain with an optional step grid (`step == 0` is continuous).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    pub fn new(min: f64, max: f64, step: f64) -> CatalystResult<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(CatalystError::validation("axis bounds must be finite"));
        }
        if min > max {
            return Err(CatalystError::validation(format!(
                "axis min {min} exceeds max {max}"
            )));
        }
        if step < 0.0 {
            return Err(CatalystError::validation("axis step must be >= 0"));
        }
        Ok(Self { min, max, step })
    }

    pub fn snap(self, v: f64) -> f64 {
        snap_to_step(v, self.min, self.max, self.step)
    }

    fn sample(self, rng: &mut impl Rng) -> f64 {
        self.snap(lerp(self.min, self.max, rng.random::<f64>()))
    }

    /// Map a normalized coordinate in `[-1, 1]` onto the stepped range.
    fn at_normed(self, n: f64) -> f64 {
        let span = self.max - self.min;
        let t = (n.clamp(-1.0, 1.0) * 0.5 + 0.5).clamp(0.0, 1.0);
        if self.step <= 0.0 {
            return self.min + t * span;
        }
        let steps = (span / self.step).round();
        if steps <= 0.0 {
            return self.min;
        }
        self.min + (t * steps).round() / steps * span
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Json,
    Image,
}

impl FileKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Text => &["txt"],
            Self::Json => &["json"],
            Self::Image => &["jpg", "png", "gif", "tif"],
        }
    }

    pub fn accepts(self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| {
                self.extensions()
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(ext))
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleMessage {
    pub kind: ConsoleKind,
    pub text: String,
}

/// Per-kind state; one case per controller variant.
#[derive(Clone, Debug, PartialEq)]
pub enum ControllerKind {
    Button,
    FileLoader {
        kind: FileKind,
        file_name: Option<String>,
    },
    Toggle {
        labels: [String; 2],
        value: bool,
    },
    Select {
        options: Vec<String>,
        value: String,
    },
    Slider {
        axis: Axis,
        value: f64,
    },
    RangeSlider {
        axis: Axis,
        min: f64,
        max: f64,
    },
    XySlider {
        x_axis: Axis,
        y_axis: Axis,
        x: f64,
        y: f64,
        drag: DragState,
    },
    ColourBoxes {
        palette: Vec<Color>,
        index: usize,
    },
    MultiColourBoxes {
        palette: Vec<Color>,
        indices: Vec<usize>,
    },
    Textbox {
        value: String,
    },
    Textarea {
        value: String,
    },
    ColourTextArea {
        value: Vec<Color>,
    },
    ResolutionTextboxes {
        w: u32,
        h: u32,
    },
}

impl ControllerKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::FileLoader { .. } => "file loader",
            Self::Toggle { .. } => "toggle",
            Self::Select { .. } => "select",
            Self::Slider { .. } => "slider",
            Self::RangeSlider { .. } => "range slider",
            Self::XySlider { .. } => "xy slider",
            Self::ColourBoxes { .. } => "colour boxes",
            Self::MultiColourBoxes { .. } => "multi colour boxes",
            Self::Textbox { .. } => "textbox",
            Self::Textarea { .. } => "textarea",
            Self::ColourTextArea { .. } => "colour text area",
            Self::ResolutionTextboxes { .. } => "resolution textboxes",
        }
    }
}

/// One interactive, value-holding GUI widget.
pub struct Controller {
    name: String,
    label: Option<String>,
    tooltip: Option<String>,
    enabled: bool,
    hidden: bool,
    randomizable: bool,
    console: Option<ConsoleMessage>,
    kind: ControllerKind,
    on_change: Option<ValueCallback>,
    on_click: Option<ClickCallback>,
    on_file: Option<FileCallback>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Controller {
    fn with_kind(name: impl Into<String>, label: Option<String>, kind: ControllerKind) -> Self {
        Self {
            name: name.into(),
            label,
            tooltip: None,
            enabled: true,
            hidden: false,
            randomizable: false,
            console: None,
            kind,
            on_change: None,
            on_click: None,
            on_file: None,
        }
    }

    pub fn button(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(name, Some(label.into()), ControllerKind::Button)
    }

    pub fn file_loader(name: impl Into<String>, label: impl Into<String>, kind: FileKind) -> Self {
        Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::FileLoader {
                kind,
                file_name: None,
            },
        )
    }

    pub fn toggle(
        name: impl Into<String>,
        label_off: impl Into<String>,
        label_on: impl Into<String>,
        value: bool,
    ) -> Self {
        Self::with_kind(
            name,
            None,
            ControllerKind::Toggle {
                labels: [label_off.into(), label_on.into()],
                value,
            },
        )
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
        default_index: usize,
    ) -> CatalystResult<Self> {
        let name = name.into();
        let value = options.get(default_index).cloned().ok_or_else(|| {
            CatalystError::validation(format!(
                "select '{name}' default index {default_index} out of {} options",
                options.len()
            ))
        })?;
        Ok(Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::Select { options, value },
        ))
    }

    pub fn slider(
        name: impl Into<String>,
        label: impl Into<String>,
        min: f64,
        max: f64,
        value: f64,
        step: f64,
    ) -> CatalystResult<Self> {
        let axis = Axis::new(min, max, step)?;
        Ok(Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::Slider {
                axis,
                value: axis.snap(value),
            },
        ))
    }

    pub fn range_slider(
        name: impl Into<String>,
        label: impl Into<String>,
        axis: Axis,
        default_min: f64,
        default_max: f64,
    ) -> Self {
        let (min, max) = ordered(axis.snap(default_min), axis.snap(default_max));
        Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::RangeSlider { axis, min, max },
        )
    }

    pub fn xy_slider(
        name: impl Into<String>,
        label: impl Into<String>,
        x_axis: Axis,
        y_axis: Axis,
        default_x: f64,
        default_y: f64,
    ) -> Self {
        Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::XySlider {
                x_axis,
                y_axis,
                x: x_axis.snap(default_x),
                y: y_axis.snap(default_y),
                drag: DragState::Idle,
            },
        )
    }

    pub fn colour_boxes(
        name: impl Into<String>,
        label: impl Into<String>,
        palette: Vec<Color>,
        default_index: usize,
    ) -> CatalystResult<Self> {
        let name = name.into();
        if default_index >= palette.len() {
            return Err(CatalystError::validation(format!(
                "colour boxes '{name}' default index {default_index} out of {} colours",
                palette.len()
            )));
        }
        Ok(Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::ColourBoxes {
                palette,
                index: default_index,
            },
        ))
    }

    pub fn multi_colour_boxes(
        name: impl Into<String>,
        label: impl Into<String>,
        palette: Vec<Color>,
        default_indices: Vec<usize>,
    ) -> CatalystResult<Self> {
        let name = name.into();
        if let Some(bad) = default_indices.iter().find(|&&i| i >= palette.len()) {
            return Err(CatalystError::validation(format!(
                "multi colour boxes '{name}' index {bad} out of {} colours",
                palette.len()
            )));
        }
        Ok(Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::MultiColourBoxes {
                palette,
                indices: default_indices,
            },
        ))
    }

    pub fn textbox(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::Textbox {
                value: value.into(),
            },
        )
    }

    pub fn textarea(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::Textarea {
                value: value.into(),
            },
        )
    }

    pub fn colour_text_area(
        name: impl Into<String>,
        label: impl Into<String>,
        colors: Vec<Color>,
    ) -> Self {
        Self::with_kind(
            name,
            Some(label.into()),
            ControllerKind::ColourTextArea { value: colors },
        )
    }

    pub fn resolution_textboxes(name: impl Into<String>, w: u32, h: u32) -> Self {
        Self::with_kind(
            name,
            None,
            ControllerKind::ResolutionTextboxes {
                w: w.max(1),
                h: h.max(1),
            },
        )
    }

    pub fn with_callback(
        mut self,
        callback: impl FnMut(&Controller, &ControllerValue) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_click(mut self, callback: impl FnMut(&Controller) + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn on_file(mut self, callback: impl FnMut(&Controller, &LoadedFile) + 'static) -> Self {
        self.on_file = Some(Box::new(callback));
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Include this controller in [`crate::Gui::randomize_all`].
    pub fn randomizable(mut self, yes: bool) -> Self {
        self.randomizable = yes;
        self
    }

    pub fn set_randomizable(&mut self, yes: bool) {
        self.randomizable = yes;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = Some(tooltip.into());
    }

    pub fn kind(&self) -> &ControllerKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ControllerKind {
        &mut self.kind
    }

    pub fn is_randomizable(&self) -> bool {
        self.randomizable
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.enabled = !disabled;
    }

    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn console(&self) -> Option<&ConsoleMessage> {
        self.console.as_ref()
    }

    pub fn set_console(&mut self, text: impl Into<String>, kind: ConsoleKind) {
        let prefix = match kind {
            ConsoleKind::Info => "🔺 ",
            ConsoleKind::Warning => "⚠️ ",
            ConsoleKind::Error => "❌ ",
        };
        self.console = Some(ConsoleMessage {
            kind,
            text: format!("{prefix}{}", text.into()),
        });
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.set_console(text, ConsoleKind::Warning);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_console(text, ConsoleKind::Error);
    }

    pub fn clear_console(&mut self) {
        self.console = None;
    }

    pub fn drag_state(&self) -> DragState {
        match self.kind {
            ControllerKind::XySlider { drag, .. } => drag,
            _ => DragState::Idle,
        }
    }

    /// Persisted form of the current value; `None` for controllers without one.
    pub fn value_for_json(&self) -> Option<ControllerValue> {
        Some(match &self.kind {
            ControllerKind::Button | ControllerKind::FileLoader { .. } => return None,
            ControllerKind::Toggle { value, .. } => ControllerValue::Bool(*value),
            ControllerKind::Select { value, .. } => ControllerValue::Text(value.clone()),
            ControllerKind::Slider { value, .. } => ControllerValue::Number(*value),
            ControllerKind::RangeSlider { min, max, .. } => ControllerValue::Range {
                min: *min,
                max: *max,
            },
            ControllerKind::XySlider { x, y, .. } => ControllerValue::Xy { x: *x, y: *y },
            ControllerKind::ColourBoxes { palette, index } => {
                ControllerValue::Color(palette[*index])
            }
            ControllerKind::MultiColourBoxes { palette, indices } => {
                ControllerValue::Colors(indices.iter().map(|&i| palette[i]).collect())
            }
            ControllerKind::Textbox { value } | ControllerKind::Textarea { value } => {
                ControllerValue::Text(value.clone())
            }
            ControllerKind::ColourTextArea { value } => ControllerValue::Colors(value.clone()),
            ControllerKind::ResolutionTextboxes { w, h } => ControllerValue::Size { w: *w, h: *h },
        })
    }

    /// Validate, store, and announce a user-driven value change.
    pub fn set_value(&mut self, value: ControllerValue) -> CatalystResult<Commit> {
        self.apply_value(value)?;
        Ok(match self.drag_state() {
            DragState::Dragging => Commit::Deferred,
            DragState::Idle => Commit::Capture,
        })
    }

    /// Same as [`Controller::set_value`] without a capture verdict; used when replaying snapshots.
    pub fn apply_value(&mut self, value: ControllerValue) -> CatalystResult<()> {
        let normalized = self.check_value(value)?;
        self.commit_checked(&normalized);
        Ok(())
    }

    /// Validate `value` against this controller without touching it. Returns the stored form.
    pub fn check_value(&self, value: ControllerValue) -> CatalystResult<ControllerValue> {
        self.normalize(value).inspect_err(|err| {
            if err.is_malformed() {
                tracing::warn!(controller = %self.name, error = %err, "ignoring malformed value");
            }
        })
    }

    /// Store and announce a value already accepted by [`Controller::check_value`].
    pub(crate) fn commit_checked(&mut self, normalized: &ControllerValue) {
        self.store(normalized);
        self.notify(normalized);
    }

    /// Re-announce the current value to the callback (initial sync after setup).
    pub fn emit_current(&mut self) {
        if let Some(v) = self.value_for_json() {
            self.notify(&v);
        }
    }

    pub fn randomize(&mut self, rng: &mut impl Rng) -> CatalystResult<Option<Commit>> {
        let value = match &self.kind {
            ControllerKind::Toggle { .. } => ControllerValue::Bool(rng.random_bool(0.5)),
            ControllerKind::Select { options, .. } => {
                ControllerValue::Text(options[rng.random_range(0..options.len())].clone())
            }
            ControllerKind::Slider { axis, .. } => ControllerValue::Number(axis.sample(rng)),
            ControllerKind::RangeSlider { axis, .. } => {
                let pivot = lerp(axis.min, axis.max, rng.random::<f64>());
                ControllerValue::Range {
                    min: lerp(axis.min, pivot, rng.random::<f64>()),
                    max: lerp(pivot, axis.max, rng.random::<f64>()),
                }
            }
            ControllerKind::XySlider { x_axis, y_axis, .. } => ControllerValue::Xy {
                x: x_axis.at_normed(rng.random_range(-1.0..=1.0)),
                y: y_axis.at_normed(rng.random_range(-1.0..=1.0)),
            },
            ControllerKind::ColourBoxes { palette, .. } => {
                ControllerValue::Color(palette[rng.random_range(0..palette.len())])
            }
            ControllerKind::MultiColourBoxes { palette, .. } => {
                let mut picked: Vec<Color> = palette
                    .iter()
                    .copied()
                    .filter(|_| rng.random_bool(0.5))
                    .collect();
                if picked.is_empty() && !palette.is_empty() {
                    picked.push(palette[rng.random_range(0..palette.len())]);
                }
                ControllerValue::Colors(picked)
            }
            ControllerKind::Button
            | ControllerKind::FileLoader { .. }
            | ControllerKind::Textbox { .. }
            | ControllerKind::Textarea { .. }
            | ControllerKind::ColourTextArea { .. }
            | ControllerKind::ResolutionTextboxes { .. } => return Ok(None),
        };
        self.set_value(value).map(Some)
    }

    /// Buttons fire their click callback; toggles flip.
    pub fn click(&mut self) -> CatalystResult<Commit> {
        match &self.kind {
            ControllerKind::Button => {
                if let Some(mut cb) = self.on_click.take() {
                    cb(self);
                    self.on_click = Some(cb);
                }
                Ok(Commit::Capture)
            }
            ControllerKind::Toggle { value, .. } => {
                let flipped = !*value;
                self.set_value(ControllerValue::Bool(flipped))
            }
            other => Err(CatalystError::validation(format!(
                "'{}' is a {} and cannot be clicked",
                self.name,
                other.type_name()
            ))),
        }
    }

    /// Deliver a file to a file loader, checking its extension.
    pub fn load_file(&mut self, file: LoadedFile) -> CatalystResult<()> {
        let ControllerKind::FileLoader { kind, file_name } = &mut self.kind else {
            return Err(CatalystError::validation(format!(
                "'{}' is not a file loader",
                self.name
            )));
        };
        if !kind.accepts(&file.name) {
            return Err(CatalystError::validation(format!(
                "'{}' does not accept '{}' (expected {:?})",
                self.name,
                file.name,
                kind.extensions()
            )));
        }
        *file_name = Some(file.name.clone());
        if let Some(mut cb) = self.on_file.take() {
            cb(self, &file);
            self.on_file = Some(cb);
        }
        Ok(())
    }

    pub fn loaded_file_name(&self) -> Option<&str> {
        match &self.kind {
            ControllerKind::FileLoader { file_name, .. } => file_name.as_deref(),
            _ => None,
        }
    }

    /// Start a pointer drag; changes are deferred until [`Controller::release`].
    pub fn press(&mut self) -> CatalystResult<()> {
        match &mut self.kind {
            ControllerKind::XySlider { drag, .. } => {
                *drag = DragState::Dragging;
                Ok(())
            }
            other => Err(CatalystError::validation(format!(
                "'{}' is a {} and cannot be dragged",
                self.name,
                other.type_name()
            ))),
        }
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> CatalystResult<Commit> {
        if self.drag_state() == DragState::Idle {
            return Err(CatalystError::validation(format!(
                "'{}' received a drag move without a press",
                self.name
            )));
        }
        self.set_value(ControllerValue::Xy { x, y })
    }

    /// End the drag at `(x, y)`; always yields [`Commit::Capture`].
    ///
    /// A rejected release position keeps the last dragged value, which is what gets captured.
    pub fn release(&mut self, x: f64, y: f64) -> CatalystResult<Commit> {
        match &mut self.kind {
            ControllerKind::XySlider { drag, .. } => *drag = DragState::Idle,
            other => {
                return Err(CatalystError::validation(format!(
                    "'{}' is a {} and cannot be dragged",
                    self.name,
                    other.type_name()
                )));
            }
        }
        if self.apply_value(ControllerValue::Xy { x, y }).is_err() {
            tracing::debug!(controller = %self.name, "release kept the last drag position");
        }
        Ok(Commit::Capture)
    }

    /// Stepped value for a normalized `[-1, 1]` pointer position, snapping near-zero to the axes.
    pub fn value_from_normed(&self, nx: f64, ny: f64) -> Option<(f64, f64)> {
        const AXIS_SNAP: f64 = 0.033;
        let ControllerKind::XySlider { x_axis, y_axis, .. } = &self.kind else {
            return None;
        };
        let nx = if nx.abs() < AXIS_SNAP { 0.0 } else { nx };
        let ny = if ny.abs() < AXIS_SNAP { 0.0 } else { ny };
        Some((x_axis.at_normed(nx), y_axis.at_normed(ny)))
    }

    /// Live text edit preview: announces the parsed value without storing it.
    pub fn input_text(&mut self, text: &str) -> CatalystResult<()> {
        let preview = match &self.kind {
            ControllerKind::Textbox { .. } | ControllerKind::Textarea { .. } => {
                ControllerValue::Text(text.to_owned())
            }
            ControllerKind::ColourTextArea { .. } => {
                ControllerValue::Colors(parse_color_list(text))
            }
            other => {
                return Err(CatalystError::validation(format!(
                    "'{}' is a {} and takes no text input",
                    self.name,
                    other.type_name()
                )));
            }
        };
        self.notify(&preview);
        Ok(())
    }

    /// Width/height text entry for resolution boxes. Non-numeric input is ignored (`None`).
    pub fn input_dimension(&mut self, axis: Dimension, text: &str) -> CatalystResult<Option<Commit>> {
        let ControllerKind::ResolutionTextboxes { w, h } = self.kind else {
            return Err(CatalystError::validation(format!(
                "'{}' is not a resolution input",
                self.name
            )));
        };
        let Ok(px) = text.trim().parse::<u32>() else {
            return Ok(None);
        };
        let value = match axis {
            Dimension::Width => ControllerValue::Size { w: px, h },
            Dimension::Height => ControllerValue::Size { w, h: px },
        };
        self.set_value(value).map(Some)
    }

    /// Replace a select's options, keeping the selection when it is still offered.
    pub fn set_options(&mut self, new_options: Vec<String>) -> CatalystResult<()> {
        let ControllerKind::Select { options, value } = &mut self.kind else {
            return Err(CatalystError::validation(format!(
                "'{}' is not a select",
                self.name
            )));
        };
        let Some(first) = new_options.first().cloned() else {
            return Err(CatalystError::validation(format!(
                "select '{}' needs at least one option",
                self.name
            )));
        };
        let keep = new_options.contains(value);
        *options = new_options;
        if !keep {
            *value = first;
            let v = ControllerValue::Text(value.clone());
            self.notify(&v);
        }
        Ok(())
    }

    /// Replace a colour-box palette; the selection falls back to the first colour if it vanished.
    pub fn set_palette(&mut self, new_palette: Vec<Color>) -> CatalystResult<()> {
        if new_palette.is_empty() {
            return Err(CatalystError::validation(format!(
                "'{}' needs at least one colour",
                self.name
            )));
        }
        match &mut self.kind {
            ControllerKind::ColourBoxes { palette, index } => {
                let current = palette[*index];
                *index = new_palette.iter().position(|&c| c == current).unwrap_or(0);
                *palette = new_palette;
            }
            ControllerKind::MultiColourBoxes { palette, indices } => {
                let current: Vec<Color> = indices.iter().map(|&i| palette[i]).collect();
                *indices = current
                    .iter()
                    .filter_map(|c| new_palette.iter().position(|p| p == c))
                    .collect();
                *palette = new_palette;
            }
            other => {
                return Err(CatalystError::validation(format!(
                    "'{}' is a {} and has no palette",
                    self.name,
                    other.type_name()
                )));
            }
        }
        Ok(())
    }

    fn mismatch(&self, value: &ControllerValue) -> CatalystError {
        CatalystError::malformed(
            &self.name,
            format!(
                "{} cannot hold a {} value",
                self.kind.type_name(),
                value.kind_name()
            ),
        )
    }

    fn finite(&self, v: f64) -> CatalystResult<f64> {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(CatalystError::malformed(&self.name, format!("{v} is not finite")))
        }
    }

    fn palette_index(&self, palette: &[Color], c: Color) -> CatalystResult<usize> {
        palette
            .iter()
            .position(|p| *p == c)
            .ok_or_else(|| CatalystError::invalid_option(&self.name, c.to_hex(true)))
    }

    fn normalize(&self, value: ControllerValue) -> CatalystResult<ControllerValue> {
        match (&self.kind, value) {
            (ControllerKind::Toggle { .. }, v @ ControllerValue::Bool(_)) => Ok(v),
            (ControllerKind::Select { options, .. }, ControllerValue::Text(s)) => {
                if options.contains(&s) {
                    Ok(ControllerValue::Text(s))
                } else {
                    Err(CatalystError::invalid_option(&self.name, s))
                }
            }
            (ControllerKind::Slider { axis, .. }, ControllerValue::Number(n)) => {
                Ok(ControllerValue::Number(axis.snap(self.finite(n)?)))
            }
            (ControllerKind::RangeSlider { axis, .. }, ControllerValue::Range { min, max }) => {
                let (min, max) = ordered(
                    axis.snap(self.finite(min)?),
                    axis.snap(self.finite(max)?),
                );
                Ok(ControllerValue::Range { min, max })
            }
            (ControllerKind::XySlider { x_axis, y_axis, .. }, ControllerValue::Xy { x, y }) => {
                Ok(ControllerValue::Xy {
                    x: x_axis.snap(self.finite(x)?),
                    y: y_axis.snap(self.finite(y)?),
                })
            }
            (ControllerKind::ColourBoxes { palette, .. }, ControllerValue::Color(c)) => {
                self.palette_index(palette, c)?;
                Ok(ControllerValue::Color(c))
            }
            (ControllerKind::MultiColourBoxes { palette, .. }, ControllerValue::Colors(cs)) => {
                for c in &cs {
                    self.palette_index(palette, *c)?;
                }
                Ok(ControllerValue::Colors(cs))
            }
            (
                ControllerKind::Textbox { .. } | ControllerKind::Textarea { .. },
                v @ ControllerValue::Text(_),
            ) => Ok(v),
            (ControllerKind::ColourTextArea { .. }, v @ ControllerValue::Colors(_)) => Ok(v),
            (ControllerKind::ColourTextArea { .. }, ControllerValue::Text(s)) => {
                Ok(ControllerValue::Colors(parse_color_list(&s)))
            }
            (ControllerKind::ResolutionTextboxes { .. }, ControllerValue::Size { w, h }) => {
                if w == 0 || h == 0 {
                    Err(CatalystError::malformed(
                        &self.name,
                        format!("resolution {w}x{h} must be at least 1x1"),
                    ))
                } else {
                    Ok(ControllerValue::Size { w, h })
                }
            }
            (_, v) => Err(self.mismatch(&v)),
        }
    }

    fn store(&mut self, value: &ControllerValue) {
        // `normalize` guarantees the variant matches the kind.
        let (kind, value) = (&mut self.kind, value.clone());
        match (kind, value) {
            (ControllerKind::Toggle { value, .. }, ControllerValue::Bool(b)) => *value = b,
            (ControllerKind::Select { value, .. }, ControllerValue::Text(s)) => *value = s,
            (ControllerKind::Slider { value, .. }, ControllerValue::Number(n)) => *value = n,
            (
                ControllerKind::RangeSlider { min, max, .. },
                ControllerValue::Range { min: lo, max: hi },
            ) => {
                *min = lo;
                *max = hi;
            }
            (ControllerKind::XySlider { x, y, .. }, ControllerValue::Xy { x: nx, y: ny }) => {
                *x = nx;
                *y = ny;
            }
            (ControllerKind::ColourBoxes { palette, index }, ControllerValue::Color(c)) => {
                if let Some(i) = palette.iter().position(|p| *p == c) {
                    *index = i;
                }
            }
            (ControllerKind::MultiColourBoxes { palette, indices }, ControllerValue::Colors(cs)) => {
                *indices = cs
                    .iter()
                    .filter_map(|c| palette.iter().position(|p| p == c))
                    .collect();
            }
            (
                ControllerKind::Textbox { value } | ControllerKind::Textarea { value },
                ControllerValue::Text(s),
            ) => *value = s,
            (ControllerKind::ColourTextArea { value }, ControllerValue::Colors(cs)) => *value = cs,
            (ControllerKind::ResolutionTextboxes { w, h }, ControllerValue::Size { w: nw, h: nh }) => {
                *w = nw;
                *h = nh;
            }
            _ => {}
        }
    }

    fn notify(&mut self, value: &ControllerValue) {
        if let Some(mut cb) = self.on_change.take() {
            cb(self, value);
            self.on_change = Some(cb);
        }
    }

    /// Display text of a colour text area, as the user would see it.
    pub fn colour_text(&self) -> Option<String> {
        match &self.kind {
            ControllerKind::ColourTextArea { value } => Some(color_list_to_string(value)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
#[path = "../../tests/unit/gui/controller.rs"]
mod tests;
