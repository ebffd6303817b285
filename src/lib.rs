//! Catalyst is a creative-coding sketch scaffold.
//!
//! A sketch is a [`Generator`] that draws animated frames, a [`Gui`] of typed controllers that
//! steer it, and a [`ChangeSet`] that records every committed GUI state for undo and redo.
//!
//! # Data flow
//!
//! 1. A controller receives a new value, validates it, stores it, and calls its callback.
//! 2. The controller hands back a [`Commit`] verdict; [`Sketch`] captures the GUI state into the
//!    changeset when the verdict is [`Commit::Capture`].
//! 3. Undo and redo replay a recorded snapshot through [`Gui::restore_state`], which has no
//!    route back to the changeset.
//!
//! Snapshots serialize as `{"gui": {"<controller>": <value>, ...}}` and double as the settings
//! export format.
#![forbid(unsafe_code)]

pub mod changeset;
pub mod color;
pub mod foundation;
pub mod generator;
pub mod geometry;
pub mod gui;
pub mod i18n;
pub mod sketch;

pub use changeset::ledger::{ChangeSet, ChangeSetConfig, DEFAULT_STORAGE_KEY, ExportedSettings};
pub use changeset::storage::{FileStore, KeyValueStore, MemoryStore};
pub use color::oklab::{OkLab, lerp_color_oklab};
pub use color::rgba::Color;
pub use foundation::core::Canvas;
pub use foundation::error::{CatalystError, CatalystResult};
pub use generator::scene::Generator;
pub use generator::surface::{CpuSurface, FrameRgba, RenderSurface};
pub use generator::timeline::Timeline;
pub use gui::controller::{
    Axis, Commit, ConsoleKind, Controller, ControllerKind, DragState, FileKind, LoadedFile,
};
pub use gui::field::Field;
pub use gui::registry::Gui;
pub use gui::theme::{GuiSide, ThemeMode};
pub use gui::value::{ControllerValue, GuiState, SettingsDocument};
pub use i18n::Lang;
pub use sketch::config::SketchConfig;
pub use sketch::input::{Key, KeyAction, KeyPress, Modifiers};
pub use sketch::session::Sketch;
