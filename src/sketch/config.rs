use std::path::{Path, PathBuf};

use crate::{
    changeset::ledger::ChangeSetConfig,
    foundation::{
        core::Canvas,
        error::{CatalystError, CatalystResult},
    },
    generator::timeline::Timeline,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub duration_secs: f64,
    /// Seed for every random choice; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Resume from and write back to the persisted changeset slot.
    pub persist: bool,
    /// Directory for persisted slots. In-memory when absent.
    pub storage_dir: Option<PathBuf>,
    pub max_history: Option<usize>,
    pub locale: String,
    /// Where the save-frame shortcut writes PNGs.
    pub output_dir: PathBuf,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
            fps: 30.0,
            duration_secs: 10.0,
            seed: None,
            persist: false,
            storage_dir: None,
            max_history: None,
            locale: "en".to_owned(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SketchConfig {
    pub fn from_json(text: &str) -> CatalystResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> CatalystResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CatalystError::validation(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> CatalystResult<()> {
        self.canvas()?;
        Timeline::new(self.fps, self.duration_secs, 1.0)?;
        Ok(())
    }

    pub fn canvas(&self) -> CatalystResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    pub fn timeline(&self, speed: f64) -> CatalystResult<Timeline> {
        Timeline::new(self.fps, self.duration_secs, speed)
    }

    pub fn changeset(&self) -> ChangeSetConfig {
        ChangeSetConfig {
            max_entries: self.max_history,
            ..ChangeSetConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/config.rs"]
mod tests;
