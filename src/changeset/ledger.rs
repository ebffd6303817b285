use crate::{
    changeset::storage::KeyValueStore,
    foundation::error::CatalystResult,
    gui::{registry::Gui, value::SettingsDocument},
};

pub const DEFAULT_STORAGE_KEY: &str = "changeset";

/// Persisted text this short (`""`, `"{}"`) counts as nothing persisted.
const MIN_PERSISTED_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChangeSetConfig {
    pub storage_key: String,
    /// Oldest entries are evicted beyond this depth; `None` keeps everything.
    pub max_entries: Option<usize>,
}

impl Default for ChangeSetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            max_entries: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedSettings {
    pub file_name: String,
    pub contents: String,
}

/// Linear undo/redo history of serialized GUI snapshots.
///
/// `index` is `None` only while empty; otherwise it points at the current entry. Appending
/// discards every entry after `index`, and an append equal to the current entry is ignored.
pub struct ChangeSet {
    config: ChangeSetConfig,
    entries: Vec<String>,
    index: Option<usize>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl std::fmt::Debug for ChangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSet")
            .field("config", &self.config)
            .field("len", &self.entries.len())
            .field("index", &self.index)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

impl Default for ChangeSet {
    fn default() -> Self {
        Self::new(ChangeSetConfig::default())
    }
}

impl ChangeSet {
    /// In-memory ledger, nothing persisted.
    pub fn new(config: ChangeSetConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            index: None,
            store: None,
        }
    }

    /// Ledger that mirrors every new entry into `store`.
    pub fn with_store(config: ChangeSetConfig, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store: Some(store),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &ChangeSetConfig {
        &self.config
    }

    pub fn store(&self) -> Option<&dyn KeyValueStore> {
        self.store.as_deref()
    }

    pub fn store_mut(&mut self) -> Option<&mut (dyn KeyValueStore + 'static)> {
        self.store.as_deref_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.entries[i].as_str())
    }

    pub fn can_undo(&self) -> bool {
        self.index.is_some_and(|i| i > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.index.is_some_and(|i| i + 1 < self.entries.len())
    }

    /// Reset and record the first entry, resuming from the persisted slot when asked and present.
    #[tracing::instrument(skip(self, gui))]
    pub fn initialize(&mut self, gui: &mut Gui, from_persisted: bool) -> CatalystResult<()> {
        self.entries.clear();
        self.index = None;

        if from_persisted {
            match self.persisted_document() {
                Some(doc) => match gui.restore_state(&doc.gui) {
                    Ok(()) => tracing::debug!("resumed from persisted snapshot"),
                    Err(err) => {
                        tracing::warn!(error = %err, "persisted snapshot rejected, starting fresh")
                    }
                },
                None => tracing::debug!("no persisted state"),
            }
        }
        self.capture(gui)?;
        Ok(())
    }

    fn persisted_document(&self) -> Option<SettingsDocument> {
        let text = self.store.as_ref()?.get(&self.config.storage_key)?;
        if text.trim().len() < MIN_PERSISTED_LEN {
            return None;
        }
        match SettingsDocument::from_json(&text) {
            Ok(doc) => Some(doc),
            Err(err) => {
                tracing::warn!(error = %err, "persisted snapshot is not valid settings json");
                None
            }
        }
    }

    /// Record the live GUI state. Returns `false` when it equals the current entry.
    #[tracing::instrument(level = "debug", skip(self, gui), fields(index = ?self.index))]
    pub fn capture(&mut self, gui: &Gui) -> CatalystResult<bool> {
        let text = SettingsDocument::new(gui.get_state()).to_compact_json()?;
        Ok(self.push_entry(text))
    }

    fn push_entry(&mut self, text: String) -> bool {
        if self.current() == Some(text.as_str()) {
            return false;
        }
        let keep = self.index.map_or(0, |i| i + 1);
        let discarded = self.entries.len().saturating_sub(keep);
        if discarded > 0 {
            tracing::debug!(discarded, "redo branch truncated");
        }
        self.entries.truncate(keep);
        self.entries.push(text);

        if let Some(max) = self.config.max_entries.filter(|&m| m > 0)
            && self.entries.len() > max
        {
            let evicted = self.entries.len() - max;
            self.entries.drain(..evicted);
        }
        self.index = Some(self.entries.len() - 1);
        self.persist_current();
        true
    }

    fn persist_current(&mut self) {
        let Some(i) = self.index else { return };
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = store.set(&self.config.storage_key, &self.entries[i]) {
            tracing::warn!(error = %err, "persisting changeset entry failed");
        }
    }

    fn restore_entry(&self, i: usize, gui: &mut Gui) -> CatalystResult<()> {
        let doc = SettingsDocument::from_json(&self.entries[i])?;
        gui.restore_state(&doc.gui)
    }

    /// Step back one entry. A no-op at the first entry.
    ///
    /// The index only moves once the entry is restored; a rejected entry leaves both the
    /// ledger and the GUI as they were.
    #[tracing::instrument(level = "debug", skip(self, gui), fields(index = ?self.index))]
    pub fn undo(&mut self, gui: &mut Gui) -> CatalystResult<bool> {
        match self.index {
            Some(i) if i > 0 => {
                self.restore_entry(i - 1, gui)?;
                self.index = Some(i - 1);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Step forward one entry. A no-op at the last entry.
    #[tracing::instrument(level = "debug", skip(self, gui), fields(index = ?self.index))]
    pub fn redo(&mut self, gui: &mut Gui) -> CatalystResult<bool> {
        match self.index {
            Some(i) if i + 1 < self.entries.len() => {
                self.restore_entry(i + 1, gui)?;
                self.index = Some(i + 1);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Apply an imported settings document, then record it as a user edit.
    ///
    /// Nothing is recorded when the GUI rejects the document.
    #[tracing::instrument(skip(self, gui, text), fields(bytes = text.len()))]
    pub fn load_external(&mut self, gui: &mut Gui, text: &str) -> CatalystResult<()> {
        let doc = SettingsDocument::from_json(text)?;
        let compact = doc.to_compact_json()?;
        gui.restore_state(&doc.gui)?;
        self.push_entry(compact);
        Ok(())
    }

    /// The current entry pretty-printed, named `"{prefix}_{suffix}.json"`.
    pub fn export_current(
        &self,
        prefix: &str,
        suffix: &str,
    ) -> CatalystResult<Option<ExportedSettings>> {
        let Some(text) = self.current() else {
            return Ok(None);
        };
        let contents = SettingsDocument::from_json(text)?.to_pretty_json()?;
        Ok(Some(ExportedSettings {
            file_name: format!("{prefix}_{suffix}.json"),
            contents,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/changeset/ledger.rs"]
mod tests;
