use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::foundation::error::{CatalystError, CatalystResult};

/// Named text slots. Last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> CatalystResult<()>;
    fn remove(&mut self, key: &str) -> CatalystResult<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CatalystResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CatalystResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// One plain-text file per key inside `dir`; the directory is created on first write.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> CatalystResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CatalystError::storage(format!("invalid store key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.txt")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %err, "store read failed");
                }
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> CatalystResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            CatalystError::storage(format!("create '{}': {e}", self.dir.display()))
        })?;
        fs::write(&path, value)
            .map_err(|e| CatalystError::storage(format!("write '{}': {e}", path.display())))
    }

    fn remove(&mut self, key: &str) -> CatalystResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CatalystError::storage(format!(
                "remove '{}': {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/changeset/storage.rs"]
mod tests;
