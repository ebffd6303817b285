use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::{color::rgba::Color, foundation::error::CatalystResult};

/// Value held by a controller, in the form written to snapshots.
///
/// The JSON layout is untagged so exported settings stay readable:
/// `true`, `1.5`, `"text"`, `[r,g,b,a]`, `[[r,g,b,a], ...]`, `{"min","max"}`,
/// `{"x","y"}`, `{"w","h"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControllerValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Color(Color),
    Colors(Vec<Color>),
    Range { min: f64, max: f64 },
    Xy { x: f64, y: f64 },
    Size { w: u32, h: u32 },
}

impl ControllerValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Colors(_) => "color list",
            Self::Range { .. } => "range",
            Self::Xy { .. } => "xy",
            Self::Size { .. } => "size",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_colors(&self) -> Option<&[Color]> {
        match self {
            Self::Colors(c) => Some(c),
            _ => None,
        }
    }
}

impl From<bool> for ControllerValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for ControllerValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for ControllerValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for ControllerValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Color> for ControllerValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Vec<Color>> for ControllerValue {
    fn from(v: Vec<Color>) -> Self {
        Self::Colors(v)
    }
}

/// Snapshot of every valued controller, keyed by controller name in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuiState {
    entries: Vec<(String, ControllerValue)>,
}

impl GuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, keeping the original position of an existing key.
    pub fn insert(&mut self, name: impl Into<String>, value: ControllerValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ControllerValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControllerValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ControllerValue)> for GuiState {
    fn from_iter<I: IntoIterator<Item = (String, ControllerValue)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (name, value) in iter {
            state.insert(name, value);
        }
        state
    }
}

impl Serialize for GuiState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GuiState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StateVisitor;

        impl<'de> Visitor<'de> for StateVisitor {
            type Value = GuiState;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of controller names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut state = GuiState::new();
                while let Some((name, raw)) = access.next_entry::<String, serde_json::Value>()? {
                    match serde_json::from_value::<ControllerValue>(raw) {
                        Ok(value) => state.insert(name, value),
                        Err(err) => tracing::warn!(
                            controller = %name,
                            error = %err,
                            "dropping malformed snapshot value"
                        ),
                    }
                }
                Ok(state)
            }
        }

        deserializer.deserialize_map(StateVisitor)
    }
}

/// On-disk/ledger shape of one snapshot: `{"gui": {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub gui: GuiState,
}

impl SettingsDocument {
    pub fn new(gui: GuiState) -> Self {
        Self { gui }
    }

    pub fn from_json(text: &str) -> CatalystResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Canonical ledger form; textual equality of two entries means equal state.
    pub fn to_compact_json(&self) -> CatalystResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_pretty_json(&self) -> CatalystResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui/value.rs"]
mod tests;
