//! Text resolution for GUI labels.
//!
//! Labels may embed `LANG_*` tokens (`"LANG_WIDTH:"`); [`Lang::process`] swaps each
//! token for the active locale's text and leaves unknown tokens untouched.

use std::collections::BTreeMap;

use crate::foundation::error::CatalystResult;

const TOKEN_PREFIX: &str = "LANG_";

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Lang {
    locale: String,
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Lang {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Tables in `{ "<locale>": { "LANG_KEY": "text" } }` form.
    pub fn from_json(locale: impl Into<String>, json: &str) -> CatalystResult<Self> {
        let tables = serde_json::from_str(json)?;
        Ok(Self {
            locale: locale.into(),
            tables,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.locale)
            .and_then(|t| t.get(key))
            .map(String::as_str)
    }

    pub fn process(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(TOKEN_PREFIX) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let end = tail[TOKEN_PREFIX.len()..]
                .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'))
                .map_or(tail.len(), |i| i + TOKEN_PREFIX.len());
            let token = &tail[..end];
            match self.lookup(token) {
                Some(resolved) => out.push_str(resolved),
                None => {
                    tracing::debug!(token, locale = %self.locale, "unresolved text token");
                    out.push_str(token);
                }
            }
            rest = &tail[end..];
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/i18n/lang.rs"]
mod tests;
