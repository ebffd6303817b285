/// Storage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "isDarkMode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// Parse the stored preference; anything unrecognised means [`ThemeMode::Auto`].
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored.map(str::trim) {
            Some("false") => Self::Light,
            Some("true") => Self::Dark,
            _ => Self::Auto,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
            Self::Auto => "auto",
        }
    }

    /// Light -> Dark -> Auto -> Light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }

    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::Auto => system_prefers_dark,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuiSide {
    Left,
    #[default]
    Right,
}

impl GuiSide {
    pub fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui/theme.rs"]
mod tests;
