pub type CatalystResult<T> = Result<T, CatalystError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalystError {
    #[error("invalid option for '{controller}': {value}")]
    InvalidOption { controller: String, value: String },

    #[error("malformed value for '{controller}': {reason}")]
    MalformedValue { controller: String, reason: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalystError {
    pub fn invalid_option(controller: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            controller: controller.into(),
            value: value.into(),
        }
    }

    pub fn malformed(controller: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            controller: controller.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Malformed values are recoverable: the caller logs them and keeps the old value.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedValue { .. })
    }
}

impl From<serde_json::Error> for CatalystError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
