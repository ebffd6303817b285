/// One entry of the GUI layout, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Label(String),
    Title {
        level: u8,
        text: String,
        centered: bool,
    },
    Textfield {
        text: String,
        class: Option<String>,
        centered: bool,
    },
    Image {
        url: String,
        alt: String,
        centered: bool,
    },
    Divider,
    /// Placeholder for the registered controller with this name.
    Controller(String),
}

impl Field {
    pub fn controller_name(&self) -> Option<&str> {
        match self {
            Self::Controller(name) => Some(name),
            _ => None,
        }
    }

    /// Visible text, if the field carries any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Label(text) | Self::Title { text, .. } | Self::Textfield { text, .. } => {
                Some(text)
            }
            Self::Image { alt, .. } => Some(alt),
            Self::Divider | Self::Controller(_) => None,
        }
    }
}
