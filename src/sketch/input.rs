#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    ArrowUp,
    ArrowDown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                shift: false,
            },
        }
    }

    pub fn ctrl_shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                shift: true,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Undo,
    Redo,
    ToggleSide,
    ToggleTheme,
    TogglePlay,
    /// Flip utility flag `0..=9`.
    ToggleFlag(usize),
    StepCounter(i32),
    JumpFrames(i64),
    SaveFrame,
    Help,
}

/// Shortcut table. Unbound keys map to `None`.
pub fn action_for(press: KeyPress) -> Option<KeyAction> {
    let Modifiers { ctrl, shift } = press.modifiers;
    let ch = match press.key {
        Key::Char(c) => Some(c.to_ascii_lowercase()),
        _ => None,
    };

    if ctrl {
        return match ch? {
            'z' if shift => Some(KeyAction::Redo),
            'z' => Some(KeyAction::Undo),
            'y' => Some(KeyAction::Redo),
            _ => None,
        };
    }

    match press.key {
        Key::Space => return Some(KeyAction::TogglePlay),
        Key::ArrowUp => return Some(KeyAction::StepCounter(1)),
        Key::ArrowDown => return Some(KeyAction::StepCounter(-1)),
        Key::Char(_) => {}
    }

    match ch? {
        d @ '0'..='9' => Some(KeyAction::ToggleFlag(usize::from(d as u8 - b'0'))),
        ' ' => Some(KeyAction::TogglePlay),
        'b' => Some(KeyAction::ToggleSide),
        'm' => Some(KeyAction::ToggleTheme),
        '[' => Some(KeyAction::JumpFrames(-100)),
        ']' => Some(KeyAction::JumpFrames(100)),
        '-' => Some(KeyAction::JumpFrames(-1)),
        '=' => Some(KeyAction::JumpFrames(1)),
        's' => Some(KeyAction::SaveFrame),
        'h' => Some(KeyAction::Help),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/input.rs"]
mod tests;
