use super::*;

#[test]
fn undo_redo_chords() {
    assert_eq!(action_for(KeyPress::ctrl(Key::Char('z'))), Some(KeyAction::Undo));
    assert_eq!(action_for(KeyPress::ctrl(Key::Char('Z'))), Some(KeyAction::Undo));
    assert_eq!(
        action_for(KeyPress::ctrl_shift(Key::Char('z'))),
        Some(KeyAction::Redo)
    );
    assert_eq!(action_for(KeyPress::ctrl(Key::Char('y'))), Some(KeyAction::Redo));
    assert_eq!(action_for(KeyPress::ctrl(Key::Char('b'))), None);
    assert_eq!(action_for(KeyPress::ctrl(Key::Space)), None);
}

#[test]
fn plain_keys() {
    assert_eq!(action_for(KeyPress::plain(Key::Char('z'))), None);
    assert_eq!(
        action_for(KeyPress::plain(Key::Char('B'))),
        Some(KeyAction::ToggleSide)
    );
    assert_eq!(
        action_for(KeyPress::plain(Key::Char('7'))),
        Some(KeyAction::ToggleFlag(7))
    );
    assert_eq!(
        action_for(KeyPress::plain(Key::Space)),
        Some(KeyAction::TogglePlay)
    );
    assert_eq!(
        action_for(KeyPress::plain(Key::Char(']'))),
        Some(KeyAction::JumpFrames(100))
    );
    assert_eq!(
        action_for(KeyPress::plain(Key::ArrowDown)),
        Some(KeyAction::StepCounter(-1))
    );
}
