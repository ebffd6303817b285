use super::*;

fn lang() -> Lang {
    Lang::from_json(
        "en",
        r#"{"en": {"LANG_WIDTH": "Width", "LANG_HEIGHT": "Height"}, "nl": {"LANG_WIDTH": "Breedte"}}"#,
    )
    .unwrap()
}

#[test]
fn replaces_known_tokens_and_keeps_punctuation() {
    assert_eq!(lang().process("LANG_WIDTH:"), "Width:");
    assert_eq!(
        lang().process("LANG_WIDTH x LANG_HEIGHT"),
        "Width x Height"
    );
}

#[test]
fn unknown_tokens_and_plain_text_pass_through() {
    assert_eq!(lang().process("Speed"), "Speed");
    assert_eq!(lang().process("LANG_MISSING!"), "LANG_MISSING!");
}

#[test]
fn locale_switch_changes_resolution() {
    let mut l = lang();
    l.set_locale("nl");
    assert_eq!(l.process("LANG_WIDTH"), "Breedte");
    assert_eq!(l.process("LANG_HEIGHT"), "LANG_HEIGHT");
}

#[test]
fn insert_adds_entries_for_any_locale() {
    let mut l = Lang::new("en");
    l.insert("en", "LANG_SPEED", "Speed");
    assert_eq!(l.lookup("LANG_SPEED"), Some("Speed"));
}
