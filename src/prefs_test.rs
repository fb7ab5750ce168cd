use super::*;
use crate::storage::MemoryStore;

fn store_with(entries: &[(&str, &str)]) -> PreferenceStore {
    let storage = entries
        .iter()
        .fold(MemoryStore::new(), |store, (key, value)| store.with_entry(key, value));
    PreferenceStore::new(Box::new(storage), &Config::default())
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_blue() {
    assert_eq!(Theme::default(), Theme::Blue);
}

#[test]
fn theme_accent_table() {
    assert_eq!(Theme::Blue.accent_color(), "#0066FF");
    assert_eq!(Theme::Green.accent_color(), "#00D98B");
    assert_eq!(Theme::Gold.accent_color(), "#FFB800");
    assert_eq!(Theme::Coral.accent_color(), "#FF6B6B");
}

#[test]
fn theme_parses_its_own_name() {
    for theme in Theme::ALL {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn theme_parse_is_case_sensitive() {
    let err = "Blue".parse::<Theme>().expect_err("should fail");
    assert_eq!(err.kind, "theme");
    assert_eq!(err.value, "Blue");
}

#[test]
fn theme_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Theme::Coral).expect("serialize");
    assert_eq!(json, "\"coral\"");
    let back: Theme = serde_json::from_str("\"gold\"").expect("deserialize");
    assert_eq!(back, Theme::Gold);
}

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_dark() {
    assert_eq!(Mode::default(), Mode::Dark);
}

#[test]
fn mode_toggle_flips() {
    assert_eq!(Mode::Dark.toggled(), Mode::Light);
    assert_eq!(Mode::Light.toggled(), Mode::Dark);
}

#[test]
fn mode_parse_rejects_unknown() {
    assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
    assert!("dim".parse::<Mode>().is_err());
}

// =============================================================
// PreferenceStore
// =============================================================

#[test]
fn empty_storage_yields_defaults() {
    let store = store_with(&[]);
    assert_eq!(store.theme(), Theme::Blue);
    assert_eq!(store.mode(), Mode::Dark);
}

#[test]
fn stored_values_are_read_back() {
    let store = store_with(&[("resume-theme", "coral"), ("resume-mode", "light")]);
    assert_eq!(store.theme(), Theme::Coral);
    assert_eq!(store.mode(), Mode::Light);
}

#[test]
fn unrecognized_stored_values_fall_back_to_defaults() {
    let store = store_with(&[("resume-theme", "purple"), ("resume-mode", "sepia")]);
    assert_eq!(store.theme(), Theme::Blue);
    assert_eq!(store.mode(), Mode::Dark);
}

#[test]
fn writes_persist_independently() {
    let mut store = store_with(&[]);
    store.set_theme(Theme::Gold).expect("set theme");
    assert_eq!(store.theme(), Theme::Gold);
    assert_eq!(store.mode(), Mode::Dark);

    store.set_mode(Mode::Light).expect("set mode");
    assert_eq!(store.theme(), Theme::Gold);
    assert_eq!(store.mode(), Mode::Light);
}

#[test]
fn custom_keys_are_honored() {
    let config = Config { theme_key: "t".to_owned(), mode_key: "m".to_owned(), ..Config::default() };
    let storage = MemoryStore::new().with_entry("t", "green").with_entry("resume-theme", "coral");
    let store = PreferenceStore::new(Box::new(storage), &config);
    assert_eq!(store.theme(), Theme::Green);
}
