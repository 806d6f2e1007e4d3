use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_parses_known_values_only() {
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("Dark"), None);
    assert_eq!(ThemeMode::parse(""), None);
}

#[test]
fn theme_mode_strings_round_trip() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
    }
}

#[test]
fn toggle_icon_points_to_other_mode() {
    assert_eq!(ThemeMode::Light.toggle_icon(), "☾");
    assert_eq!(ThemeMode::Dark.toggle_icon(), "☀");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn load_defaults_to_light_when_absent() {
    assert_eq!(ThemeState::load(&MemoryStorage::default()).mode(), ThemeMode::Light);
}

#[test]
fn load_defaults_to_light_when_invalid() {
    let store = MemoryStorage::with(THEME_KEY, "sepia");
    assert_eq!(ThemeState::load(&store).mode(), ThemeMode::Light);
}

#[test]
fn load_reads_persisted_dark() {
    let store = MemoryStorage::with(THEME_KEY, "dark");
    assert_eq!(ThemeState::load(&store).mode(), ThemeMode::Dark);
}

#[test]
fn toggle_persists_each_change() {
    let store = MemoryStorage::default();
    let mut theme = ThemeState::load(&store);

    assert_eq!(theme.toggle(&store), ThemeMode::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some(theme.mode().as_str()));

    assert_eq!(theme.toggle(&store), ThemeMode::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some(theme.mode().as_str()));
}

#[test]
fn toggling_twice_restores_original() {
    let store = MemoryStorage::with(THEME_KEY, "dark");
    let mut theme = ThemeState::load(&store);
    let original = theme.mode();
    theme.toggle(&store);
    theme.toggle(&store);
    assert_eq!(theme.mode(), original);
    assert_eq!(ThemeState::load(&store).mode(), original);
}
