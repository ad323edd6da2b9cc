use super::*;

#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: usize,
}

impl PreferenceStore for CountingStore {
    fn read(&self, key: &str) -> Option<String> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.inner.write(key, value);
    }
}

#[test]
fn empty_store_follows_system_hint() {
    let store = MemoryStore::default();
    assert_eq!(stored_theme(&store), None);
    assert_eq!(load_theme(&store, false), Theme::Light);
    assert_eq!(load_theme(&store, true), Theme::Dark);
}

#[test]
fn stored_flag_overrides_system_hint() {
    let mut store = MemoryStore::default();
    store.write(DARK_MODE_KEY, "false");
    assert_eq!(load_theme(&store, true), Theme::Light);
    store.write(DARK_MODE_KEY, "true");
    assert_eq!(load_theme(&store, false), Theme::Dark);
}

#[test]
fn unrecognized_stored_value_reads_as_light() {
    let mut store = MemoryStore::default();
    store.write(DARK_MODE_KEY, "yes");
    assert_eq!(load_theme(&store, true), Theme::Light);
}

#[test]
fn toggle_flips_and_persists_once() {
    let mut store = CountingStore::default();
    let next = toggle_theme(Theme::Light, &mut store);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.writes, 1);
    assert_eq!(store.read(DARK_MODE_KEY).as_deref(), Some("true"));

    let back = toggle_theme(next, &mut store);
    assert_eq!(back, Theme::Light);
    assert_eq!(store.writes, 2);
    assert_eq!(store.read(DARK_MODE_KEY).as_deref(), Some("false"));
}

#[test]
fn theme_attribute_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::default().as_str(), "light");
    assert!(Theme::Light.toggled().is_dark());
}
