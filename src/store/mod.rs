//! Sectioned key/value store backed by the INI text format
//!
//! An [`IniStore`] keeps a two-level ordered map, section name to key to
//! value. Keys that appear before any `[section]` header live in the section
//! named `""`. Lookups through [`IniStore::get_str`] and the typed accessors
//! insert the default on a miss, so a first run against an empty file fills
//! the store with every key the application asked for.
//!
//! The store does no locking of its own. Mutation takes `&mut self`; callers
//! sharing one store between threads must wrap it (for instance in a `Mutex`).

use linked_hash_map::LinkedHashMap;
use std::path::PathBuf;

mod file;
mod parser;
mod value;
mod writer;

pub use value::IniValue;

/// Keys of one section mapped to their values, in insertion order
pub type Section = LinkedHashMap<String, String>;

/// Section names mapped to their contents, in insertion order
pub type SectionMap = LinkedHashMap<String, Section>;

/// In-memory INI document with an optional linked file
#[derive(Debug, Default)]
pub struct IniStore {
    /// Section name -> key -> value
    data: SectionMap,
    /// File written by `sync`; only set through `open` or `set_filename`
    filename: Option<PathBuf>,
    /// Sync to the linked file on `close` and on drop
    auto_sync: bool,
}

impl IniStore {
    /// Create an empty, unlinked store
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole section map
    pub fn data(&self) -> &SectionMap {
        &self.data
    }

    /// Mutable access to the section map
    pub fn data_mut(&mut self) -> &mut SectionMap {
        &mut self.data
    }

    /// Get a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.data.get(name)
    }

    /// Names of all sections, in document order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// True when the store holds no sections at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every section; the linked file and auto-sync flag are kept
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns whether `key` exists in `section`. Never inserts anything.
    pub fn exists(&self, section: &str, key: &str) -> bool {
        self.data
            .get(section)
            .is_some_and(|items| items.contains_key(key))
    }

    /// Returns the stored value, or inserts `default` and returns it
    ///
    /// The section is created when missing. Once a default has been inserted
    /// it sticks: later calls with a different default get the first one.
    pub fn get_str(&mut self, section: &str, key: &str, default: &str) -> &str {
        self.section_mut(section)
            .entry(key.to_string())
            .or_insert_with(|| default.to_string())
            .as_str()
    }

    /// Set `key` in `section` to `value`, creating both when missing
    pub fn set_str(&mut self, section: &str, key: &str, value: &str) {
        put(self.section_mut(section), key, value.to_string());
    }

    /// Remove a key, returning its value. Empty sections are kept.
    pub fn remove_key(&mut self, section: &str, key: &str) -> Option<String> {
        self.data.get_mut(section)?.remove(key)
    }

    /// Remove a whole section with its keys
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.data.remove(name)
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        self.data
            .entry(name.to_string())
            .or_insert_with(Section::new)
    }
}

/// Store a value, keeping the key at its original position when overwriting
fn put(section: &mut Section, key: &str, value: String) {
    match section.get_mut(key) {
        Some(slot) => *slot = value,
        None => {
            section.insert(key.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_str_inserts_default_once() {
        let mut store = IniStore::new();

        assert!(!store.exists("net", "port"));
        assert_eq!(store.get_str("net", "port", "8080"), "8080");
        assert!(store.exists("net", "port"));
        assert_eq!(store.get_str("net", "port", "9090"), "8080");
    }

    #[test]
    fn test_exists_has_no_side_effect() {
        let store = IniStore::new();
        assert!(!store.exists("missing", "key"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_str_overwrites_in_place() {
        let mut store = IniStore::new();
        store.set_str("a", "first", "1");
        store.set_str("a", "second", "2");
        store.set_str("a", "first", "3");

        let section = store.section("a").unwrap();
        let pairs: Vec<(&str, &str)> = section
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("first", "3"), ("second", "2")]);
    }

    #[test]
    fn test_remove_key_and_section() {
        let mut store = IniStore::new();
        store.set_str("a", "k", "v");
        store.set_str("b", "k", "v");

        assert_eq!(store.remove_key("a", "k"), Some("v".to_string()));
        assert_eq!(store.remove_key("a", "k"), None);
        assert_eq!(store.remove_key("zzz", "k"), None);
        assert!(store.section("a").is_some());

        assert!(store.remove_section("b").is_some());
        assert_eq!(store.section_names().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_empty_section_name_is_a_normal_key() {
        let mut store = IniStore::new();
        store.set_str("", "top", "level");
        assert!(store.exists("", "top"));
        assert_eq!(store.section_names().collect::<Vec<_>>(), vec![""]);
    }
}
