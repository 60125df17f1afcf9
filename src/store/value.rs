//! Typed access to stored values
//!
//! Values are kept as strings. [`IniValue`] is the default conversion pair
//! used by [`IniStore::get`] and [`IniStore::set`]; [`IniStore::get_with`] and
//! [`IniStore::set_with`] take the pair per call instead.

use std::path::PathBuf;

use log::warn;

use super::{put, IniStore};
use crate::error::IniError;
use crate::utils::trim_blanks;

/// Conversion between a type and its INI string form
pub trait IniValue: Sized {
    /// Parse a stored value, `None` if it doesn't represent a `Self`
    fn from_ini(value: &str) -> Option<Self>;

    /// Render `self` for storage
    fn to_ini(&self) -> String;
}

macro_rules! impl_ini_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IniValue for $ty {
                fn from_ini(value: &str) -> Option<Self> {
                    trim_blanks(value).parse().ok()
                }

                fn to_ini(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_ini_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl IniValue for String {
    fn from_ini(value: &str) -> Option<Self> {
        Some(value.to_string())
    }

    fn to_ini(&self) -> String {
        self.clone()
    }
}

impl IniValue for bool {
    fn from_ini(value: &str) -> Option<Self> {
        match trim_blanks(value).to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    fn to_ini(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl IniValue for char {
    fn from_ini(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl IniValue for PathBuf {
    fn from_ini(value: &str) -> Option<Self> {
        Some(PathBuf::from(value))
    }

    fn to_ini(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl IniStore {
    /// Returns the stored value converted to `T`, or stores `default`
    ///
    /// On a miss `default` is rendered with [`IniValue::to_ini`], inserted,
    /// and returned as is. A stored value that doesn't parse is an
    /// [`IniError::Conversion`].
    pub fn get<T: IniValue>(&mut self, section: &str, key: &str, default: T) -> Result<T, IniError> {
        self.get_with(section, key, default, T::from_ini, T::to_ini)
    }

    /// Like [`IniStore::get`], but a value that doesn't parse yields
    /// `T::default()` instead of an error
    pub fn get_or_default<T: IniValue + Default>(&mut self, section: &str, key: &str, default: T) -> T {
        match self.get(section, key, default) {
            Ok(value) => value,
            Err(err) => {
                warn!("{}, using the type default", err);
                T::default()
            }
        }
    }

    /// [`IniStore::get`] with an explicit conversion pair
    pub fn get_with<T, P, F>(
        &mut self,
        section: &str,
        key: &str,
        default: T,
        parse: P,
        format: F,
    ) -> Result<T, IniError>
    where
        P: FnOnce(&str) -> Option<T>,
        F: FnOnce(&T) -> String,
    {
        if let Some(stored) = self.data.get(section).and_then(|items| items.get(key)) {
            return parse(stored).ok_or_else(|| IniError::Conversion {
                section: section.to_string(),
                key: key.to_string(),
                value: stored.clone(),
            });
        }

        put(self.section_mut(section), key, format(&default));
        Ok(default)
    }

    /// Store `value` rendered with [`IniValue::to_ini`]
    pub fn set<T: IniValue>(&mut self, section: &str, key: &str, value: &T) {
        self.set_str(section, key, &value.to_ini());
    }

    /// Store `value` rendered with `format`
    pub fn set_with<T, F>(&mut self, section: &str, key: &str, value: &T, format: F)
    where
        F: FnOnce(&T) -> String,
    {
        self.set_str(section, key, &format(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_get_miss_stores_rendered_default() {
        let mut store = IniStore::new();

        assert_eq!(store.get("window", "width", 1280u32).unwrap(), 1280);
        assert_eq!(store.get_str("window", "width", "0"), "1280");
        assert_eq!(store.get("window", "scale", 1.5f64).unwrap(), 1.5);
        assert_eq!(store.get_str("window", "scale", ""), "1.5");
    }

    #[test]
    fn test_get_hit_parses_stored_value() {
        let mut store: IniStore = "[net]\nport = 8080 \nverbose = Yes\n".parse().unwrap();

        assert_eq!(store.get("net", "port", 0u16).unwrap(), 8080);
        assert!(store.get("net", "verbose", false).unwrap());
    }

    #[test]
    fn test_get_conversion_failure() {
        let mut store: IniStore = "[net]\nport = eighty\n".parse().unwrap();

        let err = store.get("net", "port", 80u16).unwrap_err();
        match err {
            IniError::Conversion { section, key, value } => {
                assert_eq!(section, "net");
                assert_eq!(key, "port");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_or_default_falls_back() {
        let mut store: IniStore = "[net]\nport = eighty\n".parse().unwrap();

        assert_eq!(store.get_or_default("net", "port", 80u16), 0);
        assert_eq!(store.get_or_default("net", "retries", 3u8), 3);
        assert_eq!(store.get_str("net", "port", ""), "eighty");
    }

    #[test]
    fn test_set_typed_values() {
        let mut store = IniStore::new();
        store.set("ui", "dark", &true);
        store.set("ui", "opacity", &0.25f32);
        store.set("ui", "mark", &'*');
        store.set("ui", "theme", &PathBuf::from("/usr/share/themes/dark"));

        assert_eq!(
            store.to_string(),
            "[ui]\ndark = true\nopacity = 0.25\nmark = *\ntheme = /usr/share/themes/dark\n\n"
        );
    }

    #[test]
    fn test_custom_conversion_pair() {
        let mut store = IniStore::new();
        let as_secs = |d: &Duration| format!("{}s", d.as_secs());
        let parse_secs = |s: &str| s.strip_suffix('s')?.parse::<u64>().ok().map(Duration::from_secs);

        let timeout = store
            .get_with("net", "timeout", Duration::from_secs(30), parse_secs, as_secs)
            .unwrap();
        assert_eq!(timeout, Duration::from_secs(30));
        assert_eq!(store.get_str("net", "timeout", ""), "30s");

        store.set_with("net", "timeout", &Duration::from_secs(5), as_secs);
        let timeout = store
            .get_with("net", "timeout", Duration::ZERO, parse_secs, as_secs)
            .unwrap();
        assert_eq!(timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bool_and_char_parsing() {
        assert_eq!(bool::from_ini("OFF"), Some(false));
        assert_eq!(bool::from_ini("1"), Some(true));
        assert_eq!(bool::from_ini("maybe"), None);
        assert_eq!(char::from_ini("x"), Some('x'));
        assert_eq!(char::from_ini("xy"), None);
        assert_eq!(char::from_ini(""), None);
    }
}
