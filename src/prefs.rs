//! Persisted user preferences (color theme and interface language).
//!
//! Values resolve in priority order: an explicit `set`, then whatever the
//! key-value store holds, then a default derived from the browser
//! environment. Storage problems never surface as errors; an unreadable or
//! missing store simply reads as "nothing saved".

use std::{fmt, str::FromStr};

/// Minimal string store, shaped after `window.localStorage`.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// A preference with a fixed storage key and a closed set of legal values.
pub trait Preference: Copy + fmt::Debug + FromStr {
    const KEY: &'static str;

    fn as_str(&self) -> &'static str;

    /// Presentation attributes the page must carry while this value is active.
    fn document_attrs(&self) -> DocumentAttrs;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl FromStr for Theme {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl Preference for Theme {
    const KEY: &'static str = "color-theme";

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn document_attrs(&self) -> DocumentAttrs {
        DocumentAttrs::ColorScheme {
            dark: self.is_dark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    /// Maps a BCP 47 tag such as `ar-SA` to a supported language by its
    /// primary subtag. Anything unsupported falls back to English.
    pub fn from_locale(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        primary
            .to_ascii_lowercase()
            .parse()
            .unwrap_or(Language::En)
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn dir(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    /// Label shown on the switch button, written in the language it switches to.
    pub fn switch_label(self) -> &'static str {
        match self.toggle() {
            Language::En => "English",
            Language::Ar => "عربي",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl Preference for Language {
    const KEY: &'static str = "language";

    fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    fn document_attrs(&self) -> DocumentAttrs {
        DocumentAttrs::Locale {
            lang: self.as_str(),
            dir: self.dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference value: {0}")]
pub struct UnknownValue(String);

/// Presentation attributes on the `<html>` element that follow a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAttrs {
    /// Presence of the `dark` class.
    ColorScheme { dark: bool },
    /// The `lang` and `dir` attributes.
    Locale {
        lang: &'static str,
        dir: TextDirection,
    },
}

impl DocumentAttrs {
    /// Writes the attributes onto `document.documentElement`.
    /// Requires a browser environment; a no-op elsewhere.
    pub fn apply(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            match *self {
                DocumentAttrs::ColorScheme { dark } => {
                    let class_list = el.class_list();
                    let _ = if dark {
                        class_list.add_1("dark")
                    } else {
                        class_list.remove_1("dark")
                    };
                }
                DocumentAttrs::Locale { lang, dir } => {
                    let _ = el.set_attribute("lang", lang);
                    let _ = el.set_attribute("dir", dir.as_str());
                }
            }
        }
    }
}

/// Browser-derived fallbacks used when nothing has been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub prefers_dark: bool,
    pub locale: Option<String>,
}

impl Environment {
    /// Reads `prefers-color-scheme` and `navigator.language`.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches());
            Self {
                prefers_dark,
                locale: window.navigator().language(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        if self.prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn language(&self) -> Language {
        self.locale
            .as_deref()
            .map(Language::from_locale)
            .unwrap_or_default()
    }
}

/// `window.localStorage`. Each call looks the storage up again, so the type
/// holds no JS handles and can live in shared context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let stored = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .map(|s| s.set_item(key, value));
            if !matches!(stored, Some(Ok(()))) {
                log::warn!("could not persist {key}={value}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Typed access to the persisted preferences.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore<S> {
    store: S,
}

pub type BrowserPreferences = PreferenceStore<LocalStorage>;

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved value for `P`, or `system_default` when nothing legal is saved.
    pub fn get<P: Preference>(&self, system_default: P) -> P {
        match self.store.get_item(P::KEY) {
            Some(saved) => saved.parse().unwrap_or_else(|_| {
                log::warn!("ignoring saved {}={saved:?}", P::KEY);
                system_default
            }),
            None => system_default,
        }
    }

    /// Persists `value` and returns the document attributes that go with it.
    pub fn set<P: Preference>(&self, value: P) -> DocumentAttrs {
        log::debug!("{} -> {}", P::KEY, value.as_str());
        self.store.set_item(P::KEY, value.as_str());
        value.document_attrs()
    }

    pub fn theme(&self, env: &Environment) -> Theme {
        self.get(env.theme())
    }

    pub fn language(&self, env: &Environment) -> Language {
        self.get(env.language())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    #[derive(Debug, Clone, Default)]
    struct MemoryStore {
        items: Arc<Mutex<HashMap<String, String>>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.lock().ok()?.get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) {
            if let Ok(mut items) = self.items.lock() {
                items.insert(key.to_string(), value.to_string());
            }
        }
    }

    fn dark_env() -> Environment {
        Environment {
            prefers_dark: true,
            locale: Some("en-US".to_string()),
        }
    }

    #[test]
    fn test_theme_falls_back_to_system_preference() {
        let store = MemoryStore::default();
        let prefs = PreferenceStore::new(store.clone());

        assert_eq!(prefs.theme(&dark_env()), Theme::Dark);
        assert_eq!(prefs.theme(&Environment::default()), Theme::Light);
        // reading never writes
        assert_eq!(store.get_item("color-theme"), None);
    }

    #[test]
    fn test_first_toggle_persists_theme() {
        let store = MemoryStore::default();
        let prefs = PreferenceStore::new(store.clone());

        let initial = prefs.theme(&dark_env());
        assert_eq!(initial, Theme::Dark);

        let attrs = prefs.set(initial.toggle());
        assert_eq!(attrs, DocumentAttrs::ColorScheme { dark: false });
        assert_eq!(store.get_item("color-theme").as_deref(), Some("light"));

        // the saved value now wins over the system preference
        assert_eq!(prefs.theme(&dark_env()), Theme::Light);
    }

    #[test]
    fn test_saved_value_beats_environment() {
        let store = MemoryStore::default();
        store.set_item("language", "ar");
        store.set_item("color-theme", "dark");
        let prefs = PreferenceStore::new(store);

        assert_eq!(prefs.language(&dark_env()), Language::Ar);
        assert_eq!(prefs.theme(&Environment::default()), Theme::Dark);
    }

    #[test]
    fn test_illegal_saved_value_is_ignored() {
        let store = MemoryStore::default();
        store.set_item("color-theme", "solarized");
        store.set_item("language", "fr");
        let prefs = PreferenceStore::new(store);

        assert_eq!(prefs.theme(&dark_env()), Theme::Dark);
        assert_eq!(prefs.language(&dark_env()), Language::En);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("ar"), Language::Ar);
        assert_eq!(Language::from_locale("ar-SA"), Language::Ar);
        assert_eq!(Language::from_locale("AR_eg"), Language::Ar);
        assert_eq!(Language::from_locale("en-GB"), Language::En);
        assert_eq!(Language::from_locale("de-DE"), Language::En);
        assert_eq!(Language::from_locale(""), Language::En);
    }

    #[test]
    fn test_environment_language() {
        let env = Environment {
            prefers_dark: false,
            locale: Some("ar-SA".to_string()),
        };
        assert_eq!(env.language(), Language::Ar);
        assert_eq!(Environment::default().language(), Language::En);
    }

    #[test]
    fn test_set_language_returns_direction() {
        let prefs = PreferenceStore::new(MemoryStore::default());

        assert_eq!(
            prefs.set(Language::Ar),
            DocumentAttrs::Locale {
                lang: "ar",
                dir: TextDirection::Rtl,
            }
        );
        assert_eq!(
            prefs.set(Language::En),
            DocumentAttrs::Locale {
                lang: "en",
                dir: TextDirection::Ltr,
            }
        );
    }

    #[test]
    fn test_preferences_use_independent_keys() {
        let store = MemoryStore::default();
        let prefs = PreferenceStore::new(store.clone());

        prefs.set(Theme::Dark);
        prefs.set(Language::Ar);

        assert_eq!(store.get_item("color-theme").as_deref(), Some("dark"));
        assert_eq!(store.get_item("language").as_deref(), Some("ar"));
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_eq!(Language::En.toggle(), Language::Ar);
        assert_eq!(Language::En.switch_label(), "عربي");
        assert_eq!(Language::Ar.switch_label(), "English");
    }
}
