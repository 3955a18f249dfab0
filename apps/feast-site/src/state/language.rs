//! # Language State
//!
//! Holds the active display language and resolves translation keys.
//!
//! ```text
//!   Navbar toggle ──► toggle_language() ──► En ⇄ Ta
//!
//!   Any component ──► translate("menu") ──► table[active]["menu"] or "menu"
//! ```
//!
//! A session always starts in the base language.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use feast_core::{translations, BilingualText, Language, TranslationTable};

/// Site-managed language state.
#[derive(Debug, Clone)]
pub struct LanguageState {
    language: Arc<Mutex<Language>>,
    table: &'static TranslationTable,
}

impl LanguageState {
    /// Base language, bundled translations.
    pub fn new() -> Self {
        Self::with_table(translations())
    }

    /// Base language, custom translations.
    pub fn with_table(table: &'static TranslationTable) -> Self {
        LanguageState {
            language: Arc::new(Mutex::new(Language::BASE)),
            table,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Language> {
        self.language.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The active language.
    pub fn current(&self) -> Language {
        *self.lock()
    }

    /// Makes `language` active.
    pub fn set(&self, language: Language) {
        *self.lock() = language;
    }

    /// Switches to the other language and returns it.
    pub fn toggle(&self) -> Language {
        let mut language = self.lock();
        *language = language.toggled();
        *language
    }

    /// Resolves `key` in the active language, falling back to `key`.
    pub fn translate(&self, key: &str) -> String {
        self.translator().t(key)
    }

    /// Captures the active language for a batch of lookups.
    ///
    /// Everything resolved through one translator uses the same language,
    /// even if another caller toggles in between.
    pub fn translator(&self) -> Translator {
        Translator {
            language: self.current(),
            table: self.table,
        }
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new()
    }
}

/// A language fixed at one moment plus the table to resolve against.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
    table: &'static TranslationTable,
}

impl Translator {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolves a translation key.
    pub fn t(&self, key: &str) -> String {
        self.table.translate(self.language, key).to_string()
    }

    /// Picks the active side of a catalog text.
    pub fn text(&self, text: &BilingualText) -> String {
        text.get(self.language).to_string()
    }

    /// Every entry of the active language, ordered by key.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.table.entries(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_base_language() {
        let state = LanguageState::new();
        assert_eq!(state.current(), Language::BASE);
    }

    #[test]
    fn test_toggle_twice_restores_language() {
        let state = LanguageState::new();
        let original = state.current();

        assert_eq!(state.toggle(), Language::Ta);
        assert_eq!(state.current(), Language::Ta);
        assert_eq!(state.toggle(), original);
    }

    #[test]
    fn test_set_is_idempotent() {
        let state = LanguageState::new();

        state.set(Language::Ta);
        state.set(Language::Ta);
        assert_eq!(state.current(), Language::Ta);

        state.set(Language::En);
        assert_eq!(state.translate("home"), "Home");
    }

    #[test]
    fn test_translate_follows_active_language() {
        let state = LanguageState::new();
        assert_eq!(state.translate("menu"), "Menu");

        state.toggle();
        assert_eq!(state.translate("menu"), "உணவு பட்டியல்");
    }

    #[test]
    fn test_unknown_key_in_both_languages() {
        let state = LanguageState::new();
        assert_eq!(state.translate("nonexistent_key"), "nonexistent_key");
        state.toggle();
        assert_eq!(state.translate("nonexistent_key"), "nonexistent_key");
    }

    #[test]
    fn test_translator_is_pinned() {
        let state = LanguageState::new();
        let translator = state.translator();

        state.toggle();

        assert_eq!(translator.language(), Language::En);
        assert_eq!(translator.t("home"), "Home");
        assert_eq!(state.translator().t("home"), "முகப்பு");
    }

    #[test]
    fn test_custom_table() {
        let table: &'static TranslationTable = Box::leak(Box::new(
            TranslationTable::new().with_entries(Language::En, &[("greeting", "Vanakkam")]),
        ));
        let state = LanguageState::with_table(table);

        assert_eq!(state.translate("greeting"), "Vanakkam");
        assert_eq!(state.translate("menu"), "menu");
    }

    #[test]
    fn test_translator_text_picks_side() {
        let state = LanguageState::new();
        let name = BilingualText::new("Payasam", "பாயசம்");

        assert_eq!(state.translator().text(&name), "Payasam");
        state.toggle();
        assert_eq!(state.translator().text(&name), "பாயசம்");
    }
}
