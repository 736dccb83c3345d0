use crate::catalog::Catalog;
use crate::lang::{Lang, UnknownLanguage};
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// Upper bound on remembered missing keys. Keys are built at runtime, so
/// past this point misses are logged at debug on every call instead.
const MAX_REPORTED_MISSING: usize = 256;

static REPORTED_MISSING: OnceLock<Mutex<HashSet<(Lang, String)>>> = OnceLock::new();

/// Translate a key for a given language. Missing keys come back unchanged so
/// gaps stay visible on the page.
pub fn t(lang: Lang, key: &str) -> String {
    match Catalog::global().lookup(lang, key) {
        Some(text) => text.to_string(),
        None => {
            report_missing(lang, key);
            key.to_string()
        }
    }
}

fn report_missing(lang: Lang, key: &str) {
    let reported = REPORTED_MISSING.get_or_init(|| Mutex::new(HashSet::new()));
    let Ok(mut reported) = reported.lock() else {
        return;
    };
    if remember_missing(&mut reported, lang, key) {
        tracing::warn!(%lang, key, "missing translation");
    } else {
        tracing::debug!(%lang, key, "missing translation");
    }
}

/// True the first time a key is seen while there is room to remember it.
fn remember_missing(reported: &mut HashSet<(Lang, String)>, lang: Lang, key: &str) -> bool {
    let entry = (lang, key.to_string());
    if reported.contains(&entry) || reported.len() >= MAX_REPORTED_MISSING {
        return false;
    }
    reported.insert(entry)
}

/// Holder for the active language. The UI keeps one of these behind a
/// signal; it is also usable on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    lang: Lang,
}

impl Localizer {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Lang {
        self.lang
    }

    pub fn set_language(&mut self, lang: Lang) {
        if self.lang != lang {
            tracing::debug!(from = %self.lang, to = %lang, "language changed");
        }
        self.lang = lang;
    }

    /// Parse and apply a textual code. Unknown codes leave the language as is.
    pub fn set_language_code(&mut self, code: &str) -> Result<Lang, UnknownLanguage> {
        match code.parse::<Lang>() {
            Ok(lang) => {
                self.set_language(lang);
                Ok(lang)
            }
            Err(err) => {
                tracing::warn!(code, "rejected language code");
                Err(err)
            }
        }
    }

    pub fn toggle(&mut self) -> Lang {
        self.set_language(self.lang.other());
        self.lang
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        Catalog::global().lookup(self.lang, key)
    }

    pub fn translate(&self, key: &str) -> String {
        t(self.lang, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_per_language() {
        assert_eq!(t(Lang::En, "nav.workshops"), "Workshops");
        assert_eq!(t(Lang::Fr, "nav.workshops"), "Ateliers");
    }

    #[test]
    fn missing_key_is_returned_verbatim() {
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
        assert_eq!(t(Lang::Fr, "missing.key"), "missing.key");
        assert_eq!(t(Lang::Fr, ""), "");
    }

    #[test]
    fn missing_key_memory_is_bounded() {
        let mut reported = HashSet::new();
        assert!(remember_missing(&mut reported, Lang::En, "gone.0"));
        assert!(!remember_missing(&mut reported, Lang::En, "gone.0"));
        assert!(remember_missing(&mut reported, Lang::Fr, "gone.0"));

        for n in 1..MAX_REPORTED_MISSING * 2 {
            remember_missing(&mut reported, Lang::En, &format!("gone.{n}"));
        }
        assert_eq!(reported.len(), MAX_REPORTED_MISSING);
        assert!(!remember_missing(&mut reported, Lang::Fr, "gone.new"));
    }

    #[test]
    fn text_is_not_escaped() {
        assert_eq!(t(Lang::En, "home.about.safe"), "Safe & Secure");
        assert_eq!(t(Lang::Fr, "contact.title"), "Commencez dès aujourd'hui");
    }

    #[test]
    fn dynamic_keys_resolve() {
        let items: Vec<_> = (1..=4)
            .map(|n| t(Lang::En, &format!("services.digital.item{n}")))
            .collect();
        assert_eq!(items[0], "Setting up phones, tablets, and computers");
        assert_eq!(items[3], "Password management and security");
    }

    #[test]
    fn localizer_defaults_to_english_and_toggles() {
        let mut loc = Localizer::default();
        assert_eq!(loc.language(), Lang::En);
        assert_eq!(loc.translate("nav.language"), "Français");
        assert_eq!(loc.toggle(), Lang::Fr);
        assert_eq!(loc.translate("nav.language"), "English");
        assert_eq!(loc.toggle(), Lang::En);
    }

    #[test]
    fn invalid_code_keeps_current_language() {
        let mut loc = Localizer::new(Lang::Fr);
        assert!(loc.set_language_code("es").is_err());
        assert_eq!(loc.language(), Lang::Fr);
        assert_eq!(loc.set_language_code("EN"), Ok(Lang::En));
        assert_eq!(loc.language(), Lang::En);
    }

    #[test]
    fn lookup_is_typed() {
        let loc = Localizer::new(Lang::Fr);
        assert_eq!(loc.lookup("footer.newsletter"), Some("Infolettre"));
        assert_eq!(loc.lookup("footer.blog"), None);
    }
}
