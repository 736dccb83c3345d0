//! Static bilingual translation table.
//!
//! Each language lives in its own module as a flat `(key, text)` slice. The
//! slices are indexed once, on first use, into per-language hash maps.

mod en;
mod fr;

use crate::lang::Lang;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

type Entries = &'static [(&'static str, &'static str)];

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug)]
pub struct Catalog {
    en: HashMap<&'static str, &'static str>,
    fr: HashMap<&'static str, &'static str>,
}

/// Keys defined in one language but not the other, or defined twice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "translation tables out of sync: missing in en {missing_in_en:?}, missing in fr {missing_in_fr:?}, duplicated {duplicated:?}"
)]
pub struct ParityError {
    pub missing_in_en: Vec<&'static str>,
    pub missing_in_fr: Vec<&'static str>,
    pub duplicated: Vec<&'static str>,
}

impl Catalog {
    /// The catalog shipped with the site.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| Catalog::from_entries(en::ENTRIES, fr::ENTRIES))
    }

    fn from_entries(en: Entries, fr: Entries) -> Self {
        Self {
            en: en.iter().copied().collect(),
            fr: fr.iter().copied().collect(),
        }
    }

    fn table(&self, lang: Lang) -> &HashMap<&'static str, &'static str> {
        match lang {
            Lang::En => &self.en,
            Lang::Fr => &self.fr,
        }
    }

    pub fn lookup(&self, lang: Lang, key: &str) -> Option<&'static str> {
        self.table(lang).get(key).copied()
    }

    pub fn contains(&self, lang: Lang, key: &str) -> bool {
        self.table(lang).contains_key(key)
    }

    /// Sorted keys for one language.
    pub fn keys(&self, lang: Lang) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.table(lang).keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Check the shipped tables define the same key set, each key once.
    pub fn verify_parity() -> Result<(), ParityError> {
        check_parity(en::ENTRIES, fr::ENTRIES)
    }
}

fn check_parity(en: Entries, fr: Entries) -> Result<(), ParityError> {
    let mut duplicated = BTreeSet::new();
    let en_keys = key_set(en, &mut duplicated);
    let fr_keys = key_set(fr, &mut duplicated);

    let missing_in_fr: Vec<_> = en_keys.difference(&fr_keys).copied().collect();
    let missing_in_en: Vec<_> = fr_keys.difference(&en_keys).copied().collect();

    if missing_in_en.is_empty() && missing_in_fr.is_empty() && duplicated.is_empty() {
        return Ok(());
    }
    Err(ParityError {
        missing_in_en,
        missing_in_fr,
        duplicated: duplicated.into_iter().collect(),
    })
}

fn key_set(
    entries: Entries,
    duplicated: &mut BTreeSet<&'static str>,
) -> BTreeSet<&'static str> {
    let mut keys = BTreeSet::new();
    for (key, _) in entries {
        if !keys.insert(*key) {
            duplicated.insert(*key);
        }
    }
    keys
}
