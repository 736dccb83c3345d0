use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Lenient parse accepting regional variants (`en-CA`, `fr-fr`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "en-ca" => Some(Lang::En),
            "fr" | "fr-fr" | "fr-ca" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// The language the navbar toggle switches to.
    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }
}

impl FromStr for Lang {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("FR".parse::<Lang>(), Ok(Lang::Fr));
        assert_eq!("en-CA".parse::<Lang>(), Ok(Lang::En));
        assert_eq!(" fr-ca ".parse::<Lang>(), Ok(Lang::Fr));
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "de".parse::<Lang>().unwrap_err();
        assert_eq!(err, UnknownLanguage("de".to_string()));
        assert_eq!(err.to_string(), "unknown language code: \"de\"");
    }

    #[test]
    fn other_flips_between_the_two_languages() {
        assert_eq!(Lang::En.other(), Lang::Fr);
        assert_eq!(Lang::Fr.other().other(), Lang::Fr);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Lang::Fr).unwrap(), "\"fr\"");
        assert_eq!(serde_json::from_str::<Lang>("\"en\"").unwrap(), Lang::En);
    }
}
