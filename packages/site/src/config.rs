use crate::catalog::{Catalog, ParityError};
use crate::contact::DEFAULT_SUBMIT_DELAY;
use crate::lang::{Lang, UnknownLanguage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_LANG: {0}")]
    Language(#[from] UnknownLanguage),
    #[error("CONTACT_SUBMIT_DELAY_MS must be a whole number of milliseconds, got {0:?}")]
    SubmitDelay(String),
    #[error(transparent)]
    Translations(#[from] ParityError),
}

/// Read once by the launcher. The web server also hands it to the browser
/// client, which has no environment of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub mode: AppMode,
    pub default_lang: Lang,
    pub submit_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::Production,
            default_lang: Lang::En,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

impl SiteConfig {
    /// Read `APP_MODE`, `SITE_LANG` and `CONTACT_SUBMIT_DELAY_MS`; unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = SiteConfig {
            mode: AppMode::from_env(),
            ..SiteConfig::default()
        };

        if let Some(code) = non_empty_var("SITE_LANG") {
            config.default_lang = code.parse()?;
        }

        if let Some(raw) = non_empty_var("CONTACT_SUBMIT_DELAY_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::SubmitDelay(raw.clone()))?;
            config.submit_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Check the translation tables. A gap is fatal in local mode and only
    /// logged in production, where showing a raw key beats not starting.
    pub fn check_translations(&self) -> Result<(), ConfigError> {
        apply_parity(self.mode, Catalog::verify_parity())
    }
}

fn apply_parity(mode: AppMode, parity: Result<(), ParityError>) -> Result<(), ConfigError> {
    match parity {
        Ok(()) => Ok(()),
        Err(err) if mode == AppMode::Local => Err(err.into()),
        Err(err) => {
            tracing::warn!("{err}");
            Ok(())
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load a `.env` file if one is present.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => eprintln!("startup: WARNING could not read .env: {err}"),
    }
}
