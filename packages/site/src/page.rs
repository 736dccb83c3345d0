use std::fmt;
use std::str::FromStr;

/// The five views the site can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Workshops,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0:?}")]
pub struct UnknownPage(pub String);

impl Page {
    /// Display order used by the navbar and the footer's quick links.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Workshops,
        Page::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Workshops => "workshops",
            Page::Contact => "contact",
        }
    }

    /// Translation key of the page's navigation label.
    pub fn nav_key(self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::About => "nav.about",
            Page::Services => "nav.services",
            Page::Workshops => "nav.workshops",
            Page::Contact => "nav.contact",
        }
    }

    /// Parse an identifier, falling back to [`Page::Home`] for anything
    /// unrecognized.
    pub fn from_key_or_home(key: &str) -> Self {
        match key.parse() {
            Ok(page) => page,
            Err(UnknownPage(key)) => {
                tracing::debug!(%key, "unknown page identifier, showing home");
                Page::Home
            }
        }
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.key().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert!("Contact".parse::<Page>().is_err());
        assert!(" home".parse::<Page>().is_err());
    }

    #[test]
    fn unknown_identifiers_fall_back_to_home() {
        assert_eq!(Page::from_key_or_home("blog"), Page::Home);
        assert_eq!(Page::from_key_or_home(""), Page::Home);
        assert_eq!(Page::from_key_or_home("workshops"), Page::Workshops);
    }

    #[test]
    fn every_page_has_a_nav_label() {
        for page in Page::ALL {
            assert_eq!(page.nav_key(), format!("nav.{}", page.key()));
        }
    }
}
