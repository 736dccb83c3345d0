//! This crate contains all shared UI for the workspace.

mod i18n;
pub use i18n::{set_lang, t, toggle_lang, use_lang, use_localizer, I18nProvider};

mod navigation;
pub use navigation::{navigate, use_navigator, use_page, PageProvider, PageView};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod pages;
pub use pages::{AboutPage, ContactPage, HomePage, ServicesPage, WorkshopsPage};

mod theme;
pub use theme::SiteTheme;

mod config;
pub use config::{use_site_config, SiteConfigProvider};

mod timer;

pub use site::{Lang, Page};
