//! Platform-independent core of the SeniorTech site: which page is shown,
//! which language is active, the translation catalog, and the contact form.
//!
//! Nothing in here knows about Dioxus; the `ui` crate wraps these types in
//! signals and context.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod lang;
pub mod navigation;
pub mod page;
pub mod workshops;

pub use catalog::{Catalog, ParityError};
pub use contact::{ContactDraft, DraftError, DraftField, SubmissionSimulator, SubmissionStatus};
pub use i18n::{t, Localizer};
pub use lang::{Lang, UnknownLanguage};
pub use navigation::{Navigator, Transition};
pub use page::{Page, UnknownPage};

/// Public contact details shown on the contact page and in the footer.
pub const CONTACT_EMAIL: &str = "hello@seniortech.app";
pub const CONTACT_PHONE: &str = "(514) 123-TECH";
pub const BRAND_NAME: &str = "SeniorTech";
