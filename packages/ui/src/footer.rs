use dioxus::prelude::*;
use site::{Page, BRAND_NAME, CONTACT_EMAIL, CONTACT_PHONE};

use crate::t;

#[component]
pub fn Footer() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_grid",
                div { class: "footer_about",
                    h3 { "{BRAND_NAME}" }
                    p { class: "footer_mission", {t(lang, "footer.mission")} }
                    ul { class: "footer_contact",
                        li { span { "aria-hidden": "true", "✉" } " {CONTACT_EMAIL}" }
                        li { span { "aria-hidden": "true", "☎" } " {CONTACT_PHONE}" }
                        li { span { "aria-hidden": "true", "⌖" } " " {t(lang, "footer.location")} }
                    }
                }

                div {
                    h4 { {t(lang, "footer.quick_links")} }
                    ul { class: "footer_links",
                        for page in Page::ALL {
                            li { key: "{page}",
                                button {
                                    class: "footer_link",
                                    onclick: move |_| crate::navigate(navigator, page),
                                    {t(lang, page.nav_key())}
                                }
                            }
                        }
                    }
                }

                div {
                    h4 { {t(lang, "footer.resources")} }
                    ul { class: "footer_links",
                        // Privacy, terms and newsletter pages do not exist yet.
                        li { button { class: "footer_link", r#type: "button", {t(lang, "footer.privacy")} } }
                        li { button { class: "footer_link", r#type: "button", {t(lang, "footer.terms")} } }
                        li { button { class: "footer_link", r#type: "button", {t(lang, "footer.newsletter")} } }
                    }
                    h5 { class: "footer_follow", {t(lang, "footer.follow")} }
                    div { class: "social_row",
                        button { class: "social_btn", "aria-label": t(lang, "footer.follow.facebook"), "f" }
                        button { class: "social_btn", "aria-label": t(lang, "footer.follow.twitter"), "t" }
                        button { class: "social_btn", "aria-label": t(lang, "footer.follow.linkedin"), "in" }
                    }
                }
            }

            div { class: "footer_bottom",
                p { {t(lang, "footer.copyright")} }
                p { {t(lang, "footer.made_with")} }
            }
        }
    }
}
