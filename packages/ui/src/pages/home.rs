use dioxus::prelude::*;
use site::Page;

use crate::t;

pub(super) const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1517841905240-472988babdf9?auto=format&fit=crop&q=80&w=800&h=600";
pub(super) const TEAM_IMAGE: &str = "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&q=80&w=800&h=600";

#[component]
pub fn HomePage() -> Element {
    rsx! {
        main { id: "main-content",
            Hero {}
            ServicesPreview {}
            AboutPreview {}
            CallToAction {}
        }
    }
}

#[component]
fn Hero() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "container two_col",
                div { class: "fade_in",
                    h1 { {t(lang, "hero.title")} }
                    p { class: "lead", {t(lang, "hero.subtitle")} }
                    div { class: "cta_row",
                        button {
                            class: "btn primary",
                            "aria-describedby": "cta-description",
                            onclick: move |_| crate::navigate(navigator, Page::Contact),
                            {t(lang, "hero.cta.primary")}
                            span { class: "chevron", "aria-hidden": "true", "›" }
                        }
                        button {
                            class: "btn",
                            onclick: move |_| crate::navigate(navigator, Page::Services),
                            {t(lang, "hero.cta.secondary")}
                        }
                    }
                    p { id: "cta-description", class: "sr_only", {t(lang, "hero.cta.description")} }
                }
                img { class: "rounded_image", src: HERO_IMAGE, alt: t(lang, "hero.image_alt"), loading: "eager" }
            }
        }
    }
}

#[component]
fn ServicesPreview() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        section { class: "band white",
            div { class: "container",
                div { class: "page_header",
                    h2 { {t(lang, "services.title")} }
                    p { class: "lead", {t(lang, "services.subtitle")} }
                }
                div { class: "grid two",
                    ServiceSummary { area: "digital", glyph: "📱", bullet: "🛡" }
                    ServiceSummary { area: "ai", glyph: "🧠", bullet: "✦" }
                }
                div { class: "centered",
                    button {
                        class: "btn primary",
                        onclick: move |_| crate::navigate(navigator, Page::Services),
                        {t(lang, "home.services.view_all")}
                    }
                }
            }
        }
    }
}

/// One of the two service areas, listing `services.{area}.item1..4`.
#[component]
fn ServiceSummary(area: &'static str, glyph: &'static str, bullet: &'static str) -> Element {
    let lang = crate::use_lang();

    rsx! {
        div { class: "card",
            div { class: "card_title_row",
                span { class: "glyph", "aria-hidden": "true", "{glyph}" }
                h3 { {t(lang, &format!("services.{area}.title"))} }
            }
            p { {t(lang, &format!("services.{area}.desc"))} }
            ul { class: "check_list",
                for n in 1..=4 {
                    li { key: "{n}",
                        span { class: "bullet", "aria-hidden": "true", "{bullet}" }
                        {t(lang, &format!("services.{area}.item{n}"))}
                    }
                }
            }
        }
    }
}

#[component]
fn AboutPreview() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        section { class: "band muted",
            div { class: "container two_col",
                div {
                    h2 { {t(lang, "about.title")} }
                    p { class: "lead", {t(lang, "about.desc")} }
                    div { class: "badge_row",
                        for (glyph, key) in [("👥", "home.about.expert"), ("♥", "home.about.human"), ("🛡", "home.about.safe")] {
                            div { key: "{key}", class: "badge",
                                span { class: "glyph round", "aria-hidden": "true", "{glyph}" }
                                p { {t(lang, key)} }
                            }
                        }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| crate::navigate(navigator, Page::About),
                        {t(lang, "home.about.meet")}
                    }
                }
                img { class: "rounded_image", src: TEAM_IMAGE, alt: t(lang, "home.about.image_alt"), loading: "lazy" }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        section { class: "band accent",
            div { class: "container narrow centered",
                h2 { {t(lang, "contact.title")} }
                p { class: "lead", {t(lang, "contact.subtitle")} }
                button {
                    class: "btn inverse",
                    onclick: move |_| crate::navigate(navigator, Page::Contact),
                    {t(lang, "hero.cta.primary")}
                }
            }
        }
    }
}
