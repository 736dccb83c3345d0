use dioxus::prelude::*;
use site::Page;

use super::{FeatureCard, PageHeader};
use crate::t;

pub(super) const MISSION_IMAGE: &str = "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?auto=format&fit=crop&q=80&w=800&h=600";

const VALUES: [(&str, &str, &str); 4] = [
    ("human", "♥", "blue"),
    ("empathy", "👥", "green"),
    ("safety", "🛡", "purple"),
    ("excellence", "🏅", "orange"),
];

/// (key, name, accent)
const TEAM: [(&str, &str, &str); 3] = [
    ("sarah", "Sarah Chen", "blue"),
    ("marie", "Marie Dubois", "green"),
    ("david", "David Kim", "purple"),
];

const PARTNERS: [&str; 4] = ["atwater", "yellow_door", "ndg", "westmount"];

#[component]
pub fn AboutPage() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        main { id: "main-content", class: "page",
            div { class: "container",
                PageHeader { title_key: "about.title", subtitle_key: "about.subtitle" }

                section { class: "two_col",
                    div {
                        h2 { {t(lang, "about.mission.title")} }
                        p { class: "lead", {t(lang, "about.desc")} }
                        p { {t(lang, "about.mission.body")} }
                    }
                    img { class: "rounded_image", src: MISSION_IMAGE, alt: t(lang, "about.mission.image_alt"), loading: "lazy" }
                }

                section { class: "centered",
                    h2 { {t(lang, "about.values.title")} }
                    div { class: "grid four",
                        for (value, glyph, accent) in VALUES {
                            FeatureCard {
                                key: "{value}",
                                glyph,
                                accent,
                                title_key: format!("about.values.{value}.title"),
                                desc_key: format!("about.values.{value}.desc"),
                            }
                        }
                    }
                }

                section { class: "centered",
                    h2 { {t(lang, "about.team.title")} }
                    div { class: "grid three",
                        for (member, name, accent) in TEAM {
                            div { key: "{member}", class: "card team_card",
                                span { class: "portrait accent_{accent}", "aria-hidden": "true", "👥" }
                                h3 { "{name}" }
                                p { class: "role", {t(lang, &format!("about.team.{member}.role"))} }
                                p { {t(lang, &format!("about.team.{member}.bio"))} }
                            }
                        }
                    }
                }

                section { class: "panel centered",
                    h2 { {t(lang, "about.partners.title")} }
                    p { class: "lead", {t(lang, "about.partners.intro")} }
                    div { class: "grid four",
                        for partner in PARTNERS {
                            div { key: "{partner}", class: "partner",
                                {t(lang, &format!("about.partners.{partner}"))}
                            }
                        }
                    }
                    button {
                        class: "btn primary large",
                        onclick: move |_| crate::navigate(navigator, Page::Contact),
                        {t(lang, "about.partners.cta")}
                    }
                }
            }
        }
    }
}
