use dioxus::prelude::*;
use site::Page;

use super::{FeatureCard, PageHeader};
use crate::t;

pub(super) const APPROACH_IMAGE: &str = "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&q=80&w=800&h=600";

/// (card key, glyph, accent)
const DIGITAL_CARDS: [(&str, &str, &str); 4] = [
    ("device", "📱", "blue"),
    ("video", "🎥", "green"),
    ("banking", "💳", "purple"),
    ("passwords", "🔒", "orange"),
];

const AI_CARDS: [(&str, &str, &str); 4] = [
    ("chatgpt", "🧠", "indigo"),
    ("daily", "💬", "pink"),
    ("understanding", "🛡", "teal"),
    ("scams", "⚠", "red"),
];

const APPROACH: [(&str, &str); 4] = [
    ("personal", "green"),
    ("hands_on", "blue"),
    ("support", "purple"),
    ("safety", "orange"),
];

/// (plan key, glyph, accent)
const PLANS: [(&str, &str, &str); 3] = [
    ("free", "✓", "green"),
    ("individual", "📱", "blue"),
    ("group", "🧠", "purple"),
];

#[component]
pub fn ServicesPage() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        main { id: "main-content", class: "page",
            div { class: "container",
                PageHeader { title_key: "services.title", subtitle_key: "services.subtitle" }

                ServiceArea { area: "digital", glyph: "📱", accent: "blue", cards: DIGITAL_CARDS }
                ServiceArea { area: "ai", glyph: "🧠", accent: "purple", cards: AI_CARDS }

                section { class: "panel two_col",
                    div {
                        h2 { {t(lang, "services.approach.title")} }
                        for (key, accent) in APPROACH {
                            div { key: "{key}", class: "point",
                                span { class: "glyph small accent_{accent}", "aria-hidden": "true", "✓" }
                                div {
                                    h3 { {t(lang, &format!("services.approach.{key}.title"))} }
                                    p { {t(lang, &format!("services.approach.{key}.desc"))} }
                                }
                            }
                        }
                    }
                    img { class: "rounded_image", src: APPROACH_IMAGE, alt: t(lang, "services.approach.image_alt"), loading: "lazy" }
                }

                section { class: "centered",
                    h2 { {t(lang, "services.pricing.title")} }
                    p { class: "lead", {t(lang, "services.pricing.subtitle")} }
                    div { class: "grid three",
                        for (plan, glyph, accent) in PLANS {
                            div { key: "{plan}", class: "card plan border_{accent}",
                                span { class: "glyph round accent_{accent}", "aria-hidden": "true", "{glyph}" }
                                h3 { {t(lang, &format!("services.pricing.{plan}.title"))} }
                                p { class: "price text_{accent}", {t(lang, &format!("services.pricing.{plan}.price"))} }
                                p { {t(lang, &format!("services.pricing.{plan}.desc"))} }
                                ul { class: "check_list",
                                    for n in 1..=3 {
                                        li { key: "{n}", {t(lang, &format!("services.pricing.{plan}.item{n}"))} }
                                    }
                                }
                            }
                        }
                    }
                    button {
                        class: "btn primary large",
                        onclick: move |_| crate::navigate(navigator, Page::Contact),
                        {t(lang, "services.pricing.cta")}
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceArea(
    area: &'static str,
    glyph: &'static str,
    accent: &'static str,
    cards: [(&'static str, &'static str, &'static str); 4],
) -> Element {
    let lang = crate::use_lang();

    rsx! {
        section { class: "service_area",
            div { class: "page_header",
                span { class: "glyph round accent_{accent}", "aria-hidden": "true", "{glyph}" }
                h2 { {t(lang, &format!("services.{area}.title"))} }
                p { {t(lang, &format!("services.{area}.desc"))} }
            }
            div { class: "grid four",
                for (card, glyph, accent) in cards {
                    FeatureCard {
                        key: "{card}",
                        glyph,
                        accent,
                        title_key: format!("services.card.{card}.title"),
                        desc_key: format!("services.card.{card}.desc"),
                    }
                }
            }
        }
    }
}
