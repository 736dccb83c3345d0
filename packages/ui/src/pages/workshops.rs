use dioxus::prelude::*;
use site::workshops::{self, format_date, format_price, format_time_range, Series, Workshop};
use site::Page;

use super::{topic_glyph, FeatureCard, PageHeader};
use crate::t;

pub(super) const CLASSROOM_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=800&h=600";

const EXPECTATIONS: [(&str, &str, &str); 4] = [
    ("small_groups", "👥", "blue"),
    ("hands_on", "✋", "green"),
    ("patient", "♥", "purple"),
    ("materials", "📖", "orange"),
];

#[component]
pub fn WorkshopsPage() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        main { id: "main-content", class: "page",
            div { class: "container",
                PageHeader { title_key: "workshops.title", subtitle_key: "workshops.subtitle" }

                section {
                    h2 { {t(lang, "workshops.upcoming")} }
                    div { class: "grid three",
                        for workshop in workshops::upcoming() {
                            WorkshopCard { key: "{workshop.slug}", workshop }
                        }
                    }
                }

                section {
                    div { class: "page_header",
                        h2 { {t(lang, "workshops.series.title")} }
                        p { class: "lead", {t(lang, "workshops.series.subtitle")} }
                    }
                    div { class: "grid three",
                        for series in workshops::series() {
                            SeriesCard { key: "{series.slug}", series }
                        }
                    }
                }

                section { class: "panel two_col",
                    div {
                        h2 { {t(lang, "workshops.expect.title")} }
                        div { class: "grid two",
                            for (point, glyph, accent) in EXPECTATIONS {
                                FeatureCard {
                                    key: "{point}",
                                    glyph,
                                    accent,
                                    title_key: format!("workshops.expect.{point}.title"),
                                    desc_key: format!("workshops.expect.{point}.desc"),
                                }
                            }
                        }
                    }
                    img { class: "rounded_image", src: CLASSROOM_IMAGE, alt: t(lang, "workshops.expect.image_alt"), loading: "lazy" }
                }

                section { class: "band accent centered",
                    h2 { {t(lang, "workshops.ready.title")} }
                    p { class: "lead", {t(lang, "workshops.ready.body")} }
                    div { class: "cta_row",
                        button {
                            class: "btn inverse",
                            onclick: move |_| crate::navigate(navigator, Page::Contact),
                            {t(lang, "workshops.ready.register")}
                        }
                        button {
                            class: "btn outline_inverse",
                            onclick: move |_| crate::navigate(navigator, Page::Contact),
                            {t(lang, "workshops.ready.private")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WorkshopCard(workshop: Workshop) -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();
    let accent = workshop.accent.name();
    let full = workshop.is_full();

    rsx! {
        article { class: "card workshop_card",
            div { class: "card_title_row",
                span { class: "glyph accent_{accent}", "aria-hidden": "true", {topic_glyph(workshop.topic)} }
                span { class: if full { "availability full" } else { "availability" },
                    {workshop.availability(lang)}
                }
            }
            h3 { {t(lang, &workshop.title_key())} }
            p { {t(lang, &workshop.desc_key())} }
            ul { class: "facts",
                li {
                    span { "aria-hidden": "true", "📅 " }
                    {format_date(lang, workshop.date)}
                }
                li {
                    span { "aria-hidden": "true", "🕑 " }
                    {format_time_range(lang, workshop.start, workshop.end)}
                }
                li {
                    span { "aria-hidden": "true", "⌖ " }
                    "{workshop.location}"
                }
                li {
                    span { "aria-hidden": "true", "👥 " }
                    {workshop.capacity(lang)}
                }
            }
            button {
                class: "btn primary wide",
                disabled: full,
                onclick: move |_| crate::navigate(navigator, Page::Contact),
                if full {
                    {t(lang, "workshops.register_full")}
                } else {
                    {t(lang, "workshops.register")}
                }
            }
        }
    }
}

#[component]
fn SeriesCard(series: Series) -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();
    let accent = series.accent.name();

    rsx! {
        article { class: "card series_card border_{accent}",
            div { class: "card_title_row",
                span { class: "glyph accent_{accent}", "aria-hidden": "true", {topic_glyph(series.topic)} }
                span { class: "sessions", "{series.sessions} " {t(lang, "workshops.series.sessions")} }
            }
            h3 { {t(lang, &series.title_key())} }
            p { {t(lang, &series.desc_key())} }
            h4 { {t(lang, "workshops.series.topics")} }
            ul { class: "check_list",
                for key in series.topic_keys() {
                    li { key: "{key}", {t(lang, &key)} }
                }
            }
            div { class: "series_footer",
                p { class: "price",
                    {format_price(lang, series.price())}
                    span { class: "per", {t(lang, "workshops.series.per_series")} }
                }
                button {
                    class: "btn",
                    onclick: move |_| crate::navigate(navigator, Page::Contact),
                    {t(lang, "workshops.series.learn_more")}
                }
            }
        }
    }
}
