use dioxus::prelude::*;
use site::workshops::Topic;

mod about;
pub use about::AboutPage;

mod contact;
pub use contact::ContactPage;

mod home;
pub use home::HomePage;

mod services;
pub use services::ServicesPage;

mod workshops;
pub use workshops::WorkshopsPage;

/// Centered `h1` + lead paragraph opening every inner page.
#[component]
fn PageHeader(title_key: &'static str, subtitle_key: &'static str) -> Element {
    let lang = crate::use_lang();
    rsx! {
        div { class: "page_header",
            h1 { {crate::t(lang, title_key)} }
            p { class: "lead", {crate::t(lang, subtitle_key)} }
        }
    }
}

/// Card with a glyph, a title and a short description, all translated.
#[component]
fn FeatureCard(
    glyph: &'static str,
    accent: &'static str,
    title_key: String,
    desc_key: String,
) -> Element {
    let lang = crate::use_lang();
    rsx! {
        div { class: "card feature_card",
            div { class: "glyph accent_{accent}", "aria-hidden": "true", "{glyph}" }
            h3 { {crate::t(lang, &title_key)} }
            p { {crate::t(lang, &desc_key)} }
        }
    }
}

fn topic_glyph(topic: Topic) -> &'static str {
    match topic {
        Topic::Ai => "🧠",
        Topic::Safety => "🛡",
        Topic::Devices => "📱",
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn page_images_point_at_the_site_photos() {
        let expected = [
            (super::home::HERO_IMAGE, "photo-1517841905240-472988babdf9"),
            (super::home::TEAM_IMAGE, "photo-1600880292203-757bb62b4baf"),
            (super::about::MISSION_IMAGE, "photo-1559757148-5c350d0d3c56"),
            (super::services::APPROACH_IMAGE, "photo-1522202176988-66273c2fd55f"),
            (super::workshops::CLASSROOM_IMAGE, "photo-1507003211169-0a1dd7228f2d"),
        ];
        for (url, photo) in expected {
            assert!(url.starts_with("https://images.unsplash.com/"), "{url}");
            assert!(url.contains(photo), "{url} should show {photo}");
        }
    }
}
