use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[component]
pub fn SiteTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: PAGES_CSS }
    }
}
