use dioxus::prelude::*;
use site::{Navigator, Page, BRAND_NAME};

use crate::t;

/// Sticky top bar: brand, one button per page, language toggle, and a
/// collapsible menu for narrow screens.
#[component]
pub fn Navbar() -> Element {
    let navigator = crate::use_navigator();
    let current = navigator().current();
    let localizer = crate::use_localizer();
    let lang = localizer().language();

    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "site_nav",
            a { class: "skip_link", href: "#main-content", {t(lang, "nav.skip")} }

            div { class: "site_nav_inner",
                button {
                    class: "brand",
                    "aria-label": t(lang, "nav.brand_label"),
                    onclick: move |_| go_to(navigator, menu_open, Page::Home),
                    span { class: "brand_mark" }
                    span { class: "brand_name", "{BRAND_NAME}" }
                }

                div { class: "nav_links desktop_only",
                    for page in Page::ALL {
                        NavItem { key: "{page}", page: page, current: current, label: t(lang, page.nav_key()), menu_open: menu_open }
                    }
                    button {
                        class: "lang_toggle",
                        "aria-label": t(lang, "nav.switch_language"),
                        onclick: move |_| crate::toggle_lang(localizer),
                        span { class: "globe", "aria-hidden": "true", "🌐" }
                        span { {t(lang, "nav.language")} }
                    }
                }

                div { class: "mobile_controls mobile_only",
                    button {
                        class: "icon_btn",
                        "aria-label": t(lang, "nav.switch_language"),
                        onclick: move |_| crate::toggle_lang(localizer),
                        span { "aria-hidden": "true", "🌐" }
                    }
                    button {
                        class: "icon_btn",
                        "aria-label": t(lang, "nav.menu_toggle"),
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| {
                            let next = !menu_open();
                            menu_open.set(next);
                        },
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile_menu mobile_only",
                    for page in Page::ALL {
                        NavItem { key: "{page}", page: page, current: current, label: t(lang, page.nav_key()), menu_open: menu_open }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(page: Page, current: Page, label: String, menu_open: Signal<bool>) -> Element {
    let navigator = crate::use_navigator();
    let active = page == current;

    rsx! {
        button {
            class: if active { "nav_link active" } else { "nav_link" },
            "aria-current": active.then_some("page"),
            onclick: move |_| go_to(navigator, menu_open, page),
            "{label}"
        }
    }
}

fn go_to(navigator: Signal<Navigator>, mut menu_open: Signal<bool>, page: Page) {
    crate::navigate(navigator, page);
    menu_open.set(false);
}
