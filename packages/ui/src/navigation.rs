use dioxus::prelude::*;
use site::{Navigator, Page};

use crate::pages::{AboutPage, ContactPage, HomePage, ServicesPage, WorkshopsPage};

const JS_SCROLL_TOP: &str = r#"(function(){ try { window.scrollTo({ top: 0, behavior: "smooth" }); } catch(e) {} return ""; })()"#;

/// Provide `Signal<Navigator>` to the component tree, starting on home.
#[component]
pub fn PageProvider(children: Element) -> Element {
    let navigator = use_signal(Navigator::new);
    use_context_provider(|| navigator);

    rsx! { {children} }
}

pub fn use_navigator() -> Signal<Navigator> {
    use_context::<Signal<Navigator>>()
}

pub fn use_page() -> Page {
    use_navigator()().current()
}

/// Show `target` and scroll back to the top, even when it is already shown.
pub fn navigate(mut navigator: Signal<Navigator>, target: Page) {
    navigator.write().navigate(target);
    spawn(async move {
        let _ = document::eval(JS_SCROLL_TOP).await;
    });
}

/// Renders the current page.
#[component]
pub fn PageView() -> Element {
    match use_page() {
        Page::Home => rsx! { HomePage {} },
        Page::About => rsx! { AboutPage {} },
        Page::Services => rsx! { ServicesPage {} },
        Page::Workshops => rsx! { WorkshopsPage {} },
        Page::Contact => rsx! { ContactPage {} },
    }
}
