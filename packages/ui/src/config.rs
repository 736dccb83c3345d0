use dioxus::prelude::*;
use site::config::SiteConfig;

/// Make the launcher's configuration available to pages.
#[component]
pub fn SiteConfigProvider(config: SiteConfig, children: Element) -> Element {
    use_context_provider(|| config);

    rsx! { {children} }
}

pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
