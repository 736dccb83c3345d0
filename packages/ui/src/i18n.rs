use dioxus::prelude::*;
use site::{Lang, Localizer};

pub use site::t;

/// Provide `Signal<Localizer>` to the component tree. The language is not
/// persisted; every load starts from `initial`.
#[component]
pub fn I18nProvider(#[props(default)] initial: Lang, children: Element) -> Element {
    let localizer = use_signal(|| Localizer::new(initial));
    use_context_provider(|| localizer);

    rsx! { {children} }
}

pub fn use_localizer() -> Signal<Localizer> {
    if let Some(sig) = try_use_context::<Signal<Localizer>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("missing I18nProvider context, using a local English localizer");
    use_signal(Localizer::default)
}

/// Active language; reading it subscribes the calling component.
pub fn use_lang() -> Lang {
    use_localizer()().language()
}

pub fn set_lang(mut localizer: Signal<Localizer>, lang: Lang) {
    localizer.write().set_language(lang);
}

pub fn toggle_lang(mut localizer: Signal<Localizer>) {
    localizer.write().toggle();
}
