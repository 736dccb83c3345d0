use dioxus::prelude::*;
use site::config::SiteConfig;
use std::env;
use std::sync::OnceLock;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    {
        site::config::load_dotenv();
        init_tracing();
    }

    let config = load_config();
    log_runtime_config(&config);
    let _ = CONFIG.set(config);

    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config() -> SiteConfig {
    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.check_translations() {
        eprintln!("Translation tables are out of sync: {}", e);
        std::process::exit(1);
    }

    config
}

fn log_runtime_config(config: &SiteConfig) {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!(
        "startup: mode={:?} lang={} submit_delay={}ms",
        config.mode,
        config.default_lang,
        config.submit_delay.as_millis()
    );
}

#[component]
fn App() -> Element {
    // The browser has no environment; it takes the server's config during
    // hydration so both sides render the same language.
    let config = use_server_cached(|| CONFIG.get().cloned().unwrap_or_default());
    let initial = config.default_lang;

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::SiteConfigProvider { config,
            ui::I18nProvider { initial,
                ui::PageProvider {
                    div { class: "site_shell",
                        ui::Navbar {}
                        ui::PageView {}
                        ui::Footer {}
                    }
                }
            }
        }
    }
}
