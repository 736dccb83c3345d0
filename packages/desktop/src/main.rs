use dioxus::prelude::*;
use site::config::SiteConfig;
use std::sync::OnceLock;

const MAIN_CSS: Asset = asset!("/assets/main.css");

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn main() {
    site::config::load_dotenv();
    init_tracing();

    let config = match SiteConfig::from_env().and_then(|config| {
        config.check_translations()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let _ = CONFIG.set(config);

    dioxus::launch(App);
}

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

#[component]
fn App() -> Element {
    let config = CONFIG.get().cloned().unwrap_or_default();
    let initial = config.default_lang;

    rsx! {
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
