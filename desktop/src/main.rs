#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::config::SiteConfig;
use ui::views::Landing;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

/// Optional path to a `site.toml` that replaces the compiled-in configuration.
const CONFIG_ENV: &str = "SITEKIT_CONFIG";

/// Optional site locale tag (`"es"`, `"pt-br"`, ...) to start in.
const LOCALE_ENV: &str = "SITEKIT_LOCALE";

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("sitekit – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let locale = use_signal(|| {
        ui::i18n::start_site_locale(std::env::var(LOCALE_ENV).ok().as_deref())
    });
    use_context_provider(|| locale);

    let config = use_hook(|| {
        let override_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        SiteConfig::load(override_path.as_deref()).map_err(|err| err.to_string())
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        {match config {
            Ok(config) => rsx! {
                // Keyed wrapper forces a full remount on locale change.
                div { key: "{locale()}", Landing { config: config } }
            },
            Err(message) => rsx! {
                p { class: "app-error", "{message}" }
            },
        }}
    }
}
