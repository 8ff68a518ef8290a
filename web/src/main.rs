use dioxus::prelude::*;

use ui::core::config::SiteConfig;
use ui::views::Landing;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared site locale; the header's picker writes to it. Selecting its
    // bundle up front overrides whatever the browser's languages picked.
    let locale = use_signal(|| ui::i18n::start_site_locale(None));
    use_context_provider(|| locale);

    let config = use_hook(|| SiteConfig::embedded().map_err(|err| err.to_string()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        {match config {
            Ok(config) => rsx! {
                // Keyed by locale so translated text is rebuilt after a switch.
                div { key: "{locale()}", Landing { config: config } }
            },
            Err(message) => rsx! {
                p { class: "app-error", "{message}" }
            },
        }}
    }
}
