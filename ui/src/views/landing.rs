use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::core::config::SiteConfig;
use crate::core::locale::SiteLocale;

#[cfg(debug_assertions)]
fn log_landing_render(locale: &SiteLocale) {
    // Render trace for diagnosing locale refresh issues.
    tracing::debug!(%locale, "landing render");
}

/// Demo page hosting the header menu and the footer subscription popup.
#[component]
pub fn Landing(config: SiteConfig) -> Element {
    // Subscribe to the shared site locale (if provided) so we re-render on change.
    let locale = try_use_context::<Signal<SiteLocale>>()
        .map(|s| s())
        .unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        log_landing_render(&locale);
    }

    rsx! {
        SiteHeader { config: config.clone() }

        main { class: "page page-landing {locale.css_class()}",
            h1 { {crate::t!("landing-title", brand = config.brand.clone())} }
            p { {crate::t!("landing-intro")} }
        }

        SiteFooter { config: config }
    }
}
