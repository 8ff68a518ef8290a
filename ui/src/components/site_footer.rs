use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::locale::SiteLocale;
use crate::i18n;
use crate::subscription::MailPopup;
use crate::t;

/// Footer strip with the "subscribe" call to action. Owns the popup's
/// visibility; the popup resets itself when it closes.
#[component]
pub fn SiteFooter(config: SiteConfig) -> Element {
    i18n::init();

    let locale = try_use_context::<Signal<SiteLocale>>()
        .map(|s| s())
        .unwrap_or_default();
    let mut popup_open = use_signal(|| false);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__subscribe",
                span { class: "site-footer__subscribe-label", {t!("footer-subscribe-label")} }
                button {
                    r#type: "button",
                    class: "site-footer__subscribe-btn",
                    onclick: move |_| popup_open.set(true),
                    {t!("footer-subscribe")}
                }
            }
            MailPopup {
                locale: locale,
                open: popup_open,
                mail_api: config.mail_api.clone(),
                brand: config.brand.clone(),
            }
        }
    }
}
