use crate::core::config::SiteConfig;
use crate::core::locale::SiteLocale;
use crate::i18n;
use crate::nav::HeaderMenu;
use crate::t;
use dioxus::prelude::*;

const SITE_HEADER_CSS: Asset = asset!("/assets/styling/site-header.css");

/// Page header: brand, burger toggle, the localized [`HeaderMenu`] and a
/// locale picker.
///
/// The current site locale comes from a `Signal<SiteLocale>` context when the
/// platform provides one (so the rest of the page re-renders on change);
/// otherwise the header keeps its own.
#[component]
pub fn SiteHeader(config: SiteConfig) -> Element {
    i18n::init();

    let shared_locale: Option<Signal<SiteLocale>> = try_use_context::<Signal<SiteLocale>>();
    let mut own_locale = use_signal(SiteLocale::default);
    let current = shared_locale
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| own_locale());
    let mut menu_open = use_signal(|| false);
    let show_switcher = config.locales.len() > 1;
    let home_href = current.href_lang(&config.site_url);

    tracing::debug!(locale = %current, "site header render");

    let on_change = move |evt: FormEvent| {
        let locale = SiteLocale::new(Some(&evt.value()));
        if let Err(err) = i18n::apply_site_locale(&locale) {
            tracing::warn!("[i18n] could not switch to {locale}: {err}");
            return;
        }
        own_locale.set(locale.clone());
        if let Some(mut shared) = shared_locale {
            shared.set(locale);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_HEADER_CSS }

        header { class: "site-header",
            div { class: "site-header__inner",
                a { class: "site-header__brand", href: "{home_href}", "{config.brand}" }

                button {
                    r#type: "button",
                    class: "site-header__burger",
                    aria_label: t!("nav-toggle-menu"),
                    onclick: move |_| menu_open.set(!menu_open()),
                }

                HeaderMenu {
                    locale: current.tag().to_string(),
                    config: config.clone(),
                    login_menu_mobile: true,
                    is_open: menu_open(),
                }

                if show_switcher {
                    div { class: "site-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current}",
                            oninput: on_change,
                            for tag in config.locales.iter() {
                                option { key: "{tag}", value: "{tag}", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
