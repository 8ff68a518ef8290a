use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::locale::SiteLocale;
use crate::i18n;

use super::menu_item::MenuSectionView;
use super::model::{NavContext, NavLinks};
use super::sections::{LOGIN, MAIN_SECTIONS};

const HEADER_MENU_CSS: Asset = asset!("/assets/styling/header-menu.css");

/// Site header: the seven menu sections, the optional mobile login entry and
/// the contact phone shown on narrow screens.
///
/// `locale` is the site tag (`"en"`, `"pt-br"`, ...); it drives link prefixes
/// and the locale modifier class. The host selects the matching translation
/// bundle with [`i18n::apply_site_locale`].
#[component]
pub fn HeaderMenu(
    locale: Option<String>,
    config: SiteConfig,
    #[props(default)] login_menu_mobile: bool,
    #[props(default)] is_open: bool,
) -> Element {
    i18n::init();

    let locale = SiteLocale::new(locale.as_deref());
    let nav_hidden = use_signal(|| false);
    let ctx = NavContext {
        links: NavLinks::new(locale.clone(), &config.site_url, &config.blog_url),
        nav_hidden,
    };
    let class = nav_class(&locale, nav_hidden(), is_open);

    tracing::debug!(locale = %locale, login_menu_mobile, "header menu render");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_MENU_CSS }

        nav { class: "{class}",
            div { class: "oo-hm-wrapper",
                ul { class: "oo-hm-items",
                    for section in MAIN_SECTIONS {
                        MenuSectionView { section: section, nav: ctx.clone() }
                    }
                    if login_menu_mobile {
                        MenuSectionView { section: &LOGIN, nav: ctx.clone() }
                    }
                }
                a {
                    class: "oo-hm-phone-mobile",
                    href: "tel:{config.phone.dial}",
                    "{config.phone.display}"
                }
            }
        }
    }
}

pub(crate) fn nav_class(locale: &SiteLocale, nav_hidden: bool, is_open: bool) -> String {
    let mut class = format!("oo-hm {}", locale.css_class());
    if nav_hidden {
        class.push_str(" hidden");
    }
    if is_open {
        class.push_str(" is-open");
    }
    class
}
