//! Launchers start by selecting the bundle of their site locale. Lives in its
//! own test binary because it switches the process-wide loader away from
//! English.

use ui::i18n::{start_site_locale, tr};

#[test]
fn start_locale_selects_the_matching_bundle() {
    ui::i18n::set_language("fr-FR").unwrap();
    let locale = start_site_locale(None);
    assert_eq!(locale.tag(), "en");
    assert_eq!(tr("popup-subscribe"), "Subscribe");

    let locale = start_site_locale(Some("fr"));
    assert_eq!(locale.tag(), "fr");
    assert_eq!(tr("nav-products"), "Produits");

    // No bundle ships for German: text falls back to English.
    let locale = start_site_locale(Some("de"));
    assert_eq!(locale.css_class(), "de");
    assert_eq!(tr("nav-products"), "Products");
}
