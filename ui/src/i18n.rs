//! Internationalization (i18n) support for `sitekit-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/sitekit-ui.ftl   (fallback/reference)
//!   es-ES/sitekit-ui.ftl
//!   fr-FR/sitekit-ui.ftl
//! ```
//!
//! Components use [`t!`] with literal keys. Menu sections are static data
//! and carry their keys as plain strings, so they go through [`tr`], which
//! does a runtime lookup against the same loader (the completeness tests
//! cover both paths).
//!
//! Site locales (`"en"`, `"pt-br"`, `"zh-hans"`, ...) are not Fluent language
//! identifiers; [`apply_site_locale`] maps one onto the closest embedded
//! bundle.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::locale::SiteLocale;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("popup-title")
///     t!("popup-text", brand = "Acme")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "sitekit-ui";

/// Fallback bundle; also the answer for site locales we ship no bundle for.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
        // Placeables go straight into HTML text; bidi isolation marks would show up there.
        LOADER.set_use_isolating(false);
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Select the bundle matching a site locale.
pub fn apply_site_locale(locale: &SiteLocale) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    let wanted = locale.language_id();
    let known = available_languages();
    let tag = if known.iter().any(|l| l == wanted) {
        wanted
    } else {
        FALLBACK_LANGUAGE
    };
    set_language(tag)
}

/// Site locale a launcher starts in, with its bundle already selected so the
/// first render shows text that matches the locale's classes and links.
///
/// A failed selection is logged and leaves the current bundle in place.
pub fn start_site_locale(tag: Option<&str>) -> SiteLocale {
    let locale = SiteLocale::new(tag);
    if let Err(err) = apply_site_locale(&locale) {
        tracing::warn!("[i18n] could not start in {locale}: {err}");
    }
    locale
}

/// Runtime lookup for keys that live in data rather than at a `t!` call site.
///
/// Unknown keys come back as the key itself.
pub fn tr(key: &str) -> String {
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        key.to_string()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
