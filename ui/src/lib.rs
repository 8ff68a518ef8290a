//! Shared UI crate for sitekit: the marketing site's header menu, the footer
//! mailing-list popup, and the logic behind them.

pub mod core;
pub mod i18n;
pub mod nav;
pub mod subscription;
pub mod views;

use dioxus::prelude::{asset, manganis, Asset};

/// Shared site theme. Desktop inlines the same file instead of linking it.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod components {
    // Page header wrapping the localized header menu (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;

    // Footer call to action hosting the subscription popup (components/site_footer.rs)
    pub mod site_footer;
    pub use site_footer::SiteFooter;
}
