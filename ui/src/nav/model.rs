//! Static description of the header menu.
//!
//! Each section is a tree of boxes, groups and links. Labels are Fluent keys
//! resolved at render time, except for a few promo texts that only exist in
//! one language and are stored verbatim.

use dioxus::prelude::*;

use crate::core::locale::SiteLocale;
use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Key(&'static str),
    Literal(&'static str),
}

impl Label {
    pub fn text(&self) -> String {
        match self {
            Label::Key(key) => i18n::tr(key),
            Label::Literal(text) => (*text).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Path appended to the localized site root.
    Site(&'static str),
    /// Root of the localized blog.
    Blog,
    /// Absolute URL, same for every locale.
    External(&'static str),
    /// The URL itself is a translation (per-locale blog posts).
    Translated(&'static str),
}

/// Which locales a promo block is shown to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Everyone,
    Chinese,
    NonChinese,
}

impl Audience {
    pub fn includes(&self, locale: &SiteLocale) -> bool {
        match self {
            Audience::Everyone => true,
            Audience::Chinese => locale.is_chinese(),
            Audience::NonChinese => !locale.is_chinese(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLink {
    /// Suffix of the `oo-hm-item-link--*` modifier class.
    pub id: &'static str,
    pub label: Label,
    pub target: LinkTarget,
    pub audience: Audience,
}

impl MenuLink {
    pub const fn site(id: &'static str, key: &'static str, path: &'static str) -> Self {
        Self {
            id,
            label: Label::Key(key),
            target: LinkTarget::Site(path),
            audience: Audience::Everyone,
        }
    }

    pub const fn external(id: &'static str, key: &'static str, url: &'static str) -> Self {
        Self {
            id,
            label: Label::Key(key),
            target: LinkTarget::External(url),
            audience: Audience::Everyone,
        }
    }

    pub const fn blog(id: &'static str, key: &'static str) -> Self {
        Self {
            id,
            label: Label::Key(key),
            target: LinkTarget::Blog,
            audience: Audience::Everyone,
        }
    }
}

/// Image card linking to a blog post or campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPromo {
    /// Suffix of the `oo-hm-item-block-img--*` class.
    pub image: &'static str,
    /// Text link rendered right before the card, filtered by its own audience.
    pub lead: Option<MenuLink>,
    pub title: Label,
    pub date: Option<Label>,
    pub target: LinkTarget,
    pub audience: Audience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: Option<&'static str>,
    pub links: &'static [MenuLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuBox {
    /// Extra `oo-hm-item-box--*` modifiers.
    pub modifiers: &'static [&'static str],
    pub groups: &'static [MenuGroup],
    pub promos: &'static [MenuPromo],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    /// Suffix of the `oo-hm-item--*` class.
    pub id: &'static str,
    pub heading: &'static str,
    pub boxes: &'static [MenuBox],
}

impl MenuSection {
    /// Every translation key the section can render, for completeness checks.
    pub fn message_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.heading];
        for menu_box in self.boxes {
            for group in menu_box.groups {
                keys.extend(group.label);
                keys.extend(group.links.iter().filter_map(|l| l.label.key()));
                keys.extend(group.links.iter().filter_map(|l| l.target.key()));
            }
            for promo in menu_box.promos {
                if let Some(lead) = promo.lead {
                    keys.extend(lead.label.key());
                    keys.extend(lead.target.key());
                }
                keys.extend(promo.title.key());
                keys.extend(promo.date.and_then(|d| d.key()));
                keys.extend(promo.target.key());
            }
        }
        keys
    }
}

impl Label {
    fn key(&self) -> Option<&'static str> {
        match *self {
            Label::Key(key) => Some(key),
            Label::Literal(_) => None,
        }
    }
}

impl LinkTarget {
    fn key(&self) -> Option<&'static str> {
        match *self {
            LinkTarget::Translated(key) => Some(key),
            _ => None,
        }
    }
}

/// URL roots for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinks {
    pub locale: SiteLocale,
    pub href_lang: String,
    pub blog_href: String,
}

impl NavLinks {
    pub fn new(locale: SiteLocale, site_url: &str, blog_url: &str) -> Self {
        Self {
            href_lang: locale.href_lang(site_url),
            blog_href: locale.blog_href(blog_url),
            locale,
        }
    }

    pub fn resolve(&self, target: &LinkTarget) -> String {
        match target {
            LinkTarget::Site(path) => format!("{}{path}", self.href_lang),
            LinkTarget::Blog => self.blog_href.clone(),
            LinkTarget::External(url) => (*url).to_string(),
            LinkTarget::Translated(key) => i18n::tr(key),
        }
    }
}

/// Shared by every section: the locale's links and the "nav hidden" flag
/// flipped when a panel takes over the mobile menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NavContext {
    pub links: NavLinks,
    pub nav_hidden: Signal<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(tag: &str) -> NavLinks {
        NavLinks::new(
            SiteLocale::new(Some(tag)),
            "https://www.example.com",
            "https://www.example.com/blog",
        )
    }

    #[test]
    fn site_links_use_the_locale_prefix() {
        let target = LinkTarget::Site("/about.aspx");
        assert_eq!(links("en").resolve(&target), "https://www.example.com/about.aspx");
        assert_eq!(
            links("pt-br").resolve(&target),
            "https://www.example.com/pt/about.aspx"
        );
    }

    #[test]
    fn blog_and_external_links() {
        assert_eq!(
            links("zh").resolve(&LinkTarget::Blog),
            "https://www.example.com/blog/zh-hans"
        );
        let forum = LinkTarget::External("https://forum.example.com/");
        assert_eq!(links("de").resolve(&forum), "https://forum.example.com/");
    }

    #[test]
    fn audiences_split_on_chinese_locales() {
        let zh = SiteLocale::new(Some("zh-hans"));
        let en = SiteLocale::new(Some("en"));
        assert!(Audience::Chinese.includes(&zh));
        assert!(!Audience::Chinese.includes(&en));
        assert!(Audience::NonChinese.includes(&en));
        assert!(Audience::Everyone.includes(&zh));
    }

    #[test]
    fn message_keys_skip_literals() {
        static LINKS: &[MenuLink] = &[MenuLink::site("a", "nav-a", "/a")];
        static PROMOS: &[MenuPromo] = &[MenuPromo {
            image: "x",
            lead: None,
            title: Label::Literal("verbatim"),
            date: Some(Label::Key("nav-date")),
            target: LinkTarget::Translated("nav-link"),
            audience: Audience::Everyone,
        }];
        static BOXES: &[MenuBox] = &[MenuBox {
            modifiers: &[],
            groups: &[MenuGroup {
                label: Some("nav-group"),
                links: LINKS,
            }],
            promos: PROMOS,
        }];
        let section = MenuSection {
            id: "test",
            heading: "nav-test",
            boxes: BOXES,
        };
        assert_eq!(
            section.message_keys(),
            vec!["nav-test", "nav-group", "nav-a", "nav-date", "nav-link"]
        );
    }
}
