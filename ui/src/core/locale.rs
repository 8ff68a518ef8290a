//! Site locale tags and the URL prefixes derived from them.
//!
//! The marketing site uses its own short tags (`"en"`, `"de"`, `"pt-br"`,
//! `"zh-hans"`, ...). Several of them share the root site, a few are served
//! under a shortened path, and the blog has its own mapping.

/// Tags served from the root of the main site (no path prefix).
const ROOT_SITE_TAGS: &[&str] = &["en", "el", "hi", "ar", "sr", "hy"];

/// Tags served from the root of the blog.
const ROOT_BLOG_TAGS: &[&str] = &["en", "ru"];

const DEFAULT_TAG: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLocale(String);

impl SiteLocale {
    /// Missing or blank tags fall back to English.
    pub fn new(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some(tag) if !tag.is_empty() => Self(tag.to_string()),
            _ => Self(DEFAULT_TAG.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Modifier class applied to locale-sensitive blocks (fonts, widths).
    pub fn css_class(&self) -> &str {
        &self.0
    }

    /// Base URL for site-relative links: `site_url` plus the locale path.
    pub fn href_lang(&self, site_url: &str) -> String {
        let prefix = match self.tag() {
            tag if ROOT_SITE_TAGS.contains(&tag) => String::new(),
            "zh-hans" => "/zh".to_string(),
            "pt-br" => "/pt".to_string(),
            tag => format!("/{tag}"),
        };
        format!("{}{prefix}", site_url.trim_end_matches('/'))
    }

    /// Base URL of the localized blog.
    pub fn blog_href(&self, blog_url: &str) -> String {
        let prefix = match self.tag() {
            tag if ROOT_BLOG_TAGS.contains(&tag) => String::new(),
            "zh" => "/zh-hans".to_string(),
            "pt" => "/pt-br".to_string(),
            tag => format!("/{tag}"),
        };
        format!("{}{prefix}", blog_url.trim_end_matches('/'))
    }

    /// Tag used to pick a translation table.
    pub fn translation_tag(&self) -> &str {
        match self.tag() {
            "zh-hans" => "zh",
            "pt-br" => "pt",
            tag => tag,
        }
    }

    /// Fluent bundle identifier for this locale. Tags without a bundle map to
    /// the fallback and are resolved by [`crate::i18n::apply_site_locale`].
    pub fn language_id(&self) -> &'static str {
        match self.translation_tag() {
            "es" => "es-ES",
            "fr" => "fr-FR",
            _ => crate::i18n::FALLBACK_LANGUAGE,
        }
    }

    pub fn is_chinese(&self) -> bool {
        matches!(self.tag(), "zh" | "zh-hans")
    }
}

impl Default for SiteLocale {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Display for SiteLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://www.example.com";
    const BLOG: &str = "https://www.example.com/blog";

    fn locale(tag: &str) -> SiteLocale {
        SiteLocale::new(Some(tag))
    }

    #[test]
    fn missing_or_blank_tag_defaults_to_english() {
        assert_eq!(SiteLocale::new(None).tag(), "en");
        assert_eq!(SiteLocale::new(Some("  ")).tag(), "en");
        assert_eq!(SiteLocale::default(), locale("en"));
    }

    #[test]
    fn root_site_locales_have_no_prefix() {
        for tag in ["en", "el", "hi", "ar", "sr", "hy"] {
            assert_eq!(locale(tag).href_lang(SITE), SITE, "tag {tag}");
        }
    }

    #[test]
    fn shortened_site_prefixes() {
        assert_eq!(locale("zh-hans").href_lang(SITE), "https://www.example.com/zh");
        assert_eq!(locale("pt-br").href_lang(SITE), "https://www.example.com/pt");
        assert_eq!(locale("de").href_lang(SITE), "https://www.example.com/de");
        assert_eq!(
            locale("de").href_lang("https://www.example.com/"),
            "https://www.example.com/de"
        );
    }

    #[test]
    fn blog_prefixes_follow_their_own_table() {
        assert_eq!(locale("en").blog_href(BLOG), BLOG);
        assert_eq!(locale("ru").blog_href(BLOG), BLOG);
        assert_eq!(locale("zh").blog_href(BLOG), format!("{BLOG}/zh-hans"));
        assert_eq!(locale("pt").blog_href(BLOG), format!("{BLOG}/pt-br"));
        assert_eq!(locale("fr").blog_href(BLOG), format!("{BLOG}/fr"));
    }

    #[test]
    fn translation_tags_collapse_regional_variants() {
        assert_eq!(locale("zh-hans").translation_tag(), "zh");
        assert_eq!(locale("pt-br").translation_tag(), "pt");
        assert_eq!(locale("fr").translation_tag(), "fr");
    }

    #[test]
    fn language_ids_map_to_bundles() {
        assert_eq!(locale("es").language_id(), "es-ES");
        assert_eq!(locale("fr").language_id(), "fr-FR");
        assert_eq!(locale("ja").language_id(), "en-US");
    }

    #[test]
    fn chinese_detection() {
        assert!(locale("zh").is_chinese());
        assert!(locale("zh-hans").is_chinese());
        assert!(!locale("en").is_chinese());
    }
}
