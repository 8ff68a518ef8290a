//! Content of the header menu sections.

use super::model::{
    Audience, Label, LinkTarget, MenuBox, MenuGroup, MenuLink, MenuPromo, MenuSection,
};

pub static PRODUCTS: MenuSection = MenuSection {
    id: "products",
    heading: "nav-products",
    boxes: &[
        MenuBox {
            modifiers: &["with-border"],
            groups: &[MenuGroup {
                label: Some("nav-label-online-editors"),
                links: &[
                    MenuLink::site("document-editor", "nav-document-editor", "/document-editor.aspx"),
                    MenuLink::site("spreadsheet-editor", "nav-spreadsheet-editor", "/spreadsheet-editor.aspx"),
                    MenuLink::site("presentation-editor", "nav-presentation-editor", "/presentation-editor.aspx"),
                    MenuLink::site("form-creator", "nav-form-creator", "/form-creator.aspx"),
                    MenuLink::site("pdf-editor", "nav-pdf-editor", "/pdf-editor.aspx"),
                ],
            }],
            promos: &[],
        },
        MenuBox {
            modifiers: &[],
            groups: &[
                MenuGroup {
                    label: Some("nav-label-platforms"),
                    links: &[
                        MenuLink::site("docspace", "nav-docspace", "/docspace.aspx"),
                        MenuLink::site("docs", "nav-docs", "/office-suite.aspx"),
                        MenuLink::site("workspace", "nav-workspace", "/workspace.aspx"),
                    ],
                },
                MenuGroup {
                    label: Some("nav-label-apps"),
                    links: &[
                        MenuLink::site("desktop", "nav-desktop-apps", "/desktop.aspx"),
                        MenuLink::site("mobile", "nav-mobile-apps", "/mobile.aspx"),
                    ],
                },
            ],
            promos: &[],
        },
    ],
};

pub static ENTERPRISE: MenuSection = MenuSection {
    id: "enterprise",
    heading: "nav-enterprise",
    boxes: &[MenuBox {
        modifiers: &[],
        groups: &[
            MenuGroup {
                label: Some("nav-label-for-business"),
                links: &[
                    MenuLink::site("docs-enterprise", "nav-docs-enterprise", "/docs-enterprise.aspx"),
                    MenuLink::site("docspace-enterprise", "nav-docspace-enterprise", "/docspace-enterprise.aspx"),
                    MenuLink::site("workspace-enterprise", "nav-workspace-enterprise", "/workspace-enterprise.aspx"),
                ],
            },
            MenuGroup {
                label: Some("nav-label-industries"),
                links: &[
                    MenuLink::site("education", "nav-education", "/for-education.aspx"),
                    MenuLink::site("healthcare", "nav-healthcare", "/healthcare.aspx"),
                    MenuLink::site("government", "nav-government", "/government.aspx"),
                ],
            },
        ],
        promos: &[],
    }],
};

pub static DEVELOPERS: MenuSection = MenuSection {
    id: "developers",
    heading: "nav-developers",
    boxes: &[MenuBox {
        modifiers: &[],
        groups: &[
            MenuGroup {
                label: Some("nav-label-build"),
                links: &[
                    MenuLink::site("docs-developer", "nav-docs-developer", "/developer-edition.aspx"),
                    MenuLink::site("docspace-developer", "nav-docspace-developer", "/docspace-developer.aspx"),
                    MenuLink::site("connectors", "nav-connectors", "/all-connectors.aspx"),
                ],
            },
            MenuGroup {
                label: Some("nav-label-dev-resources"),
                links: &[
                    MenuLink::external("api", "nav-api-docs", "https://api.onlyoffice.com/"),
                    MenuLink::external("github", "nav-github", "https://github.com/ONLYOFFICE"),
                ],
            },
        ],
        promos: &[],
    }],
};

pub static GET_PRODUCT: MenuSection = MenuSection {
    id: "get-onlyoffice",
    heading: "nav-get-product",
    boxes: &[MenuBox {
        modifiers: &[],
        groups: &[MenuGroup {
            label: None,
            links: &[
                MenuLink::site("download-docs", "nav-download-docs", "/download-docs.aspx"),
                MenuLink::site("download-desktop", "nav-download-desktop", "/download-desktop.aspx"),
                MenuLink::site("download-mobile", "nav-download-mobile", "/download-desktop.aspx#mobile"),
                MenuLink::site("sign-up", "nav-sign-up-cloud", "/docspace-registration.aspx"),
                MenuLink::site("compare", "nav-compare-editions", "/compare-editions.aspx"),
            ],
        }],
        promos: &[],
    }],
};

pub static PRICING: MenuSection = MenuSection {
    id: "pricing",
    heading: "nav-pricing",
    boxes: &[MenuBox {
        modifiers: &[],
        groups: &[MenuGroup {
            label: None,
            links: &[
                MenuLink::site("docs-prices", "nav-docs-prices", "/docs-enterprise-prices.aspx"),
                MenuLink::site("docspace-prices", "nav-docspace-prices", "/docspace-prices.aspx"),
                MenuLink::site("workspace-prices", "nav-workspace-prices", "/workspace-prices.aspx"),
                MenuLink::site("find-reseller", "nav-find-reseller", "/find-partners.aspx"),
            ],
        }],
        promos: &[],
    }],
};

pub static PARTNERS: MenuSection = MenuSection {
    id: "partners",
    heading: "nav-partners",
    boxes: &[MenuBox {
        modifiers: &[],
        groups: &[MenuGroup {
            label: None,
            links: &[
                MenuLink::site("resellers", "nav-resellers", "/resellers.aspx"),
                MenuLink::site("affiliates", "nav-affiliates", "/affiliates.aspx"),
                MenuLink::site("technology", "nav-technology-partners", "/technology-partners.aspx"),
                MenuLink::site("find-partners", "nav-find-partners", "/find-partners.aspx"),
                MenuLink::site("partner-request", "nav-become-partner", "/partnership-request.aspx"),
            ],
        }],
        promos: &[],
    }],
};

const ZH_COMPETITION: &str = "https://onlyoffice.com/zh/plugin-developer-competiton.aspx";

pub static RESOURCES: MenuSection = MenuSection {
    id: "resources",
    heading: "nav-resources",
    boxes: &[
        MenuBox {
            modifiers: &["with-border"],
            groups: &[MenuGroup {
                label: Some("nav-label-about-us"),
                links: &[
                    MenuLink::site("company", "nav-company", "/about.aspx"),
                    MenuLink::site("customers", "nav-customers", "/customers.aspx"),
                    MenuLink::site("success-stories", "nav-success-stories", "/customers.aspx#stories"),
                    MenuLink::site("awards", "nav-awards", "/awards.aspx"),
                    MenuLink::site("certificates", "nav-certificates", "/certificates.aspx"),
                    MenuLink::site("events", "nav-events", "/events.aspx"),
                    MenuLink::site("press-downloads", "nav-press-downloads", "/press-downloads.aspx"),
                    MenuLink::external("gift-shop", "nav-gift-shop", "https://shop.spreadshirt.com/onlyoffice"),
                    MenuLink::site("contacts", "nav-contacts", "/contacts.aspx"),
                ],
            }],
            promos: &[],
        },
        MenuBox {
            modifiers: &[],
            groups: &[
                MenuGroup {
                    label: Some("nav-label-collaborate"),
                    links: &[
                        MenuLink::site("for-contributers", "nav-for-contributors", "/contribute.aspx"),
                        MenuLink::external(
                            "for-translators",
                            "nav-for-translators",
                            "https://helpcenter.onlyoffice.com/guides/become-translator.aspx",
                        ),
                        MenuLink::site("for-influencers", "nav-for-influencers", "/influencer-program.aspx"),
                        MenuLink::site("vacancies", "nav-vacancies", "/vacancies.aspx"),
                    ],
                },
                MenuGroup {
                    label: Some("nav-label-get-help"),
                    links: &[
                        MenuLink::external("forum", "nav-forum", "https://forum.onlyoffice.com/"),
                        MenuLink::external(
                            "help-center",
                            "nav-help-center",
                            "https://helpcenter.onlyoffice.com/index.aspx",
                        ),
                        MenuLink::site("training-courses", "nav-training-courses", "/training-courses.aspx"),
                        MenuLink::site("webinars", "nav-webinars", "/webinars.aspx"),
                        MenuLink::site("white-papers", "nav-white-papers", "/whitepapers.aspx"),
                    ],
                },
            ],
            promos: &[],
        },
        MenuBox {
            modifiers: &["bg-gray"],
            groups: &[MenuGroup {
                label: None,
                links: &[
                    MenuLink::blog("blog", "nav-blog"),
                ],
            }],
            promos: &[
                MenuPromo {
                    image: "blog-1",
                    lead: None,
                    title: Label::Key("nav-blog-title-1"),
                    date: Some(Label::Key("nav-blog-date-1")),
                    target: LinkTarget::Translated("nav-blog-link-1"),
                    audience: Audience::Everyone,
                },
                MenuPromo {
                    image: "zh-dev-img",
                    lead: Some(MenuLink {
                        id: "zh-dev",
                        label: Label::Literal("比赛"),
                        target: LinkTarget::External(ZH_COMPETITION),
                        audience: Audience::Chinese,
                    }),
                    title: Label::Literal("2024 插件开发大赛：为 ONLYOFFICE 开发插件，赢取万元奖金！"),
                    date: None,
                    target: LinkTarget::External(ZH_COMPETITION),
                    audience: Audience::Chinese,
                },
                MenuPromo {
                    image: "blog-2",
                    lead: None,
                    title: Label::Key("nav-blog-title-2"),
                    date: Some(Label::Key("nav-blog-date-2")),
                    target: LinkTarget::Translated("nav-blog-link-2"),
                    audience: Audience::NonChinese,
                },
            ],
        },
    ],
};

/// Shown only when the host asks for the mobile login entry.
pub static LOGIN: MenuSection = MenuSection {
    id: "login",
    heading: "nav-login",
    boxes: &[MenuBox {
        modifiers: &[],
        groups: &[MenuGroup {
            label: None,
            links: &[
                MenuLink::site("login-docspace", "nav-login-docspace", "/docspace-registration.aspx#login"),
                MenuLink::site("login-workspace", "nav-login-workspace", "/workspace-registration.aspx#login"),
            ],
        }],
        promos: &[],
    }],
};

/// The seven always-present sections, in display order.
pub static MAIN_SECTIONS: [&MenuSection; 7] = [
    &PRODUCTS,
    &ENTERPRISE,
    &DEVELOPERS,
    &GET_PRODUCT,
    &PRICING,
    &PARTNERS,
    &RESOURCES,
];
