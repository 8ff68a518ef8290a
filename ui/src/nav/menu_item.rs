use dioxus::prelude::*;

use crate::i18n;
use crate::t;

use super::model::{MenuBox, MenuGroup, MenuLink, MenuSection, NavContext, NavLinks};

/// One collapsible header entry.
///
/// Pointer hover opens the panel on wide screens. On narrow screens the
/// heading is tapped instead: the panel opens and takes over the menu (the
/// shared `nav_hidden` flag), and the back control hands it back.
#[component]
pub fn MenuItem(
    id: &'static str,
    heading: String,
    nav_hidden: Signal<bool>,
    children: Element,
) -> Element {
    let mut nav_hidden = nav_hidden;
    let mut expanded = use_signal(|| false);
    let mut hovered = use_signal(|| false);

    let class = item_class(id, expanded() || hovered());

    rsx! {
        li {
            class: "{class}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            div {
                class: "oo-hm-item-heading",
                role: "button",
                tabindex: 0,
                onclick: move |_| {
                    expanded.set(true);
                    nav_hidden.set(true);
                },
                "{heading}"
            }
            div { class: "oo-hm-item-content",
                button {
                    r#type: "button",
                    class: "oo-hm-item-back",
                    onclick: move |_| {
                        expanded.set(false);
                        nav_hidden.set(false);
                    },
                    {t!("nav-back")}
                }
                {children}
            }
        }
    }
}

/// Renders a [`MenuSection`] inside a [`MenuItem`].
#[component]
pub fn MenuSectionView(section: &'static MenuSection, nav: NavContext) -> Element {
    let boxes: Vec<BoxEntry> = section
        .boxes
        .iter()
        .map(|menu_box| BoxEntry::build(menu_box, &nav.links))
        .collect();

    rsx! {
        MenuItem {
            id: section.id,
            heading: i18n::tr(section.heading),
            nav_hidden: nav.nav_hidden,
            div { class: "oo-hm-item-wrapper",
                for entry in boxes.into_iter() {
                    {render_box(entry)}
                }
            }
        }
    }
}

#[derive(Clone)]
struct LinkEntry {
    class: String,
    href: String,
    text: String,
}

#[derive(Clone)]
struct GroupEntry {
    label: Option<String>,
    links: Vec<LinkEntry>,
}

#[derive(Clone)]
struct PromoEntry {
    lead: Option<LinkEntry>,
    href: String,
    image_class: String,
    title: String,
    date: Option<String>,
}

#[derive(Clone)]
struct BoxEntry {
    class: String,
    wrap_groups: bool,
    groups: Vec<GroupEntry>,
    promos: Vec<PromoEntry>,
}

impl BoxEntry {
    fn build(menu_box: &MenuBox, links: &NavLinks) -> Self {
        let locale = &links.locale;
        let groups = menu_box
            .groups
            .iter()
            .map(|group| GroupEntry::build(group, links))
            .collect();
        let promos = menu_box
            .promos
            .iter()
            .filter(|promo| promo.audience.includes(locale))
            .map(|promo| PromoEntry {
                lead: promo
                    .lead
                    .filter(|lead| lead.audience.includes(locale))
                    .map(|lead| LinkEntry::build(&lead, links)),
                href: links.resolve(&promo.target),
                image_class: format!("oo-hm-item-block-img oo-hm-item-block-img--{}", promo.image),
                title: promo.title.text(),
                date: promo.date.map(|d| d.text()),
            })
            .collect();

        Self {
            class: box_class(menu_box.modifiers),
            wrap_groups: menu_box.groups.len() > 1,
            groups,
            promos,
        }
    }
}

impl GroupEntry {
    fn build(group: &MenuGroup, links: &NavLinks) -> Self {
        Self {
            label: group.label.map(i18n::tr),
            links: group
                .links
                .iter()
                .filter(|link| link.audience.includes(&links.locale))
                .map(|link| LinkEntry::build(link, links))
                .collect(),
        }
    }
}

impl LinkEntry {
    fn build(link: &MenuLink, links: &NavLinks) -> Self {
        Self {
            class: format!("oo-hm-item-link oo-hm-item-link--{}", link.id),
            href: links.resolve(&link.target),
            text: link.label.text(),
        }
    }
}

fn render_box(entry: BoxEntry) -> Element {
    let BoxEntry {
        class,
        wrap_groups,
        groups,
        promos,
    } = entry;

    rsx! {
        div { class: "{class}",
            for group in groups.into_iter() {
                if wrap_groups {
                    div { class: "oo-hm-item-box-wrapper", {render_group(group)} }
                } else {
                    {render_group(group)}
                }
            }
            for promo in promos.into_iter() {
                if let Some(lead) = promo.lead.as_ref() {
                    a { class: "{lead.class}", href: "{lead.href}", "{lead.text}" }
                }
                a { class: "oo-hm-item-block", href: "{promo.href}",
                    div { class: "{promo.image_class}" }
                    div { class: "oo-hm-item-blog-title", "{promo.title}" }
                    if let Some(date) = promo.date.as_ref() {
                        div { class: "oo-hm-item-blog-date", "{date}" }
                    }
                }
            }
        }
    }
}

fn render_group(group: GroupEntry) -> Element {
    rsx! {
        if let Some(label) = group.label.as_ref() {
            div { class: "oo-hm-item-label", "{label}" }
        }
        for link in group.links.iter() {
            a { class: "{link.class}", href: "{link.href}", "{link.text}" }
        }
    }
}

pub(crate) fn item_class(id: &str, open: bool) -> String {
    if open {
        format!("oo-hm-item oo-hm-item--{id} is-open")
    } else {
        format!("oo-hm-item oo-hm-item--{id}")
    }
}

pub(crate) fn box_class(modifiers: &[&str]) -> String {
    let mut class = String::from("oo-hm-item-box");
    for modifier in modifiers {
        class.push_str(" oo-hm-item-box--");
        class.push_str(modifier);
    }
    class
}
