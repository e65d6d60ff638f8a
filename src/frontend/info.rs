#![allow(non_snake_case)]

use super::*;

/// An entry in the table of contents of an [`InfoPage`]. `id` must match an
/// [`InfoSection`] on the same page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLink {
    pub id: String,
    pub title: String,
}

impl SectionLink {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Layout shared by the text-heavy pages: a gradient title, a lead
/// paragraph, an optional table of contents and the page body.
#[component]
pub fn InfoPage(
    #[props(into)] title: String,
    #[props(into)] lead: String,
    sections: Vec<SectionLink>,
    children: Element,
) -> Element {
    rsx! {
        article {
            class: "info-page",
            header {
                class: "info-header",
                GradientHeading { text: title.clone(), level: HeadingLevel::H1 }
                p { class: "lead", "{lead}" }
            }
            if !sections.is_empty() {
                nav {
                    class: "info-toc",
                    for section in sections {
                        a { href: section.href(), "{section.title}" }
                    }
                }
            }
            div {
                class: "info-body",
                { children }
            }
        }
    }
}

#[component]
pub fn InfoSection(
    #[props(into)] id: String,
    #[props(into)] title: String,
    #[props(default)] palette: Palette,
    children: Element,
) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: "info-section",
            GradientHeading { text: title.clone(), level: HeadingLevel::H2, palette: palette }
            { children }
        }
    }
}
