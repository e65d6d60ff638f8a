#![allow(non_snake_case)]

use super::*;

fn sections() -> Vec<SectionLink> {
    vec![
        SectionLink::new("overview", "Overview"),
        SectionLink::new("performance", "Performance mode"),
        SectionLink::new("pricing", "Pricing"),
        SectionLink::new("faq", "FAQ"),
    ]
}

#[component]
pub fn Docs() -> Element {
    rsx! {
        InfoPage {
            title: "Documentation",
            lead: "Everything you need to wire beacon into your stack.",
            sections: sections(),

            InfoSection { id: "overview", title: "Overview",
                p { "beacon receives webhooks, filters them and fans them out to chat, mail or your own endpoints." }
                p { "Deep links work everywhere: append a section name after # and the page scrolls there once it has rendered." }
            }

            InfoSection { id: "performance", title: "Performance mode", palette: Palette::Ocean,
                p { "On slower devices, or when your system asks for reduced motion, beacon turns off animated gradients and the moving testimonial reel." }
                p { "You can flip it yourself from the footer. The choice is remembered on this device." }
            }

            InfoSection { id: "pricing", title: "Pricing", palette: Palette::Ember,
                div {
                    class: "card-grid",
                    IconCard { icon: IconKind::Sparkle, title: "Hobby",
                        p { "Free forever for up to 1,000 events a month." }
                    }
                    IconCard { icon: IconKind::Gauge, title: "Team", palette: Palette::Ocean,
                        p { "Unlimited events, shared routing rules, audit log." }
                    }
                    IconCard { icon: IconKind::Shield, title: "Enterprise", palette: Palette::Ember,
                        p { "SSO, dedicated regions and a support line that picks up." }
                    }
                }
            }

            InfoSection { id: "faq", title: "FAQ",
                h4 { "Do you store payloads?" }
                p { "No. Payloads live in memory until delivered." }
                h4 { "Can I self-host?" }
                p { "Yes, on the Enterprise plan." }
            }
        }
    }
}
