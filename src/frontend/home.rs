#![allow(non_snake_case)]

use super::*;

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "We replaced three dashboards with one page and nobody noticed, except our pager.",
            "Mira K.",
            "SRE lead",
        ),
        Testimonial::new(
            "The webhook setup took five minutes. The coffee took longer.",
            "Jonas P.",
            "Backend engineer",
        ),
        Testimonial::new(
            "Runs fine on the ancient laptop in the warehouse office.",
            "Aiko T.",
            "Operations",
        ),
        Testimonial::new(
            "Finally, alerts that link straight to the part of the docs I need.",
            "Sam R.",
            "On-call rotation",
        ),
    ]
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            GradientHeading { text: "Signals, not noise", level: HeadingLevel::H1, palette: Palette::Dawn }
            p {
                class: "lead",
                "beacon forwards the events that matter to the people who can act on them."
            }
            div {
                class: "hero-cta-group",
                Link { to: Route::Docs {}, "read the docs" }
                a {
                    href: "/docs#pricing",
                    "see pricing "
                    Icon { kind: IconKind::ArrowRight, size: 16 }
                }
            }
        }

        section {
            class: "card-grid",
            IconCard { icon: IconKind::Bolt, title: "Fast", palette: Palette::Dawn,
                p { "Events are routed within milliseconds of arriving." }
            }
            IconCard { icon: IconKind::Shield, title: "Private", palette: Palette::Ocean,
                p { "Payloads are signed and never stored past delivery." }
            }
            IconCard { icon: IconKind::Chart, title: "Measured", palette: Palette::Ember,
                p { "Every delivery is counted, timed and retried on failure." }
            }
        }

        section {
            class: "social-proof",
            GradientHeading { text: "What people say", level: HeadingLevel::H2, palette: Palette::Ocean }
            Testimonials { items: testimonials() }
        }
    }
}
