#![allow(non_snake_case)]

use crate::dom::{self, DocumentLookup, TimeoutScheduler, WindowViewport};
use crate::performance::{use_performance_mode, PerformanceProvider};
use crate::scroll::{HashScrollController, ScrollBehavior};
use crate::settings;
use dioxus::prelude::*;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

mod about;
mod card;
mod contact;
mod docs;
mod heading;
mod home;
mod icons;
mod info;
mod inputs;
mod testimonials;

use about::*;
use contact::*;
use docs::*;
use home::*;

pub use card::IconCard;
pub use heading::{GradientHeading, HeadingLevel, Palette};
pub use icons::{Icon, IconKind};
pub use info::{InfoPage, InfoSection, SectionLink};
pub use inputs::{InputKind, StyledInput};
pub use testimonials::{Testimonial, Testimonials};

/// The user's performance choice, owned by [`App`] and fed into the
/// [`PerformanceProvider`].
#[derive(Clone, Copy)]
pub struct PerformanceToggle(pub Signal<bool>);

pub fn App() -> Element {
    let high_performance = use_signal(settings::initial_high_performance);
    use_context_provider(|| PerformanceToggle(high_performance));

    rsx! {
        PerformanceProvider {
            high_performance: high_performance(),
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Home {},
    #[route("/docs")]
    Docs {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
fn Wrapper() -> Element {
    use_hash_scroll(use_route::<Route>());

    rsx! {
        div {
            class: "page",

            { header() }

            main {
                Outlet::<Route> {}
            }

            { footer() }
        }
    }
}

type DomScrollController = HashScrollController<DocumentLookup, WindowViewport, TimeoutScheduler>;

/// Keeps the scroll position in step with navigation: top of the page for
/// plain routes, the matching section for `#fragment` links.
fn use_hash_scroll(route: Route) {
    let mut location = use_signal(dom::current_location);
    let controller = use_hook(|| {
        let controller = DomScrollController::new(DocumentLookup, WindowViewport, TimeoutScheduler)
            .with_settle_delay(settings::SETTLE_DELAY);
        Rc::new(RefCell::new(controller))
    });

    let behavior = if use_performance_mode() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    };
    controller.borrow_mut().set_behavior(behavior);

    // In-page anchors only change the hash, which the router doesn't see.
    use_hook(|| {
        window().map(|window| {
            Rc::new(EventListener::new(&window, "hashchange", move |_| {
                location.set(dom::current_location());
            }))
        })
    });

    use_effect(use_reactive((&route,), move |_| {
        location.set(dom::current_location());
    }));

    {
        let controller = Rc::clone(&controller);
        use_effect(move || {
            let location = location();
            let outcome = controller.borrow_mut().navigate(&location);
            tracing::debug!(?outcome, path = %location.path, "navigated");
        });
    }

    use_drop(move || controller.borrow_mut().teardown());
}

fn header() -> Element {
    rsx! {
        nav {
            class: "top-nav",
            div {
                class: "brand",
                Link { to: Route::Home {},
                    Icon { kind: IconKind::Sparkle, size: 22 }
                    "beacon"
                }
            }
            div {
                class: "nav-links",
                Link { to: Route::Docs {}, "docs" }
                a { href: "/docs#pricing", "pricing" }
                Link { to: Route::About {}, "about" }
                Link { to: Route::Contact {}, "contact" }
            }
        }
    }
}

pub fn footer() -> Element {
    let PerformanceToggle(mut high_performance) = use_context::<PerformanceToggle>();

    rsx! {
        footer {
            class: "footer",
            Link {
                to: Route::About {},
                "about"
            }
            span {
                margin_left: "20px",
                Link {
                    to: Route::Contact {},
                    "feedback"
                }
            }
            button {
                class: "emoji-button",
                margin_left: "20px",
                onclick: move |_| {
                    let next = !high_performance();
                    high_performance.set(next);
                    settings::remember_high_performance(next);
                },
                if high_performance() {
                    { inputs::tooltip("⚡", "performance mode is on, click for full effects", 0.8) }
                } else {
                    { inputs::tooltip("✨", "full effects are on, click for performance mode", 0.8) }
                }
            }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        InfoPage {
            title: "Not found",
            lead: format!("Nothing lives at /{}.", path),
            sections: vec![],
            Link { to: Route::Home {}, "back home" }
        }
    }
}
