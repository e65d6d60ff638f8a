use crate::scroll::{Cancel, ElementLookup, NavigationLocation, ScrollBehavior, Scheduler, Viewport};
use gloo::timers::callback::Timeout;
use std::time::Duration;
use tracing::warn;
use web_sys::{window, Element, ScrollIntoViewOptions};

/// Looks up elements by id in the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLookup;

impl ElementLookup for DocumentLookup {
    type Element = Element;

    fn resolve(&self, id: &str) -> Option<Element> {
        window()?.document()?.get_element_by_id(id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    type Element = Element;

    fn scroll_to_origin(&self) {
        match window() {
            Some(window) => window.scroll_to_with_x_and_y(0., 0.),
            None => warn!("no window to scroll"),
        }
    }

    fn scroll_into_view(&self, element: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Schedules on the browser event loop with `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

pub struct PendingTimeout(Timeout);

impl Cancel for PendingTimeout {
    fn cancel(self) {
        self.0.cancel();
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = PendingTimeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> PendingTimeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        PendingTimeout(Timeout::new(millis, task))
    }
}

pub fn current_location() -> NavigationLocation {
    let Some(location) = window().map(|w| w.location()) else {
        return NavigationLocation::default();
    };

    NavigationLocation::from_parts(
        &location.pathname().unwrap_or_default(),
        &location.search().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    )
}
