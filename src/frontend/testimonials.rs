#![allow(non_snake_case)]

use super::*;

use crate::performance::use_performance_mode;
use crate::settings::{REEL_FRAME_INTERVAL, REEL_STEP_PX};
use crate::utils;
use gloo::timers::callback::Interval;

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, role: &str) -> Self {
        Self {
            quote: quote.to_owned(),
            author: author.to_owned(),
            role: role.to_owned(),
        }
    }
}

/// Scroll state of the testimonial reel. The track holds the list twice so
/// the offset can wrap without a visible seam.
#[derive(Debug, Clone, PartialEq)]
pub struct Reel {
    /// Current offset of the track in pixels
    pub offset: f32,
    /// Width of one card including the gap
    pub item_width: f32,
    pub total_items: usize,
    pub paused: bool,
}

impl Reel {
    pub const ITEM_WIDTH: f32 = 340.0;

    pub fn new(total_items: usize) -> Self {
        Self {
            offset: 0.0,
            item_width: Self::ITEM_WIDTH,
            total_items,
            paused: false,
        }
    }

    /// Length of one copy of the list.
    pub fn loop_width(&self) -> f32 {
        self.item_width * self.total_items as f32
    }

    /// False while hovered or when there is nothing to scroll.
    pub fn is_moving(&self) -> bool {
        !self.paused && self.total_items > 0
    }

    pub fn advance(&mut self, step: f32) {
        if !self.is_moving() {
            return;
        }

        let width = self.loop_width();
        self.offset = (self.offset + step) % width;
    }

    pub fn transform(&self) -> String {
        format!("transform: translateX(-{});", utils::px(self.offset))
    }
}

#[component]
pub fn Testimonials(items: Vec<Testimonial>) -> Element {
    let high_performance = use_performance_mode();
    let total = items.len();
    let mut reel = use_signal(move || Reel::new(total));
    let mut ticker: Signal<Option<Interval>> = use_signal(|| None);

    use_effect(use_reactive((&high_performance,), move |(high_performance,)| {
        if high_performance {
            ticker.set(None);
            return;
        }

        let millis = u32::try_from(REEL_FRAME_INTERVAL.as_millis()).unwrap_or(u32::MAX);
        ticker.set(Some(Interval::new(millis, move || {
            // Writing marks the reel dirty, so skip frames where nothing moves.
            if reel.peek().is_moving() {
                reel.write().advance(REEL_STEP_PX);
            }
        })));
    }));

    if high_performance {
        return rsx! {
            div {
                class: "testimonials static",
                for item in items {
                    { card(item) }
                }
            }
        };
    }

    let style = reel.read().transform();
    let doubled: Vec<Testimonial> = items.iter().chain(items.iter()).cloned().collect();

    rsx! {
        div {
            class: "testimonials",
            onmouseenter: move |_| reel.write().paused = true,
            onmouseleave: move |_| reel.write().paused = false,
            div {
                class: "testimonial-track",
                style: "{style}",
                for item in doubled {
                    { card(item) }
                }
            }
        }
    }
}

fn card(item: Testimonial) -> Element {
    rsx! {
        figure {
            class: "testimonial",
            Icon { kind: IconKind::Quote, size: 20 }
            blockquote { "{item.quote}" }
            figcaption {
                strong { "{item.author}" }
                span { class: "testimonial-role", "{item.role}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::PerformanceProvider;

    #[test]
    fn advance_wraps_after_one_copy() {
        let mut reel = Reel::new(3);
        reel.item_width = 100.;
        reel.advance(250.);
        assert_eq!(reel.offset, 250.);
        reel.advance(75.);
        assert_eq!(reel.offset, 25.);
    }

    #[test]
    fn paused_reel_does_not_move() {
        let mut reel = Reel::new(3);
        reel.paused = true;
        reel.advance(10.);
        assert_eq!(reel.offset, 0.);
    }

    #[test]
    fn empty_reel_stays_put() {
        let mut reel = Reel::new(0);
        reel.advance(10.);
        assert_eq!(reel.offset, 0.);
        assert_eq!(reel.loop_width(), 0.);
    }

    #[test]
    fn transform_uses_negative_offset() {
        let mut reel = Reel::new(2);
        reel.advance(12.);
        assert_eq!(reel.transform(), "transform: translateX(-12.0px);");
    }

    #[test]
    fn hovered_or_empty_reel_is_not_moving() {
        let mut reel = Reel::new(2);
        assert!(reel.is_moving());
        reel.paused = true;
        assert!(!reel.is_moving());
        assert!(!Reel::new(0).is_moving());
    }

    fn items() -> Vec<Testimonial> {
        vec![
            Testimonial::new("Pages load before I blink.", "Ada", "CTO"),
            Testimonial::new("Docs that answer the question.", "Linus", "Maintainer"),
        ]
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn performance_mode_renders_static_grid() {
        fn app() -> Element {
            rsx! {
                PerformanceProvider { high_performance: true,
                    Testimonials { items: items() }
                }
            }
        }
        let html = render(app);

        assert!(html.contains("testimonials static"));
        assert!(!html.contains("testimonial-track"));
        assert_eq!(html.matches("<figure").count(), items().len());
    }

    #[test]
    fn default_mode_renders_doubled_track() {
        fn app() -> Element {
            rsx! {
                Testimonials { items: items() }
            }
        }
        let html = render(app);

        assert!(html.contains("testimonial-track"));
        assert!(!html.contains("testimonials static"));
        assert!(html.contains("translateX(-0.0px)"));
        assert_eq!(html.matches("<figure").count(), 2 * items().len());
        assert_eq!(html.matches("Pages load before I blink.").count(), 2);
    }
}
