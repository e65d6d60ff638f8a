use crate::cache::{self, Preferences};
use std::time::Duration;
use tracing::{debug, info};
use web_sys::window;

pub use crate::scroll::DEFAULT_SETTLE_DELAY as SETTLE_DELAY;

/// Time between testimonial reel frames. 25ms = 40fps.
pub const REEL_FRAME_INTERVAL: Duration = Duration::from_millis(25);

/// Pixels the reel moves per frame.
pub const REEL_STEP_PX: f32 = 0.6;

/// Devices with at most this many logical cores start in high performance mode.
pub const LOW_CORE_COUNT: f64 = 2.;

/// Where the contact form posts. Served by the dev proxy in `Dioxus.toml`.
pub const CONTACT_WEBHOOK: &str = "/hooks/contact";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceHints {
    pub prefers_reduced_motion: bool,
    pub logical_cores: Option<f64>,
}

impl DeviceHints {
    pub fn detect() -> Self {
        let Some(window) = window() else {
            return Self::default();
        };

        let prefers_reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        let cores = window.navigator().hardware_concurrency();
        let logical_cores = (cores > 0.).then_some(cores);

        Self {
            prefers_reduced_motion,
            logical_cores,
        }
    }

    pub fn wants_high_performance(&self) -> bool {
        self.prefers_reduced_motion
            || self
                .logical_cores
                .map_or(false, |cores| cores <= LOW_CORE_COUNT)
    }
}

/// A stored choice wins over what the device looks like.
pub fn resolve_high_performance(prefs: Preferences, hints: DeviceHints) -> bool {
    prefs
        .high_performance
        .unwrap_or_else(|| hints.wants_high_performance())
}

pub fn initial_high_performance() -> bool {
    let prefs = cache::load_preferences();
    let hints = DeviceHints::detect();
    let high_performance = resolve_high_performance(prefs, hints);
    info!(high_performance, "starting performance mode");
    debug!(?prefs, ?hints);
    high_performance
}

pub fn remember_high_performance(high_performance: bool) {
    cache::save_preferences(&Preferences {
        high_performance: Some(high_performance),
    });
}
