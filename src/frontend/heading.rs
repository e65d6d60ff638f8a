#![allow(non_snake_case)]

use super::*;

use crate::performance::use_performance_mode;
use crate::utils;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Dawn,
    Ocean,
    Ember,
}

impl Palette {
    fn stops(&self) -> (&'static str, &'static str) {
        match self {
            Self::Dawn => ("#f6d365", "#fda085"),
            Self::Ocean => ("#7eb2ff", "#5ee7df"),
            Self::Ember => ("#ff6a88", "#ff99ac"),
        }
    }

    pub fn gradient(&self) -> String {
        let (from, to) = self.stops();
        format!("linear-gradient(90deg, {from}, {to}, {from})")
    }
}

/// Heading text painted with a gradient. The gradient shimmers unless
/// performance mode is on.
#[component]
pub fn GradientHeading(
    #[props(into)] text: String,
    #[props(default)] level: HeadingLevel,
    #[props(default)] palette: Palette,
) -> Element {
    let high_performance = use_performance_mode();
    let class = utils::class_names(&[("gradient-heading", true), ("shimmer", !high_performance)]);
    let style = format!("background-image: {};", palette.gradient());

    match level {
        HeadingLevel::H1 => rsx! { h1 { class: "{class}", style: "{style}", "{text}" } },
        HeadingLevel::H2 => rsx! { h2 { class: "{class}", style: "{style}", "{text}" } },
        HeadingLevel::H3 => rsx! { h3 { class: "{class}", style: "{style}", "{text}" } },
    }
}
