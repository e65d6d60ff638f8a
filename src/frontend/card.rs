#![allow(non_snake_case)]

use super::*;

use crate::performance::use_performance_mode;
use crate::utils;

#[component]
pub fn IconCard(
    icon: IconKind,
    #[props(into)] title: String,
    #[props(default)] palette: Palette,
    children: Element,
) -> Element {
    let high_performance = use_performance_mode();
    let class = utils::class_names(&[("icon-card", true), ("lift-on-hover", !high_performance)]);
    let badge_style = format!("background-image: {};", palette.gradient());

    rsx! {
        div {
            class: "{class}",
            div {
                class: "icon-badge",
                style: "{badge_style}",
                Icon { kind: icon, size: 28 }
            }
            GradientHeading { text: title.clone(), level: HeadingLevel::H3, palette: palette }
            div {
                class: "icon-card-body",
                { children }
            }
        }
    }
}
