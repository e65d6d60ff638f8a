#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Decorative line icons, drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bolt,
    Shield,
    Chart,
    Sparkle,
    Quote,
    ArrowRight,
    Gauge,
    Mail,
}

impl IconKind {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Self::Bolt => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z", "m9 12 2 2 4-4"],
            Self::Chart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            Self::Sparkle => &[
                "M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2L12 3z",
                "M19 3v4",
                "M21 5h-4",
            ],
            Self::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.3-.8-2-2-2H4c-1.3 0-2 .7-2 2v6c0 1.2.7 2 2 2h3",
                "M14 21c3 0 7-1 7-8V5c0-1.3-.8-2-2-2h-4c-1.3 0-2 .7-2 2v6c0 1.2.7 2 2 2h3",
            ],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Gauge => &["m12 14 4-4", "M3.3 19a10 10 0 1 1 17.4 0"],
            Self::Mail => &["M4 4h16v16H4z", "m22 6-10 7L2 6"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bolt => "bolt",
            Self::Shield => "shield",
            Self::Chart => "chart",
            Self::Sparkle => "sparkle",
            Self::Quote => "quote",
            Self::ArrowRight => "arrow right",
            Self::Gauge => "gauge",
            Self::Mail => "mail",
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = 24)] size: u32) -> Element {
    let size = size.to_string();

    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-label": kind.label(),
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_every_path() {
        fn app() -> Element {
            rsx! {
                Icon { kind: IconKind::Shield, size: 32 }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("width=\"32\""));
        assert_eq!(html.matches("<path").count(), IconKind::Shield.paths().len());
    }
}
