#![allow(non_snake_case)]

use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Number,
    Multiline,
}

impl InputKind {
    fn html_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Multiline => "text",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

/// Everything needed to lay out one [`StyledInput`] in a form.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub name: String,
    pub label: String,
    pub kind: InputKind,
    pub tooltip: Option<String>,
}

impl InputField {
    pub fn many(inp: Vec<(&str, &str, InputKind, Option<&str>)>) -> Vec<Self> {
        inp.into_iter()
            .map(|(name, label, kind, tooltip)| Self {
                name: name.to_owned(),
                label: label.to_owned(),
                kind,
                tooltip: tooltip.map(ToOwned::to_owned),
            })
            .collect()
    }
}

#[component]
pub fn StyledInput(
    #[props(into)] name: String,
    #[props(into)] label: String,
    value: Signal<String>,
    #[props(default)] kind: InputKind,
    #[props(default, into)] hint: String,
    #[props(default = true)] required: bool,
) -> Element {
    let mut value = value;

    rsx! {
        div {
            class: "styled-input",
            div {
                class: "styled-input-label",
                label {
                    r#for: "{name}",
                    "{label}"
                }
                if !hint.is_empty() {
                    { tooltip("?", &hint, 0.8) }
                }
            }
            if kind == InputKind::Multiline {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    rows: "5",
                    required: required,
                    value: value(),
                    oninput: move |event| value.set(event.value()),
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: kind.html_type(),
                    required: required,
                    autocomplete: "off",
                    step: if kind == InputKind::Number { "any" },
                    value: value(),
                    oninput: move |event| value.set(event.value()),
                }
            }
        }
    }
}

pub fn tooltip(main_text: &str, tooltip: &str, text_size: f32) -> Element {
    let text_size = format!("{}em", text_size);
    rsx! {
        div {
            class: "tooltip-container",
            color: "#666",
            "{main_text}",
            div {
                class: "tooltip-text",
                font_size: text_size,
                z_index: "5000",
                color: "white",
                "{tooltip}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_builds_fields_in_order() {
        let fields = InputField::many(vec![
            ("name", "your name", InputKind::Text, None),
            ("email", "email", InputKind::Email, Some("we only reply here")),
        ]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "name");
        assert_eq!(fields[1].kind, InputKind::Email);
        assert_eq!(fields[1].tooltip.as_deref(), Some("we only reply here"));
    }

    #[test]
    fn input_kind_maps_to_html_type() {
        assert_eq!(InputKind::Email.html_type(), "email");
        assert_eq!(InputKind::Number.html_type(), "number");
        assert_eq!(InputKind::Multiline.html_type(), "text");
    }

    #[test]
    fn styled_input_renders_label_and_tooltip() {
        fn app() -> Element {
            let value = use_signal(|| String::from("ada"));
            rsx! {
                StyledInput {
                    name: "name",
                    label: "your name",
                    value: value,
                    hint: "how we greet you",
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("your name"));
        assert!(html.contains("how we greet you"));
        assert!(html.contains("type=\"text\""));
    }
}
