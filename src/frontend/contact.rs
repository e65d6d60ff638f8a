#![allow(non_snake_case)]

use super::*;

use super::inputs::InputField;
use crate::utils;
use gloo::net::http::Request;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Seconds since the unix epoch
    pub submitted_at: u64,
}

impl ContactMessage {
    pub fn from_fields(name: &str, email: &str, message: &str, now: Duration) -> Option<Self> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() || message.is_empty() || !email.contains('@') {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            submitted_at: now.as_secs(),
        })
    }
}

pub async fn send_message(message: &ContactMessage) -> Result<(), gloo::net::Error> {
    let response = Request::post(settings::CONTACT_WEBHOOK)
        .json(message)?
        .send()
        .await?;

    if !response.ok() {
        return Err(gloo::net::Error::GlooError(format!(
            "webhook answered {} {}",
            response.status(),
            response.status_text()
        )));
    }

    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
enum SendStatus {
    #[default]
    Idle,
    Invalid,
    Sending,
    Sent,
    Failed(String),
}

impl SendStatus {
    fn line(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Invalid => Some("please fill in every field with a valid email".into()),
            Self::Sending => Some("sending...".into()),
            Self::Sent => Some("thanks, we'll be in touch".into()),
            Self::Failed(e) => Some(format!("couldn't send: {}", e)),
        }
    }
}

fn fields() -> Vec<InputField> {
    InputField::many(vec![
        ("name", "name", InputKind::Text, None),
        ("email", "email", InputKind::Email, Some("we only use this to reply")),
        ("message", "message", InputKind::Multiline, None),
    ])
}

#[component]
pub fn Contact() -> Element {
    let layout = fields();
    let values = use_hook(|| {
        layout
            .iter()
            .map(|_| Signal::new(String::new()))
            .collect::<Vec<_>>()
    });
    let mut status = use_signal(SendStatus::default);

    let mut clear = values.clone();
    let status_line = status.read().line();

    rsx! {
        InfoPage {
            title: "Contact",
            lead: "Questions, pricing, or just saying hi.",
            sections: vec![],

            form {
                class: "contact-form",
                onsubmit: move |event| {
                    let data = event.data().values();
                    let get = |key: &str| data.get(key).map(|v| v.as_value()).unwrap_or_default();

                    let Some(message) = ContactMessage::from_fields(
                        &get("name"),
                        &get("email"),
                        &get("message"),
                        utils::current_time(),
                    ) else {
                        status.set(SendStatus::Invalid);
                        return;
                    };

                    for sig in &mut clear {
                        sig.set(String::new());
                    }

                    status.set(SendStatus::Sending);
                    let mut status = status;
                    tracing::info!(id = %message.id, "sending contact message");
                    wasm_bindgen_futures::spawn_local(async move {
                        match send_message(&message).await {
                            Ok(()) => status.set(SendStatus::Sent),
                            Err(e) => {
                                tracing::warn!("contact message failed: {}", e);
                                status.set(SendStatus::Failed(e.to_string()));
                            }
                        }
                    });
                },

                for (field, value) in layout.into_iter().zip(values.iter().copied()) {
                    StyledInput {
                        name: field.name,
                        label: field.label,
                        value: value,
                        kind: field.kind,
                        hint: field.tooltip.unwrap_or_default(),
                    }
                }

                button {
                    r#type: "submit",
                    class: "confirm",
                    disabled: *status.read() == SendStatus::Sending,
                    Icon { kind: IconKind::Mail, size: 18 }
                    "send"
                }

                if let Some(line) = status_line {
                    p { class: "form-status", "{line}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_trimmed_and_stamped() {
        let msg = ContactMessage::from_fields(
            "  Ada ",
            "ada@example.com",
            " hello\n",
            Duration::from_secs(1_700_000_000),
        )
        .unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.message, "hello");
        assert_eq!(msg.submitted_at, 1_700_000_000);
    }

    #[test]
    fn incomplete_message_is_rejected() {
        let now = Duration::from_secs(0);
        assert!(ContactMessage::from_fields("", "a@b.c", "hi", now).is_none());
        assert!(ContactMessage::from_fields("Ada", "not-an-email", "hi", now).is_none());
        assert!(ContactMessage::from_fields("Ada", "a@b.c", "   ", now).is_none());
    }

    #[test]
    fn message_serializes_for_the_webhook() {
        let msg =
            ContactMessage::from_fields("Ada", "ada@example.com", "hi", Duration::from_secs(5))
                .unwrap();
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["submitted_at"], 5);
        assert_eq!(json["id"], msg.id.to_string());
    }

    #[test]
    fn status_lines() {
        assert_eq!(SendStatus::Idle.line(), None);
        assert!(SendStatus::Failed("500".into())
            .line()
            .unwrap()
            .contains("500"));
    }
}
