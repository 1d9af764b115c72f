use crate::bot::SessionHandle;
use crate::types::{ChatMessage, Role};
use crate::views::shared::{format_message_timestamp, text_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset};

fn time_of_day(hour: u8) -> &'static str {
    match hour {
        5..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    }
}

fn greeting() -> String {
    let mut now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now = now.to_offset(offset);
    }
    format!(
        "Good {}! What can I help you with?",
        time_of_day(now.hour())
    )
}

fn scroll_to_bottom() {
    document::eval(
        r#"var screen = document.getElementById("screen");
if (screen) { screen.scrollTop = screen.scrollHeight; }"#,
    );
}

#[component]
pub fn ChatView(session: SessionHandle) -> Element {
    let session = use_signal(move || session.clone());
    let messages = use_signal(|| vec![ChatMessage::now(Role::Bot, greeting())]);
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);
    let error_line = use_signal(|| Option::<String>::None);

    let mut send_message = {
        let mut messages = messages;
        let mut sending_signal = sending;
        let mut input_signal = input;
        let mut error_line = error_line;
        move |text: String| {
            let trimmed = text.trim();
            if trimmed.is_empty() || sending_signal() {
                return;
            }

            // Optimistic local echo before the request goes out.
            messages.with_mut(|msgs| msgs.push(ChatMessage::now(Role::User, trimmed)));
            input_signal.set(String::new());
            error_line.set(None);
            sending_signal.set(true);
            scroll_to_bottom();

            let session = session();
            let text = trimmed.to_string();
            spawn(async move {
                match session.submit(&text).await {
                    Ok(responses) => {
                        messages.with_mut(|msgs| {
                            for response in responses {
                                msgs.push(ChatMessage::now(Role::Bot, response));
                            }
                        });
                    }
                    Err(err) => {
                        tracing::error!("bot exchange failed: {err}");
                        error_line.set(Some(format!("Message not delivered: {err}")));
                    }
                }
                sending_signal.set(false);
                scroll_to_bottom();
            });
        }
    };

    let messages_snapshot = messages();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "screen", class: "screen",
                    for msg in messages_snapshot.iter() {
                        MessageBubble { message: msg.clone() }
                    }
                    if sending() {
                        div { class: "message bot",
                            div { class: "bubble", div { class: "shimmer-text", "…" } }
                        }
                    }
                    if let Some(line) = error_line() {
                        div { class: "message error",
                            div { class: "bubble", "{line}" }
                        }
                    }
                }
            }

            form { class: "composer no-divider",
                div { class: "composer-inner",
                    div { class: "hstack", style: "gap: 0.5rem; width: 100%; align-items: flex-end;",
                        textarea {
                            class: "messageinput", rows: "1", placeholder: "What can I help you with?",
                            value: "{input}", oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    let text = input();
                                    send_message(text);
                                }
                            },
                            disabled: sending(), autofocus: true,
                        }
                        button {
                            class: "btn btn-primary", r#type: "button",
                            disabled: sending() || input().trim().is_empty(),
                            onclick: move |_| {
                                let text = input();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let kind = match message.role {
        Role::User => "user",
        Role::Bot => "bot",
    };
    let body_html = text_to_html(&message.text);
    let timestamp = format_message_timestamp(message.created_at);

    rsx! {
        div { class: "message {kind}",
            div { class: "bubble",
                if matches!(message.role, Role::Bot) {
                    div { class: "avatar bot", "F" }
                }
                if let Some(ts) = timestamp {
                    div { class: "time", "{ts}" }
                }
                div { class: "text", dangerous_inner_html: "{body_html}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::time_of_day;

    #[test]
    fn greeting_tracks_time_of_day() {
        assert_eq!(time_of_day(6), "morning");
        assert_eq!(time_of_day(11), "morning");
        assert_eq!(time_of_day(12), "afternoon");
        assert_eq!(time_of_day(17), "afternoon");
        assert_eq!(time_of_day(21), "evening");
        assert_eq!(time_of_day(2), "evening");
    }
}
