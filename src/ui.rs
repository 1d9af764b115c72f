use crate::bot::{ChatSession, HttpBackend, SessionHandle};
use crate::storage::StateStore;
use crate::theme::{load_theme, persist_theme, theme_definition};
use crate::types::ThemeMode;
use crate::views::ChatView;
use dioxus::prelude::*;

const FINCH_CSS: Asset = asset!("/assets/finch.css");

#[component]
pub fn App() -> Element {
    let store = use_hook(StateStore::open);
    let session = use_hook({
        let store = store.clone();
        move || match HttpBackend::from_env() {
            Ok(backend) => Some(SessionHandle::new(ChatSession::new(
                Box::new(backend),
                store,
            ))),
            Err(err) => {
                tracing::error!("failed to initialize bot client: {err}");
                None
            }
        }
    });

    let persisted = use_hook({
        let store = store.clone();
        move || load_theme(&store)
    });
    let mut theme = use_signal(move || persisted.unwrap_or(ThemeMode::Light));
    use_effect(move || {
        if persisted.is_none() {
            spawn(async move {
                if prefers_dark().await {
                    theme.set(ThemeMode::Dark);
                }
            });
        }
    });

    rsx! {
        ThemeStyles { theme }
        div { class: format_args!("app-root {}", theme_definition(theme()).root_class),
            AppHeader { theme, store }
            if let Some(session) = session {
                ChatView { session }
            } else {
                div { class: "main-container",
                    p { class: "text-muted", "The bot client failed to initialize; see the log." }
                }
            }
        }
    }
}

/// OS-level dark-mode preference, consulted only when nothing is persisted.
async fn prefers_dark() -> bool {
    let mut eval = document::eval(
        "dioxus.send(window.matchMedia('(prefers-color-scheme: dark)').matches);",
    );
    matches!(eval.recv::<bool>().await, Ok(true))
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: FINCH_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>, store: StateStore) -> Element {
    let mut theme = theme;
    let label = match theme() {
        ThemeMode::Dark => "Light",
        ThemeMode::Light => "Dark",
    };
    rsx! {
        div { class: "header no-divider",
            div { class: "header-content",
                h1 { class: "header-wordmark", "Finch" }
                button {
                    id: "light-switch", class: "btn btn-ghost", r#type: "button",
                    onclick: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                        persist_theme(&store, next);
                    },
                    "{label}"
                }
            }
        }
    }
}
