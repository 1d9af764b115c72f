//! Palette handling. The applied [`ThemeMode`] enum value is the single
//! source of truth; the injected stylesheet and the document-root class are
//! both derived from it, so exactly one palette is in effect at any time.

use crate::storage::{PALETTE_KEY, StateStore};
use crate::types::ThemeMode;
use tracing::warn;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_PALETTE,
            root_class: "dark-palette",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_PALETTE,
            root_class: "light-palette",
        },
    }
}

/// Value written under the `palette` storage key.
pub fn storage_class(mode: ThemeMode) -> &'static str {
    theme_definition(mode).root_class
}

pub fn parse_storage_class(raw: &str) -> Option<ThemeMode> {
    match raw {
        "light-palette" => Some(ThemeMode::Light),
        "dark-palette" => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// Read the persisted palette choice, if any. Unknown values are dropped so
/// a stale or hand-edited file falls back to the system preference path.
pub fn load_theme(store: &StateStore) -> Option<ThemeMode> {
    let raw = store.get(PALETTE_KEY)?;
    let mode = parse_storage_class(&raw);
    if mode.is_none() {
        warn!("ignoring unknown palette value {raw:?}");
    }
    mode
}

pub fn persist_theme(store: &StateStore, mode: ThemeMode) {
    if let Err(err) = store.set(PALETTE_KEY, storage_class(mode)) {
        warn!("failed to persist palette choice: {err}");
    }
}

const DARK_PALETTE: &str = r#"
:root {
    --color-bg-primary: #000000;
    --color-bg-overlay: rgba(0, 0, 0, 0.9);
    --color-text-primary: #ffffff;
    --color-text-muted: #cfcfcf;
    --color-border: #ffffff;
    --color-surface-muted: #111111;
    --color-input-border: #2a2a2a;
    --color-input-bg: #000000;
    --color-chat-user-bg: #ffffff;
    --color-chat-user-text: #000000;
    --color-chat-bot-bg: #111111;
    --color-chat-bot-text: #ffffff;
    --color-timestamp: #9b9b9b;
    --color-error: #ff6b5e;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-border); }
"#;

const LIGHT_PALETTE: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-overlay: rgba(255, 255, 255, 0.92);
    --color-text-primary: #000000;
    --color-text-muted: #4a4a4a;
    --color-border: #000000;
    --color-surface-muted: #e6e6e6;
    --color-input-border: #c2c2c2;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #111111;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #f5f5f5;
    --color-chat-bot-text: #000000;
    --color-timestamp: #606060;
    --color-error: #c0271c;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
.btn { color: var(--color-text-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer { background: var(--color-bg-overlay); border-top-color: var(--color-border); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-border); }
"#;
