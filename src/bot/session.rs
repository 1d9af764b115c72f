use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::warn;

use super::{BotBackend, BotError, BotResult};
use crate::storage::{StateStore, USER_DATA_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// One conversation with the bot endpoint.
///
/// Owns the opaque continuation token: loaded from storage at construction,
/// replaced wholesale after every successful exchange, persisted on each
/// replacement. While a request is in flight the session refuses further
/// submissions rather than queueing them; any failure returns it to idle
/// with the token unchanged.
pub struct ChatSession {
    backend: Box<dyn BotBackend>,
    store: StateStore,
    inner: Mutex<Inner>,
}

struct Inner {
    state: SessionState,
    user_data: Option<Value>,
}

impl ChatSession {
    pub fn new(backend: Box<dyn BotBackend>, store: StateStore) -> Self {
        let user_data = store.get(USER_DATA_KEY).and_then(|raw| {
            match serde_json::from_str::<Value>(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!("discarding unreadable continuation token: {err}");
                    None
                }
            }
        });
        Self {
            backend,
            store,
            inner: Mutex::new(Inner {
                state: SessionState::Idle,
                user_data,
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.lock().expect("session state poisoned").state
    }

    /// Last-known continuation token, if any exchange has completed.
    pub fn user_data(&self) -> Option<Value> {
        self.inner
            .lock()
            .expect("session state poisoned")
            .user_data
            .clone()
    }

    /// Submit user text and return the bot's utterances in reply order.
    ///
    /// Empty-after-trim input is rejected without touching the network, the
    /// sole validation rule. Exactly one request goes out per accepted
    /// submission.
    pub async fn submit(&self, text: &str) -> BotResult<Vec<String>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(BotError::EmptyInput);
        }

        let user_data = {
            let mut inner = self.inner.lock().expect("session state poisoned");
            if inner.state == SessionState::AwaitingResponse {
                return Err(BotError::Busy);
            }
            inner.state = SessionState::AwaitingResponse;
            inner.user_data.clone()
        };

        let outcome = self.backend.exchange(user_data.as_ref(), trimmed).await;

        let mut inner = self.inner.lock().expect("session state poisoned");
        inner.state = SessionState::Idle;
        let reply = outcome?;
        inner.user_data = Some(reply.user_data.clone());
        drop(inner);

        if let Err(err) = self.store.set(USER_DATA_KEY, &reply.user_data.to_string()) {
            // Keep going with the in-memory token; only persistence is lost.
            warn!("failed to persist continuation token: {err}");
        }

        Ok(reply.responses)
    }
}

/// Cheaply clonable session reference for handing to UI components.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<ChatSession>,
}

impl SessionHandle {
    pub fn new(session: ChatSession) -> Self {
        Self {
            inner: Arc::new(session),
        }
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = ChatSession;

    fn deref(&self) -> &ChatSession {
        &self.inner
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
