use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/bot";

// Bounds how long a submission can stay in flight. Without it a dead
// endpoint would leave the session awaiting a response until restart.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("empty message")]
    EmptyInput,

    #[error("a request is already in flight")]
    Busy,

    #[error("bot endpoint error {status}: {body}")]
    Endpoint {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed bot response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type BotResult<T> = Result<T, BotError>;

#[derive(Serialize)]
struct BotRequest<'a> {
    // Absent token serializes as `null`; the bot treats that as a fresh
    // conversation.
    user_data: Option<&'a Value>,
    text: &'a str,
}

/// Successful exchange payload. `user_data` is opaque to this client and is
/// echoed back verbatim on the next request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BotReply {
    pub user_data: Value,
    pub responses: Vec<String>,
}

#[async_trait]
pub trait BotBackend: Send + Sync {
    async fn exchange(&self, user_data: Option<&Value>, text: &str) -> BotResult<BotReply>;
}

pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Endpoint from `BOT_ENDPOINT`, falling back to a local dev server.
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = env::var("BOT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl BotBackend for HttpBackend {
    async fn exchange(&self, user_data: Option<&Value>, text: &str) -> BotResult<BotReply> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&BotRequest { user_data, text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str::<BotReply>(&body)?)
        } else {
            Err(BotError::Endpoint { status, body })
        }
    }
}
