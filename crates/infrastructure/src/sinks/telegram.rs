use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use subwatch_application::ports::NotificationSink;
use subwatch_domain::config::TelegramConfig;
use subwatch_domain::DomainError;
use tracing::{debug, warn};

const SINK_NAME: &str = "telegram";

const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared client with connection pooling across sends.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    client_builder().build().unwrap_or_else(|e| {
        warn!(
            error = %e,
            timeout_secs = SEND_TIMEOUT.as_secs(),
            "Failed to build Telegram HTTP client, falling back to defaults without a send timeout"
        );
        reqwest::Client::new()
    })
});

fn client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(SEND_TIMEOUT)
        .pool_max_idle_per_host(2)
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API sink (`sendMessage`). The JSON body is sent as the
/// message text.
pub struct TelegramSink {
    endpoint: String,
    chat_id: String,
}

impl TelegramSink {
    pub fn new(api_url: &str, bot_token: &str, chat_id: impl Into<String>) -> Self {
        Self {
            endpoint: format!(
                "{}/bot{}/sendMessage",
                api_url.trim_end_matches('/'),
                bot_token
            ),
            chat_id: chat_id.into(),
        }
    }

    pub fn from_config(config: &TelegramConfig) -> Result<Self, DomainError> {
        match (&config.bot_token, &config.chat_id) {
            (Some(token), Some(chat_id)) => Ok(Self::new(&config.api_url, token, chat_id.clone())),
            _ => Err(DomainError::InvalidData(
                "Telegram output needs a bot token and a chat id".to_string(),
            )),
        }
    }
}

#[async_trait]
impl NotificationSink for TelegramSink {
    fn name(&self) -> &str {
        SINK_NAME
    }

    async fn send(&self, message: &str) -> Result<(), DomainError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: message,
        };

        // The endpoint embeds the bot token: keep it out of error messages.
        let response = SHARED_CLIENT
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::sink(SINK_NAME, e.without_url().to_string()))?;

        let status = response.status();
        let body: Option<ApiResponse> = response.json().await.ok();

        match body {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => {
                debug!(chat_id = %self.chat_id, "Telegram message sent");
                Ok(())
            }
            Some(ApiResponse { description, .. }) => Err(DomainError::sink(
                SINK_NAME,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    description.unwrap_or_else(|| "request rejected".to_string())
                ),
            )),
            None => Err(DomainError::sink(
                SINK_NAME,
                format!("HTTP {}: unreadable response", status.as_u16()),
            )),
        }
    }
}
