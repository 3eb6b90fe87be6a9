//! Discord webhook alert channel.

use async_trait::async_trait;
use monitor_core::source::AlertSink;
use serde::Serialize;
use tracing::{debug, warn};

/// Environment variable for the Discord webhook URL.
const ENV_DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";

#[derive(Serialize)]
struct DiscordPayload<'a> {
    content: &'a str,
}

/// Discord webhook alert sink. An unset URL disables the channel; sends
/// are best effort and failures never propagate past the sink.
pub struct DiscordWebhook {
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl DiscordWebhook {
    /// Create a Discord sink from environment variables.
    pub fn from_env() -> Self {
        let webhook_url = std::env::var(ENV_DISCORD_WEBHOOK_URL).ok();

        if webhook_url.is_some() {
            debug!("Discord alerts enabled");
        } else {
            debug!("Discord alerts disabled (DISCORD_WEBHOOK_URL not set)");
        }

        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a Discord sink with a specific webhook URL.
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url: Some(webhook_url),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AlertSink for DiscordWebhook {
    async fn notify(&self, message: &str) {
        let Some(url) = self.webhook_url.as_deref() else {
            debug!("skipping alert, no webhook configured");
            return;
        };

        let payload = DiscordPayload { content: message };
        match self.client.post(url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("alert delivered");
            }
            Ok(response) => {
                warn!(status = %response.status(), "webhook rejected alert");
            }
            Err(e) => {
                warn!(error = %e, "failed to send alert");
            }
        }
    }
}
