#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::time::Duration;

use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CompletionRequest;
use crate::domain::models::ResponseOutcome;

/// One network exchange with the chat completion endpoint, no retry, no
/// caching, exactly one outbound POST per call.
///
/// HTTP status is deliberately not inspected: a completed exchange with a
/// parseable JSON body is a `Success`, service-side error objects included,
/// and the body is passed through verbatim for display. `Failure` is reserved
/// for exchanges that never completed or bodies that were not JSON.
#[derive(Clone)]
pub struct ChatClient {
    url: String,
    timeout: String,
}

impl Default for ChatClient {
    fn default() -> ChatClient {
        return ChatClient {
            url: Config::get(ConfigKey::ApiUrl),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl ChatClient {
    pub fn with_url(url: String) -> ChatClient {
        return ChatClient {
            url,
            timeout: "30000".to_string(),
        };
    }

    pub async fn send(&self, payload: &CompletionRequest, credential: &str) -> ResponseOutcome {
        let timeout = self.timeout.parse::<u64>().unwrap_or(30000);

        let res = reqwest::Client::new()
            .post(format!("{url}/v1/chat/completions", url = self.url))
            .header("Authorization", format!("Bearer {credential}"))
            .timeout(Duration::from_millis(timeout))
            .json(payload)
            .send()
            .await;

        let response = match res {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = ?err, "completion endpoint is not reachable");
                return ResponseOutcome::Failure(format!(
                    "the request could not be completed: {err}"
                ));
            }
        };

        let status = response.status().as_u16();
        match response.json::<Value>().await {
            Ok(body) => {
                tracing::debug!(status = status, "completion response");
                return ResponseOutcome::Success(body);
            }
            Err(err) => {
                tracing::error!(status = status, error = ?err, "unparseable completion response");
                return ResponseOutcome::Failure(format!(
                    "the response body could not be parsed as JSON: {err}"
                ));
            }
        }
    }
}
