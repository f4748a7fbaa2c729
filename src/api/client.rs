use crate::api::models::{ChatResponse, RemoteReply, RequestBody, WireMessage};
use crate::error::{ChatError, Result};
use crate::models::Message;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/// Client for the remote chat-completion endpoint, used only when the local
/// matcher finds nothing. One request per escalation, no automatic retry.
pub struct EscalationClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl EscalationClient {
    pub fn new(endpoint: String, model: String, request_timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(request_timeout)
            .build()?;

        Ok(EscalationClient {
            client,
            endpoint,
            model,
        })
    }

    /// Send the full conversation history and wait for a complete reply.
    /// Any transport failure, non-success status, or response without a
    /// non-empty content field is an error; the caller substitutes the
    /// fallback message.
    pub async fn complete(&self, messages: &[Message]) -> Result<RemoteReply> {
        let request_body = RequestBody {
            model: self.model.clone(),
            messages: messages.iter().map(WireMessage::from).collect(),
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let message = parsed
            .message
            .ok_or_else(|| ChatError::MalformedResponse("missing message field".to_string()))?;
        let content = message
            .content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ChatError::MalformedResponse("empty reply content".to_string()))?;

        Ok(RemoteReply {
            content,
            reasoning: message.reasoning,
        })
    }
}
