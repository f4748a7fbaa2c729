use crate::models::{Message, Role};
use serde::{Deserialize, Serialize};

/// Message as sent over the wire: role and content only. Local-only fields
/// (reasoning, timestamp) are stripped before transmission.
#[derive(Serialize, Clone)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        WireMessage {
            role: match message.role {
                Role::User => "user".to_string(),
                Role::Assistant => "assistant".to_string(),
            },
            content: message.content.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub stream: bool,
}

#[derive(Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
    pub reasoning: Option<String>,
}

#[derive(Deserialize)]
pub struct ChatResponse {
    pub message: Option<ResponseMessage>,
}

/// A successfully parsed remote reply.
#[derive(Clone, Debug)]
pub struct RemoteReply {
    pub content: String,
    pub reasoning: Option<String>,
}
