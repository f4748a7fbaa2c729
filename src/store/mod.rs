mod filesystem;
mod memory;
mod storage;

pub use filesystem::FilesystemStorage;
pub use memory::MemoryStorage;
pub use storage::ScopedStorage;

use crate::models::Message;

/// Fixed storage key for the serialized conversation blob.
pub const CONVERSATION_KEY: &str = "chat-messages";

/// Greeting shown at the start of every fresh conversation.
pub const WELCOME_MESSAGE: &str = "Xin chào! Tôi là trợ lý tâm lý AI. Bạn có thể chia sẻ với tôi bất cứ điều gì đang khiến bạn trăn trở. Tôi luôn ở đây để lắng nghe và hỗ trợ bạn 😊";

/// Owns the in-memory conversation and keeps it durable. Every mutation
/// serializes and overwrites the whole stored blob (last write wins);
/// persistence is best-effort and never surfaces to the user.
pub struct ConversationStore<S: ScopedStorage> {
    storage: S,
    messages: Vec<Message>,
}

impl<S: ScopedStorage> ConversationStore<S> {
    /// Load the persisted conversation, falling back to a single welcome
    /// message when the blob is absent or unreadable.
    pub fn initialize(storage: S) -> Self {
        let messages = storage
            .get(CONVERSATION_KEY)
            .and_then(|blob| serde_json::from_str::<Vec<Message>>(&blob).ok())
            .filter(|messages| !messages.is_empty())
            .unwrap_or_else(|| vec![Message::assistant(WELCOME_MESSAGE)]);

        ConversationStore { storage, messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append a user message. Whitespace-only input is a silent no-op;
    /// returns whether a message was appended.
    pub fn append_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(Message::user(text));
        self.persist();
        true
    }

    pub fn append_assistant(&mut self, message: Message) {
        self.messages.push(message);
        self.persist();
    }

    /// Replace the conversation with a fresh welcome message, overwriting
    /// any persisted history.
    pub fn reset(&mut self) {
        self.messages = vec![Message::assistant(WELCOME_MESSAGE)];
        self.persist();
    }

    fn persist(&self) {
        if let Ok(blob) = serde_json::to_string(&self.messages) {
            // Best-effort: a write failure leaves the conversation in memory.
            let _ = self.storage.set(CONVERSATION_KEY, &blob);
        }
    }
}
