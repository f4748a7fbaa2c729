use crate::api::EscalationClient;
use crate::corpus::Corpus;
use crate::error::ChatError;
use crate::models::Message;
use crate::store::{ConversationStore, ScopedStorage};
use std::time::Duration;
use tokio::time::sleep;

/// Reply shown when the remote endpoint fails in any way: transport error,
/// timeout, non-success status, or a malformed body. The assistant must never
/// appear to simply break.
pub const FALLBACK_MESSAGE: &str = "Xin lỗi, tôi đang gặp vấn đề kết nối. Vui lòng thử lại sau hoặc kiểm tra kết nối mạng của bạn.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChatState {
    Idle,
    AwaitingLocalMatch,
    AwaitingRemote,
}

/// Where a reply came from, for verbose diagnostics.
#[derive(Debug)]
pub enum ReplySource {
    Corpus,
    Remote,
    Fallback(ChatError),
}

#[derive(Debug)]
pub struct Reply {
    pub message: Message,
    pub source: ReplySource,
}

/// Drives one conversation: append user input, try the local matcher, and
/// escalate to the remote endpoint on a miss. Submissions are serialized by
/// the state machine; while a submission is in flight further submits are
/// refused, which is the only concurrency control the conversation needs.
pub struct ChatEngine<S: ScopedStorage> {
    store: ConversationStore<S>,
    corpus: Corpus,
    client: EscalationClient,
    typing_delay: Duration,
    state: ChatState,
}

impl<S: ScopedStorage> ChatEngine<S> {
    pub fn new(
        store: ConversationStore<S>,
        corpus: Corpus,
        client: EscalationClient,
        typing_delay: Duration,
    ) -> Self {
        ChatEngine {
            store,
            corpus,
            client,
            typing_delay,
            state: ChatState::Idle,
        }
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    /// Process one user submission. Returns `None` without touching any
    /// state when the input is whitespace-only or a submission is already in
    /// flight; otherwise appends the user message, produces exactly one
    /// assistant message, and returns it.
    pub async fn submit(&mut self, text: &str) -> Option<Reply> {
        if self.state != ChatState::Idle {
            return None;
        }
        if !self.store.append_user(text) {
            return None;
        }
        self.state = ChatState::AwaitingLocalMatch;

        let reply = match self.corpus.find_response(text) {
            Some(answer) => {
                // Cosmetic pause so canned answers do not appear instantly.
                sleep(self.typing_delay).await;
                Reply {
                    message: Message::assistant(answer.to_string()),
                    source: ReplySource::Corpus,
                }
            }
            None => {
                self.state = ChatState::AwaitingRemote;
                match self.client.complete(self.store.messages()).await {
                    Ok(remote) => {
                        let mut message = Message::assistant(remote.content);
                        message.reasoning = remote.reasoning;
                        Reply {
                            message,
                            source: ReplySource::Remote,
                        }
                    }
                    Err(err) => Reply {
                        message: Message::assistant(FALLBACK_MESSAGE),
                        source: ReplySource::Fallback(err),
                    },
                }
            }
        };

        self.store.append_assistant(reply.message.clone());
        self.state = ChatState::Idle;
        Some(reply)
    }

    /// Start a new conversation. Valid from `Idle` only; returns whether the
    /// reset happened.
    pub fn reset(&mut self) -> bool {
        if self.state != ChatState::Idle {
            return false;
        }
        self.store.reset();
        true
    }
}
