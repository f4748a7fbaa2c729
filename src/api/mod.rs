mod client;
pub mod models;

pub use client::EscalationClient;
pub use models::{ChatResponse, RemoteReply, RequestBody, WireMessage};
