use std::fmt;

#[derive(Debug)]
pub enum ChatError {
    ApiError {
        status: u16,
        message: String,
    },
    MalformedResponse(String),
    ConfigError(String),
    StorageError(String),
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ChatError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            ChatError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChatError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            ChatError::NetworkError(e) => write!(f, "Network error: {}", e),
            ChatError::Timeout => write!(f, "Request timeout"),
            ChatError::IoError(e) => write!(f, "IO error: {}", e),
            ChatError::JsonError(e) => write!(f, "JSON error: {}", e),
            ChatError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::NetworkError(e) => Some(e),
            ChatError::IoError(e) => Some(e),
            ChatError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Timeout
        } else {
            ChatError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        ChatError::IoError(err)
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::JsonError(err)
    }
}

impl From<String> for ChatError {
    fn from(msg: String) -> Self {
        ChatError::Other(msg)
    }
}

impl From<&str> for ChatError {
    fn from(msg: &str) -> Self {
        ChatError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
