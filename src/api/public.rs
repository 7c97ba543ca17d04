//! Wire types for the chat API
use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A server assigned session id. The server hands out integers and
/// validates them as integers, so the id is sent back in the same
/// JSON shape it arrived in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SessionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionId::Number(n) => write!(f, "{}", n),
            SessionId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub message_content: String,
    // Omitted entirely until the server has assigned a session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

impl SendMessageRequest {
    pub fn new(message_content: &str, session_id: Option<&SessionId>) -> Self {
        Self {
            message_content: message_content.to_string(),
            session_id: session_id.cloned(),
        }
    }
}

/// A single message as the server serializes it. Only `content` is
/// guaranteed, the rest is filled in by the server's message model.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ApiMessage {
    /// Parses the server timestamp which is either RFC 3339 or a
    /// naive ISO 8601 datetime in UTC.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_utc())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SendMessageResponse {
    pub assistant_message: ApiMessage,
    pub session_id: SessionId,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionHistoryResponse {
    pub id: SessionId,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
}
