//! The models for a chat rendered by a `ChatView`.
use std::fmt;

use crate::api::public::SessionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }

    /// Maps a server role to a sender. Anything that isn't the user
    /// is shown as the assistant.
    pub fn from_role(role: &str) -> Self {
        if role.eq_ignore_ascii_case("user") {
            Sender::User
        } else {
            Sender::Assistant
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn new(sender: Sender, text: &str) -> Self {
        Self {
            text: text.to_string(),
            sender,
        }
    }

    pub fn user(text: &str) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: &str) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

/// Every message shown in the chat, in order. Append only.
#[derive(Clone, Debug, Default)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

/// The server side conversation this chat is attached to. `None`
/// until the first reply assigns one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    pub id: Option<SessionId>,
}
