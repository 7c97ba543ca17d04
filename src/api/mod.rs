mod client;
pub mod public;

pub use client::{ApiReply, ChatApi, HttpChatApi, SEND_MESSAGE_PATH, SESSION_PATH};
