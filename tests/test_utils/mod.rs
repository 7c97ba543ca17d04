//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bizassist::api::HttpChatApi;
use bizassist::chat::{ChatFormController, ChatView, Message};
use bizassist::core::StaticToken;

pub const TEST_TOKEN: &str = "test-token";

/// Everything a controller did to its view, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Appended(Message),
    ClearedInput,
    Control(bool, String),
}

/// A `ChatView` that records calls instead of rendering them.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Appended(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Whether the send control ended up enabled. Starts enabled.
    pub fn send_enabled(&self) -> bool {
        self.events()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Control(enabled, _) => Some(*enabled),
                _ => None,
            })
            .unwrap_or(true)
    }
}

impl ChatView for RecordingView {
    fn append_message(&self, msg: &Message) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Appended(msg.clone()));
    }

    fn clear_input(&self) {
        self.events.lock().unwrap().push(ViewEvent::ClearedInput);
    }

    fn set_send_control(&self, enabled: bool, label: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Control(enabled, label.to_string()));
    }
}

/// Creates a controller talking HTTP to `base_url` with a fixed token.
pub fn test_controller(base_url: &str) -> (ChatFormController, Arc<RecordingView>) {
    test_controller_with_api(HttpChatApi::new(base_url))
}

/// Same as `test_controller` for an already configured client.
pub fn test_controller_with_api(api: HttpChatApi) -> (ChatFormController, Arc<RecordingView>) {
    let view = Arc::new(RecordingView::default());
    let controller = ChatFormController::new(
        Arc::new(api),
        Arc::new(StaticToken::new(TEST_TOKEN)),
        view.clone(),
    );
    (controller, view)
}
