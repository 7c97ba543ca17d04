//! Turns chat form submissions into API calls and renders the results.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;

use super::Labels;
use super::models::{ChatSession, Message, Sender, Transcript};
use super::view::ChatView;
use crate::api::public::{
    SendMessageRequest, SendMessageResponse, SessionHistoryResponse, SessionId,
};
use crate::api::{ApiReply, ChatApi};
use crate::core::TokenProvider;

/// What happened to a single submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing was sent
    Ignored,
    /// Another request is still in flight, nothing was sent
    Busy,
    /// The assistant's reply (or the session history) was rendered
    Replied,
    /// The server rejected the token
    SessionExpired,
    /// Network, server or decoding failure
    Failed,
}

#[derive(Default)]
struct ChatState {
    session: ChatSession,
    transcript: Transcript,
}

/// Controller for a chat form bound to one view.
///
/// At most one request is in flight at a time. While it is, the send
/// control is disabled and further submissions return
/// `SubmitOutcome::Busy`. The session id is only written after a
/// successful reply and is sent with every request after that.
pub struct ChatFormController {
    api: Arc<dyn ChatApi>,
    tokens: Arc<dyn TokenProvider>,
    view: Arc<dyn ChatView>,
    labels: Labels,
    busy: AtomicBool,
    state: Mutex<ChatState>,
}

/// Holds the busy flag for one request. Dropping it re-enables the
/// send control whatever the outcome was.
struct InFlight<'a> {
    controller: &'a ChatFormController,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let controller = self.controller;
        controller
            .view
            .set_send_control(true, &controller.labels.send);
        controller.busy.store(false, Ordering::Release);
    }
}

impl ChatFormController {
    pub fn new(
        api: Arc<dyn ChatApi>,
        tokens: Arc<dyn TokenProvider>,
        view: Arc<dyn ChatView>,
    ) -> Self {
        Self {
            api,
            tokens,
            view,
            labels: Labels::default(),
            busy: AtomicBool::new(false),
            state: Mutex::new(ChatState::default()),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Continue an existing server side session without loading its
    /// history. See `resume_session` to also render past messages.
    pub fn session_id(self, session_id: Option<SessionId>) -> Self {
        self.lock_state().session.id = session_id;
        self
    }

    pub fn current_session_id(&self) -> Option<SessionId> {
        self.lock_state().session.id.clone()
    }

    pub fn transcript(&self) -> Transcript {
        self.lock_state().transcript.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Forget the session so the next message starts a new
    /// conversation. Messages already shown stay in the transcript.
    pub fn reset_session(&self) {
        if let Some(id) = self.lock_state().session.id.take() {
            tracing::info!(session_id = %id, "Session reset");
        }
    }

    /// Handle one submission of the chat form.
    pub async fn handle_submit(&self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let Some(_in_flight) = self.try_begin() else {
            tracing::debug!("Submission ignored while a request is in flight");
            return SubmitOutcome::Busy;
        };

        self.append(Message::user(text));
        self.view.clear_input();
        self.view.set_send_control(false, &self.labels.working);

        let req = SendMessageRequest::new(text, self.current_session_id().as_ref());
        match self.send(&req).await {
            Ok(ApiReply::Reply(resp)) => {
                self.append(Message::assistant(&resp.assistant_message.content));
                self.store_session_id(resp.session_id);
                SubmitOutcome::Replied
            }
            Ok(ApiReply::Unauthorized) => {
                self.append(Message::assistant(&self.labels.session_expired));
                SubmitOutcome::SessionExpired
            }
            Err(e) => {
                tracing::error!("Error sending message: {:#}", e);
                self.append(Message::assistant(&self.labels.generic_failure));
                SubmitOutcome::Failed
            }
        }
    }

    /// Load a stored session, render its messages in order and
    /// continue the conversation in it.
    pub async fn resume_session(&self, session_id: &str) -> SubmitOutcome {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let Some(_in_flight) = self.try_begin() else {
            return SubmitOutcome::Busy;
        };

        self.view.set_send_control(false, &self.labels.working);

        match self.fetch_history(session_id).await {
            Ok(ApiReply::Reply(history)) => {
                for msg in &history.messages {
                    let sender = msg
                        .role
                        .as_deref()
                        .map(Sender::from_role)
                        .unwrap_or(Sender::Assistant);
                    self.append(Message::new(sender, &msg.content));
                }
                self.store_session_id(history.id);
                SubmitOutcome::Replied
            }
            Ok(ApiReply::Unauthorized) => {
                self.append(Message::assistant(&self.labels.session_expired));
                SubmitOutcome::SessionExpired
            }
            Err(e) => {
                tracing::error!(session_id = %session_id, "Error loading session: {:#}", e);
                self.append(Message::assistant(&self.labels.generic_failure));
                SubmitOutcome::Failed
            }
        }
    }

    async fn send(&self, req: &SendMessageRequest) -> Result<ApiReply<SendMessageResponse>> {
        let token = self.tokens.token()?;
        self.api.send_message(&token, req).await
    }

    async fn fetch_history(&self, session_id: &str) -> Result<ApiReply<SessionHistoryResponse>> {
        let token = self.tokens.token()?;
        self.api.session_history(&token, session_id).await
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { controller: self })
    }

    fn append(&self, msg: Message) {
        self.view.append_message(&msg);
        self.lock_state().transcript.push(msg);
    }

    fn store_session_id(&self, id: SessionId) {
        let mut state = self.lock_state();
        if state.session.id.as_ref() != Some(&id) {
            tracing::info!(session_id = %id, "Chat session started");
        }
        // Overwritten even when unchanged
        state.session.id = Some(id);
    }

    fn lock_state(&self) -> MutexGuard<'_, ChatState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
