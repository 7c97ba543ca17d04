mod controller;
mod models;
mod view;

pub use controller::{ChatFormController, SubmitOutcome};
pub use models::{ChatSession, Message, Sender, Transcript};
pub use view::{ChatView, TerminalView};

/// Text shown on the send control and the canned assistant replies
/// for the two failure kinds.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub send: String,
    pub working: String,
    pub session_expired: String,
    pub generic_failure: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            send: String::from("Send"),
            working: String::from("Thinking..."),
            session_expired: String::from(
                "Your session has expired. Please refresh the page and sign in again.",
            ),
            generic_failure: String::from("Something went wrong. Please try again."),
        }
    }
}
