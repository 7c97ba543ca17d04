use std::io::{self, Write};
use std::sync::Mutex;

use super::models::{Message, Sender};

/// The surface a chat is rendered on: a scrolling message panel, a
/// text input and a send control.
pub trait ChatView: Send + Sync {
    /// Add a message to the bottom of the panel and scroll to it.
    fn append_message(&self, msg: &Message);

    fn clear_input(&self);

    /// Enable or disable the send control and set its label.
    fn set_send_control(&self, enabled: bool, label: &str);
}

/// Renders a chat as plain lines of text. The input line belongs to
/// the line editor so clearing it is a no-op.
pub struct TerminalView<W: Write + Send> {
    out: Mutex<W>,
    echo_user: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            echo_user: false,
        }
    }

    /// Also print the user's own messages. The REPL doesn't need this
    /// since the editor already shows what was typed.
    pub fn echo_user(mut self, echo: bool) -> Self {
        self.echo_user = echo;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> ChatView for TerminalView<W> {
    fn append_message(&self, msg: &Message) {
        match msg.sender {
            Sender::User if !self.echo_user => {}
            Sender::User => self.write_line(&format!(">>> {}", msg.text)),
            Sender::Assistant => self.write_line(&msg.text),
        }
    }

    fn clear_input(&self) {}

    fn set_send_control(&self, enabled: bool, label: &str) {
        if !enabled {
            self.write_line(&format!("[{}]", label));
        }
    }
}
