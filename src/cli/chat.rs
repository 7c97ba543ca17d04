use std::sync::Arc;

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::api::HttpChatApi;
use crate::chat::{ChatFormController, TerminalView};
use crate::core::{AppConfig, EnvToken, TokenProvider};

const NEW_SESSION_COMMAND: &str = "/new";
const QUIT_COMMAND: &str = "/quit";

pub async fn run(config: &AppConfig, session: Option<&str>) -> Result<()> {
    let tokens = EnvToken::default();
    // The token is issued by the web login, fail early if it's missing
    tokens
        .token()
        .context("A bearer token is required to chat")?;

    let api = HttpChatApi::new(&config.api_url).timeout(config.request_timeout);
    let controller = ChatFormController::new(
        Arc::new(api),
        Arc::new(tokens),
        Arc::new(TerminalView::stdout()),
    )
    .labels(config.labels.clone());

    if let Some(id) = session {
        controller.resume_session(id).await;
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                match line.trim() {
                    QUIT_COMMAND => break,
                    NEW_SESSION_COMMAND => {
                        controller.reset_session();
                        println!("Started a new conversation.");
                        continue;
                    }
                    "" => continue,
                    _ => {}
                }
                let _ = rl.add_history_entry(line.as_str());
                controller.handle_submit(&line).await;
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
