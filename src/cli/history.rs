use anyhow::{Context, Result, bail};

use crate::api::public::SessionHistoryResponse;
use crate::api::{ApiReply, ChatApi, HttpChatApi};
use crate::chat::{Labels, Sender};
use crate::core::{AppConfig, EnvToken, TokenProvider};

pub async fn run(config: &AppConfig, session_id: &str) -> Result<()> {
    let api = HttpChatApi::new(&config.api_url).timeout(config.request_timeout);
    let out = load_history(&api, &EnvToken::default(), &config.labels, session_id).await?;
    print!("{}", out);

    Ok(())
}

/// Fetch a session and render it as text. An expired token is an
/// error here since there is no chat to show it in.
pub async fn load_history(
    api: &dyn ChatApi,
    tokens: &dyn TokenProvider,
    labels: &Labels,
    session_id: &str,
) -> Result<String> {
    let token = tokens
        .token()
        .context("A bearer token is required to read history")?;

    match api.session_history(&token, session_id.trim()).await? {
        ApiReply::Reply(history) => Ok(format_history(&history)),
        ApiReply::Unauthorized => bail!("{}", labels.session_expired),
    }
}

pub fn format_history(history: &SessionHistoryResponse) -> String {
    let mut out = format!("Session {}\n", history.id);
    for msg in &history.messages {
        let sender = msg
            .role
            .as_deref()
            .map(Sender::from_role)
            .unwrap_or(Sender::Assistant);
        match msg.timestamp() {
            Some(ts) => out.push_str(&format!(
                "[{}] {}: {}\n",
                ts.format("%Y-%m-%d %H:%M"),
                sender,
                msg.content
            )),
            None => out.push_str(&format!("{}: {}\n", sender, msg.content)),
        }
    }
    out
}
