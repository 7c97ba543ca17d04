use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use http::{StatusCode, header};
use serde::de::DeserializeOwned;

use super::public::{SendMessageRequest, SendMessageResponse, SessionHistoryResponse};

pub const SEND_MESSAGE_PATH: &str = "/api/v1/chat/send_message";
pub const SESSION_PATH: &str = "/api/v1/chat/session";

/// A reply from the chat API. An expired or invalid token is an
/// expected outcome rather than an error so callers can't mistake it
/// for a server failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    Reply(T),
    Unauthorized,
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send one user message and get the assistant's reply. Any non
    /// 2xx status other than 401 is an error.
    async fn send_message(
        &self,
        token: &str,
        req: &SendMessageRequest,
    ) -> Result<ApiReply<SendMessageResponse>>;

    /// Fetch the stored messages of an existing session.
    async fn session_history(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<ApiReply<SessionHistoryResponse>>;
}

/// `ChatApi` over HTTP using `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpChatApi {
    base_url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpChatApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_timeout(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }
}

async fn read_reply<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiReply<T>> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Ok(ApiReply::Unauthorized);
    }
    if !status.is_success() {
        bail!("Server error: {}", status);
    }
    let body = response
        .json::<T>()
        .await
        .context("Failed to parse response body")?;
    Ok(ApiReply::Reply(body))
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn send_message(
        &self,
        token: &str,
        req: &SendMessageRequest,
    ) -> Result<ApiReply<SendMessageResponse>> {
        let url = format!("{}{}", self.base_url, SEND_MESSAGE_PATH);
        tracing::debug!(url = %url, has_session = req.session_id.is_some(), "Sending message");

        let response = self
            .with_timeout(self.client.post(&url))
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .json(req)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        read_reply(response).await
    }

    async fn session_history(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<ApiReply<SessionHistoryResponse>> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            SESSION_PATH,
            urlencoding::encode(session_id)
        );
        tracing::debug!(url = %url, "Fetching session history");

        let response = self
            .with_timeout(self.client.get(&url))
            .bearer_auth(token)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        read_reply(response).await
    }
}
