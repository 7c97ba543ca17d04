use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::chat::Labels;

pub const API_URL_VAR: &str = "BIZASSIST_API_URL";
pub const TOKEN_VAR: &str = "BIZASSIST_TOKEN";
pub const REQUEST_TIMEOUT_VAR: &str = "BIZASSIST_REQUEST_TIMEOUT_SECS";
pub const SEND_LABEL_VAR: &str = "BIZASSIST_SEND_LABEL";
pub const WORKING_LABEL_VAR: &str = "BIZASSIST_WORKING_LABEL";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    // No timeout unless one is configured, a hung request keeps the
    // send control disabled
    pub request_timeout: Option<Duration>,
    pub labels: Labels,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = match env::var(REQUEST_TIMEOUT_VAR) {
            Ok(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid {}: {}", REQUEST_TIMEOUT_VAR, secs))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let mut labels = Labels::default();
        if let Ok(label) = env::var(SEND_LABEL_VAR) {
            labels.send = label;
        }
        if let Ok(label) = env::var(WORKING_LABEL_VAR) {
            labels.working = label;
        }

        Ok(Self {
            api_url,
            request_timeout,
            labels,
        })
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
            labels: Labels::default(),
        }
    }
}
