//! Bearer tokens for the chat API.
//!
//! Tokens are issued elsewhere (the web login flow); this module only
//! hands an already issued token to the transport.
use std::env;

use anyhow::{Result, anyhow};

use super::TOKEN_VAR;

/// Supplies the bearer token for each request. Called once per
/// request so a provider can pick up a refreshed token between turns.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Result<String>;
}

/// A token fixed at construction time.
#[derive(Clone, Debug)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Clone, Debug)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(TOKEN_VAR)
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Result<String> {
        let token = env::var(&self.var).map_err(|_| anyhow!("Missing env var {}", self.var))?;
        if token.trim().is_empty() {
            return Err(anyhow!("Env var {} is empty", self.var));
        }
        Ok(token)
    }
}
