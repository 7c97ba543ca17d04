pub mod auth;
mod config;
pub mod logging;

pub use auth::{EnvToken, StaticToken, TokenProvider};
pub use config::*;
