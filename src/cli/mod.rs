use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod history;

use crate::core::AppConfig;
use crate::core::logging::init_tracing;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat with the assistant
    Chat {
        /// Continue an existing session and show its messages
        #[arg(long)]
        session: Option<String>,
    },
    /// Print the messages of a stored session
    History {
        #[arg(long)]
        session: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the chat API, overrides BIZASSIST_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    let config = AppConfig::from_env()?.with_api_url(args.api_url);

    // Handle each sub command
    match args.command {
        Some(Command::Chat { session }) => {
            chat::run(&config, session.as_deref()).await?;
        }
        Some(Command::History { session }) => {
            history::run(&config, &session).await?;
        }
        None => {}
    }

    Ok(())
}
