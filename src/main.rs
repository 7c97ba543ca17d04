use anyhow::Result;
use bizassist::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
