use anyhow::Result;
use firewall_chat::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
