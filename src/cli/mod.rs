use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod compare;
pub mod status;

use crate::chat::SessionMode;
use crate::core::{AppConfig, logging};

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Start an interactive chat session
    Chat {
        /// Route prompts through the backend's firewall
        #[arg(long, action, default_value = "false")]
        protected: bool,
    },
    /// Send one prompt to a standard and a protected session side by side
    Compare {
        #[arg(long)]
        prompt: String,
        /// Print both sessions as JSON
        #[arg(long, action, default_value = "false")]
        json: bool,
    },
    /// Show the backend's welcome info and database preview
    Status {},
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the chat backend, overrides FIREWALL_CHAT_BACKEND_URL
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    logging::init();

    let config = AppConfig::default().with_backend_url(args.backend_url);

    // Handle each sub command
    match args.command {
        Some(Command::Chat { protected }) => {
            let mode = if protected {
                SessionMode::Protected
            } else {
                SessionMode::Standard
            };
            chat::run(&config, mode).await?;
        }
        Some(Command::Compare { prompt, json }) => {
            compare::run(&config, &prompt, json).await?;
        }
        Some(Command::Status {}) => {
            status::run(&config).await?;
        }
        None => {}
    }

    Ok(())
}
