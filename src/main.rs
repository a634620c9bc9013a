mod watcher;

use clap::{Parser, Subcommand};
use hwbot_api::client::ReviewClient;
use hwbot_channels::telegram::TelegramChannel;
use hwbot_core::config::Config;
use tracing::error;
use watcher::Watcher;

#[derive(Parser)]
#[command(name = "hwbot", version, about = "Homework review status bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the poll loop.
    Start,
    /// Check which credentials are configured.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::from_env();

    match cli.command {
        Commands::Start => {
            if !cfg.check_tokens() {
                error!("required tokens are missing, refusing to start");
                anyhow::bail!(
                    "set YANDEX_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID before starting"
                );
            }

            let source = ReviewClient::new(&cfg.practicum_token);
            let channel = TelegramChannel::new(&cfg.telegram_token, &cfg.telegram_chat_id);
            Watcher::new(Box::new(source), Box::new(channel)).run().await;
        }
        Commands::Status => {
            println!("hwbot — Status Check\n");
            println!("  review API token: {}", presence(&cfg.practicum_token));
            println!("  telegram bot token: {}", presence(&cfg.telegram_token));
            println!("  telegram chat id: {}", presence(&cfg.telegram_chat_id));
        }
    }

    Ok(())
}

fn presence(value: &str) -> &'static str {
    if value.is_empty() {
        "missing"
    } else {
        "set"
    }
}
