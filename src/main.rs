use std::sync::Arc;

use dotenv::dotenv;
use serenity::all::{ClientBuilder, GatewayIntents};
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gembot::config::RelayConfig;
use gembot::gemini::{Completion, GeminiClient};
use gembot::handler::RelayHandler;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gembot=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    dotenv().ok();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // A missing API key leaves the relay running in degraded mode: every
    // message gets the fixed client-unavailable reply.
    let ai: Option<Arc<dyn Completion>> = match config.gemini_api_key.clone() {
        Some(key) => Some(Arc::new(GeminiClient::new(key))),
        None => {
            warn!("GEMINI_API_KEY not set; messages will be answered with a fixed error");
            None
        }
    };

    let token = config.discord_token.clone();
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let handler = RelayHandler::new(config, ai);

    let mut client = match ClientBuilder::new(token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build Discord client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = client.start().await {
        eprintln!("Discord client error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
