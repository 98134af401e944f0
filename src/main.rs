//! `uar-client`: command-line access to an axum-leptos-htmx-wc server.

use axum_leptos_htmx_wc_sdk::{
    Client,
    cli::{Cli, execute},
    config::{AppConfig, LoggingConfig},
};
use clap::Parser;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.connection) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    info!(
        name: "sdk.config.loaded",
        base_url = %config.client.base_url,
        authenticated = config.client.api_key.is_some(),
        "Client configuration loaded"
    );

    let client = Client::from_config(&config.client)?;
    let result = execute(&client, cli.command).await;
    client.close();

    println!("{}", serde_json::to_string_pretty(&result?)?);
    Ok(())
}

/// Initialize tracing (M-LOG-STRUCTURED). `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    // Logs go to stderr so stdout stays pure JSON.
    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
