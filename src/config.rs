use clap::Args;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Connection and config-file options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Config file path
    #[arg(short, long, env = "UAR_CONFIG_FILE", global = true)]
    pub config: Option<String>,

    /// Base URL of the server
    #[arg(long, env = "UAR_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "UAR_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: default_user_agent(),
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl AppConfig {
    /// Priority: CLI flag > CLI env var > `UAR_` env > explicit file > `./client.*` > defaults.
    pub fn load(args: &ConnectionArgs) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("client.base_url", DEFAULT_BASE_URL)?
            .set_default("client.user_agent", default_user_agent())?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?;

        builder = builder.add_source(File::with_name("client").required(false));
        if let Some(path) = &args.config {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // E.g. UAR_CLIENT__BASE_URL=http://api:3000
        builder = builder.add_source(
            Environment::with_prefix("UAR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(base_url) = &args.base_url {
            builder = builder.set_override("client.base_url", base_url.as_str())?;
        }
        if let Some(api_key) = &args.api_key {
            builder = builder.set_override("client.api_key", api_key.as_str())?;
        }
        if args.log_json {
            builder = builder.set_override("logging.json", true)?;
        }

        builder.build()?.try_deserialize()
    }
}
