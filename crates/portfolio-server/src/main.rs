use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use portfolio_llm::providers::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use portfolio_llm::CompletionProvider;
use portfolio_server::logging::init_logging;
use portfolio_server::{run_server_with_config, ServerConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-server")]
#[command(about = "Gemini Portfolio Q&A HTTP Server")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Gemini model identifier
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding the daily interaction logs
    #[arg(long, env = "LOGS_DIR", default_value = "logs")]
    logs_dir: PathBuf,

    /// Timeout for a single completion request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "60")]
    request_timeout_secs: u64,

    /// Print the models available to the API key and exit
    #[arg(long)]
    list_models: bool,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            logs_dir: self.logs_dir.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

async fn print_models(config: &ServerConfig) -> io::Result<()> {
    let provider = config
        .build_provider()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let models = provider
        .list_models()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    for name in models {
        println!("MODEL NAME: {}", name);
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug, cli.log_level.as_deref());

    let config = cli.server_config();

    if cli.list_models {
        return print_models(&config).await;
    }

    log::info!("Starting Portfolio Server on port {}", config.port);
    log::info!("LLM Configuration:");
    log::info!("  Base URL: {}", config.base_url);
    log::info!("  Model: {}", config.model);
    log::info!("  Logs dir: {:?}", config.logs_dir);

    if cli.debug {
        log::debug!("Debug mode enabled");
        log::debug!("  Request timeout: {:?}", config.request_timeout);
    }

    run_server_with_config(config).await
}
