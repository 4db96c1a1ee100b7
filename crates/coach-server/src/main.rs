use clap::Parser;
use std::io;

use coach_core::ResponseMode;
use coach_server::logging::init_logging;
use coach_server::run_server_with_config;

#[derive(Parser, Debug, Clone)]
#[command(name = "coach-server")]
#[command(about = "Silent Coach HTTP Server")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Server port
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Completion API key
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// Completion API base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = "https://api.openai.com/v1")]
    base_url: String,

    /// Completion model name
    #[arg(long, env = "LLM_MODEL", default_value = "gpt-4o-mini")]
    model: String,

    /// Response mode (plain or structured)
    #[arg(long, env = "RESPONSE_MODE", default_value = "structured")]
    response_mode: ResponseModeArg,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ResponseModeArg {
    Plain,
    Structured,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // If RUST_LOG is set, use it
    if cli.log_level.is_some() {
        env_logger::init();
    } else {
        init_logging(cli.debug);
    }

    log::info!("Starting Silent Coach server on port {}", cli.port);
    log::info!("Completion configuration:");
    log::info!("  Base URL: {}", cli.base_url);
    log::info!("  Model: {}", cli.model);
    log::info!("  Response mode: {:?}", cli.response_mode);

    if cli.debug {
        log::debug!("Debug mode enabled");
        log::debug!("  Port: {}", cli.port);
        log::debug!("  API key configured: {}", cli.api_key.is_some());
    }

    let mode = match cli.response_mode {
        ResponseModeArg::Plain => ResponseMode::Plain,
        ResponseModeArg::Structured => ResponseMode::Structured,
    };

    run_server_with_config(cli.port, cli.api_key, cli.base_url, cli.model, mode).await
}
