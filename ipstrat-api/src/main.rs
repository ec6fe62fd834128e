use actix_web::{web, App, HttpServer};
use clap::Parser;
use ipstrat_agents::RateLimiter;
use ipstrat_api::config::{load_dotenv, ApiConfig};
use ipstrat_api::helpers::llm::create_strategist;
use ipstrat_api::state::AppState;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "ipstrat-api", about = "IP strategy analysis server")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "IPSTRAT_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv_path = load_dotenv(cli.env_file.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let (mut config, config_path) = ApiConfig::load(cli.config)?;
    match config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults and environment"),
    }

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if config.uses_dev_secret() {
        warn!("SECRET_KEY not set; using the development secret");
    }

    let strategist = create_strategist(&config)?;
    let rate_limiter = RateLimiter::new(Duration::from_secs(config.rate_limit.min_interval_secs));
    let state = web::Data::new(AppState::new(strategist, rate_limiter, config.llm.model.clone()));

    info!(
        llm_available = state.llm_available(),
        pipeline_available = state.pipeline_available(),
        min_interval_secs = config.rate_limit.min_interval_secs,
        "Service state ready"
    );

    let bind_addr = config.bind_addr();
    info!("Starting ipstrat-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(ipstrat_api::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
