//! Checks which Gemini models answer with the configured key, then lists
//! everything the key can see.

use clap::Parser;
use ipstrat_llm_sdk::gemini::GeminiClient;
use ipstrat_llm_sdk::models::gemini::PROBE_CANDIDATES;
use ipstrat_llm_sdk::providers::GOOGLE_USAGE_URL;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ipstrat-probe", about = "Probe Gemini model availability")]
struct Cli {
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    base_url: String,

    /// Only list models, skip the generation probe
    #[arg(long)]
    list_only: bool,

    /// Keep probing after the first model answers
    #[arg(long, conflicts_with = "list_only")]
    all: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let client = GeminiClient::new(cli.api_key)?
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(30))?;

    if !cli.list_only {
        println!("Testing Gemini models...");
        let probe = client.probe_models(PROBE_CANDIDATES, !cli.all).await;

        for (model, error) in &probe.failures {
            println!("  FAIL  {}: {}", model, error);
        }
        for model in &probe.working {
            println!("  OK    {}", model);
        }

        match probe.working.first() {
            Some(model) => println!("\nRecommended model: {}", model),
            None => println!("\nNo candidate model answered. Check quota at {}", GOOGLE_USAGE_URL),
        }
    }

    println!("\nModels supporting generateContent:");
    for model in client.list_models().await? {
        if model.supports_generate_content() {
            println!("  {}", model.id());
        }
    }

    Ok(())
}
