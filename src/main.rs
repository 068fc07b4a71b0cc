use clap::Parser;
use pokefetch::utils::{logger, validation::Validate};
use pokefetch::{ApiClient, CliConfig, FetchEngine};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pokefetch CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = Arc::new(ApiClient::new(&config.api_endpoint));
    let engine = FetchEngine::new(client);

    let report = match &config.pokemon {
        Some(selector) => engine.run_single(selector).await,
        None => engine.run_batch(&config).await,
    };

    print!("{}", report);

    Ok(())
}
