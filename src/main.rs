use anyhow::Context;
use clap::Parser;
use fitroom::domain::model::FittedItem;
use fitroom::fit::{compute_scaling_factors, fit_item_with_factors};
use fitroom::utils::export::fitted_items_to_csv;
use fitroom::utils::logger;
use fitroom::utils::validation::Validate;
use fitroom::{CliConfig, SearchAggregator, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fitroom CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config.apply_env_defaults();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Provider settings come from the TOML file when given, flags otherwise;
    // measurements always come from the flags.
    let aggregator = match &config.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file: {}", path))?;
            toml_config.validate()?;
            SearchAggregator::from_config(&toml_config)
        }
        None => SearchAggregator::from_config(&config),
    };

    if aggregator.provider_count() == 0 {
        tracing::error!("No search providers configured");
        eprintln!("No search providers configured: set GOOGLE_API_KEY/GOOGLE_SEARCH_ENGINE_ID or PINTEREST_ACCESS_TOKEN");
        std::process::exit(1);
    }

    let results = aggregator.search(&config.query).await;
    tracing::info!("Found {} items", results.len());

    let profile = config.measurement_profile();
    let factors = compute_scaling_factors(&profile);
    let fitted: Vec<FittedItem> = results
        .iter()
        .map(|item| fit_item_with_factors(item, &factors))
        .collect();

    match config.format.as_str() {
        "csv" => print!("{}", fitted_items_to_csv(&fitted)?),
        _ => println!("{}", serde_json::to_string_pretty(&fitted)?),
    }

    Ok(())
}
