use clap::Parser;

use cdek_tariff::config::CliConfig;
use cdek_tariff::utils::{logger, validation::Validate};
use cdek_tariff::PriceCalculator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cdek-tariff CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = PriceCalculator::with_config(config.client_config())?;

    match client
        .calculate(&config.addr_from, &config.addr_to, config.parcel_size())
        .await
    {
        Ok(quotes) => {
            tracing::info!("Received {} tariff quote(s)", quotes.len());
            for quote in quotes {
                println!(
                    "[{}] {}: {:.2} RUB, {}-{} days{}",
                    quote.tariff_code,
                    quote.tariff_name,
                    quote.delivery_sum,
                    quote.period_min,
                    quote.period_max,
                    if quote.tariff_description.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", quote.tariff_description)
                    }
                );
            }
        }
        Err(e) => {
            tracing::error!("Calculation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
