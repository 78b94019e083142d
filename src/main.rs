use clap::Parser;
use transit_fare::core::ConfigProvider;
use transit_fare::utils::{logger, validation::Validate};
use transit_fare::{CliConfig, FareEngine, FareError, FixedAgeSource, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting transit-fare");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Optional schedule file; when present it wins over the individual flags.
    let file_config = match &config.config {
        Some(path) => match TomlConfig::load(path) {
            Ok(loaded) => Some(loaded),
            Err(e) => {
                tracing::error!("Failed to load fare schedule file: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let schedule = file_config
        .as_ref()
        .map(|c| c.fare_schedule())
        .unwrap_or_else(|| config.fare_schedule());

    let format = file_config
        .as_ref()
        .and_then(|c| c.output.as_ref())
        .and_then(|o| o.format.clone())
        .unwrap_or_else(|| config.format.clone());

    // An explicit --age wins over an age recorded in the file.
    let age = match config.age.or_else(|| file_config.as_ref().and_then(|c| c.age())) {
        Some(age) => age,
        None => {
            let e = FareError::MissingConfigError {
                field: "age".to_string(),
            };
            tracing::error!("{}", e);
            eprintln!("❌ {} (pass --age or set [source] age in the schedule file)", e);
            std::process::exit(1);
        }
    };

    let source = FixedAgeSource::new(age);
    let engine = FareEngine::with_schedule(source, schedule);

    match engine.run() {
        Ok(quote) => {
            tracing::info!("Priced age {} at {}", quote.age, quote.price);
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("✅ Ticket price for age {}: {:.2}", quote.age, quote.price);
            }
        }
        Err(e) => {
            tracing::error!("Fare computation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
