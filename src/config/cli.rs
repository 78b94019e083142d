use crate::core::{ConfigProvider, FareSchedule};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "transit-fare")]
#[command(about = "Ticket fare calculator with an age-based child discount")]
pub struct CliConfig {
    #[arg(long, help = "Age to price, skipping any age configured in a file")]
    pub age: Option<i32>,

    #[arg(long, help = "Path to a TOML fare schedule file")]
    pub config: Option<String>,

    #[arg(long, default_value = "1.5")]
    pub base_fare: f64,

    #[arg(long, default_value = "12")]
    pub child_age_limit: i32,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn fare_schedule(&self) -> FareSchedule {
        FareSchedule {
            base_fare: self.base_fare,
            child_age_limit: self.child_age_limit,
        }
    }

    fn output_format(&self) -> &str {
        &self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_fare("base_fare", self.base_fare)?;
        validation::validate_output_format("format", &self.format)?;

        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }

        Ok(())
    }
}
