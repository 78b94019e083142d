use crate::core::{ConfigProvider, FareSchedule};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub fare: FareSchedule,
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// Load and validate a fare schedule from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn age(&self) -> Option<i32> {
        self.source.as_ref().and_then(|s| s.age)
    }
}

impl ConfigProvider for TomlConfig {
    fn fare_schedule(&self) -> FareSchedule {
        self.fare.clone()
    }

    fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_fare("fare.base_fare", self.fare.base_fare)?;

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validation::validate_output_format("output.format", format)?;
            }
        }

        Ok(())
    }
}
