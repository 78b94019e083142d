use crate::domain::model::{Age, FareSchedule};
use crate::utils::error::Result;

/// Supplies one age value per call. The lookup behind it is abstract; tests
/// substitute a scripted implementation by construction.
pub trait AgeSource: Send + Sync {
    fn fetch_age(&self) -> Result<Age>;
}

pub trait ConfigProvider: Send + Sync {
    fn fare_schedule(&self) -> FareSchedule;
    fn output_format(&self) -> &str;
}
