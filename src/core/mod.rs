pub mod engine;
pub mod pricing;

pub use crate::domain::model::{Age, FareSchedule, Price, Quote};
pub use crate::domain::ports::{AgeSource, ConfigProvider};
pub use crate::utils::error::Result;
