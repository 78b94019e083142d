use serde::{Deserialize, Serialize};

/// Age in whole years.
pub type Age = i32;

/// Monetary value in base currency units.
pub type Price = f64;

pub const BASE_FARE: Price = 1.5;
pub const CHILD_AGE_LIMIT: Age = 12;

/// Fare parameters. Defaults reproduce the canonical schedule: base fare 1.5,
/// child discount up to and including age 12.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareSchedule {
    #[serde(default = "default_base_fare")]
    pub base_fare: Price,

    #[serde(default = "default_child_age_limit")]
    pub child_age_limit: Age,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            child_age_limit: CHILD_AGE_LIMIT,
        }
    }
}

fn default_base_fare() -> Price {
    BASE_FARE
}

fn default_child_age_limit() -> Age {
    CHILD_AGE_LIMIT
}

/// Result of pricing one ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub age: Age,
    pub price: Price,
}
