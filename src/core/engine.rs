use crate::core::{AgeSource, ConfigProvider, FareSchedule, Quote};
use crate::utils::error::Result;

pub struct FareEngine<A: AgeSource> {
    source: A,
    schedule: FareSchedule,
}

impl<A: AgeSource> FareEngine<A> {
    pub fn new(source: A) -> Self {
        Self {
            source,
            schedule: FareSchedule::default(),
        }
    }

    pub fn with_schedule(source: A, schedule: FareSchedule) -> Self {
        Self { source, schedule }
    }

    pub fn from_config<C: ConfigProvider>(source: A, config: &C) -> Self {
        Self::with_schedule(source, config.fare_schedule())
    }

    pub fn run(&self) -> Result<Quote> {
        tracing::debug!("Fetching age from source");
        let age = self.source.fetch_age()?;

        tracing::debug!("Pricing age {} against schedule {:?}", age, self.schedule);
        let price = self.schedule.price_for(age);

        tracing::debug!("Priced age {} at {}", age, price);
        Ok(Quote { age, price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::age::{FixedAgeSource, ScriptedAgeSource};
    use crate::utils::error::FareError;
    use float_cmp::assert_approx_eq;

    struct MockConfig {
        schedule: FareSchedule,
    }

    impl ConfigProvider for MockConfig {
        fn fare_schedule(&self) -> FareSchedule {
            self.schedule.clone()
        }

        fn output_format(&self) -> &str {
            "text"
        }
    }

    #[test]
    fn test_engine_prices_substituted_age() {
        let source = ScriptedAgeSource::new();
        source.enqueue(12);

        let engine = FareEngine::new(source);
        let quote = engine.run().unwrap();

        assert_eq!(quote.age, 12);
        assert_approx_eq!(f64, quote.price, 0.75, epsilon = 0.01);
    }

    #[test]
    fn test_engine_with_fixed_source() {
        let engine = FareEngine::new(FixedAgeSource::new(30));
        let quote = engine.run().unwrap();

        assert_eq!(quote.age, 30);
        assert_approx_eq!(f64, quote.price, 1.5, epsilon = 0.01);
    }

    #[test]
    fn test_engine_propagates_exhausted_source() {
        let engine = FareEngine::new(ScriptedAgeSource::new());
        let result = engine.run();

        assert!(matches!(result, Err(FareError::AgeSourceExhausted)));
    }

    #[test]
    fn test_engine_from_config_uses_configured_schedule() {
        let config = MockConfig {
            schedule: FareSchedule {
                base_fare: 2.0,
                child_age_limit: 18,
            },
        };

        let engine = FareEngine::from_config(FixedAgeSource::new(18), &config);
        let quote = engine.run().unwrap();

        assert_approx_eq!(f64, quote.price, 1.0, epsilon = 0.01);
    }
}
