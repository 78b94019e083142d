use crate::domain::model::{Age, FareSchedule, Price};

impl FareSchedule {
    /// Price one ticket: ages up to and including `child_age_limit` pay half
    /// the base fare, everyone else pays it in full.
    pub fn price_for(&self, age: Age) -> Price {
        if age <= self.child_age_limit {
            self.base_fare / 2.0
        } else {
            self.base_fare
        }
    }
}

/// Price one ticket against the default schedule.
pub fn compute_price(age: Age) -> Price {
    FareSchedule::default().price_for(age)
}
