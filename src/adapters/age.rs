use crate::core::{Age, AgeSource};
use crate::utils::error::{FareError, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Age source that returns the same configured value on every call. Stands in
/// for an external lookup when the age is already known (CLI flag, config
/// file).
#[derive(Debug, Clone)]
pub struct FixedAgeSource {
    age: Age,
}

impl FixedAgeSource {
    pub fn new(age: Age) -> Self {
        Self { age }
    }
}

impl AgeSource for FixedAgeSource {
    fn fetch_age(&self) -> Result<Age> {
        Ok(self.age)
    }
}

/// Queue-backed age source for verification. Values enqueued up front are
/// consumed in FIFO order; fetching from an empty queue is an error, so a
/// test that forgets to script a value fails loudly instead of guessing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgeSource {
    queue: Arc<Mutex<VecDeque<Age>>>,
}

impl ScriptedAgeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, age: Age) {
        let mut queue = self.queue.lock().expect("age queue lock poisoned");
        queue.push_back(age);
    }

    pub fn enqueue_all(&self, ages: &[Age]) {
        let mut queue = self.queue.lock().expect("age queue lock poisoned");
        queue.extend(ages.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.queue.lock().expect("age queue lock poisoned").len()
    }
}

impl AgeSource for ScriptedAgeSource {
    fn fetch_age(&self) -> Result<Age> {
        let mut queue = self.queue.lock().expect("age queue lock poisoned");
        queue.pop_front().ok_or(FareError::AgeSourceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_repeats_value() {
        let source = FixedAgeSource::new(13);

        assert_eq!(source.fetch_age().unwrap(), 13);
        assert_eq!(source.fetch_age().unwrap(), 13);
    }

    #[test]
    fn test_scripted_source_consumes_fifo() {
        let source = ScriptedAgeSource::new();
        source.enqueue_all(&[13, 12, 42]);

        assert_eq!(source.fetch_age().unwrap(), 13);
        assert_eq!(source.fetch_age().unwrap(), 12);
        assert_eq!(source.fetch_age().unwrap(), 42);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_scripted_source_errors_when_exhausted() {
        let source = ScriptedAgeSource::new();
        source.enqueue(12);

        source.fetch_age().unwrap();
        let result = source.fetch_age();

        assert!(matches!(result, Err(FareError::AgeSourceExhausted)));
    }

    #[test]
    fn test_cloned_handles_share_queue() {
        let source = ScriptedAgeSource::new();
        let handle = source.clone();

        handle.enqueue(7);
        assert_eq!(source.fetch_age().unwrap(), 7);
        assert!(matches!(
            handle.fetch_age(),
            Err(FareError::AgeSourceExhausted)
        ));
    }
}
