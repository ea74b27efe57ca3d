use crate::models::{Observation, StateStats};
use std::collections::HashMap;
use tracing::trace;

/// Folds observations into one [`StateStats`] per distinct state code.
///
/// Accumulators live in an arena in first-seen order; the map only holds
/// each code's slot. Nothing is ever removed during a run.
#[derive(Debug, Default)]
pub struct Aggregator {
    index: HashMap<String, usize>,
    states: Vec<StateStats>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, observation: &Observation) {
        let slot = match self.index.get(observation.state_code.as_str()) {
            Some(&slot) => slot,
            None => {
                trace!(state = %observation.state_code, "New state");
                let slot = self.states.len();
                self.states.push(StateStats::seeded(observation));
                self.index.insert(observation.state_code.clone(), slot);
                slot
            }
        };

        self.states[slot].fold(observation);
    }

    /// Accumulators in the order their states were first seen
    pub fn snapshot(&self) -> &[StateStats] {
        &self.states
    }

    pub fn get(&self, code: &str) -> Option<&StateStats> {
        self.index.get(code).map(|&slot| &self.states[slot])
    }

    pub fn state_codes(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(StateStats::code)
    }

    pub fn total_records(&self) -> u64 {
        self.states.iter().map(|s| s.record_count).sum()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Extend<Observation> for Aggregator {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, observations: I) {
        for observation in observations {
            self.fold(&observation);
        }
    }
}
