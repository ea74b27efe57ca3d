use crate::models::Observation;
use crate::utils::CompensatedSum;

/// Running statistics for a single state code.
///
/// An accumulator only comes into existence alongside its first observation,
/// which seeds both temperature bounds. `record_count` is therefore never zero
/// for a value handed out by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct StateStats {
    code: String,
    pub record_count: u64,
    pub humidity_sum: CompensatedSum,
    pub temperature_sum: CompensatedSum,
    pub cloud_sum: CompensatedSum,
    pub max_temperature: f64,
    pub max_temperature_at: i64,
    pub min_temperature: f64,
    pub min_temperature_at: i64,
    pub lightning_count: u64,
    pub snow_count: u64,
}

impl StateStats {
    /// Zeroed counters with both bounds taken from `first`
    pub(crate) fn seeded(first: &Observation) -> Self {
        Self {
            code: first.state_code.clone(),
            record_count: 0,
            humidity_sum: CompensatedSum::new(),
            temperature_sum: CompensatedSum::new(),
            cloud_sum: CompensatedSum::new(),
            max_temperature: first.surface_temp_fahrenheit,
            max_temperature_at: first.timestamp,
            min_temperature: first.surface_temp_fahrenheit,
            min_temperature_at: first.timestamp,
            lightning_count: 0,
            snow_count: 0,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub(crate) fn fold(&mut self, observation: &Observation) {
        let temperature = observation.surface_temp_fahrenheit;

        self.record_count += 1;
        self.humidity_sum.add(observation.humidity_pct);
        self.temperature_sum.add(temperature);
        self.cloud_sum.add(observation.cloud_cover_pct);
        self.snow_count += u64::from(observation.has_snow);
        self.lightning_count += u64::from(observation.has_lightning);

        // Strict comparisons: the first reading to reach a bound keeps it
        if temperature > self.max_temperature {
            self.max_temperature = temperature;
            self.max_temperature_at = observation.timestamp;
        } else if temperature < self.min_temperature {
            self.min_temperature = temperature;
            self.min_temperature_at = observation.timestamp;
        }
    }

    pub fn average_humidity(&self) -> Option<f64> {
        self.average(&self.humidity_sum)
    }

    pub fn average_temperature(&self) -> Option<f64> {
        self.average(&self.temperature_sum)
    }

    pub fn average_cloud_cover(&self) -> Option<f64> {
        self.average(&self.cloud_sum)
    }

    fn average(&self, sum: &CompensatedSum) -> Option<f64> {
        if self.record_count == 0 {
            None
        } else {
            Some(sum.value() / self.record_count as f64)
        }
    }
}
