/// Running sum with Neumaier compensation.
///
/// Keeps a separate error term so long runs of small additions onto a large
/// total do not drift the way a naive `f64` accumulator does.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - total) + value;
        } else {
            self.compensation += (value - total) + self.sum;
        }
        self.sum = total;
    }

    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let mut sum = CompensatedSum::new();
        sum.add(40.0);
        sum.add(60.0);
        assert_eq!(sum.value(), 100.0);
    }

    #[test]
    fn test_compensates_lost_low_bits() {
        let mut sum = CompensatedSum::new();
        sum.add(1.0);
        sum.add(1e100);
        sum.add(1.0);
        sum.add(-1e100);
        assert_eq!(sum.value(), 2.0);
    }

    #[test]
    fn test_many_tenths() {
        let mut sum = CompensatedSum::new();
        let mut naive = 0.0f64;
        for _ in 0..1_000_000 {
            sum.add(0.1);
            naive += 0.1;
        }
        let expected = 100_000.0;
        assert!((sum.value() - expected).abs() <= (naive - expected).abs());
        assert!((sum.value() - expected).abs() < 1e-6);
    }
}
