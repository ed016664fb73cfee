//! Sample Size
//!
//! The same 80% vs 60% kill rates look like luck in a small sample and like
//! a real effect in a large one.
use log::debug;
use serde::{Deserialize, Serialize};

/// Share of bacteria killed by disinfectant A.
pub const PROPORTION_A: f64 = 0.8;
/// Share of bacteria killed by disinfectant B.
pub const PROPORTION_B: f64 = 0.6;

/// How convincing a difference looks at a given sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleReading {
    /// Fewer than 50 per group.
    CouldBeLuck,
    /// Fewer than 500 per group.
    MoreMeaningful,
    RealEffect,
}

impl ScaleReading {
    pub fn classify(sample_size: usize) -> Self {
        if sample_size < 50 {
            ScaleReading::CouldBeLuck
        } else if sample_size < 500 {
            ScaleReading::MoreMeaningful
        } else {
            ScaleReading::RealEffect
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScaleReading::CouldBeLuck => "Could this be luck?",
            ScaleReading::MoreMeaningful => "This feels more meaningful.",
            ScaleReading::RealEffect => "This seems like a real effect!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeDemo {
    pub sample_size: usize,
    pub killed_a: u64,
    pub killed_b: u64,
    /// Gauge value in percent, capped at 100.
    pub confidence: f64,
    pub reading: ScaleReading,
}

impl SampleSizeDemo {
    /// Outcome for `sample_size` bacteria per disinfectant. The size is used
    /// as given, see `LabConfig::sample_size_demo` for the clamped version.
    pub fn new(sample_size: usize) -> Self {
        let n = sample_size as f64;
        let demo = SampleSizeDemo {
            sample_size,
            killed_a: (n * PROPORTION_A).round() as u64,
            killed_b: (n * PROPORTION_B).round() as u64,
            confidence: confidence(sample_size),
            reading: ScaleReading::classify(sample_size),
        };
        debug!("Sample size {}: difference {}, confidence {:.1}%.", sample_size, demo.difference(), demo.confidence);
        demo
    }

    pub fn difference(&self) -> u64 {
        self.killed_a.saturating_sub(self.killed_b)
    }

    pub fn summary(&self) -> String {
        format!("A difference of {}. {}", self.difference(), self.reading.message())
    }
}

/// `min(100, 20 log10(n) + 20)`
pub fn confidence(sample_size: usize) -> f64 {
    (20.0 * (sample_size as f64).log10() + 20.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_counts() {
        let cases = [
            (10, 8, 6),
            (49, 39, 29),
            (50, 40, 30),
            (499, 399, 299),
            (500, 400, 300),
            (1000, 800, 600),
        ];
        for (n, a, b) in cases {
            let demo = SampleSizeDemo::new(n);
            assert_eq!((demo.killed_a, demo.killed_b), (a, b), "n = {}", n);
            assert_eq!(demo.difference(), a - b);
        }
    }

    #[test]
    fn test_reading_tiers() {
        assert_eq!(SampleSizeDemo::new(10).reading, ScaleReading::CouldBeLuck);
        assert_eq!(SampleSizeDemo::new(49).reading, ScaleReading::CouldBeLuck);
        assert_eq!(SampleSizeDemo::new(50).reading, ScaleReading::MoreMeaningful);
        assert_eq!(SampleSizeDemo::new(499).reading, ScaleReading::MoreMeaningful);
        assert_eq!(SampleSizeDemo::new(500).reading, ScaleReading::RealEffect);
        assert_eq!(SampleSizeDemo::new(1000).reading, ScaleReading::RealEffect);
    }

    #[test]
    fn test_confidence() {
        assert!((confidence(10) - 40.0).abs() < 1e-12);
        assert!((confidence(1000) - 80.0).abs() < 1e-12);
        assert!((confidence(49) - 53.804).abs() < 1e-3);
        assert!((confidence(500) - 73.979).abs() < 1e-3);
        assert_eq!(confidence(10_000_000), 100.0);
        let mut prev = 0.0;
        for n in [10, 49, 50, 499, 500, 1000] {
            let c = confidence(n);
            assert!(c > prev);
            prev = c;
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(SampleSizeDemo::new(10).summary(), "A difference of 2. Could this be luck?");
        assert_eq!(SampleSizeDemo::new(500).summary(), "A difference of 100. This seems like a real effect!");
    }
}
