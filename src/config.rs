//! Lab Configuration
//!
//! Settings shared by the demos: seeding, integration resolution, the
//! significance level and the slider bounds that user input is clamped to.
use crate::constants::{
    DEFAULT_SIGNIFICANCE_LEVEL, ERROR_SIM_DRAWS, MAX_DF, MAX_SAMPLE_SIZE, MIN_DF, MIN_SAMPLE_SIZE, SIMPSON_INTERVALS,
};
use crate::critical::Alpha;
use crate::distribution::{curve_extent, ChiSquareDistribution};
use crate::errors::ChiSquareError;
use crate::simulation::{
    empirical_histogram, run_error_simulation, ErrorScenario, ErrorTally, HistogramBin, SampleSizeDemo,
};
use crate::utils::validate_float_parameter;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_simpson_intervals() -> usize {
    SIMPSON_INTERVALS
}
fn default_significance_level() -> f64 {
    DEFAULT_SIGNIFICANCE_LEVEL
}
fn default_df_bounds() -> (usize, usize) {
    (MIN_DF, MAX_DF)
}
fn default_sample_size_bounds() -> (usize, usize) {
    (MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE)
}
fn default_error_sim_draws() -> usize {
    ERROR_SIM_DRAWS
}

/// Configuration for the teaching demos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Seed for random number generation.
    #[serde(default)]
    pub seed: u64,
    /// Simpson subintervals for the CDF, must be even.
    #[serde(default = "default_simpson_intervals")]
    pub simpson_intervals: usize,
    /// Significance level, one of 0.20, 0.10, 0.05, 0.025, 0.01, 0.001.
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    /// Inclusive bounds of the degrees-of-freedom slider.
    #[serde(default = "default_df_bounds")]
    pub df_bounds: (usize, usize),
    /// Inclusive bounds of the sample-size slider.
    #[serde(default = "default_sample_size_bounds")]
    pub sample_size_bounds: (usize, usize),
    /// Trials per run of the error simulator.
    #[serde(default = "default_error_sim_draws")]
    pub error_sim_draws: usize,
    /// Number of threads for parallel sampling.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            seed: 0,
            simpson_intervals: SIMPSON_INTERVALS,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            df_bounds: (MIN_DF, MAX_DF),
            sample_size_bounds: (MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE),
            error_sim_draws: ERROR_SIM_DRAWS,
            num_threads: None,
        }
    }
}

impl LabConfig {
    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ChiSquareError> {
        if self.simpson_intervals < 2 || self.simpson_intervals % 2 != 0 {
            return Err(ChiSquareError::InvalidParameter(
                "simpson_intervals".to_string(),
                "even number of at least 2".to_string(),
                self.simpson_intervals.to_string(),
            ));
        }
        validate_float_parameter(self.significance_level, 0.0, 1.0, "significance_level")?;
        self.alpha()?;
        for (name, (lo, hi)) in [("df_bounds", self.df_bounds), ("sample_size_bounds", self.sample_size_bounds)] {
            if lo == 0 || lo > hi {
                return Err(ChiSquareError::InvalidParameter(
                    name.to_string(),
                    "positive lower bound no larger than the upper bound".to_string(),
                    format!("({}, {})", lo, hi),
                ));
            }
        }
        if self.sample_size_bounds.0 < MIN_SAMPLE_SIZE || self.sample_size_bounds.1 > MAX_SAMPLE_SIZE {
            return Err(ChiSquareError::InvalidParameter(
                "sample_size_bounds".to_string(),
                format!("bounds within {} and {}", MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE),
                format!("{:?}", self.sample_size_bounds),
            ));
        }
        Ok(())
    }

    pub fn alpha(&self) -> Result<Alpha, ChiSquareError> {
        Alpha::from_level(self.significance_level).ok_or_else(|| {
            ChiSquareError::InvalidParameter(
                "significance_level".to_string(),
                "one of 0.20, 0.10, 0.05, 0.025, 0.01, 0.001".to_string(),
                self.significance_level.to_string(),
            )
        })
    }

    /// Clamp a degrees-of-freedom value into the slider range.
    pub fn clamp_df(&self, df: usize) -> usize {
        clamp_logged(df, self.df_bounds, "df")
    }

    /// Clamp a sample size into the slider range.
    pub fn clamp_sample_size(&self, samples: usize) -> usize {
        clamp_logged(samples, self.sample_size_bounds, "sample size")
    }

    /// A distribution using the configured Simpson resolution.
    pub fn distribution(&self, df: usize) -> Result<ChiSquareDistribution, ChiSquareError> {
        Ok(ChiSquareDistribution::new(self.clamp_df(df) as f64)?.with_intervals(self.simpson_intervals))
    }

    pub fn thread_pool(&self) -> Result<rayon::ThreadPool, ChiSquareError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = self.num_threads {
            builder = builder.num_threads(n);
        }
        builder.build().map_err(|e| {
            ChiSquareError::InvalidParameter("num_threads".to_string(), "a buildable pool".to_string(), e.to_string())
        })
    }

    /// Simulated histogram for a slider-driven demo, seeded from the config.
    pub fn histogram(&self, df: usize, samples: usize, bins: usize) -> Result<Vec<HistogramBin>, ChiSquareError> {
        let df = self.clamp_df(df);
        let samples = self.clamp_sample_size(samples);
        let max_x = curve_extent(df);
        let pool = self.thread_pool()?;
        pool.install(|| empirical_histogram(df, samples, bins, max_x, self.seed))
    }

    /// The sample-size demo for a slider value, clamped to the slider range.
    pub fn sample_size_demo(&self, samples: usize) -> SampleSizeDemo {
        SampleSizeDemo::new(self.clamp_sample_size(samples))
    }

    /// One run of the error simulator at the configured alpha.
    pub fn error_simulation(&self, scenario: ErrorScenario) -> Result<ErrorTally, ChiSquareError> {
        let alpha = self.alpha()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(run_error_simulation(&mut rng, scenario, alpha, self.error_sim_draws))
    }
}

fn clamp_logged(value: usize, bounds: (usize, usize), what: &str) -> usize {
    let (lo, hi) = bounds;
    let clamped = value.clamp(lo, hi.max(lo));
    if clamped != value {
        warn!("{} {} is outside [{}, {}], using {}.", what, value, lo, hi, clamped);
    }
    clamped
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ChiSquareError> {
        fs::write(path, self.json_dump()?).map_err(|e| ChiSquareError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object
    fn json_dump(&self) -> Result<String, ChiSquareError> {
        serde_json::to_string(self).map_err(|e| ChiSquareError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, ChiSquareError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| ChiSquareError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, ChiSquareError> {
        let json_str = fs::read_to_string(path).map_err(|e| ChiSquareError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for LabConfig {}
