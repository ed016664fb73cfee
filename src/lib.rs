//! Numeric kernel behind a set of interactive chi-square teaching demos.
//!
//! The crate covers the gamma function, the chi-square density and
//! cumulative distribution, the 2x2 contingency-table calculator, critical
//! value lookups and the random samplers used by the simulations.

// Modules
pub mod config;
pub mod constants;
pub mod contingency;
pub mod critical;
pub mod degrees_of_freedom;
pub mod distribution;
pub mod errors;
pub mod goodness_of_fit;
pub mod sampler;
pub mod simulation;
pub mod utils;

// Individual classes, and functions
pub use config::{ConfigIO, LabConfig};
pub use contingency::{chi2_contingency_2x2, ContingencyAnalysis, ContingencyTable2x2};
pub use critical::{Alpha, Verdict};
pub use distribution::{chi2_cdf, chi2_pdf, gamma, p_value, ChiSquareDistribution};
pub use errors::ChiSquareError;
pub use sampler::{ChiSquareSampler, GaussianSampler, Sampler};
