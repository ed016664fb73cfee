//! Simulation Module
//!
//! Randomised demos built on the sampler and the distribution routines.
//!
//! # Submodules
//!
//! * `game`: the significance game, random chi-square scores judged against a critical value.
//! * `type_errors`: type I / type II error rates of a two-sided z test.
//! * `p_value_map`: an illustrative p-value curve and its "surprise" zones.
//! * `histogram`: empirical chi-square histograms next to the theoretical density.
//! * `sample_size`: how the same kill rates read at growing sample sizes.

pub mod game;
pub mod histogram;
pub mod p_value_map;
pub mod sample_size;
pub mod type_errors;

pub use game::{GameMode, ScoredDraw, SignificanceGame};
pub use histogram::{empirical_histogram, HistogramBin};
pub use p_value_map::{illustrative_p_value, marker_position, SurpriseZone};
pub use sample_size::{SampleSizeDemo, ScaleReading};
pub use type_errors::{run_error_simulation, ErrorScenario, ErrorTally};
