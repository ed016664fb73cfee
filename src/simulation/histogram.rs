//! Histogram
//!
//! Empirical chi-square histograms, for plotting simulated scores against
//! the theoretical density.
use crate::constants::{MAX_SAMPLE_SIZE, MIN_SAMPLE_SIZE};
use crate::distribution::chi2_pdf;
use crate::errors::ChiSquareError;
use crate::sampler::ChiSquareSampler;
use crate::utils::{fmt_vec_output, validate_positive_float_parameter, validate_usize_parameter};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// count / (samples * bin width)
    pub density: f64,
    /// Theoretical density at the bin midpoint.
    pub theoretical: f64,
}

/// Simulate `samples` chi-square scores and bin them over `[0, max_x)`.
///
/// Scores at or beyond `max_x` are not binned but still count towards the
/// normalisation, so the binned densities integrate to the share of scores
/// that fell inside the range.
pub fn empirical_histogram(
    df: usize,
    samples: usize,
    bins: usize,
    max_x: f64,
    seed: u64,
) -> Result<Vec<HistogramBin>, ChiSquareError> {
    validate_usize_parameter(samples, MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE, "samples")?;
    validate_usize_parameter(bins, 1, usize::MAX, "bins")?;
    validate_positive_float_parameter(max_x, "max_x")?;
    let sampler = ChiSquareSampler::new(df)?;

    let width = max_x / bins as f64;
    let mut counts = vec![0usize; bins];
    let mut outside = 0;
    for score in sampler.sample_many(samples, seed) {
        let idx = (score / width) as usize;
        if idx < bins {
            counts[idx] += 1;
        } else {
            outside += 1;
        }
    }

    let histogram: Vec<HistogramBin> = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = i as f64 * width;
            let upper = lower + width;
            HistogramBin {
                lower,
                upper,
                count,
                density: count as f64 / (samples as f64 * width),
                theoretical: chi2_pdf((lower + upper) / 2.0, df as f64),
            }
        })
        .collect();

    info!(
        "Simulated {} chi-square scores with df = {}, {} fell beyond {}.",
        samples, df, outside, max_x
    );
    debug!(
        "Empirical densities: {}",
        fmt_vec_output(&histogram.iter().map(|b| b.density).collect::<Vec<_>>())
    );
    Ok(histogram)
}
