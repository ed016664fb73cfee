//! Chi-Square
//!
//! Density, cumulative distribution and tail probabilities of the chi-square
//! distribution. The CDF is a fixed-resolution composite Simpson integration
//! of the density, which is accurate over the ranges the demos use
//! (`df <= 20`, `x <= 30`) but carries no error bound.
use crate::constants::SIMPSON_INTERVALS;
use crate::distribution::gamma::gamma;
use crate::errors::ChiSquareError;
use crate::utils::validate_positive_float_parameter;
use log::debug;
use serde::{Deserialize, Serialize};

/// Chi-square probability density at `x` for `df` degrees of freedom.
///
/// Returns 0 when `x < 0` or `df <= 0`. At `x = 0` with `df < 2` the density
/// is infinite.
pub fn chi2_pdf(x: f64, df: f64) -> f64 {
    if x < 0.0 || df <= 0.0 || df.is_nan() {
        return 0.0;
    }
    if df == 2.0 {
        return (-x / 2.0).exp() / 2.0;
    }
    let k = df / 2.0;
    x.powf(k - 1.0) * (-x / 2.0).exp() / (2f64.powf(k) * gamma(k))
}

/// P(X <= x) for X ~ χ²(df), integrated with 1000 Simpson subintervals.
pub fn chi2_cdf(x: f64, df: f64) -> f64 {
    chi2_cdf_with_intervals(x, df, SIMPSON_INTERVALS)
}

/// [`chi2_cdf`] with an explicit number of Simpson subintervals.
///
/// An odd `intervals` is rounded up to the next even number.
pub fn chi2_cdf_with_intervals(x: f64, df: f64, intervals: usize) -> f64 {
    if x <= 0.0 || df <= 0.0 || df.is_nan() {
        return 0.0;
    }
    let n = if intervals % 2 == 0 {
        intervals.max(2)
    } else {
        intervals + 1
    };

    let raw = if df < 2.0 {
        // The density behaves like x^(k-1) at zero and is infinite there.
        // Integrate that leading term exactly and apply Simpson to the
        // bounded remainder.
        let k = df / 2.0;
        let scale = 1.0 / (2f64.powf(k) * gamma(k));
        let leading = scale * x.powf(k) / k;
        let remainder = simpson(
            |t| {
                if t == 0.0 {
                    0.0
                } else {
                    scale * t.powf(k - 1.0) * ((-t / 2.0).exp() - 1.0)
                }
            },
            x,
            n,
        );
        leading + remainder
    } else {
        simpson(|t| chi2_pdf(t, df), x, n)
    };

    if raw > 1.0 {
        debug!("Clamping chi-square CDF overshoot {} to 1 (x = {}, df = {}).", raw, x, df);
        1.0
    } else {
        raw
    }
}

/// Composite Simpson's rule over `[0, x]` with `n` (even) subintervals.
fn simpson<F: Fn(f64) -> f64>(f: F, x: f64, n: usize) -> f64 {
    let h = x / n as f64;
    let mut sum = f(0.0) + f(x);
    for i in (1..n).step_by(2) {
        sum += 4.0 * f(i as f64 * h);
    }
    for i in (2..n - 1).step_by(2) {
        sum += 2.0 * f(i as f64 * h);
    }
    (h / 3.0) * sum
}

/// Upper tail probability `1 - CDF(statistic, df)`.
pub fn p_value(statistic: f64, df: f64) -> f64 {
    1.0 - chi2_cdf(statistic, df)
}

/// A single point on a plotted density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Sample the density for plotting, from `x = 0.1` in increments of `step`
/// while `x <= max_x`.
pub fn density_curve(df: f64, max_x: f64, step: f64) -> Vec<CurvePoint> {
    if step <= 0.0 || step.is_nan() || max_x.is_nan() {
        return Vec::new();
    }
    let mut points = Vec::new();
    let mut i = 0;
    loop {
        let x = 0.1 + i as f64 * step;
        if x > max_x {
            break;
        }
        points.push(CurvePoint { x, y: chi2_pdf(x, df) });
        i += 1;
    }
    points
}

/// Width of the x axis used to plot a density for `df`.
pub fn curve_extent(df: usize) -> f64 {
    20f64.max(df as f64 + 15.0)
}

/// A chi-square distribution with a fixed number of degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareDistribution {
    df: f64,
    intervals: usize,
}

impl ChiSquareDistribution {
    /// Create a distribution, `df` must be positive.
    pub fn new(df: f64) -> Result<Self, ChiSquareError> {
        validate_positive_float_parameter(df, "df")?;
        Ok(ChiSquareDistribution {
            df,
            intervals: SIMPSON_INTERVALS,
        })
    }

    /// Use a different Simpson resolution for the CDF.
    pub fn with_intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn df(&self) -> f64 {
        self.df
    }

    pub fn pdf(&self, x: f64) -> f64 {
        chi2_pdf(x, self.df)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        chi2_cdf_with_intervals(x, self.df, self.intervals)
    }

    /// Survival function, the p-value of an observed statistic.
    pub fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    pub fn density_curve(&self, max_x: f64, step: f64) -> Vec<CurvePoint> {
        density_curve(self.df, max_x, step)
    }
}
