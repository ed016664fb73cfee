//! Distribution Module
//!
//! Numeric routines for the chi-square distribution.
//!
//! # Submodules
//!
//! * `gamma`: Lanczos approximation of the gamma function.
//! * `chi_square`: density, cumulative distribution (fixed-step Simpson integration) and p-values.

pub mod chi_square;
pub mod gamma;

pub use chi_square::{chi2_cdf, chi2_pdf, curve_extent, density_curve, p_value, ChiSquareDistribution, CurvePoint};
pub use gamma::gamma;
