//! Gamma
//!
//! Lanczos approximation of the gamma function.
use crate::constants::{LANCZOS_COEFFICIENTS, LANCZOS_G};
use std::f64::consts::PI;

/// Approximate Γ(n) for real `n`.
///
/// Uses the Lanczos approximation with `g = 7` and nine coefficients. For
/// `n < 0.5` the reflection formula `Γ(n) = π / (sin(πn) Γ(1 - n))` is applied
/// once.
///
/// # Precondition
///
/// `n` must not be zero or a negative integer. Γ has poles there, and the
/// result is infinite or NaN. Chi-square callers pass `df / 2` with `df >= 1`,
/// so they never reach the reflection branch.
pub fn gamma(n: f64) -> f64 {
    if n < 0.5 {
        return PI / ((PI * n).sin() * gamma(1.0 - n));
    }
    let n = n - 1.0;
    let mut x = LANCZOS_COEFFICIENTS[0];
    for (i, p) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        x += p / (n + i as f64);
    }
    let t = n + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(n + 0.5) * (-t).exp() * x
}
