//! Sampler
//!
//! Random variates for the simulation demos. Every sampler takes the random
//! number generator as an argument, so results are reproducible from a seed.
use crate::constants::SAMPLE_CHUNK_SIZE;
use crate::errors::ChiSquareError;
use crate::utils::validate_positive_float_parameter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A source of real-valued random variates.
pub trait Sampler {
    /// Draw a single value.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;
}

/// Uniform draw in (0, 1), redrawn while exactly 0 so `ln` stays finite.
fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let mut u = 0.0;
    while u == 0.0 {
        u = rng.gen::<f64>();
    }
    u
}

/// One standard normal draw by the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = open_unit(rng);
    let v = open_unit(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Normal distribution with a given mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianSampler {
    pub mean: f64,
    pub std: f64,
}

impl GaussianSampler {
    pub fn new(mean: f64, std: f64) -> Self {
        GaussianSampler { mean, std }
    }

    pub fn standard() -> Self {
        GaussianSampler { mean: 0.0, std: 1.0 }
    }
}

impl Sampler for GaussianSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        standard_normal(rng) * self.std + self.mean
    }
}

/// Sum of `df` squared standard normal draws, one chi-square variate.
pub fn chi_square_variate<R: Rng + ?Sized>(rng: &mut R, df: usize) -> f64 {
    (0..df).map(|_| standard_normal(rng).powi(2)).sum()
}

/// Chi-square distribution with `df` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChiSquareSampler {
    df: usize,
}

impl ChiSquareSampler {
    pub fn new(df: usize) -> Result<Self, ChiSquareError> {
        validate_positive_float_parameter(df as f64, "df")?;
        Ok(ChiSquareSampler { df })
    }

    pub fn df(&self) -> usize {
        self.df
    }

    /// Draw `n` variates in parallel.
    ///
    /// Work is split into fixed-size chunks and each chunk gets its own
    /// generator derived from `seed`, so the output does not depend on how
    /// many threads run it.
    pub fn sample_many(&self, n: usize, seed: u64) -> Vec<f64> {
        let chunks = n.div_ceil(SAMPLE_CHUNK_SIZE);
        (0..chunks)
            .into_par_iter()
            .flat_map_iter(|chunk| {
                let mut rng = StdRng::seed_from_u64(chunk_seed(seed, chunk));
                let len = SAMPLE_CHUNK_SIZE.min(n - chunk * SAMPLE_CHUNK_SIZE);
                (0..len).map(|_| self.sample(&mut rng)).collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Sampler for ChiSquareSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        chi_square_variate(rng, self.df)
    }
}

#[inline]
fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Number of heads in `flips` fair coin flips.
pub fn flip_coins<R: Rng + ?Sized>(rng: &mut R, flips: u64) -> u64 {
    (0..flips).filter(|_| rng.gen_bool(0.5)).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_and_variance(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, var)
    }

    #[test]
    fn test_standard_gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let sampler = GaussianSampler::standard();
        let draws: Vec<f64> = (0..10_000).map(|_| sampler.sample(&mut rng)).collect();
        let (mean, var) = mean_and_variance(&draws);
        assert!(mean.abs() < 0.05, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.1, "variance = {}", var);
    }

    #[test]
    fn test_shifted_gaussian() {
        let mut rng = StdRng::seed_from_u64(7);
        let sampler = GaussianSampler::new(2.2, 0.5);
        let draws: Vec<f64> = (0..10_000).map(|_| sampler.sample(&mut rng)).collect();
        let (mean, var) = mean_and_variance(&draws);
        assert!((mean - 2.2).abs() < 0.05);
        assert!((var - 0.25).abs() < 0.05);
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(standard_normal(&mut a), standard_normal(&mut b));
        }
    }

    #[test]
    fn test_chi_square_variate() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(chi_square_variate(&mut rng, 0), 0.0);
        // Mean of χ²(k) is k.
        let draws: Vec<f64> = (0..10_000).map(|_| chi_square_variate(&mut rng, 4)).collect();
        let (mean, var) = mean_and_variance(&draws);
        assert!(draws.iter().all(|d| *d >= 0.0));
        assert!((mean - 4.0).abs() < 0.2, "mean = {}", mean);
        assert!((var - 8.0).abs() < 0.8, "variance = {}", var);
    }

    #[test]
    fn test_sample_many() {
        assert!(ChiSquareSampler::new(0).is_err());
        let sampler = ChiSquareSampler::new(3).unwrap();
        let draws = sampler.sample_many(5000, 99);
        assert_eq!(draws.len(), 5000);
        assert_eq!(draws, sampler.sample_many(5000, 99));
        assert_ne!(draws, sampler.sample_many(5000, 100));
        let (mean, _) = mean_and_variance(&draws);
        assert!((mean - 3.0).abs() < 0.2);
        assert!(sampler.sample_many(0, 1).is_empty());
    }

    #[test]
    fn test_sample_many_ignores_thread_count() {
        let sampler = ChiSquareSampler::new(2).unwrap();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let single = pool.install(|| sampler.sample_many(3000, 5));
        let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
        let many = pool.install(|| sampler.sample_many(3000, 5));
        assert_eq!(single, many);
    }

    #[test]
    fn test_flip_coins() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(flip_coins(&mut rng, 0), 0);
        let heads = flip_coins(&mut rng, 10_000);
        assert!((4_800..=5_200).contains(&heads), "heads = {}", heads);
    }
}
