//! Type I / Type II Errors
//!
//! Run a batch of trials through a two-sided z test and count how many are
//! rejected. Under a true null every rejection is a false alarm. Under a
//! real effect every retained trial is a missed discovery.
use crate::critical::Alpha;
use crate::sampler::{GaussianSampler, Sampler};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorScenario {
    /// The null hypothesis is true, trials are centred at 0.
    #[default]
    TypeOne,
    /// A real effect, trials are centred at 2.2.
    TypeTwo,
}

impl ErrorScenario {
    pub fn true_mean(&self) -> f64 {
        match self {
            ErrorScenario::TypeOne => 0.0,
            ErrorScenario::TypeTwo => 2.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorTally {
    /// Trials beyond the cutoff, where the null is rejected.
    pub rejections: usize,
    /// Trials inside the cutoff.
    pub retained: usize,
}

impl ErrorTally {
    pub fn trials(&self) -> usize {
        self.rejections + self.retained
    }

    /// Wrong decisions for the given scenario.
    pub fn errors(&self, scenario: ErrorScenario) -> usize {
        match scenario {
            ErrorScenario::TypeOne => self.rejections,
            ErrorScenario::TypeTwo => self.retained,
        }
    }

    pub fn correct(&self, scenario: ErrorScenario) -> usize {
        self.trials() - self.errors(scenario)
    }

    pub fn error_rate(&self, scenario: ErrorScenario) -> f64 {
        if self.trials() == 0 {
            0.0
        } else {
            self.errors(scenario) as f64 / self.trials() as f64
        }
    }
}

/// Draw `draws` unit-variance trials for `scenario` and test each at `alpha`.
pub fn run_error_simulation<R: Rng + ?Sized>(
    rng: &mut R,
    scenario: ErrorScenario,
    alpha: Alpha,
    draws: usize,
) -> ErrorTally {
    let sampler = GaussianSampler::new(scenario.true_mean(), 1.0);
    let cutoff = alpha.z_cutoff();
    let rejections = (0..draws).filter(|_| sampler.sample(rng).abs() > cutoff).count();
    let tally = ErrorTally {
        rejections,
        retained: draws - rejections,
    };
    info!(
        "{:?} simulation at alpha {}: {} of {} trials were errors.",
        scenario,
        alpha,
        tally.errors(scenario),
        draws
    );
    tally
}
