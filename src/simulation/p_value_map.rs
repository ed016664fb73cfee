//! P-Value Map
//!
//! An illustrative p-value curve around an expected result of 150. It is a
//! teaching shape, not a real sampling distribution: the further a result
//! lands from 150, the smaller its p-value.
use serde::{Deserialize, Serialize};

pub const EXPECTED_RESULT: f64 = 150.0;
pub const RESULT_MIN: f64 = 20.0;
pub const RESULT_MAX: f64 = 180.0;
const P_VALUE_FLOOR: f64 = 0.0001;

/// `max(1e-4, exp(-0.005 * |result - 150|^1.8))`
pub fn illustrative_p_value(result: f64) -> f64 {
    let distance = (result - EXPECTED_RESULT).abs();
    (-0.005 * distance.powf(1.8)).exp().max(P_VALUE_FLOOR)
}

/// Horizontal position of a result on the map, in percent.
pub fn marker_position(result: f64) -> f64 {
    (result - RESULT_MIN) / (RESULT_MAX - RESULT_MIN) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurpriseZone {
    NotSurprising,
    ABitWeird,
    HighlySurprising,
}

impl SurpriseZone {
    pub fn classify(p_value: f64) -> Self {
        if p_value > 0.1 {
            SurpriseZone::NotSurprising
        } else if p_value > 0.05 {
            SurpriseZone::ABitWeird
        } else {
            SurpriseZone::HighlySurprising
        }
    }

    /// Only the highly surprising zone rejects the null hypothesis.
    pub fn rejects_null(&self) -> bool {
        matches!(self, SurpriseZone::HighlySurprising)
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            SurpriseZone::NotSurprising => "Consistent with random chance. Fail to reject H0.",
            SurpriseZone::ABitWeird => "Evidence is inconclusive. Fail to reject H0.",
            SurpriseZone::HighlySurprising => "Statistically significant. Reject H0.",
        }
    }
}
