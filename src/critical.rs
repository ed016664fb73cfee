//! Critical Values
//!
//! Static critical-value tables and the significance decision. These are
//! lookups, not an inverse-CDF solver.
use crate::errors::ChiSquareError;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported significance levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Alpha {
    P20,
    P10,
    #[default]
    P05,
    P025,
    P01,
    P001,
}

impl Alpha {
    pub const ALL: [Alpha; 6] = [Alpha::P20, Alpha::P10, Alpha::P05, Alpha::P025, Alpha::P01, Alpha::P001];

    pub fn level(&self) -> f64 {
        match self {
            Alpha::P20 => 0.20,
            Alpha::P10 => 0.10,
            Alpha::P05 => 0.05,
            Alpha::P025 => 0.025,
            Alpha::P01 => 0.01,
            Alpha::P001 => 0.001,
        }
    }

    /// Match a numeric level to a supported alpha.
    pub fn from_level(level: f64) -> Option<Alpha> {
        Alpha::ALL.into_iter().find(|a| (a.level() - level).abs() < 1e-9)
    }

    /// Two-sided standard normal cutoff, |z| beyond this rejects.
    pub fn z_cutoff(&self) -> f64 {
        match self {
            Alpha::P20 => 1.28,
            Alpha::P10 => 1.645,
            Alpha::P05 => 1.96,
            Alpha::P025 => 2.241,
            Alpha::P01 => 2.576,
            Alpha::P001 => 3.291,
        }
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alpha::P025 => write!(f, "0.025"),
            Alpha::P001 => write!(f, "0.001"),
            _ => write!(f, "{:.2}", self.level()),
        }
    }
}

impl FromStr for Alpha {
    type Err = ChiSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Alpha::from_level)
            .ok_or_else(|| {
                ChiSquareError::ParseString(
                    s.to_string(),
                    "Alpha".to_string(),
                    items_to_strings(vec!["0.20", "0.10", "0.05", "0.025", "0.01", "0.001"]),
                )
            })
    }
}

/// Two-sided z cutoff for an arbitrary level, falling back to 1.96 for
/// levels without a table entry.
pub fn two_sided_z_cutoff(level: f64) -> f64 {
    Alpha::from_level(level).map(|a| a.z_cutoff()).unwrap_or(1.96)
}

const CRITICAL_10: [f64; 20] = [
    2.706, 4.605, 6.251, 7.779, 9.236, 10.645, 12.017, 13.362, 14.684, 15.987, 17.275, 18.549, 19.812, 21.064, 22.307,
    23.542, 24.769, 25.989, 27.204, 28.412,
];
const CRITICAL_05: [f64; 20] = [
    3.841, 5.991, 7.815, 9.488, 11.070, 12.592, 14.067, 15.507, 16.919, 18.307, 19.675, 21.026, 22.362, 23.685, 24.996,
    26.296, 27.587, 28.869, 30.144, 31.410,
];
const CRITICAL_025: [f64; 20] = [
    5.024, 7.378, 9.348, 11.143, 12.833, 14.449, 16.013, 17.535, 19.023, 20.483, 21.920, 23.337, 24.736, 26.119, 27.488,
    28.845, 30.191, 31.526, 32.852, 34.170,
];
const CRITICAL_01: [f64; 20] = [
    6.635, 9.210, 11.345, 13.277, 15.086, 16.812, 18.475, 20.090, 21.666, 23.209, 24.725, 26.217, 27.688, 29.141, 30.578,
    32.000, 33.409, 34.805, 36.191, 37.566,
];

/// Chi-square critical value for `df` in 1..=20 at alpha 0.10, 0.05, 0.025
/// or 0.01.
pub fn chi_square_critical_value(df: usize, alpha: Alpha) -> Result<f64, ChiSquareError> {
    let table = match alpha {
        Alpha::P10 => &CRITICAL_10,
        Alpha::P05 => &CRITICAL_05,
        Alpha::P025 => &CRITICAL_025,
        Alpha::P01 => &CRITICAL_01,
        _ => {
            return Err(ChiSquareError::InvalidParameter(
                "alpha".to_string(),
                "one of 0.10, 0.05, 0.025, 0.01".to_string(),
                alpha.to_string(),
            ))
        }
    };
    if df == 0 || df > table.len() {
        return Err(ChiSquareError::InvalidParameter(
            "df".to_string(),
            format!("integer within range 1 and {}", table.len()),
            df.to_string(),
        ));
    }
    Ok(table[df - 1])
}

/// A result is significant only when the statistic strictly exceeds the
/// critical value.
#[inline]
pub fn is_significant(statistic: f64, critical_value: f64) -> bool {
    statistic > critical_value
}

/// Outcome of a significance test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Significant,
    NotSignificant,
}

impl Verdict {
    pub fn from_statistic(statistic: f64, critical_value: f64) -> Self {
        if is_significant(statistic, critical_value) {
            Verdict::Significant
        } else {
            Verdict::NotSignificant
        }
    }

    pub fn from_p_value(p_value: f64, level: f64) -> Self {
        if p_value < level {
            Verdict::Significant
        } else {
            Verdict::NotSignificant
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, Verdict::Significant)
    }

    pub fn conclusion(&self) -> &'static str {
        match self {
            Verdict::Significant => "Reject the null hypothesis",
            Verdict::NotSignificant => "Fail to reject the null hypothesis",
        }
    }
}
