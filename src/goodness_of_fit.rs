//! Goodness of Fit
//!
//! Chi-square goodness-of-fit statistic over any number of categories.
use crate::contingency::ChiSquareComponent;
use crate::degrees_of_freedom::goodness_of_fit_df;
use crate::distribution::p_value;
use crate::errors::ChiSquareError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodnessOfFit {
    pub components: Vec<ChiSquareComponent>,
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
}

/// Compare observed category counts against expected ones.
///
/// Categories with an expected count of 0 contribute nothing.
pub fn goodness_of_fit(observed: &[f64], expected: &[f64]) -> Result<GoodnessOfFit, ChiSquareError> {
    if observed.len() != expected.len() {
        return Err(ChiSquareError::InvalidParameter(
            "expected".to_string(),
            format!("{} categories", observed.len()),
            expected.len().to_string(),
        ));
    }
    if observed.len() < 2 {
        return Err(ChiSquareError::InvalidParameter(
            "observed".to_string(),
            "at least 2 categories".to_string(),
            observed.len().to_string(),
        ));
    }
    let components: Vec<ChiSquareComponent> = observed
        .iter()
        .zip(expected)
        .map(|(o, e)| ChiSquareComponent::new(*o, *e))
        .collect();
    let statistic = components.iter().map(|c| c.contribution).sum();
    let degrees_of_freedom = goodness_of_fit_df(observed.len());
    Ok(GoodnessOfFit {
        components,
        statistic,
        degrees_of_freedom,
        p_value: p_value(statistic, degrees_of_freedom as f64),
    })
}

/// Split a fixed `total` into `first` and the remainder, and test it against
/// an even split. Choosing `first` leaves the second count no freedom.
pub fn two_category_split(total: u64, first: u64) -> Result<GoodnessOfFit, ChiSquareError> {
    if first > total {
        return Err(ChiSquareError::InvalidParameter(
            "first".to_string(),
            format!("count no larger than {}", total),
            first.to_string(),
        ));
    }
    let half = total as f64 / 2.0;
    goodness_of_fit(&[first as f64, (total - first) as f64], &[half, half])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goodness_of_fit() {
        // Die rolled 60 times.
        let observed = [8.0, 12.0, 9.0, 11.0, 10.0, 10.0];
        let expected = [10.0; 6];
        let gof = goodness_of_fit(&observed, &expected).unwrap();
        assert_eq!(gof.degrees_of_freedom, 5);
        assert!((gof.statistic - 1.0).abs() < 1e-12);
        assert!(gof.p_value > 0.9);
        assert_eq!(gof.components.len(), 6);
    }

    #[test]
    fn test_goodness_of_fit_invalid() {
        assert!(goodness_of_fit(&[1.0, 2.0], &[1.0]).is_err());
        assert!(goodness_of_fit(&[1.0], &[1.0]).is_err());
    }

    #[test]
    fn test_zero_expected_category() {
        let gof = goodness_of_fit(&[5.0, 5.0, 3.0], &[5.0, 5.0, 0.0]).unwrap();
        assert_eq!(gof.statistic, 0.0);
    }

    #[test]
    fn test_two_category_split() {
        // 110 red and 90 white colonies out of 200.
        let gof = two_category_split(200, 110).unwrap();
        assert_eq!(gof.degrees_of_freedom, 1);
        assert!((gof.statistic - 2.0).abs() < 1e-12);
        assert!(gof.p_value > 0.05);

        let skewed = two_category_split(200, 130).unwrap();
        assert!((skewed.statistic - 18.0).abs() < 1e-12);
        assert!(skewed.p_value < 0.001);

        assert!(two_category_split(200, 201).is_err());
    }
}
