//! Contingency
//!
//! The 2x2 contingency-table calculator: margins, expected counts under
//! independence, per-cell chi-square components and the summed statistic.
//!
//! Cells are laid out as
//!
//! ```text
//!          col 1   col 2
//! row 1      a       b
//! row 2      c       d
//! ```
use crate::constants::{CRITICAL_VALUE_DF1_ALPHA05, TABLE_2X2_DF};
use crate::critical::Verdict;
use crate::distribution::p_value;
use crate::errors::ChiSquareError;
use crate::utils::coerce_count;
use serde::{Deserialize, Serialize};

/// Observed counts of a 2x2 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContingencyTable2x2 {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

/// Row, column and grand totals of a table. Wider than the cells, so any
/// four `u64` counts sum without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub row1: u128,
    pub row2: u128,
    pub col1: u128,
    pub col2: u128,
    pub grand: u128,
}

/// Expected counts under the hypothesis of independence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpectedFrequencies {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ExpectedFrequencies {
    pub fn cells(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn sum(&self) -> f64 {
        self.cells().iter().sum()
    }
}

/// One cell's share of the chi-square statistic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChiSquareComponent {
    /// observed - expected
    pub difference: f64,
    pub squared_difference: f64,
    /// squared_difference / expected
    pub contribution: f64,
}

impl ChiSquareComponent {
    /// A cell whose expected count is 0 contributes nothing. This keeps the
    /// statistic finite, although the test is undefined for such tables.
    pub fn new(observed: f64, expected: f64) -> Self {
        if expected == 0.0 {
            return ChiSquareComponent::default();
        }
        let difference = observed - expected;
        let squared_difference = difference.powi(2);
        ChiSquareComponent {
            difference,
            squared_difference,
            contribution: squared_difference / expected,
        }
    }
}

/// Components for each of the four cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub a: ChiSquareComponent,
    pub b: ChiSquareComponent,
    pub c: ChiSquareComponent,
    pub d: ChiSquareComponent,
}

impl Components {
    pub fn cells(&self) -> [ChiSquareComponent; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The chi-square statistic, the sum of all contributions.
    pub fn statistic(&self) -> f64 {
        self.cells().iter().map(|c| c.contribution).sum()
    }
}

/// Everything the calculator displays for one table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContingencyAnalysis {
    pub observed: ContingencyTable2x2,
    pub totals: Totals,
    pub expected: ExpectedFrequencies,
    pub components: Components,
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub critical_value: f64,
    pub p_value: f64,
    pub verdict: Verdict,
}

impl ContingencyTable2x2 {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        ContingencyTable2x2 { a, b, c, d }
    }

    /// Build a table from raw text inputs in `[a, b, c, d]` order. Invalid
    /// or empty entries count as 0.
    pub fn from_inputs(inputs: [&str; 4]) -> Self {
        let [a, b, c, d] = inputs.map(coerce_count);
        ContingencyTable2x2 { a, b, c, d }
    }

    pub fn cells(&self) -> [u64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn totals(&self) -> Totals {
        let [a, b, c, d] = self.cells().map(u128::from);
        Totals {
            row1: a + b,
            row2: c + d,
            col1: a + c,
            col2: b + d,
            grand: a + b + c + d,
        }
    }

    /// Expected counts, all zero for an empty table.
    pub fn expected(&self) -> ExpectedFrequencies {
        let t = self.totals();
        if t.grand == 0 {
            return ExpectedFrequencies::default();
        }
        let grand = t.grand as f64;
        let (row1, row2) = (t.row1 as f64, t.row2 as f64);
        let (col1, col2) = (t.col1 as f64, t.col2 as f64);
        ExpectedFrequencies {
            a: (row1 * col1) / grand,
            b: (row1 * col2) / grand,
            c: (row2 * col1) / grand,
            d: (row2 * col2) / grand,
        }
    }

    pub fn components(&self) -> Components {
        let e = self.expected();
        Components {
            a: ChiSquareComponent::new(self.a as f64, e.a),
            b: ChiSquareComponent::new(self.b as f64, e.b),
            c: ChiSquareComponent::new(self.c as f64, e.c),
            d: ChiSquareComponent::new(self.d as f64, e.d),
        }
    }

    pub fn statistic(&self) -> f64 {
        self.components().statistic()
    }

    pub fn degrees_of_freedom(&self) -> usize {
        TABLE_2X2_DF
    }

    /// Full calculation, judged against the df = 1, alpha = 0.05 critical value.
    pub fn analyze(&self) -> ContingencyAnalysis {
        let expected = self.expected();
        let components = self.components();
        let statistic = components.statistic();
        let degrees_of_freedom = self.degrees_of_freedom();
        ContingencyAnalysis {
            observed: *self,
            totals: self.totals(),
            expected,
            components,
            statistic,
            degrees_of_freedom,
            critical_value: CRITICAL_VALUE_DF1_ALPHA05,
            p_value: p_value(statistic, degrees_of_freedom as f64),
            verdict: Verdict::from_statistic(statistic, CRITICAL_VALUE_DF1_ALPHA05),
        }
    }
}

/// Shortcut form of the statistic, `N (ad - bc)^2` over the product of the
/// four margins.
///
/// Matches [`ContingencyTable2x2::statistic`] whenever every margin is
/// non-zero. A table with an empty row or column scores 0.
pub fn chi2_contingency_2x2(table: &ContingencyTable2x2) -> f64 {
    let [a, b, c, d] = table.cells().map(|n| n as f64);
    let margins = (a + b) * (c + d) * (a + c) * (b + d);
    if margins == 0.0 {
        return 0.0;
    }
    (a + b + c + d) * (a * d - b * c).powi(2) / margins
}

/// Fixed margins of a 2x2 table. Once cell `a` is chosen, the margins
/// determine the other three cells, which is why such a table has one
/// degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginConstraints {
    pub row1: u64,
    pub row2: u64,
    pub col1: u64,
    pub col2: u64,
}

impl Default for MarginConstraints {
    fn default() -> Self {
        MarginConstraints {
            row1: 100,
            row2: 80,
            col1: 90,
            col2: 90,
        }
    }
}

impl MarginConstraints {
    pub fn grand(&self) -> u128 {
        u128::from(self.row1) + u128::from(self.row2)
    }

    /// Derive the full table from the free cell `a`.
    ///
    /// `a` may not exceed the first row or first column total. A choice that
    /// would push `d` below zero is rejected as well.
    pub fn complete(&self, a: u64) -> Result<ContingencyTable2x2, ChiSquareError> {
        let limit = self.row1.min(self.col1);
        if a > limit {
            return Err(ChiSquareError::InvalidParameter(
                "a".to_string(),
                format!("count no larger than {}", limit),
                a.to_string(),
            ));
        }
        let b = self.row1 - a;
        let c = self.col1 - a;
        let d = self.row2.checked_sub(c).ok_or_else(|| {
            ChiSquareError::InvalidParameter(
                "a".to_string(),
                format!("count of at least {}", self.col1.saturating_sub(self.row2)),
                a.to_string(),
            )
        })?;
        Ok(ContingencyTable2x2 { a, b, c, d })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> ContingencyTable2x2 {
        ContingencyTable2x2::new(22, 78, 45, 55)
    }

    #[test]
    fn test_totals() {
        let t = example().totals();
        assert_eq!(t.row1, 100);
        assert_eq!(t.row2, 100);
        assert_eq!(t.col1, 67);
        assert_eq!(t.col2, 133);
        assert_eq!(t.grand, 200);
    }

    #[test]
    fn test_expected() {
        let e = example().expected();
        assert_eq!(e.a, 33.5);
        assert_eq!(e.b, 66.5);
        assert_eq!(e.c, 33.5);
        assert_eq!(e.d, 66.5);
        assert!((e.sum() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_components() {
        let comps = example().components();
        assert_eq!(comps.a.difference, -11.5);
        assert_eq!(comps.a.squared_difference, 132.25);
        assert!((comps.a.contribution - 132.25 / 33.5).abs() < 1e-12);
        assert_eq!(comps.d.difference, -11.5);
        assert_eq!(comps.b.difference, 11.5);
    }

    #[test]
    fn test_statistic_known_value() {
        let stat = example().statistic();
        assert_eq!(format!("{:.3}", stat), "11.873");
        let closed = chi2_contingency_2x2(&example());
        assert!((stat - closed).abs() < 1e-9);
    }

    #[test]
    fn test_shortcut_statistic() {
        // ad - bc = 150, margins 15 * 30 * 20 * 25, so 45 * 150^2 / 225000.
        let table = ContingencyTable2x2::new(10, 5, 10, 20);
        let stat = chi2_contingency_2x2(&table);
        assert!((stat - 4.5).abs() < 1e-9);
        assert!((table.statistic() - stat).abs() < 1e-9);
        assert_eq!(chi2_contingency_2x2(&ContingencyTable2x2::default()), 0.0);
        assert_eq!(chi2_contingency_2x2(&ContingencyTable2x2::new(5, 5, 0, 0)), 0.0);
    }

    #[test]
    fn test_analyze() {
        let analysis = example().analyze();
        assert_eq!(analysis.degrees_of_freedom, 1);
        assert_eq!(analysis.critical_value, 3.841);
        assert_eq!(analysis.verdict, Verdict::Significant);
        assert!(analysis.p_value > 0.0 && analysis.p_value < 0.001);
        assert_eq!(analysis.statistic, analysis.components.statistic());

        let balanced = ContingencyTable2x2::new(25, 25, 25, 25).analyze();
        assert_eq!(balanced.statistic, 0.0);
        assert_eq!(balanced.verdict, Verdict::NotSignificant);
        assert!((balanced.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table() {
        let empty = ContingencyTable2x2::default();
        assert_eq!(empty.expected(), ExpectedFrequencies::default());
        assert_eq!(empty.statistic(), 0.0);
        assert_eq!(empty.analyze().verdict, Verdict::NotSignificant);
    }

    #[test]
    fn test_zero_expected_contributes_nothing() {
        // Second column is empty, so expected b and d are 0.
        let table = ContingencyTable2x2::new(10, 0, 20, 0);
        let comps = table.components();
        assert_eq!(comps.b, ChiSquareComponent::default());
        assert_eq!(comps.d, ChiSquareComponent::default());
        assert!(table.statistic().is_finite());
        assert_eq!(table.statistic(), 0.0);
    }

    #[test]
    fn test_from_inputs() {
        let table = ContingencyTable2x2::from_inputs(["22", "", "abc", " 55 "]);
        assert_eq!(table, ContingencyTable2x2::new(22, 0, 0, 55));
        let signed = ContingencyTable2x2::from_inputs(["+5", "-5", "+", "7"]);
        assert_eq!(signed, ContingencyTable2x2::new(5, 0, 0, 7));
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let table = ContingencyTable2x2::from_inputs(["18446744073709551615", "1", "0", "0"]);
        assert_eq!(table.a, u64::MAX);
        let analysis = table.analyze();
        assert_eq!(analysis.totals.row1, u64::MAX as u128 + 1);
        assert_eq!(analysis.totals.grand, u64::MAX as u128 + 1);
        assert!(analysis.statistic.is_finite());
        assert!(analysis.statistic >= 0.0);
        assert!((0.0..=1.0).contains(&analysis.p_value));

        let full = ContingencyTable2x2::new(u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(full.totals().grand, 4 * u64::MAX as u128);
        assert_eq!(full.statistic(), 0.0);
        assert_eq!(full.analyze().verdict, Verdict::NotSignificant);
    }

    #[test]
    fn test_expected_sums_to_grand_total() {
        for a in (0..40).step_by(7) {
            for b in (0..40).step_by(5) {
                for c in (0..40).step_by(3) {
                    for d in (0..40).step_by(11) {
                        let table = ContingencyTable2x2::new(a, b, c, d);
                        let grand = table.totals().grand;
                        if grand == 0 {
                            continue;
                        }
                        let sum = table.expected().sum();
                        assert!((sum - grand as f64).abs() < 1e-9, "{:?}", table);
                        assert!(table.statistic() >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_margin_constraints() {
        let margins = MarginConstraints::default();
        assert_eq!(margins.grand(), 180);
        let table = margins.complete(40).unwrap();
        assert_eq!(table, ContingencyTable2x2::new(40, 60, 50, 30));
        let t = table.totals();
        assert_eq!((t.row1, t.row2, t.col1, t.col2), (100, 80, 90, 90));

        assert!(margins.complete(90).is_ok());
        assert!(margins.complete(91).is_err());
        // a = 5 would need c = 85 > row 2 total.
        assert!(margins.complete(5).is_err());
        assert!(margins.complete(10).is_ok());
    }
}
