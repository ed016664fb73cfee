//! Degrees of Freedom
//!
//! Counting rules for degrees of freedom, and a fixed-total constraint that
//! shows why the last value of a constrained set is never free to vary.
use crate::errors::ChiSquareError;
use serde::{Deserialize, Serialize};

/// Degrees of freedom of an `rows` x `cols` contingency table.
pub fn contingency_df(rows: usize, cols: usize) -> usize {
    rows.saturating_sub(1) * cols.saturating_sub(1)
}

/// Degrees of freedom of a goodness-of-fit test over `categories`.
pub fn goodness_of_fit_df(categories: usize) -> usize {
    categories.saturating_sub(1)
}

/// `slots` values that must add up to `total`. Only the first `slots - 1`
/// can be chosen freely, the last one is fixed by the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedTotal {
    pub total: i64,
    pub slots: usize,
}

impl Default for FixedTotal {
    fn default() -> Self {
        // Five friends splitting a bill of 100.
        FixedTotal { total: 100, slots: 5 }
    }
}

impl FixedTotal {
    pub fn new(total: i64, slots: usize) -> Result<Self, ChiSquareError> {
        if slots == 0 {
            return Err(ChiSquareError::InvalidParameter(
                "slots".to_string(),
                "at least one slot".to_string(),
                slots.to_string(),
            ));
        }
        Ok(FixedTotal { total, slots })
    }

    pub fn degrees_of_freedom(&self) -> usize {
        self.slots.saturating_sub(1)
    }

    /// Number of values that can still be chosen, given the free entries made
    /// so far. `entered` holds the free slots, `None` for blanks.
    pub fn free_choices_remaining(&self, entered: &[Option<i64>]) -> usize {
        let filled = entered.iter().take(self.degrees_of_freedom()).flatten().count();
        self.degrees_of_freedom().saturating_sub(filled)
    }

    /// The value forced on the last slot, once every free slot is filled.
    pub fn final_value(&self, entered: &[Option<i64>]) -> Option<i64> {
        let free = self.degrees_of_freedom();
        if entered.len() < free {
            return None;
        }
        let paid = entered[..free].iter().copied().sum::<Option<i64>>()?;
        Some(self.total - paid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contingency_df() {
        assert_eq!(contingency_df(2, 2), 1);
        assert_eq!(contingency_df(3, 4), 6);
        assert_eq!(contingency_df(0, 4), 0);
        assert_eq!(contingency_df(1, 5), 0);
    }

    #[test]
    fn test_goodness_of_fit_df() {
        assert_eq!(goodness_of_fit_df(2), 1);
        assert_eq!(goodness_of_fit_df(6), 5);
        assert_eq!(goodness_of_fit_df(0), 0);
    }

    #[test]
    fn test_fixed_total() {
        let bill = FixedTotal::default();
        assert_eq!(bill.degrees_of_freedom(), 4);

        let blank = [None, None, None, None];
        assert_eq!(bill.free_choices_remaining(&blank), 4);
        assert_eq!(bill.final_value(&blank), None);

        let partial = [Some(20), None, Some(15), None];
        assert_eq!(bill.free_choices_remaining(&partial), 2);
        assert_eq!(bill.final_value(&partial), None);

        let full = [Some(20), Some(30), Some(15), Some(10)];
        assert_eq!(bill.free_choices_remaining(&full), 0);
        assert_eq!(bill.final_value(&full), Some(25));

        // Overpaying leaves the last friend with a negative share.
        let over = [Some(50), Some(50), Some(10), Some(0)];
        assert_eq!(bill.final_value(&over), Some(-10));
    }

    #[test]
    fn test_fixed_total_short_input() {
        let bill = FixedTotal::new(200, 2).unwrap();
        assert_eq!(bill.final_value(&[]), None);
        assert_eq!(bill.final_value(&[Some(110)]), Some(90));
        assert!(FixedTotal::new(10, 0).is_err());
        let single = FixedTotal::new(10, 1).unwrap();
        assert_eq!(single.final_value(&[]), Some(10));
        assert_eq!(single.free_choices_remaining(&[]), 0);
    }
}
