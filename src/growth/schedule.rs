//! Output structures for growth projections

use serde::{Deserialize, Serialize};

/// One elapsed year of a projection, all amounts rounded to whole Rupees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyScheduleRow {
    /// 1-indexed year
    pub year: u32,
    pub contribution_amount: f64,
    pub interest_amount: f64,
    pub closing_balance: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub final_value: f64,
    pub total_principal_contributed: f64,
    pub total_interest_earned: f64,

    /// Chronological, one row per elapsed year
    pub schedule: Vec<YearlyScheduleRow>,
}

impl GrowthResult {
    /// Degenerate result for a zero tenure: principal comes back untouched
    pub fn flat(principal: f64) -> Self {
        Self {
            final_value: principal,
            total_principal_contributed: principal,
            total_interest_earned: 0.0,
            schedule: Vec::new(),
        }
    }

    /// Append the next year
    pub fn add_row(&mut self, row: YearlyScheduleRow) {
        debug_assert_eq!(row.year as usize, self.schedule.len() + 1);
        self.schedule.push(row);
    }

    pub fn row(&self, year: u32) -> Option<&YearlyScheduleRow> {
        self.schedule.get((year as usize).checked_sub(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_result() {
        let result = GrowthResult::flat(25_000.0);
        assert_eq!(result.final_value, 25_000.0);
        assert_eq!(result.total_interest_earned, 0.0);
        assert!(result.schedule.is_empty());
    }

    #[test]
    fn test_row_lookup() {
        let mut result = GrowthResult::flat(0.0);
        result.add_row(YearlyScheduleRow {
            year: 1,
            contribution_amount: 1_200.0,
            interest_amount: 50.0,
            closing_balance: 1_250.0,
        });

        assert_eq!(result.row(1).map(|r| r.closing_balance), Some(1_250.0));
        assert!(result.row(0).is_none());
        assert!(result.row(2).is_none());
    }
}
