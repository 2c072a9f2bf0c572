//! Gratuity amount and its statutory tax-free ceiling

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::compute_exemption;
use crate::error::{CalcError, Result};
use crate::money::{clamp_non_negative, round_rupees};

/// Lifetime tax-free gratuity ceiling in Rupees
pub const GRATUITY_CEILING: f64 = 2_000_000.0;

/// Length of service in completed years and months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServicePeriod {
    pub years: u32,
    /// Completed months beyond `years` (0-11)
    pub months: u32,
}

impl ServicePeriod {
    pub fn new(years: u32, months: u32) -> Self {
        Self {
            years: years + months / 12,
            months: months % 12,
        }
    }

    /// Completed service between joining and leaving; zero if leaving precedes joining
    pub fn between(joined: NaiveDate, left: NaiveDate) -> Self {
        if left <= joined {
            return Self::default();
        }

        let mut months = (left.year() - joined.year()) * 12 + left.month() as i32 - joined.month() as i32;
        if left.day() < joined.day() {
            months -= 1;
        }

        Self::new(0, months.max(0) as u32)
    }

    /// Years counted in the formula.
    /// Under the Act a part year of more than six months counts as a full year.
    pub fn reckonable_years(&self, covered_by_act: bool) -> u32 {
        if covered_by_act && self.months > 6 {
            self.years + 1
        } else {
            self.years
        }
    }
}

/// Statutory parameters of the gratuity formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityRules {
    pub ceiling: f64,
    /// Days of wages paid per year of service
    pub days_per_year: f64,
    /// Working days per month for employers covered by the Act
    pub covered_month_days: f64,
    /// Days per month for everyone else
    pub uncovered_month_days: f64,
    pub min_qualifying_years: u32,
}

impl Default for GratuityRules {
    fn default() -> Self {
        Self {
            ceiling: GRATUITY_CEILING,
            days_per_year: 15.0,
            covered_month_days: 26.0,
            uncovered_month_days: 30.0,
            min_qualifying_years: 5,
        }
    }
}

impl GratuityRules {
    /// Day counts must be positive and the ceiling a non-negative number
    pub fn validate(&self) -> Result<()> {
        for (label, days) in [
            ("days per year", self.days_per_year),
            ("covered month days", self.covered_month_days),
            ("uncovered month days", self.uncovered_month_days),
        ] {
            if !days.is_finite() || days <= 0.0 {
                return Err(CalcError::InvalidRules(format!("{} must be positive, got {}", label, days)));
            }
        }
        if !self.ceiling.is_finite() || self.ceiling < 0.0 {
            return Err(CalcError::InvalidRules(format!(
                "gratuity ceiling must be a non-negative number, got {}",
                self.ceiling
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityInput {
    /// Last drawn monthly basic + DA
    pub monthly_salary: f64,
    pub service: ServicePeriod,
    pub covered_by_act: bool,
}

/// Which side of the cap decided the exempt amount, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GratuityCondition {
    ComputedGratuity,
    StatutoryCeiling,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityResult {
    pub reckonable_years: u32,
    pub gratuity_amount: f64,
    pub exempt_amount: f64,
    pub taxable_amount: f64,
    pub chosen: GratuityCondition,
    /// The amount is reported regardless; payment normally needs the minimum service
    pub meets_minimum_service: bool,
}

/// Gratuity and its exempt/taxable split.
///
/// A zero or non-finite month divisor yields a zero amount rather than an infinite one;
/// use `GratuityRules::validate` to reject such rules up front.
pub fn compute_gratuity(input: &GratuityInput, rules: &GratuityRules) -> GratuityResult {
    let reckonable_years = input.service.reckonable_years(input.covered_by_act);
    let month_days = if input.covered_by_act {
        rules.covered_month_days
    } else {
        rules.uncovered_month_days
    };

    let raw_amount = if month_days > 0.0 {
        input.monthly_salary * rules.days_per_year / month_days * reckonable_years as f64
    } else {
        0.0
    };
    let gratuity_amount = if raw_amount.is_finite() {
        round_rupees(clamp_non_negative(raw_amount))
    } else {
        log::warn!("gratuity amount is not finite under the given rules; reporting zero");
        0.0
    };

    let cap = compute_exemption(gratuity_amount, &[gratuity_amount, rules.ceiling]);
    let chosen = match cap.chosen_index {
        Some(1) => GratuityCondition::StatutoryCeiling,
        _ => GratuityCondition::ComputedGratuity,
    };

    log::debug!(
        "gratuity: {} years on {} -> {} (exempt {}, taxable {})",
        reckonable_years, input.monthly_salary, gratuity_amount, cap.exempt_amount, cap.taxable_amount
    );

    GratuityResult {
        reckonable_years,
        gratuity_amount,
        exempt_amount: cap.exempt_amount,
        taxable_amount: cap.taxable_amount,
        chosen,
        meets_minimum_service: input.service.years >= rules.min_qualifying_years,
    }
}
