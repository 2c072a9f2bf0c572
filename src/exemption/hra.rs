//! House Rent Allowance exemption

use serde::{Deserialize, Serialize};

use super::compute_exemption;
use crate::money::{clamp_non_negative, round_rupees};

/// Share of basic + DA exempt for metro residents (percent)
pub const METRO_SALARY_SHARE_PCT: f64 = 50.0;

/// Share of basic + DA exempt elsewhere (percent)
pub const NON_METRO_SALARY_SHARE_PCT: f64 = 40.0;

/// Rent is only exempt above this share of basic + DA (percent)
pub const RENT_SALARY_OFFSET_PCT: f64 = 10.0;

/// Annual HRA inputs. Whether the city is a metro is decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HraInput {
    pub hra_received: f64,
    pub rent_paid: f64,
    pub basic_plus_da: f64,
    pub metro_city: bool,
}

impl HraInput {
    /// Build from monthly figures (annualised x12)
    pub fn from_monthly(hra_received: f64, rent_paid: f64, basic_plus_da: f64, metro_city: bool) -> Self {
        Self {
            hra_received: hra_received * 12.0,
            rent_paid: rent_paid * 12.0,
            basic_plus_da: basic_plus_da * 12.0,
            metro_city,
        }
    }
}

/// The three statutory conditions, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HraCondition {
    /// Actual HRA received
    ActualAllowance,
    /// Rent paid minus 10% of basic + DA
    RentInExcessOfSalaryShare,
    /// 50% (metro) or 40% of basic + DA
    SalaryShare,
}

impl HraCondition {
    pub const ALL: [HraCondition; 3] = [
        HraCondition::ActualAllowance,
        HraCondition::RentInExcessOfSalaryShare,
        HraCondition::SalaryShare,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            HraCondition::ActualAllowance => "Actual HRA received",
            HraCondition::RentInExcessOfSalaryShare => "Rent paid minus 10% of basic + DA",
            HraCondition::SalaryShare => "50% (metro) / 40% (non-metro) of basic + DA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HraResult {
    /// Candidate amounts in `HraCondition::ALL` order
    pub candidates: [f64; 3],
    pub exempt_amount: f64,
    pub taxable_amount: f64,
    pub chosen: HraCondition,
}

pub fn compute_hra_exemption(input: &HraInput) -> HraResult {
    let salary_share_pct = if input.metro_city {
        METRO_SALARY_SHARE_PCT
    } else {
        NON_METRO_SALARY_SHARE_PCT
    };

    let candidates = [
        round_rupees(input.hra_received),
        round_rupees(clamp_non_negative(
            input.rent_paid - input.basic_plus_da * RENT_SALARY_OFFSET_PCT / 100.0,
        )),
        round_rupees(input.basic_plus_da * salary_share_pct / 100.0),
    ];

    let result = compute_exemption(round_rupees(input.hra_received), &candidates);
    let chosen = result
        .chosen_index
        .and_then(|idx| HraCondition::ALL.get(idx).copied())
        .unwrap_or(HraCondition::ActualAllowance);

    HraResult {
        candidates,
        exempt_amount: result.exempt_amount,
        taxable_amount: result.taxable_amount,
        chosen,
    }
}
