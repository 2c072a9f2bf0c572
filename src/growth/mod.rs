//! Compound growth calculator for single-principal and periodic-contribution products

mod input;
mod engine;
mod schedule;

pub use input::{
    Compounding, ContributionMode, EpfInput, GrowthInput,
    EPF_EMPLOYEE_SHARE_PCT, EPF_EMPLOYER_SHARE_PCT, EPF_RATE_PCT, NSC_RATE_PCT, NSC_TENURE_YEARS,
};
pub use engine::project_compound_growth;
pub use schedule::{GrowthResult, YearlyScheduleRow};
