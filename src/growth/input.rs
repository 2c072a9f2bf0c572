//! Inputs for compound growth projections

use serde::{Deserialize, Serialize};

/// NSC interest rate (annual, percent)
pub const NSC_RATE_PCT: f64 = 7.7;

/// NSC lock-in period in years
pub const NSC_TENURE_YEARS: u32 = 5;

/// EPF declared interest rate (annual, percent)
pub const EPF_RATE_PCT: f64 = 8.25;

/// Employee share of basic + DA credited to EPF (percent)
pub const EPF_EMPLOYEE_SHARE_PCT: f64 = 12.0;

/// Employer share of basic + DA credited to EPF after the pension split (percent)
pub const EPF_EMPLOYER_SHARE_PCT: f64 = 3.67;

/// How often interest is compounded in single-principal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    Annually,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl Compounding {
    /// Compounding periods per year (n)
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annually => 1,
            Compounding::HalfYearly => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }
}

impl Default for Compounding {
    fn default() -> Self {
        Compounding::Annually
    }
}

/// Operating mode of the growth calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ContributionMode {
    /// One upfront investment, compounded n times a year
    SinglePrincipal { compounding: Compounding },

    /// Fixed monthly contribution at the start of each month.
    /// Interest accrues monthly on the running balance and is credited once a year.
    MonthlyContribution {
        /// Contribution for every month of year 1
        monthly_amount: f64,
        /// Growth applied to the monthly amount at the start of each later year (percent)
        annual_step_up_pct: f64,
    },
}

/// Everything the growth calculator needs for one projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Lump sum in single-principal mode, opening balance in monthly mode
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Tenure in whole years
    pub tenure_years: u32,

    pub mode: ContributionMode,
}

impl GrowthInput {
    /// Single upfront investment
    pub fn lumpsum(principal: f64, annual_rate_pct: f64, tenure_years: u32, compounding: Compounding) -> Self {
        Self {
            principal,
            annual_rate_pct,
            tenure_years,
            mode: ContributionMode::SinglePrincipal { compounding },
        }
    }

    /// National Savings Certificate at the current statutory rate and lock-in
    pub fn nsc(principal: f64) -> Self {
        Self::lumpsum(principal, NSC_RATE_PCT, NSC_TENURE_YEARS, Compounding::Annually)
    }

    /// Level monthly contribution on top of an opening balance
    pub fn monthly(opening_balance: f64, monthly_amount: f64, annual_rate_pct: f64, tenure_years: u32) -> Self {
        Self {
            principal: opening_balance,
            annual_rate_pct,
            tenure_years,
            mode: ContributionMode::MonthlyContribution {
                monthly_amount,
                annual_step_up_pct: 0.0,
            },
        }
    }

    /// Set the annual step-up for monthly mode (ignored in single-principal mode)
    pub fn with_step_up(mut self, step_up_pct: f64) -> Self {
        if let ContributionMode::MonthlyContribution { ref mut annual_step_up_pct, .. } = self.mode {
            *annual_step_up_pct = step_up_pct;
        }
        self
    }

    pub fn with_rate(mut self, annual_rate_pct: f64) -> Self {
        self.annual_rate_pct = annual_rate_pct;
        self
    }

    pub fn with_tenure(mut self, tenure_years: u32) -> Self {
        self.tenure_years = tenure_years;
        self
    }
}

/// Employee Provident Fund inputs as a salaried user enters them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpfInput {
    /// Monthly basic salary plus dearness allowance
    pub monthly_basic_da: f64,

    pub employee_share_pct: f64,

    pub employer_share_pct: f64,

    /// Current EPF balance
    pub opening_balance: f64,

    /// Expected yearly salary increase (percent)
    pub annual_salary_increase_pct: f64,

    /// Years until retirement
    pub years: u32,

    pub annual_rate_pct: f64,
}

impl Default for EpfInput {
    fn default() -> Self {
        Self {
            monthly_basic_da: 0.0,
            employee_share_pct: EPF_EMPLOYEE_SHARE_PCT,
            employer_share_pct: EPF_EMPLOYER_SHARE_PCT,
            opening_balance: 0.0,
            annual_salary_increase_pct: 0.0,
            years: 0,
            annual_rate_pct: EPF_RATE_PCT,
        }
    }
}

impl EpfInput {
    /// Combined employee + employer credit for one month of year 1
    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_basic_da * (self.employee_share_pct + self.employer_share_pct) / 100.0
    }

    /// Express as a monthly-contribution growth projection.
    /// Salary increases step up the contribution since both shares are a percentage of salary.
    pub fn to_growth_input(&self) -> GrowthInput {
        GrowthInput::monthly(
            self.opening_balance,
            self.monthly_contribution(),
            self.annual_rate_pct,
            self.years,
        )
        .with_step_up(self.annual_salary_increase_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Compounding::Annually.periods_per_year(), 1);
        assert_eq!(Compounding::HalfYearly.periods_per_year(), 2);
        assert_eq!(Compounding::Quarterly.periods_per_year(), 4);
        assert_eq!(Compounding::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_nsc_preset() {
        let input = GrowthInput::nsc(50_000.0);
        assert_eq!(input.annual_rate_pct, 7.7);
        assert_eq!(input.tenure_years, 5);
        assert_eq!(
            input.mode,
            ContributionMode::SinglePrincipal { compounding: Compounding::Annually }
        );
    }

    #[test]
    fn test_step_up_only_applies_to_monthly_mode() {
        let lumpsum = GrowthInput::lumpsum(1000.0, 8.0, 3, Compounding::Quarterly).with_step_up(10.0);
        assert_eq!(
            lumpsum.mode,
            ContributionMode::SinglePrincipal { compounding: Compounding::Quarterly }
        );

        let monthly = GrowthInput::monthly(0.0, 500.0, 8.0, 3).with_step_up(10.0);
        match monthly.mode {
            ContributionMode::MonthlyContribution { annual_step_up_pct, .. } => {
                assert_eq!(annual_step_up_pct, 10.0)
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn test_epf_monthly_contribution() {
        let epf = EpfInput {
            monthly_basic_da: 50_000.0,
            ..EpfInput::default()
        };
        // (12% + 3.67%) of 50,000
        assert!((epf.monthly_contribution() - 7_835.0).abs() < 1e-9);

        let growth = epf.to_growth_input();
        assert_eq!(growth.annual_rate_pct, EPF_RATE_PCT);
        match growth.mode {
            ContributionMode::MonthlyContribution { monthly_amount, annual_step_up_pct } => {
                assert!((monthly_amount - 7_835.0).abs() < 1e-9);
                assert_eq!(annual_step_up_pct, 0.0);
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }
}
