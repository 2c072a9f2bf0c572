//! Compound growth projector for lumpsum, NSC and EPF style products

use super::input::{Compounding, ContributionMode, GrowthInput};
use super::schedule::{GrowthResult, YearlyScheduleRow};
use crate::money::{clamp_non_negative, round_rupees, warn_if_out_of_range};

/// Project a growth input to its final value with a year-by-year schedule.
///
/// Total over all finite inputs: zero amounts give a flat schedule, a zero tenure
/// returns the principal with no interest, and out-of-range rates are computed as given.
pub fn project_compound_growth(input: &GrowthInput) -> GrowthResult {
    warn_if_out_of_range("growth", input.annual_rate_pct);

    let result = match input.mode {
        ContributionMode::SinglePrincipal { compounding } => project_single(input, compounding),
        ContributionMode::MonthlyContribution { monthly_amount, annual_step_up_pct } => {
            project_monthly(input, monthly_amount, annual_step_up_pct)
        }
    };

    log::debug!(
        "growth projection: {} years at {}% -> final {} (contributed {}, interest {})",
        input.tenure_years,
        input.annual_rate_pct,
        result.final_value,
        result.total_principal_contributed,
        result.total_interest_earned,
    );

    result
}

/// FV = P * (1 + r/n)^(n*t)
///
/// Each row's closing balance is the rounded closed-form value at that year,
/// so the final value is never affected by row rounding.
fn project_single(input: &GrowthInput, compounding: Compounding) -> GrowthResult {
    let principal = round_rupees(input.principal);
    if input.tenure_years == 0 {
        return GrowthResult::flat(principal);
    }

    let n = compounding.periods_per_year();
    let periodic_factor = 1.0 + input.annual_rate_pct / 100.0 / n as f64;
    let value_at = |year: u32| input.principal * growth_factor(periodic_factor, n, year);

    let mut result = GrowthResult::flat(principal);
    let mut prior_closing = 0.0;

    for year in 1..=input.tenure_years {
        let contribution = if year == 1 { principal } else { 0.0 };
        let closing = round_rupees(value_at(year));
        let interest = closing - prior_closing - contribution;

        log::trace!("year {}: closing {} interest {}", year, closing, interest);
        result.add_row(YearlyScheduleRow {
            year,
            contribution_amount: contribution,
            interest_amount: interest,
            closing_balance: closing,
        });
        prior_closing = closing;
    }

    result.final_value = round_rupees(value_at(input.tenure_years));
    result.total_interest_earned = clamp_non_negative(result.final_value - principal);
    result
}

/// `periodic_factor^(n*years)`, with the period count taken in floating point
/// so long tenures cannot overflow an integer exponent
fn growth_factor(periodic_factor: f64, n: u32, years: u32) -> f64 {
    periodic_factor.powf(f64::from(n) * f64::from(years))
}

/// Monthly contributions with monthly accrual and annual crediting.
///
/// Within a year interest accrues on the running balance (opening balance plus this
/// year's contributions so far) but is not added to it; the accrued total is credited
/// at year end. Rounded closing balances carry into the next year.
fn project_monthly(input: &GrowthInput, monthly_amount: f64, annual_step_up_pct: f64) -> GrowthResult {
    let opening = round_rupees(input.principal);
    let mut result = GrowthResult::flat(opening);
    if input.tenure_years == 0 {
        return result;
    }

    let monthly_rate = input.annual_rate_pct / 100.0 / 12.0;
    let step_up = 1.0 + annual_step_up_pct / 100.0;

    let mut balance = opening;
    let mut total_contributed = opening;
    let mut month_amount = monthly_amount;

    for year in 1..=input.tenure_years {
        if year > 1 {
            month_amount *= step_up;
        }

        let mut running = balance;
        let mut contributed = 0.0;
        let mut accrued = 0.0;
        for _month in 1..=12 {
            running += month_amount;
            contributed += month_amount;
            accrued += running * monthly_rate;
        }

        let contribution = round_rupees(contributed);
        let interest = round_rupees(accrued);
        let closing = balance + contribution + interest;

        log::trace!(
            "year {}: contributed {} interest {} closing {}",
            year, contribution, interest, closing
        );
        result.add_row(YearlyScheduleRow {
            year,
            contribution_amount: contribution,
            interest_amount: interest,
            closing_balance: closing,
        });

        balance = closing;
        total_contributed += contribution;
    }

    result.final_value = balance;
    result.total_principal_contributed = total_contributed;
    result.total_interest_earned = clamp_non_negative(balance - total_contributed);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::input::EpfInput;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nsc_five_years_annual() {
        // 1,00,000 at 7.7% compounded annually for 5 years
        let result = project_compound_growth(&GrowthInput::nsc(100_000.0));

        let expected = (100_000.0_f64 * 1.077_f64.powi(5)).round();
        assert_eq!(result.final_value, expected);
        assert_abs_diff_eq!(result.final_value, 144_903.0, epsilon = 1.0);
        assert_abs_diff_eq!(result.total_interest_earned, 44_903.0, epsilon = 1.0);
        assert_eq!(result.total_principal_contributed, 100_000.0);
        assert_eq!(result.schedule.len(), 5);
    }

    #[test]
    fn test_single_principal_matches_closed_form() {
        let frequencies = [
            Compounding::Annually,
            Compounding::HalfYearly,
            Compounding::Quarterly,
            Compounding::Monthly,
        ];

        for &compounding in &frequencies {
            for &(p, r, t) in &[(10_000.0, 6.5, 3), (250_000.0, 12.0, 10), (1.0, 0.0, 7), (75_500.0, 9.25, 1)] {
                let n = compounding.periods_per_year() as f64;
                let result = project_compound_growth(&GrowthInput::lumpsum(p, r, t, compounding));
                let expected = (p * (1.0_f64 + r / 100.0 / n).powf(n * t as f64)).round();

                assert_abs_diff_eq!(result.final_value, expected, epsilon = 1.0);
                assert!(result.final_value >= p.round(), "FV below principal for {:?}", compounding);
            }
        }
    }

    #[test]
    fn test_single_principal_rows_are_continuous() {
        let result = project_compound_growth(&GrowthInput::lumpsum(
            123_456.0,
            8.1,
            12,
            Compounding::Quarterly,
        ));

        let mut prior = 0.0;
        for row in &result.schedule {
            assert_eq!(row.closing_balance, prior + row.contribution_amount + row.interest_amount);
            prior = row.closing_balance;
        }
        assert_eq!(prior, result.final_value);
        assert_eq!(result.schedule[0].contribution_amount, 123_456.0);
        assert!(result.schedule[1..].iter().all(|r| r.contribution_amount == 0.0));
    }

    #[test]
    fn test_monthly_accrual_credited_annually() {
        // 1,000 a month at 12%: accrued = 1% * (1000 + 2000 + ... + 12000) = 780
        let result = project_compound_growth(&GrowthInput::monthly(0.0, 1_000.0, 12.0, 2));

        let year_1 = result.row(1).unwrap();
        assert_eq!(year_1.contribution_amount, 12_000.0);
        assert_eq!(year_1.interest_amount, 780.0);
        assert_eq!(year_1.closing_balance, 12_780.0);

        // Year 2 accrues on the 12,780 carried balance as well: 12 * 127.8 + 780 = 2,313.6
        let year_2 = result.row(2).unwrap();
        assert_eq!(year_2.interest_amount, 2_314.0);
        assert_eq!(year_2.closing_balance, 27_094.0);

        assert_eq!(result.final_value, 27_094.0);
        assert_eq!(result.total_principal_contributed, 24_000.0);
        assert_eq!(result.total_interest_earned, 3_094.0);
    }

    #[test]
    fn test_opening_balance_not_compounded_within_year() {
        // Monthly compounding would give 11,268; annual crediting gives 11,200
        let result = project_compound_growth(&GrowthInput::monthly(10_000.0, 0.0, 12.0, 1));
        assert_eq!(result.final_value, 11_200.0);
        assert_eq!(result.total_principal_contributed, 10_000.0);
        assert_eq!(result.total_interest_earned, 1_200.0);
    }

    #[test]
    fn test_monthly_rows_are_continuous() {
        let epf = EpfInput {
            monthly_basic_da: 37_250.0,
            opening_balance: 412_345.0,
            annual_salary_increase_pct: 7.0,
            years: 25,
            ..EpfInput::default()
        };
        let result = project_compound_growth(&epf.to_growth_input());

        assert_eq!(result.schedule.len(), 25);
        let mut prior = 412_345.0;
        for (idx, row) in result.schedule.iter().enumerate() {
            assert_eq!(row.year as usize, idx + 1);
            assert_eq!(row.closing_balance, prior + row.contribution_amount + row.interest_amount);
            prior = row.closing_balance;
        }
        assert_eq!(prior, result.final_value);
        assert_eq!(
            result.final_value,
            result.total_principal_contributed + result.total_interest_earned
        );
    }

    #[test]
    fn test_step_up_raises_contributions() {
        let result = project_compound_growth(&GrowthInput::monthly(0.0, 1_000.0, 12.0, 2).with_step_up(10.0));

        assert_eq!(result.row(1).unwrap().contribution_amount, 12_000.0);
        assert_eq!(result.row(2).unwrap().contribution_amount, 13_200.0);
        // 12 * 127.8 + 1.1 * 780 = 2,391.6
        assert_eq!(result.row(2).unwrap().interest_amount, 2_392.0);
        assert_eq!(result.final_value, 28_372.0);
    }

    #[test]
    fn test_zero_amounts_give_flat_schedule() {
        let result = project_compound_growth(&GrowthInput::monthly(0.0, 0.0, 8.25, 5));
        assert_eq!(result.schedule.len(), 5);
        assert!(result
            .schedule
            .iter()
            .all(|r| r.contribution_amount == 0.0 && r.interest_amount == 0.0 && r.closing_balance == 0.0));
        assert_eq!(result.final_value, 0.0);

        let lumpsum = project_compound_growth(&GrowthInput::lumpsum(0.0, 10.0, 3, Compounding::Monthly));
        assert_eq!(lumpsum.final_value, 0.0);
        assert_eq!(lumpsum.total_interest_earned, 0.0);
    }

    #[test]
    fn test_zero_tenure_returns_principal() {
        let single = project_compound_growth(&GrowthInput::lumpsum(50_000.0, 9.0, 0, Compounding::Annually));
        assert_eq!(single, GrowthResult::flat(50_000.0));

        let monthly = project_compound_growth(&GrowthInput::monthly(50_000.0, 2_000.0, 9.0, 0));
        assert_eq!(monthly, GrowthResult::flat(50_000.0));
    }

    #[test]
    fn test_negative_rate_never_reports_negative_interest() {
        let result = project_compound_growth(&GrowthInput::lumpsum(10_000.0, -5.0, 3, Compounding::Annually));
        assert!(result.final_value < 10_000.0);
        assert_eq!(result.total_interest_earned, 0.0);
    }

    #[test]
    fn test_projection_is_reproducible() {
        let input = GrowthInput::monthly(1_234.5, 678.9, 7.35, 30).with_step_up(4.5);
        let first = project_compound_growth(&input);
        let second = project_compound_growth(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_growth_factor_with_huge_period_count() {
        // 12 * 400,000,000 periods exceeds both u32 and i32
        assert_eq!(growth_factor(1.0, 12, 400_000_000), 1.0);
        assert!(growth_factor(1.0 + 0.05 / 12.0, 12, 400_000_000).is_infinite());
        assert!((growth_factor(1.5, 2, 3) - 1.5_f64.powi(6)).abs() < 1e-12);
    }
}
