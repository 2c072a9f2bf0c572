//! Rupee Calc CLI
//!
//! Command-line front end for the calculators

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use rupee_calc::exemption::{
    compute_gratuity, compute_hra_exemption, GratuityInput, GratuityRules, HraInput, ServicePeriod,
};
use rupee_calc::growth::{
    project_compound_growth, Compounding, EpfInput, GrowthInput, GrowthResult, EPF_EMPLOYEE_SHARE_PCT,
    EPF_EMPLOYER_SHARE_PCT, EPF_RATE_PCT,
};
use rupee_calc::gst::{split_equally, split_tax, DualSplit, SplitMode, SplitResult};
use rupee_calc::scenario::ScenarioRunner;
use rupee_calc::tax::{compare_regimes, find_regime, load_regimes, RegimeConfig};

#[derive(Parser, Debug)]
#[command(name = "rupee-calc", version, about = "Indian personal-finance calculators")]
struct Cli {
    /// Print the result record as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time investment compounded n times a year
    Lumpsum {
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long, value_enum, default_value_t = Frequency::Annually)]
        compounding: Frequency,
        /// Comma-separated rates for a sensitivity table
        #[arg(long, value_delimiter = ',')]
        compare_rates: Vec<f64>,
        #[command(flatten)]
        output: ScheduleOutput,
    },
    /// National Savings Certificate (7.7%, 5 years)
    Nsc {
        #[arg(long)]
        principal: f64,
        #[command(flatten)]
        output: ScheduleOutput,
    },
    /// Employee Provident Fund corpus
    Epf {
        /// Monthly basic + DA
        #[arg(long)]
        basic: f64,
        #[arg(long, default_value_t = 0.0)]
        opening_balance: f64,
        /// Yearly salary increase in percent
        #[arg(long, default_value_t = 0.0)]
        salary_increase: f64,
        #[arg(long)]
        years: u32,
        #[arg(long, default_value_t = EPF_RATE_PCT)]
        rate: f64,
        #[arg(long, default_value_t = EPF_EMPLOYEE_SHARE_PCT)]
        employee_share: f64,
        #[arg(long, default_value_t = EPF_EMPLOYER_SHARE_PCT)]
        employer_share: f64,
        #[command(flatten)]
        output: ScheduleOutput,
    },
    /// House Rent Allowance exemption
    Hra {
        #[arg(long)]
        received: f64,
        #[arg(long)]
        rent: f64,
        /// Basic salary + dearness allowance
        #[arg(long)]
        basic_da: f64,
        /// Residence is in a metro city
        #[arg(long)]
        metro: bool,
        /// Amounts are monthly rather than annual
        #[arg(long)]
        monthly: bool,
    },
    /// Gratuity amount and taxable part
    Gratuity {
        /// Last drawn monthly basic + DA
        #[arg(long)]
        salary: f64,
        #[arg(long, default_value_t = 0, conflicts_with = "joined")]
        years: u32,
        #[arg(long, default_value_t = 0, conflicts_with = "joined")]
        months: u32,
        /// Joining date (YYYY-MM-DD)
        #[arg(long, requires = "left")]
        joined: Option<NaiveDate>,
        /// Leaving date (YYYY-MM-DD)
        #[arg(long, requires = "joined")]
        left: Option<NaiveDate>,
        /// Employer is not covered by the Payment of Gratuity Act
        #[arg(long)]
        not_covered: bool,
        #[arg(long)]
        ceiling: Option<f64>,
    },
    /// Old vs new regime income tax
    IncomeTax {
        /// Gross annual income
        #[arg(long)]
        income: f64,
        /// Itemised deductions (only used where the regime allows them)
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,
        /// JSON file with regime records (defaults to the built-in FY2023-24 regimes)
        #[arg(long)]
        regimes: Option<PathBuf>,
    },
    /// Add or remove GST
    Gst {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long, value_enum, default_value_t = GstMode::Add)]
        mode: GstMode,
    },
}

#[derive(Args, Debug)]
struct ScheduleOutput {
    /// Write the yearly schedule to this CSV file
    #[arg(long)]
    schedule_csv: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Frequency {
    Annually,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl From<Frequency> for Compounding {
    fn from(f: Frequency) -> Self {
        match f {
            Frequency::Annually => Compounding::Annually,
            Frequency::HalfYearly => Compounding::HalfYearly,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum GstMode {
    Add,
    Remove,
}

impl From<GstMode> for SplitMode {
    fn from(m: GstMode) -> Self {
        match m {
            GstMode::Add => SplitMode::Add,
            GstMode::Remove => SplitMode::Remove,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Lumpsum { principal, rate, years, compounding, compare_rates, output } => {
            let input = GrowthInput::lumpsum(principal, rate, years, compounding.into());
            if compare_rates.is_empty() {
                run_growth(&input, &output, cli.json)?;
            } else {
                let outcomes = ScenarioRunner::new(input).run_rates(&compare_rates);
                if cli.json {
                    print_json(&outcomes)?;
                } else {
                    println!("{:>8} {:>16} {:>16}", "Rate %", "Final value", "Interest");
                    println!("{}", "-".repeat(42));
                    for outcome in &outcomes {
                        println!(
                            "{:>8.2} {:>16.0} {:>16.0}",
                            outcome.annual_rate_pct, outcome.result.final_value, outcome.result.total_interest_earned
                        );
                    }
                }
            }
        }
        Command::Nsc { principal, output } => {
            run_growth(&GrowthInput::nsc(principal), &output, cli.json)?;
        }
        Command::Epf {
            basic,
            opening_balance,
            salary_increase,
            years,
            rate,
            employee_share,
            employer_share,
            output,
        } => {
            let epf = EpfInput {
                monthly_basic_da: basic,
                employee_share_pct: employee_share,
                employer_share_pct: employer_share,
                opening_balance,
                annual_salary_increase_pct: salary_increase,
                years,
                annual_rate_pct: rate,
            };
            if !cli.json {
                println!("Monthly contribution (year 1): {:.0}", epf.monthly_contribution());
            }
            run_growth(&epf.to_growth_input(), &output, cli.json)?;
        }
        Command::Hra { received, rent, basic_da, metro, monthly } => {
            let input = if monthly {
                HraInput::from_monthly(received, rent, basic_da, metro)
            } else {
                HraInput { hra_received: received, rent_paid: rent, basic_plus_da: basic_da, metro_city: metro }
            };
            let result = compute_hra_exemption(&input);
            if cli.json {
                print_json(&result)?;
            } else {
                println!("Actual HRA received:        {:>14.0}", result.candidates[0]);
                println!("Rent minus 10% of salary:   {:>14.0}", result.candidates[1]);
                println!("Salary share ({}):     {:>14.0}", if metro { "metro    " } else { "non-metro" }, result.candidates[2]);
                println!();
                println!("Exempt HRA:                 {:>14.0}", result.exempt_amount);
                println!("Taxable HRA:                {:>14.0}", result.taxable_amount);
                println!("Binding condition: {}", result.chosen.description());
            }
        }
        Command::Gratuity { salary, years, months, joined, left, not_covered, ceiling } => {
            let service = match (joined, left) {
                (Some(joined), Some(left)) => ServicePeriod::between(joined, left),
                _ => ServicePeriod::new(years, months),
            };
            let mut rules = GratuityRules::default();
            if let Some(ceiling) = ceiling {
                rules.ceiling = ceiling;
            }
            rules.validate()?;
            let result = compute_gratuity(
                &GratuityInput { monthly_salary: salary, service, covered_by_act: !not_covered },
                &rules,
            );
            if cli.json {
                print_json(&result)?;
            } else {
                println!("Service: {} years {} months ({} counted)", service.years, service.months, result.reckonable_years);
                println!("Gratuity:      {:>14.0}", result.gratuity_amount);
                println!("Exempt:        {:>14.0}", result.exempt_amount);
                println!("Taxable:       {:>14.0}", result.taxable_amount);
                if !result.meets_minimum_service {
                    println!("Note: less than {} years of service", rules.min_qualifying_years);
                }
            }
        }
        Command::IncomeTax { income, deductions, regimes } => {
            let (old, new) = regime_pair(regimes.as_deref())?;
            let comparison = compare_regimes(income, deductions, &new, &old);
            if cli.json {
                print_json(&comparison)?;
            } else {
                println!("{:<22} {:>14} {:>14}", "", "New regime", "Old regime");
                println!("{}", "-".repeat(52));
                let rows = [
                    ("Taxable income", comparison.first.taxable_income, comparison.second.taxable_income),
                    ("Tax before cess", comparison.first.gross_tax, comparison.second.gross_tax),
                    ("Cess", comparison.first.cess, comparison.second.cess),
                    ("Total tax", comparison.first.final_tax_with_cess, comparison.second.final_tax_with_cess),
                ];
                for (label, first, second) in rows {
                    println!("{:<22} {:>14.0} {:>14.0}", label, first, second);
                }
                println!(
                    "{:<22} {:>14} {:>14}",
                    "Marginal rate",
                    marginal_rate(&new, comparison.first.taxable_income),
                    marginal_rate(&old, comparison.second.taxable_income)
                );
                println!();
                println!(
                    "Recommended: {} regime (saves {:.0})",
                    comparison.recommendation.recommended, comparison.recommendation.savings
                );
            }
        }
        Command::Gst { amount, rate, mode } => {
            let result = split_tax(amount, rate, mode.into())
                .with_context(|| format!("cannot compute GST at {}%", rate))?;
            let halves = split_equally(result.tax_amount);
            if cli.json {
                print_json(&GstOutput { split: result, halves })?;
            } else {
                println!("Net amount:    {:>14.0}", result.base_amount);
                println!("GST @ {:>5.2}%: {:>14.0}", rate, result.tax_amount);
                println!("  CGST:        {:>14.0}", halves.central);
                println!("  SGST:        {:>14.0}", halves.state);
                println!("Gross amount:  {:>14.0}", result.gross_amount);
            }
        }
    }

    Ok(())
}

fn run_growth(input: &GrowthInput, output: &ScheduleOutput, json: bool) -> Result<()> {
    let result = project_compound_growth(input);

    if json {
        print_json(&result)?;
    } else {
        print_schedule(&result);
    }

    if let Some(path) = &output.schedule_csv {
        write_schedule_csv(path, &result)?;
        if !json {
            println!("\nSchedule written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_schedule(result: &GrowthResult) {
    println!("{:>5} {:>14} {:>14} {:>16}", "Year", "Contribution", "Interest", "Closing");
    println!("{}", "-".repeat(52));
    for row in &result.schedule {
        println!(
            "{:>5} {:>14.0} {:>14.0} {:>16.0}",
            row.year, row.contribution_amount, row.interest_amount, row.closing_balance
        );
    }

    println!("\nSummary:");
    println!("  Invested:       {:.0}", result.total_principal_contributed);
    println!("  Interest:       {:.0}", result.total_interest_earned);
    println!("  Maturity value: {:.0}", result.final_value);
}

fn write_schedule_csv(path: &Path, result: &GrowthResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    for row in &result.schedule {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// GST record with its CGST/SGST halves
#[derive(Serialize)]
struct GstOutput {
    #[serde(flatten)]
    split: SplitResult,
    halves: DualSplit,
}

fn marginal_rate(regime: &RegimeConfig, taxable_income: f64) -> String {
    regime
        .band_for(taxable_income)
        .map(|band| format!("{}%", band.rate_pct))
        .unwrap_or_else(|| "-".to_string())
}

/// (old, new) regimes from a file, or the built-in records
fn regime_pair(path: Option<&Path>) -> Result<(RegimeConfig, RegimeConfig)> {
    match path {
        Some(path) => {
            let regimes = load_regimes(path)
                .with_context(|| format!("unable to load regimes from {}", path.display()))?;
            Ok((find_regime(&regimes, "old")?.clone(), find_regime(&regimes, "new")?.clone()))
        }
        None => Ok((RegimeConfig::old_regime(), RegimeConfig::new_regime())),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
