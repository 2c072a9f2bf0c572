//! Scenario runner for rate and tenure sensitivity tables
//!
//! Holds one base growth input and evaluates variants of it in parallel.
//! Every projection is pure, so parallel results match sequential ones exactly.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::growth::{project_compound_growth, GrowthInput, GrowthResult};

/// One evaluated variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub annual_rate_pct: f64,
    pub tenure_years: u32,
    pub result: GrowthResult,
}

/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(GrowthInput::lumpsum(100_000.0, 8.0, 10, Compounding::Annually));
/// for outcome in runner.run_rates(&[6.0, 7.0, 8.0]) {
///     println!("{}% -> {}", outcome.annual_rate_pct, outcome.result.final_value);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: GrowthInput,
}

impl ScenarioRunner {
    pub fn new(base: GrowthInput) -> Self {
        Self { base }
    }

    /// Run the base input unchanged
    pub fn run(&self) -> GrowthResult {
        project_compound_growth(&self.base)
    }

    /// Base input at each rate, in the order given
    pub fn run_rates(&self, rates_pct: &[f64]) -> Vec<ScenarioOutcome> {
        self.run_inputs(rates_pct.iter().map(|&rate| self.base.with_rate(rate)).collect())
    }

    /// Base input at each tenure, in the order given
    pub fn run_tenures(&self, tenures: &[u32]) -> Vec<ScenarioOutcome> {
        self.run_inputs(tenures.iter().map(|&years| self.base.with_tenure(years)).collect())
    }

    fn run_inputs(&self, inputs: Vec<GrowthInput>) -> Vec<ScenarioOutcome> {
        log::debug!("running {} growth scenarios", inputs.len());
        inputs
            .par_iter()
            .map(|input| ScenarioOutcome {
                annual_rate_pct: input.annual_rate_pct,
                tenure_years: input.tenure_years,
                result: project_compound_growth(input),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{Compounding, EpfInput};

    #[test]
    fn test_higher_rate_grows_more() {
        let runner = ScenarioRunner::new(GrowthInput::lumpsum(100_000.0, 8.0, 10, Compounding::Annually));
        let outcomes = runner.run_rates(&[6.0, 7.0, 8.0]);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].annual_rate_pct, 6.0);
        assert!(outcomes[2].result.final_value > outcomes[0].result.final_value);
        assert_eq!(outcomes[2].result, runner.run());
    }

    #[test]
    fn test_tenures_keep_order() {
        let runner = ScenarioRunner::new(GrowthInput::monthly(0.0, 5_000.0, 8.25, 1));
        let outcomes = runner.run_tenures(&[10, 1, 5]);

        let tenures: Vec<u32> = outcomes.iter().map(|o| o.tenure_years).collect();
        assert_eq!(tenures, vec![10, 1, 5]);
        assert_eq!(outcomes[0].result.schedule.len(), 10);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = EpfInput {
            monthly_basic_da: 42_000.0,
            opening_balance: 150_000.0,
            annual_salary_increase_pct: 6.0,
            years: 30,
            ..EpfInput::default()
        }
        .to_growth_input();

        let rates: Vec<f64> = (0..64).map(|i| 5.0 + i as f64 * 0.05).collect();
        let parallel = ScenarioRunner::new(base).run_rates(&rates);

        for (outcome, &rate) in parallel.iter().zip(&rates) {
            let sequential = project_compound_growth(&base.with_rate(rate));
            assert_eq!(outcome.result, sequential);
        }
    }
}
