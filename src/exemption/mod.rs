//! Minimum-of-candidates exemption calculator (HRA, gratuity cap)
//!
//! An exemption is always the smallest of a fixed set of independently computed
//! candidate amounts; the remainder of the amount received is taxable.

mod hra;
mod gratuity;

pub use hra::{compute_hra_exemption, HraCondition, HraInput, HraResult};
pub use gratuity::{
    compute_gratuity, GratuityCondition, GratuityInput, GratuityResult, GratuityRules, ServicePeriod,
    GRATUITY_CEILING,
};

use serde::{Deserialize, Serialize};

use crate::money::clamp_non_negative;

/// Exempt/taxable split of an amount received
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExemptionResult {
    pub exempt_amount: f64,
    pub taxable_amount: f64,

    /// Position of the binding candidate; `None` only when no candidates were given
    pub chosen_index: Option<usize>,
}

/// Exempt amount = min(candidates), taxable = max(0, received - exempt).
///
/// Ties report the lowest index. Negative candidates count as zero.
pub fn compute_exemption(received: f64, candidates: &[f64]) -> ExemptionResult {
    let mut chosen: Option<(usize, f64)> = None;

    for (idx, &candidate) in candidates.iter().enumerate() {
        let amount = clamp_non_negative(candidate);
        match chosen {
            Some((_, best)) if amount >= best => {}
            _ => chosen = Some((idx, amount)),
        }
    }

    let exempt_amount = chosen.map(|(_, amount)| amount).unwrap_or(0.0);
    let taxable_amount = clamp_non_negative(received - exempt_amount);

    log::debug!(
        "exemption: received {} candidates {:?} -> exempt {} taxable {}",
        received, candidates, exempt_amount, taxable_amount
    );

    ExemptionResult {
        exempt_amount,
        taxable_amount,
        chosen_index: chosen.map(|(idx, _)| idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_candidate_is_exempt() {
        let result = compute_exemption(240_000.0, &[240_000.0, 120_000.0, 300_000.0]);
        assert_eq!(result.exempt_amount, 120_000.0);
        assert_eq!(result.taxable_amount, 120_000.0);
        assert_eq!(result.chosen_index, Some(1));
    }

    #[test]
    fn test_tie_reports_lowest_index() {
        let result = compute_exemption(90_000.0, &[90_000.0, 90_000.0, 150_000.0]);
        assert_eq!(result.chosen_index, Some(0));

        let result = compute_exemption(90_000.0, &[150_000.0, 60_000.0, 60_000.0]);
        assert_eq!(result.chosen_index, Some(1));
    }

    #[test]
    fn test_exempt_never_exceeds_any_candidate() {
        let sets: [&[f64]; 4] = [
            &[10.5, 3.25, 7.0],
            &[0.0, 5.0],
            &[1e9, 1e9 - 1.0, 1e9 + 1.0],
            &[42.0],
        ];
        for candidates in sets {
            let result = compute_exemption(100.0, candidates);
            let min = candidates.iter().cloned().fold(f64::INFINITY, f64::min);
            assert_eq!(result.exempt_amount, min);
        }
    }

    #[test]
    fn test_received_equals_exempt_plus_taxable() {
        // Received amount is itself a candidate, so it is >= the minimum
        let received = 185_000.0;
        let result = compute_exemption(received, &[received, 140_000.0, 210_000.0]);
        assert_eq!(result.exempt_amount + result.taxable_amount, received);
    }

    #[test]
    fn test_negative_candidate_clamps_to_zero() {
        let result = compute_exemption(50_000.0, &[50_000.0, -12_000.0, 80_000.0]);
        assert_eq!(result.exempt_amount, 0.0);
        assert_eq!(result.taxable_amount, 50_000.0);
        assert_eq!(result.chosen_index, Some(1));
    }

    #[test]
    fn test_no_candidates() {
        let result = compute_exemption(10_000.0, &[]);
        assert_eq!(result.exempt_amount, 0.0);
        assert_eq!(result.taxable_amount, 10_000.0);
        assert_eq!(result.chosen_index, None);
    }
}
