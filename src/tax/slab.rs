//! Progressive slab tax with rebate cliff and cess, plus regime comparison

use serde::{Deserialize, Serialize};

use super::regime::{RegimeConfig, DEFAULT_REGIME};
use crate::money::{clamp_non_negative, round_rupees};

/// Tax liability under one regime, in whole Rupees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComputation {
    pub regime: String,
    pub taxable_income: f64,

    /// Sum of band taxes before the rebate
    pub slab_tax: f64,

    /// Tax after the rebate: either `slab_tax` or zero
    pub gross_tax: f64,

    pub rebate_applied: bool,
    pub cess: f64,
    pub final_tax_with_cess: f64,
}

/// Tax on an already-reduced taxable income.
///
/// Income at or below the rebate threshold pays nothing at all; one Rupee above it
/// pays the full slab tax. Negative income is treated as zero.
pub fn compute_progressive_tax(taxable_income: f64, regime: &RegimeConfig) -> TaxComputation {
    let income = clamp_non_negative(taxable_income);

    let mut slab_tax = 0.0;
    for band in &regime.bands {
        let tax = band.tax_on(income);
        if tax > 0.0 {
            log::trace!(
                "{}: {} taxed at {}% in band from {}",
                regime.name,
                band.portion_of(income),
                band.rate_pct,
                band.lower_bound
            );
        }
        slab_tax += tax;
    }

    let rebate_applied = income <= regime.rebate_threshold;
    let gross_tax = if rebate_applied { 0.0 } else { slab_tax };
    let final_tax = gross_tax * (1.0 + regime.cess_pct / 100.0);

    let gross_tax = round_rupees(gross_tax);
    let final_tax_with_cess = round_rupees(final_tax);

    log::debug!(
        "{} regime ({}): taxable {} -> slab {} gross {} final {}",
        regime.name, regime.fiscal_year, income, slab_tax, gross_tax, final_tax_with_cess
    );

    TaxComputation {
        regime: regime.name.clone(),
        taxable_income: round_rupees(income),
        slab_tax: round_rupees(slab_tax),
        gross_tax,
        rebate_applied,
        cess: final_tax_with_cess - gross_tax,
        final_tax_with_cess,
    }
}

/// Tax from gross income: standard deduction always, itemised deductions only
/// where the regime permits them.
pub fn compute_regime_tax(gross_income: f64, itemized_deductions: f64, regime: &RegimeConfig) -> TaxComputation {
    let deductions = if regime.allows_itemized_deductions {
        clamp_non_negative(itemized_deductions)
    } else {
        0.0
    };
    let taxable_income = clamp_non_negative(gross_income - regime.standard_deduction - deductions);
    compute_progressive_tax(taxable_income, regime)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeRecommendation {
    pub recommended: String,
    /// Absolute difference between the two final liabilities
    pub savings: f64,
}

/// Pick the regime with strictly lower final tax.
/// On a tie the default regime wins, or `first` when neither is the default.
pub fn recommend_regime(first: &TaxComputation, second: &TaxComputation) -> RegimeRecommendation {
    let savings = (first.final_tax_with_cess - second.final_tax_with_cess).abs();

    let recommended = if first.final_tax_with_cess < second.final_tax_with_cess {
        first
    } else if second.final_tax_with_cess < first.final_tax_with_cess {
        second
    } else if second.regime == DEFAULT_REGIME && first.regime != DEFAULT_REGIME {
        second
    } else {
        first
    };

    RegimeRecommendation {
        recommended: recommended.regime.clone(),
        savings,
    }
}

/// Both regimes evaluated on the same income, with the recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub first: TaxComputation,
    pub second: TaxComputation,
    pub recommendation: RegimeRecommendation,
}

pub fn compare_regimes(
    gross_income: f64,
    itemized_deductions: f64,
    first: &RegimeConfig,
    second: &RegimeConfig,
) -> RegimeComparison {
    let first = compute_regime_tax(gross_income, itemized_deductions, first);
    let second = compute_regime_tax(gross_income, itemized_deductions, second);
    let recommendation = recommend_regime(&first, &second);

    RegimeComparison {
        first,
        second,
        recommendation,
    }
}
