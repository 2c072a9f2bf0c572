//! Tax regime configuration records
//!
//! A regime is data: slab bands, standard deduction, rebate threshold and cess.
//! Adding a regime or revising rates for a new fiscal year means a new record,
//! not new code.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Regime that wins when two regimes produce the same tax
pub const DEFAULT_REGIME: &str = "new";

/// Health and education cess on income tax (percent)
pub const DEFAULT_CESS_PCT: f64 = 4.0;

/// One marginal-rate band covering `[lower_bound, upper_bound)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSlabBand {
    pub lower_bound: f64,

    /// `None` for the final, unbounded band
    #[serde(default)]
    pub upper_bound: Option<f64>,

    pub rate_pct: f64,
}

impl TaxSlabBand {
    pub fn bounded(lower_bound: f64, upper_bound: f64, rate_pct: f64) -> Self {
        Self {
            lower_bound,
            upper_bound: Some(upper_bound),
            rate_pct,
        }
    }

    pub fn unbounded(lower_bound: f64, rate_pct: f64) -> Self {
        Self {
            lower_bound,
            upper_bound: None,
            rate_pct,
        }
    }

    /// Part of `income` falling inside this band
    pub fn portion_of(&self, income: f64) -> f64 {
        let top = match self.upper_bound {
            Some(upper) => income.min(upper),
            None => income,
        };
        (top - self.lower_bound).max(0.0)
    }

    /// Tax due on the part of `income` inside this band
    pub fn tax_on(&self, income: f64) -> f64 {
        self.portion_of(income) * self.rate_pct / 100.0
    }
}

/// Complete configuration of one income-tax regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeConfig {
    pub name: String,

    /// Version label, e.g. "FY2023-24"
    pub fiscal_year: String,

    /// Ordered bands tiling [0, inf)
    pub bands: Vec<TaxSlabBand>,

    pub standard_deduction: f64,

    /// Taxable income at or below this pays no tax at all
    pub rebate_threshold: f64,

    #[serde(default = "default_cess_pct")]
    pub cess_pct: f64,

    /// Whether itemised deductions (80C, 80D, ...) reduce taxable income
    #[serde(default)]
    pub allows_itemized_deductions: bool,
}

fn default_cess_pct() -> f64 {
    DEFAULT_CESS_PCT
}

impl RegimeConfig {
    /// Old regime, FY2023-24
    pub fn old_regime() -> Self {
        Self {
            name: "old".to_string(),
            fiscal_year: "FY2023-24".to_string(),
            bands: vec![
                TaxSlabBand::bounded(0.0, 250_000.0, 0.0),
                TaxSlabBand::bounded(250_000.0, 500_000.0, 5.0),
                TaxSlabBand::bounded(500_000.0, 1_000_000.0, 20.0),
                TaxSlabBand::unbounded(1_000_000.0, 30.0),
            ],
            standard_deduction: 50_000.0,
            rebate_threshold: 500_000.0,
            cess_pct: DEFAULT_CESS_PCT,
            allows_itemized_deductions: true,
        }
    }

    /// New (default) regime, FY2023-24
    pub fn new_regime() -> Self {
        Self {
            name: "new".to_string(),
            fiscal_year: "FY2023-24".to_string(),
            bands: vec![
                TaxSlabBand::bounded(0.0, 300_000.0, 0.0),
                TaxSlabBand::bounded(300_000.0, 600_000.0, 5.0),
                TaxSlabBand::bounded(600_000.0, 900_000.0, 10.0),
                TaxSlabBand::bounded(900_000.0, 1_200_000.0, 15.0),
                TaxSlabBand::bounded(1_200_000.0, 1_500_000.0, 20.0),
                TaxSlabBand::unbounded(1_500_000.0, 30.0),
            ],
            standard_deduction: 50_000.0,
            rebate_threshold: 700_000.0,
            cess_pct: DEFAULT_CESS_PCT,
            allows_itemized_deductions: false,
        }
    }

    /// Check that the bands tile [0, inf) with no gaps or overlaps and the
    /// scalar parameters are in range.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| CalcError::InvalidRegime {
            regime: self.name.clone(),
            reason,
        };

        let first = self.bands.first().ok_or_else(|| invalid("no bands".to_string()))?;
        if first.lower_bound != 0.0 {
            return Err(invalid(format!("first band starts at {} instead of 0", first.lower_bound)));
        }

        let last_idx = self.bands.len() - 1;
        for (idx, band) in self.bands.iter().enumerate() {
            if !(0.0..=100.0).contains(&band.rate_pct) {
                return Err(invalid(format!("band {} rate {}% outside [0, 100]", idx + 1, band.rate_pct)));
            }

            match (band.upper_bound, idx == last_idx) {
                (None, true) => {}
                (None, false) => {
                    return Err(invalid(format!("band {} is unbounded but not last", idx + 1)));
                }
                (Some(upper), true) => {
                    return Err(invalid(format!("last band stops at {}; it must be unbounded", upper)));
                }
                (Some(upper), false) => {
                    if upper <= band.lower_bound {
                        return Err(invalid(format!("band {} is empty or inverted", idx + 1)));
                    }
                    let next = self.bands[idx + 1].lower_bound;
                    if next != upper {
                        let kind = if next > upper { "gap" } else { "overlap" };
                        return Err(invalid(format!("{} between {} and {}", kind, upper, next)));
                    }
                }
            }
        }

        for (label, value) in [
            ("standard deduction", self.standard_deduction),
            ("rebate threshold", self.rebate_threshold),
            ("cess", self.cess_pct),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be a non-negative number, got {}", label, value)));
            }
        }

        Ok(())
    }

    /// Marginal band an income falls into
    pub fn band_for(&self, income: f64) -> Option<&TaxSlabBand> {
        self.bands.iter().find(|band| {
            income >= band.lower_bound && band.upper_bound.map_or(true, |upper| income < upper)
        })
    }
}
