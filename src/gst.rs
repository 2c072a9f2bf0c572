//! GST add/remove and the central/state split

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::money::{round_rupees, warn_if_out_of_range};

/// GST slab rates in force (percent)
pub const GST_RATES: [f64; 6] = [0.0, 3.0, 5.0, 12.0, 18.0, 28.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    /// Amount is exclusive of tax; add tax on top
    Add,
    /// Amount already includes tax; extract it
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub base_amount: f64,
    pub tax_amount: f64,
    pub gross_amount: f64,
}

/// Central and state halves of an intra-state tax amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualSplit {
    pub central: f64,
    pub state: f64,
}

/// Add tax to, or strip tax from, `amount` at `rate_pct`.
///
/// Fails when removing tax at -100%, where `1 + rate/100` is zero, or when the
/// amounts overflow to a non-finite value.
pub fn split_tax(amount: f64, rate_pct: f64, mode: SplitMode) -> Result<SplitResult> {
    warn_if_out_of_range("GST", rate_pct);
    let rate = rate_pct / 100.0;

    let (base, tax, gross) = match mode {
        SplitMode::Add => {
            let tax = amount * rate;
            (amount, tax, amount + tax)
        }
        SplitMode::Remove => {
            let denominator = 1.0 + rate;
            if denominator == 0.0 {
                return Err(CalcError::DegenerateRate(rate_pct));
            }
            let base = amount / denominator;
            (base, amount - base, amount)
        }
    };

    if !(base.is_finite() && tax.is_finite() && gross.is_finite()) {
        return Err(CalcError::NonFinite("GST split"));
    }

    log::debug!("GST {:?} {} at {}%: base {} tax {} gross {}", mode, amount, rate_pct, base, tax, gross);

    Ok(SplitResult {
        base_amount: round_rupees(base),
        tax_amount: round_rupees(tax),
        gross_amount: round_rupees(gross),
    })
}

/// Halve a tax amount into CGST and SGST.
/// Each half rounds independently, so the two may sum to one Rupee more or less than `tax_amount`.
///
/// Expects a finite amount such as `SplitResult::tax_amount`; anything else splits as zero.
pub fn split_equally(tax_amount: f64) -> DualSplit {
    let half = if tax_amount.is_finite() { tax_amount / 2.0 } else { 0.0 };
    DualSplit {
        central: round_rupees(half),
        state: round_rupees(half),
    }
}
