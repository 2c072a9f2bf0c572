//! Rupee rounding helpers shared by every calculator

/// Round to the nearest whole Rupee (halves away from zero)
pub fn round_rupees(amount: f64) -> f64 {
    amount.round()
}

/// Clamp a domain amount to zero when an intermediate difference goes negative
pub fn clamp_non_negative(amount: f64) -> f64 {
    if amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Log a warning for rates the calculators accept but which make no sense in the domain
pub(crate) fn warn_if_out_of_range(label: &str, rate_pct: f64) {
    if !(0.0..=100.0).contains(&rate_pct) {
        log::warn!("{} rate {}% is outside [0, 100]; computing anyway", label, rate_pct);
    }
}
