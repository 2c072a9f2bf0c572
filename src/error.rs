//! Error type shared by the calculators and the regime loader

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// `1 + rate/100` is zero, so the reverse split has no finite answer
    #[error("rate {0}% makes the tax-inclusive denominator zero")]
    DegenerateRate(f64),

    #[error("calculation produced a non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("invalid regime '{regime}': {reason}")]
    InvalidRegime { regime: String, reason: String },

    #[error("invalid gratuity rules: {0}")]
    InvalidRules(String),

    #[error("regime not found: {0}")]
    RegimeNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
