//! Rupee Calc - calculation engine behind a suite of Indian personal-finance calculators
//!
//! This library provides:
//! - Compound growth projections (lumpsum, NSC, EPF) with yearly schedules
//! - Minimum-of-candidates exemptions (HRA, gratuity ceiling)
//! - Progressive slab income tax with rebate cliff, cess and regime comparison
//! - GST add/remove and CGST/SGST splitting
//! - Parallel sensitivity runs over growth inputs
//!
//! Every calculator is a pure function of its inputs; nothing is cached or shared.

pub mod error;
pub mod money;
pub mod growth;
pub mod exemption;
pub mod tax;
pub mod gst;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use growth::{project_compound_growth, Compounding, EpfInput, GrowthInput, GrowthResult, YearlyScheduleRow};
pub use exemption::{compute_exemption, compute_gratuity, compute_hra_exemption, ExemptionResult};
pub use tax::{compute_progressive_tax, recommend_regime, RegimeConfig, TaxComputation};
pub use gst::{split_equally, split_tax, SplitMode, SplitResult};
pub use scenario::ScenarioRunner;
