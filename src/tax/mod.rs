//! Progressive slab income tax with per-regime configuration

mod regime;
mod slab;
pub mod loader;

pub use regime::{RegimeConfig, TaxSlabBand, DEFAULT_CESS_PCT, DEFAULT_REGIME};
pub use slab::{
    compare_regimes, compute_progressive_tax, compute_regime_tax, recommend_regime,
    RegimeComparison, RegimeRecommendation, TaxComputation,
};
pub use loader::{find_regime, load_default_regimes, load_regimes};
