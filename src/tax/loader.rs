//! JSON regime loader
//!
//! Loads versioned regime records from data/regimes/ so that annual rate
//! revisions are data updates.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::regime::RegimeConfig;
use crate::error::{CalcError, Result};

/// Default regime file, relative to the crate root
pub const DEFAULT_REGIMES_PATH: &str = "data/regimes/fy2023_24.json";

#[derive(Debug, Serialize, Deserialize)]
struct RegimeFile {
    regimes: Vec<RegimeConfig>,
}

/// Parse and validate a regime file's contents
pub fn parse_regimes(json: &str) -> Result<Vec<RegimeConfig>> {
    let file: RegimeFile = serde_json::from_str(json)?;
    for regime in &file.regimes {
        regime.validate()?;
    }
    Ok(file.regimes)
}

/// Load all regimes from a JSON file
pub fn load_regimes(path: &Path) -> Result<Vec<RegimeConfig>> {
    let json = fs::read_to_string(path)?;
    let regimes = parse_regimes(&json)?;
    log::debug!("loaded {} regimes from {}", regimes.len(), path.display());
    Ok(regimes)
}

/// Load regimes from the default location
pub fn load_default_regimes() -> Result<Vec<RegimeConfig>> {
    load_regimes(Path::new(DEFAULT_REGIMES_PATH))
}

/// Look a regime up by name
pub fn find_regime<'a>(regimes: &'a [RegimeConfig], name: &str) -> Result<&'a RegimeConfig> {
    regimes
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| CalcError::RegimeNotFound(name.to_string()))
}
