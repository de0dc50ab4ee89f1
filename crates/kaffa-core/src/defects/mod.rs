pub mod builtin;
pub mod evaluate;
pub mod schema;

use crate::error::KaffaError;
use schema::DefectConfiguration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Load a defect configuration from a JSON file.
pub fn load_configuration(path: &Path) -> Result<DefectConfiguration, KaffaError> {
    let content = std::fs::read_to_string(path).map_err(|e| KaffaError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_configuration(&content)
}

/// Parse a defect configuration from a JSON string and validate it.
pub fn parse_configuration(json: &str) -> Result<DefectConfiguration, KaffaError> {
    let config: DefectConfiguration = serde_json::from_str(json)?;
    validate_configuration(&config)?;
    Ok(config)
}

/// Validate a configuration's internal consistency.
///
/// Short-circuits on the first problem: this checks operator-authored
/// configuration, where fix-one-resave-see-next is the editing loop.
/// Measured samples are checked by [`evaluate::evaluate_sample`], which
/// accumulates instead.
pub fn validate_configuration(config: &DefectConfiguration) -> Result<(), KaffaError> {
    // A name cannot be reused across taints and faults, compared
    // case-insensitively.
    let mut seen: Vec<String> = Vec::new();
    for def in config.definitions() {
        let folded = def.name.trim().to_lowercase();
        if folded.is_empty() {
            return Err(KaffaError::ConfigInvalid(
                "defect name must not be empty".into(),
            ));
        }
        if seen.contains(&folded) {
            return Err(KaffaError::ConfigInvalid(format!(
                "duplicate defect name '{}' (names are compared case-insensitively across taints and faults)",
                def.name
            )));
        }
        seen.push(folded);
    }

    for def in config.definitions() {
        def.scale.validate().map_err(|e| {
            KaffaError::ConfigInvalid(format!("{} \"{}\": {}", def.category, def.name, e))
        })?;
    }

    let rules = &config.rules;
    for (field, ceiling) in [
        ("max_taint_intensity", rules.max_taint_intensity),
        ("max_fault_intensity", rules.max_fault_intensity),
    ] {
        if let Some(value) = ceiling {
            if value <= rust_decimal::Decimal::ZERO {
                return Err(KaffaError::ConfigInvalid(format!(
                    "{field} must be greater than zero (got {value})"
                )));
            }
        }
    }

    if rules.zero_tolerance && rules.any_count_limit() {
        return Err(KaffaError::ConfigInvalid(
            "zero_tolerance cannot be combined with max_taints, max_faults or max_combined"
                .into(),
        ));
    }

    Ok(())
}

/// Summary counts for a configuration overview screen. Pure projection,
/// no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectStats {
    pub total_definitions: usize,
    pub taint_count: usize,
    pub fault_count: usize,
    pub has_validation_rules: bool,
    pub zero_tolerance: bool,
}

pub fn stats(config: &DefectConfiguration) -> DefectStats {
    DefectStats {
        total_definitions: config.taints.len() + config.faults.len(),
        taint_count: config.taints.len(),
        fault_count: config.faults.len(),
        has_validation_rules: config.rules.any_set(),
        zero_tolerance: config.rules.zero_tolerance,
    }
}
