pub mod check;
pub mod schema;
pub mod templates;
pub mod validate;

use kaffa_core::error::KaffaError;
use kaffa_core::TemplateParameters;
use std::path::Path;

/// Load one or more parameter blocks from a JSON file. The authoring UI
/// stores a single block per template; an array form is accepted so a whole
/// template's blocks can be checked in one pass.
pub fn load_parameter_blocks(path: &Path) -> Result<Vec<TemplateParameters>, KaffaError> {
    let content = std::fs::read_to_string(path).map_err(|e| KaffaError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let blocks = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<TemplateParameters>>(&content)?
    } else {
        vec![serde_json::from_str::<TemplateParameters>(&content)?]
    };

    for block in &blocks {
        kaffa_core::validate_parameters(block)?;
    }
    Ok(blocks)
}
