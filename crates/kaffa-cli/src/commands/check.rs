use kaffa_core::error::KaffaError;
use kaffa_core::GradingSample;
use std::path::Path;

use crate::output;

pub fn run(template: &Path, measurements: &Path, output_format: &str) -> Result<(), KaffaError> {
    let blocks = super::load_parameter_blocks(template)?;

    let content = std::fs::read_to_string(measurements).map_err(|e| KaffaError::ConfigLoad {
        path: measurements.to_path_buf(),
        reason: e.to_string(),
    })?;
    let sample: GradingSample = serde_json::from_str(&content)?;

    let report = kaffa_core::check_grading(&sample, &blocks);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report),
    }

    if !report.is_valid {
        std::process::exit(2);
    }
    Ok(())
}
