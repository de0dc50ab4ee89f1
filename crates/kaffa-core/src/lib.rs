pub mod defects;
pub mod error;
pub mod outcome;
pub mod region;
pub mod scale;
pub mod screen;

use defects::evaluate::RecordedDefect;
use defects::schema::DefectConfiguration;
use error::KaffaError;
use outcome::{DefectEvaluation, DistributionResult, GradingReport};
use region::MicroRegionConfiguration;
use screen::{ScreenSizeDistribution, ScreenSizeRequirements};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One configuration block as stored in a quality template's `parameters`
/// JSON column. A template carries at most one block per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateParameters {
    ScreenSize(ScreenSizeRequirements),
    Defects(DefectConfiguration),
    MicroRegion(MicroRegionConfiguration),
}

/// Validate a parameters block with the validator for its kind.
///
/// Screen-size blocks always pass here: their shape is already enforced by
/// deserialization, and the grading evaluator deliberately tolerates
/// suspect constraints (a `range` missing a bound never violates). Such
/// findings are advisory; run [`screen::check_requirements`] separately to
/// surface them as warnings.
pub fn validate_parameters(params: &TemplateParameters) -> Result<(), KaffaError> {
    match params {
        TemplateParameters::ScreenSize(_) => Ok(()),
        TemplateParameters::Defects(config) => defects::validate_configuration(config),
        TemplateParameters::MicroRegion(config) => region::validate_configuration(config),
    }
}

/// Parse a parameters block from JSON and validate it.
pub fn parse_parameters(json: &str) -> Result<TemplateParameters, KaffaError> {
    let params: TemplateParameters = serde_json::from_str(json)?;
    validate_parameters(&params)?;
    Ok(params)
}

/// Load a parameters block from a JSON file.
pub fn load_parameters(path: &Path) -> Result<TemplateParameters, KaffaError> {
    let content = std::fs::read_to_string(path).map_err(|e| KaffaError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_parameters(&content)
}

/// What a lab technician measured on one sample at grading time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingSample {
    #[serde(default)]
    pub screen_sizes: ScreenSizeDistribution,
    #[serde(default)]
    pub defects: Vec<RecordedDefect>,
}

/// Main API entry point: check a grading sample against a template's
/// parameter blocks before the submission is allowed to proceed.
///
/// Screen-size and defect blocks are evaluated with the accumulating
/// checkers; micro-region blocks are configuration-only and contribute
/// nothing at grading time. Results for repeated blocks of one kind merge
/// into a single violation list.
pub fn check_grading(sample: &GradingSample, parameters: &[TemplateParameters]) -> GradingReport {
    let mut screen_result: Option<DistributionResult> = None;
    let mut defect_result: Option<DefectEvaluation> = None;

    for params in parameters {
        match params {
            TemplateParameters::ScreenSize(reqs) => {
                let result = screen::validate_distribution(&sample.screen_sizes, reqs);
                screen_result = Some(match screen_result.take() {
                    None => result,
                    Some(mut merged) => {
                        merged.violations.extend(result.violations);
                        merged.is_valid = merged.violations.is_empty();
                        merged
                    }
                });
            }
            TemplateParameters::Defects(config) => {
                let result = defects::evaluate::evaluate_sample(&sample.defects, config);
                defect_result = Some(match defect_result.take() {
                    None => result,
                    Some(mut merged) => {
                        merged.violations.extend(result.violations);
                        merged.is_valid = merged.violations.is_empty();
                        if merged.note.is_none() {
                            merged.note = result.note;
                        }
                        merged
                    }
                });
            }
            TemplateParameters::MicroRegion(_) => {}
        }
    }

    let is_valid = screen_result.as_ref().map_or(true, |r| r.is_valid)
        && defect_result.as_ref().map_or(true, |r| r.is_valid);

    GradingReport {
        screen_size: screen_result,
        defects: defect_result,
        is_valid,
    }
}
