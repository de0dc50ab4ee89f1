use crate::defects::schema::DefectCategory;
use crate::screen::ConstraintType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One screen-size constraint a measured distribution failed to satisfy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSizeViolation {
    /// Screen-size name the constraint applies to (e.g. "Screen 17", "Pan").
    pub screen_size: String,
    pub constraint_type: ConstraintType,
    /// Human-readable requirement, e.g. "≥60%" or "10%-20%".
    pub expected: String,
    /// The measured percentage (0 when the screen size was not measured).
    pub actual: Decimal,
    /// Composed end-user message; wording is stable, UIs render it directly.
    pub message: String,
}

/// Outcome of checking a measured screen-size distribution.
///
/// Every constraint is evaluated; violations accumulate so a grading UI can
/// show the complete list at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionResult {
    pub is_valid: bool,
    pub violations: Vec<ScreenSizeViolation>,
}

/// Which acceptance rule a recorded defect set broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectRuleKind {
    MaxTaints,
    MaxFaults,
    MaxCombined,
    MaxTaintIntensity,
    MaxFaultIntensity,
    ZeroTolerance,
}

/// One acceptance rule a sample's recorded defects failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectViolation {
    pub rule: DefectRuleKind,
    /// Category the rule applies to; `None` for combined / zero-tolerance.
    pub category: Option<DefectCategory>,
    /// Human-readable limit, e.g. "at most 2 taints".
    pub expected: String,
    /// The offending count or intensity.
    pub actual: Decimal,
    pub message: String,
}

/// Outcome of evaluating a sample's recorded defects against a
/// configuration's acceptance rules. Accumulating, like
/// [`DistributionResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectEvaluation {
    pub is_valid: bool,
    pub violations: Vec<DefectViolation>,
    /// Operator-authored advice from the configuration's
    /// `validation_message`, carried through for the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Combined grading-time verdict across the parameter blocks a template
/// carries. Micro-region blocks are configuration-only and contribute
/// nothing here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_size: Option<DistributionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects: Option<DefectEvaluation>,
    pub is_valid: bool,
}
