use crate::scale::AttributeScale;
use rand::distributions::Alphanumeric;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Taints are mild, tolerable off-flavors; faults are severe defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectCategory {
    Taint,
    Fault,
}

impl fmt::Display for DefectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefectCategory::Taint => write!(f, "Taint"),
            DefectCategory::Fault => write!(f, "Fault"),
        }
    }
}

/// A named sensory defect with its measurement scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectDefinition {
    /// Unique within one configuration. Best-effort scheme (millis
    /// timestamp + random suffix); ids are scoped to a single configuration
    /// edited by one operator at a time.
    pub id: String,
    pub name: String,
    pub category: DefectCategory,
    pub scale: AttributeScale,
    #[serde(default)]
    pub description: Option<String>,
    pub display_order: i32,
}

impl DefectDefinition {
    pub fn taint(
        name: impl Into<String>,
        display_order: i32,
        scale: Option<AttributeScale>,
    ) -> DefectDefinition {
        Self::new(name, DefectCategory::Taint, display_order, scale)
    }

    pub fn fault(
        name: impl Into<String>,
        display_order: i32,
        scale: Option<AttributeScale>,
    ) -> DefectDefinition {
        Self::new(name, DefectCategory::Fault, display_order, scale)
    }

    fn new(
        name: impl Into<String>,
        category: DefectCategory,
        display_order: i32,
        scale: Option<AttributeScale>,
    ) -> DefectDefinition {
        DefectDefinition {
            id: generate_id(),
            name: name.into(),
            category,
            scale: scale.unwrap_or_else(AttributeScale::default_intensity),
            description: None,
            display_order,
        }
    }

    /// Structural copy with a fresh id and the name suffixed " (copy)",
    /// for duplicate-and-edit workflows.
    pub fn duplicate(&self) -> DefectDefinition {
        DefectDefinition {
            id: generate_id(),
            name: format!("{} (copy)", self.name),
            ..self.clone()
        }
    }
}

fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("def-{millis}-{suffix}")
}

/// Aggregate acceptance rules for a sample's recorded defects.
///
/// Count limits are `u32`: negative limits are rejected at
/// deserialization rather than at validation time. `zero_tolerance` is
/// mutually exclusive with any count limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefectRules {
    #[serde(default)]
    pub max_taints: Option<u32>,
    #[serde(default)]
    pub max_faults: Option<u32>,
    #[serde(default)]
    pub max_combined: Option<u32>,
    #[serde(default)]
    pub max_taint_intensity: Option<Decimal>,
    #[serde(default)]
    pub max_fault_intensity: Option<Decimal>,
    #[serde(default)]
    pub zero_tolerance: bool,
    #[serde(default)]
    pub validation_message: Option<String>,
}

impl DefectRules {
    /// True when any acceptance rule is actually set.
    pub fn any_set(&self) -> bool {
        self.max_taints.is_some()
            || self.max_faults.is_some()
            || self.max_combined.is_some()
            || self.max_taint_intensity.is_some()
            || self.max_fault_intensity.is_some()
            || self.zero_tolerance
    }

    pub(crate) fn any_count_limit(&self) -> bool {
        self.max_taints.is_some() || self.max_faults.is_some() || self.max_combined.is_some()
    }
}

/// A quality template's defect catalog plus its acceptance rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefectConfiguration {
    pub taints: Vec<DefectDefinition>,
    pub faults: Vec<DefectDefinition>,
    #[serde(default)]
    pub rules: DefectRules,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DefectConfiguration {
    /// All definitions, taints first, in stored order.
    pub fn definitions(&self) -> impl Iterator<Item = &DefectDefinition> {
        self.taints.iter().chain(self.faults.iter())
    }
}
