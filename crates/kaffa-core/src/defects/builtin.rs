//! Predefined taint/fault templates operators pick as starting points.
//!
//! The catalog is an immutable, process-wide constant; lookup is a pure
//! function over it. Builtins carry stable ids so templates survive
//! serialization round-trips; customizing one goes through
//! [`DefectDefinition::duplicate`], which mints fresh ids.

use crate::defects::schema::{
    DefectCategory, DefectConfiguration, DefectDefinition, DefectRules,
};
use crate::scale::{AttributeScale, ScaleOption};
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// A complete starting-point configuration in the shared catalog.
#[derive(Debug, Clone)]
pub struct DefectTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub configuration: DefectConfiguration,
}

pub const TEMPLATE_IDS: &[&str] = &[
    "sca-standard",
    "specialty-grade",
    "commercial-grade",
    "zero-tolerance",
    "brazil-traditional",
];

static TEMPLATES: LazyLock<Vec<DefectTemplate>> = LazyLock::new(build_templates);

/// The full catalog, in display order.
pub fn templates() -> &'static [DefectTemplate] {
    &TEMPLATES
}

/// Look up a predefined template by id. Absence is a normal outcome, not an
/// error.
pub fn template(id: &str) -> Option<&'static DefectTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

fn def(
    id: &str,
    name: &str,
    category: DefectCategory,
    scale: AttributeScale,
    display_order: i32,
) -> DefectDefinition {
    DefectDefinition {
        id: id.into(),
        name: name.into(),
        category,
        scale,
        description: None,
        display_order,
    }
}

fn taint(id: &str, name: &str, order: i32) -> DefectDefinition {
    def(
        id,
        name,
        DefectCategory::Taint,
        AttributeScale::default_intensity(),
        order,
    )
}

fn fault(id: &str, name: &str, order: i32) -> DefectDefinition {
    def(
        id,
        name,
        DefectCategory::Fault,
        AttributeScale::default_intensity(),
        order,
    )
}

fn severity_wording() -> AttributeScale {
    AttributeScale::Wording {
        options: vec![
            ScaleOption {
                label: "Slight".into(),
                value: Decimal::ONE,
                display_order: 1,
            },
            ScaleOption {
                label: "Moderate".into(),
                value: Decimal::TWO,
                display_order: 2,
            },
            ScaleOption {
                label: "Intense".into(),
                value: Decimal::from(3),
                display_order: 3,
            },
        ],
    }
}

fn build_templates() -> Vec<DefectTemplate> {
    vec![
        DefectTemplate {
            id: "sca-standard",
            name: "SCA Standard",
            description: "SCA cupping protocol defaults: common taints tracked, no faults tolerated",
            configuration: DefectConfiguration {
                taints: vec![
                    taint("sca-fermented", "Fermented", 1),
                    taint("sca-earthy", "Earthy", 2),
                    taint("sca-musty", "Musty", 3),
                    taint("sca-woody", "Woody", 4),
                    taint("sca-grassy", "Grassy", 5),
                ],
                faults: vec![
                    fault("sca-moldy", "Moldy", 1),
                    fault("sca-sour", "Sour", 2),
                    fault("sca-phenolic", "Phenolic", 3),
                    fault("sca-stinker", "Stinker", 4),
                ],
                rules: DefectRules {
                    max_taints: Some(5),
                    max_faults: Some(0),
                    max_combined: Some(5),
                    ..Default::default()
                },
                notes: Some("Faults disqualify; up to five mild taints tolerated.".into()),
            },
        },
        DefectTemplate {
            id: "specialty-grade",
            name: "Specialty Grade",
            description: "Tight specialty spec: few mild taints, capped intensity, no faults",
            configuration: DefectConfiguration {
                taints: vec![
                    taint("spec-fermented", "Fermented", 1),
                    taint("spec-earthy", "Earthy", 2),
                    taint("spec-baggy", "Baggy", 3),
                ],
                faults: vec![
                    fault("spec-moldy", "Moldy", 1),
                    fault("spec-sour", "Sour", 2),
                ],
                rules: DefectRules {
                    max_taints: Some(3),
                    max_faults: Some(0),
                    max_taint_intensity: Some(Decimal::new(25, 1)),
                    ..Default::default()
                },
                notes: None,
            },
        },
        DefectTemplate {
            id: "commercial-grade",
            name: "Commercial Grade",
            description: "Permissive commercial spec with combined count and intensity ceilings",
            configuration: DefectConfiguration {
                taints: vec![
                    taint("com-fermented", "Fermented", 1),
                    taint("com-earthy", "Earthy", 2),
                    taint("com-musty", "Musty", 3),
                    taint("com-woody", "Woody", 4),
                ],
                faults: vec![
                    fault("com-moldy", "Moldy", 1),
                    fault("com-sour", "Sour", 2),
                ],
                rules: DefectRules {
                    max_combined: Some(10),
                    max_taint_intensity: Some(Decimal::from(4)),
                    max_fault_intensity: Some(Decimal::from(3)),
                    ..Default::default()
                },
                notes: None,
            },
        },
        DefectTemplate {
            id: "zero-tolerance",
            name: "Zero Tolerance",
            description: "No taint or fault presence accepted at all",
            configuration: DefectConfiguration {
                taints: vec![
                    taint("zt-fermented", "Fermented", 1),
                    taint("zt-earthy", "Earthy", 2),
                ],
                faults: vec![
                    fault("zt-moldy", "Moldy", 1),
                    fault("zt-phenolic", "Phenolic", 2),
                ],
                rules: DefectRules {
                    zero_tolerance: true,
                    validation_message: Some(
                        "This template rejects any recorded taint or fault.".into(),
                    ),
                    ..Default::default()
                },
                notes: None,
            },
        },
        DefectTemplate {
            id: "brazil-traditional",
            name: "Brazil Traditional",
            description: "Brazilian naturals: Rio character graded on a wording scale",
            configuration: DefectConfiguration {
                taints: vec![
                    def(
                        "br-rioy",
                        "Rioy",
                        DefectCategory::Taint,
                        severity_wording(),
                        1,
                    ),
                    taint("br-earthy", "Earthy", 2),
                    taint("br-woody", "Woody", 3),
                ],
                faults: vec![
                    fault("br-sour", "Sour", 1),
                    fault("br-moldy", "Moldy", 2),
                ],
                rules: DefectRules {
                    max_taints: Some(4),
                    max_fault_intensity: Some(Decimal::TWO),
                    ..Default::default()
                },
                notes: Some("Rio flavor is traditional in some markets; graded, not rejected.".into()),
            },
        },
    ]
}
