use crate::defects::schema::{DefectCategory, DefectConfiguration};
use crate::outcome::{DefectEvaluation, DefectRuleKind, DefectViolation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One defect a grader recorded on a sample, with the intensity read off
/// the defect's scale (wording scales record the option's numeric value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedDefect {
    pub name: String,
    pub category: DefectCategory,
    pub intensity: Decimal,
}

/// Evaluate a sample's recorded defects against a configuration's
/// acceptance rules.
///
/// Accumulating: every rule is checked and all violations are returned
/// together, like the screen-size distribution check. Count limits count
/// recorded entries; intensity ceilings compare against the highest
/// recorded intensity in the category; zero tolerance violates on any
/// recorded entry at all.
pub fn evaluate_sample(
    recorded: &[RecordedDefect],
    config: &DefectConfiguration,
) -> DefectEvaluation {
    let rules = &config.rules;
    let mut violations = Vec::new();

    let taint_count = recorded
        .iter()
        .filter(|d| d.category == DefectCategory::Taint)
        .count();
    let fault_count = recorded.len() - taint_count;

    if rules.zero_tolerance && !recorded.is_empty() {
        violations.push(DefectViolation {
            rule: DefectRuleKind::ZeroTolerance,
            category: None,
            expected: "no taints or faults".into(),
            actual: Decimal::from(recorded.len()),
            message: format!(
                "{} defect(s) recorded on a zero-tolerance template",
                recorded.len()
            ),
        });
    }

    let count_checks = [
        (
            DefectRuleKind::MaxTaints,
            Some(DefectCategory::Taint),
            rules.max_taints,
            taint_count,
            "taint",
        ),
        (
            DefectRuleKind::MaxFaults,
            Some(DefectCategory::Fault),
            rules.max_faults,
            fault_count,
            "fault",
        ),
        (
            DefectRuleKind::MaxCombined,
            None,
            rules.max_combined,
            recorded.len(),
            "defect",
        ),
    ];
    for (rule, category, limit, count, noun) in count_checks {
        if let Some(limit) = limit {
            if count > limit as usize {
                violations.push(DefectViolation {
                    rule,
                    category,
                    expected: format!("at most {limit} {noun}(s)"),
                    actual: Decimal::from(count as u64),
                    message: format!("{count} {noun}(s) recorded, at most {limit} allowed"),
                });
            }
        }
    }

    let intensity_checks = [
        (
            DefectRuleKind::MaxTaintIntensity,
            DefectCategory::Taint,
            rules.max_taint_intensity,
            "taint",
        ),
        (
            DefectRuleKind::MaxFaultIntensity,
            DefectCategory::Fault,
            rules.max_fault_intensity,
            "fault",
        ),
    ];
    for (rule, category, ceiling, noun) in intensity_checks {
        let Some(ceiling) = ceiling else { continue };
        let worst = recorded
            .iter()
            .filter(|d| d.category == category)
            .map(|d| d.intensity)
            .max();
        if let Some(worst) = worst {
            if worst > ceiling {
                violations.push(DefectViolation {
                    rule,
                    category: Some(category),
                    expected: format!("{noun} intensity ≤{ceiling}"),
                    actual: worst,
                    message: format!("{noun} intensity {worst} exceeds ceiling {ceiling}"),
                });
            }
        }
    }

    DefectEvaluation {
        is_valid: violations.is_empty(),
        violations,
        note: rules.validation_message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defects::schema::DefectRules;
    use crate::outcome::DefectRuleKind;
    use rust_decimal_macros::dec;

    fn recorded(name: &str, category: DefectCategory, intensity: Decimal) -> RecordedDefect {
        RecordedDefect {
            name: name.into(),
            category,
            intensity,
        }
    }

    fn config(rules: DefectRules) -> DefectConfiguration {
        DefectConfiguration {
            rules,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_rules_always_valid() {
        let sample = vec![recorded("Earthy", DefectCategory::Taint, dec!(4))];
        let result = evaluate_sample(&sample, &config(DefectRules::default()));
        assert!(result.is_valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_max_taints_counts_entries() {
        let rules = DefectRules {
            max_taints: Some(1),
            ..Default::default()
        };
        let sample = vec![
            recorded("Earthy", DefectCategory::Taint, dec!(1)),
            recorded("Musty", DefectCategory::Taint, dec!(1)),
            recorded("Moldy", DefectCategory::Fault, dec!(1)),
        ];
        let result = evaluate_sample(&sample, &config(rules));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, DefectRuleKind::MaxTaints);
        assert_eq!(result.violations[0].actual, dec!(2));
    }

    #[test]
    fn test_max_combined_counts_both_categories() {
        let rules = DefectRules {
            max_combined: Some(2),
            ..Default::default()
        };
        let sample = vec![
            recorded("Earthy", DefectCategory::Taint, dec!(1)),
            recorded("Musty", DefectCategory::Taint, dec!(1)),
            recorded("Moldy", DefectCategory::Fault, dec!(1)),
        ];
        let result = evaluate_sample(&sample, &config(rules));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, DefectRuleKind::MaxCombined);
    }

    #[test]
    fn test_intensity_ceiling_uses_worst_recorded() {
        let rules = DefectRules {
            max_taint_intensity: Some(dec!(3)),
            ..Default::default()
        };
        let sample = vec![
            recorded("Earthy", DefectCategory::Taint, dec!(2)),
            recorded("Fermented", DefectCategory::Taint, dec!(4.5)),
        ];
        let result = evaluate_sample(&sample, &config(rules));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].actual, dec!(4.5));
    }

    #[test]
    fn test_intensity_at_ceiling_passes() {
        let rules = DefectRules {
            max_fault_intensity: Some(dec!(3)),
            ..Default::default()
        };
        let sample = vec![recorded("Moldy", DefectCategory::Fault, dec!(3))];
        assert!(evaluate_sample(&sample, &config(rules)).is_valid);
    }

    #[test]
    fn test_zero_tolerance_violates_on_any_entry() {
        let rules = DefectRules {
            zero_tolerance: true,
            ..Default::default()
        };
        let cfg = config(rules);
        let clean = evaluate_sample(&[], &cfg);
        assert!(clean.is_valid);

        let sample = vec![recorded("Earthy", DefectCategory::Taint, dec!(1))];
        let result = evaluate_sample(&sample, &cfg);
        assert!(!result.is_valid);
        assert_eq!(result.violations[0].rule, DefectRuleKind::ZeroTolerance);
    }

    #[test]
    fn test_validation_message_carried_as_note() {
        let rules = DefectRules {
            zero_tolerance: true,
            validation_message: Some("This lot must cup completely clean.".into()),
            ..Default::default()
        };
        let sample = vec![recorded("Moldy", DefectCategory::Fault, dec!(2))];
        let result = evaluate_sample(&sample, &config(rules));
        assert_eq!(
            result.note.as_deref(),
            Some("This lot must cup completely clean.")
        );
    }

    #[test]
    fn test_multiple_violations_accumulate() {
        let rules = DefectRules {
            max_taints: Some(1),
            max_fault_intensity: Some(dec!(2)),
            ..Default::default()
        };
        let sample = vec![
            recorded("Earthy", DefectCategory::Taint, dec!(1)),
            recorded("Musty", DefectCategory::Taint, dec!(1)),
            recorded("Moldy", DefectCategory::Fault, dec!(4)),
        ];
        let result = evaluate_sample(&sample, &config(rules));
        assert_eq!(result.violations.len(), 2);
    }
}
