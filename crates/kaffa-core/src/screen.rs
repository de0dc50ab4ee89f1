use crate::error::KaffaError;
use crate::outcome::{DistributionResult, ScreenSizeViolation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a measured percentage is checked against a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintType {
    Minimum,
    Maximum,
    Range,
    Any,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintType::Minimum => write!(f, "minimum"),
            ConstraintType::Maximum => write!(f, "maximum"),
            ConstraintType::Range => write!(f, "range"),
            ConstraintType::Any => write!(f, "any"),
        }
    }
}

/// A percentage-distribution rule for one screen size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSizeConstraint {
    pub screen_size: String,
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub min_value: Option<Decimal>,
    #[serde(default)]
    pub max_value: Option<Decimal>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

impl ScreenSizeConstraint {
    /// Human-readable requirement text, one form per constraint type.
    ///
    /// A constraint whose declared type is missing its bound renders as
    /// "Any amount", matching the evaluator, which never raises a violation
    /// for such a constraint.
    pub fn display_text(&self) -> String {
        match self.constraint_type {
            ConstraintType::Minimum => match self.min_value {
                Some(min) => format!("≥{min}%"),
                None => "Any amount".into(),
            },
            ConstraintType::Maximum => match self.max_value {
                Some(max) => format!("≤{max}%"),
                None => "Any amount".into(),
            },
            ConstraintType::Range => match (self.min_value, self.max_value) {
                (Some(min), Some(max)) => format!("{min}%-{max}%"),
                _ => "Any amount".into(),
            },
            ConstraintType::Any => "Any amount".into(),
        }
    }
}

/// The ordered constraint set a quality template owns. Order is display
/// order; each constraint is evaluated independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenSizeRequirements {
    pub constraints: Vec<ScreenSizeConstraint>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Measured percentages per screen size, collected at grading time.
/// Ephemeral; built per grading session, never persisted on its own.
pub type ScreenSizeDistribution = BTreeMap<String, Decimal>;

/// Check a measured distribution against a template's requirements.
///
/// Every constraint is evaluated in stored order and all violations are
/// returned together. A screen size absent from the distribution is treated
/// as measured at 0%, not as unknown. Bounds are inclusive. A `range`
/// constraint missing either bound is skipped without a violation; use
/// [`check_requirements`] to surface such malformed constraints.
pub fn validate_distribution(
    distribution: &ScreenSizeDistribution,
    requirements: &ScreenSizeRequirements,
) -> DistributionResult {
    let mut violations = Vec::new();

    for constraint in &requirements.constraints {
        let actual = distribution
            .get(&constraint.screen_size)
            .copied()
            .unwrap_or(Decimal::ZERO);

        let violated = match constraint.constraint_type {
            ConstraintType::Minimum => constraint.min_value.is_some_and(|min| actual < min),
            ConstraintType::Maximum => constraint.max_value.is_some_and(|max| actual > max),
            ConstraintType::Range => match (constraint.min_value, constraint.max_value) {
                (Some(min), Some(max)) => actual < min || actual > max,
                _ => false,
            },
            ConstraintType::Any => false,
        };

        if violated {
            let expected = constraint.display_text();
            violations.push(ScreenSizeViolation {
                screen_size: constraint.screen_size.clone(),
                constraint_type: constraint.constraint_type,
                message: format!(
                    "{}: expected {}, measured {}%",
                    constraint.screen_size, expected, actual
                ),
                expected,
                actual,
            });
        }
    }

    DistributionResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

/// The screen sizes a requirement set constrains, in stored order. Grading
/// UIs use this to know which sizes to display for data entry.
pub fn constrained_screen_sizes(requirements: &ScreenSizeRequirements) -> Vec<String> {
    requirements
        .constraints
        .iter()
        .map(|c| c.screen_size.clone())
        .collect()
}

/// Configuration sanity check, distinct from [`validate_distribution`].
///
/// Flags constraints the permissive evaluator silently tolerates: a bound
/// missing for the declared type, percentages outside 0-100, or an inverted
/// range. Short-circuits on the first problem.
pub fn check_requirements(requirements: &ScreenSizeRequirements) -> Result<(), KaffaError> {
    let hundred = Decimal::ONE_HUNDRED;

    for constraint in &requirements.constraints {
        let name = &constraint.screen_size;
        if name.trim().is_empty() {
            return Err(KaffaError::ConfigInvalid(
                "screen size name must not be empty".into(),
            ));
        }

        for bound in [constraint.min_value, constraint.max_value]
            .into_iter()
            .flatten()
        {
            if bound < Decimal::ZERO || bound > hundred {
                return Err(KaffaError::ConfigInvalid(format!(
                    "'{name}': percentage {bound} is outside 0-100"
                )));
            }
        }

        match constraint.constraint_type {
            ConstraintType::Minimum => {
                if constraint.min_value.is_none() {
                    return Err(KaffaError::ConfigInvalid(format!(
                        "'{name}': minimum constraint has no min_value"
                    )));
                }
            }
            ConstraintType::Maximum => {
                if constraint.max_value.is_none() {
                    return Err(KaffaError::ConfigInvalid(format!(
                        "'{name}': maximum constraint has no max_value"
                    )));
                }
            }
            ConstraintType::Range => match (constraint.min_value, constraint.max_value) {
                (Some(min), Some(max)) => {
                    if min > max {
                        return Err(KaffaError::ConfigInvalid(format!(
                            "'{name}': range minimum {min} exceeds maximum {max}"
                        )));
                    }
                }
                _ => {
                    return Err(KaffaError::ConfigInvalid(format!(
                        "'{name}': range constraint needs both min_value and max_value"
                    )));
                }
            },
            ConstraintType::Any => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn constraint(
        screen_size: &str,
        constraint_type: ConstraintType,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> ScreenSizeConstraint {
        ScreenSizeConstraint {
            screen_size: screen_size.into(),
            constraint_type,
            min_value: min,
            max_value: max,
            display_order: None,
        }
    }

    fn requirements(constraints: Vec<ScreenSizeConstraint>) -> ScreenSizeRequirements {
        ScreenSizeRequirements {
            constraints,
            notes: None,
        }
    }

    fn distribution(entries: &[(&str, Decimal)]) -> ScreenSizeDistribution {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_minimum_violation() {
        let reqs = requirements(vec![constraint(
            "Pan",
            ConstraintType::Minimum,
            Some(dec!(5)),
            None,
        )]);
        let result = validate_distribution(&distribution(&[("Pan", dec!(3))]), &reqs);
        assert!(!result.is_valid);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].screen_size, "Pan");
        assert_eq!(result.violations[0].actual, dec!(3));
        assert_eq!(result.violations[0].expected, "≥5%");
    }

    #[test]
    fn test_missing_key_defaults_to_zero() {
        let reqs = requirements(vec![constraint(
            "Pan",
            ConstraintType::Minimum,
            Some(dec!(5)),
            None,
        )]);
        let result = validate_distribution(&ScreenSizeDistribution::new(), &reqs);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].actual, dec!(0));
    }

    #[test]
    fn test_maximum_violation_and_pass() {
        let reqs = requirements(vec![constraint(
            "Screen 16",
            ConstraintType::Maximum,
            None,
            Some(dec!(20)),
        )]);
        let ok = validate_distribution(&distribution(&[("Screen 16", dec!(20))]), &reqs);
        assert!(ok.is_valid);
        let bad = validate_distribution(&distribution(&[("Screen 16", dec!(20.5))]), &reqs);
        assert!(!bad.is_valid);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let reqs = requirements(vec![constraint(
            "Screen 15",
            ConstraintType::Range,
            Some(dec!(10)),
            Some(dec!(20)),
        )]);
        for inside in [dec!(10), dec!(20), dec!(15)] {
            let r = validate_distribution(&distribution(&[("Screen 15", inside)]), &reqs);
            assert!(r.is_valid, "{inside} should satisfy 10%-20%");
        }
        for outside in [dec!(9.99), dec!(20.01)] {
            let r = validate_distribution(&distribution(&[("Screen 15", outside)]), &reqs);
            assert!(!r.is_valid, "{outside} should violate 10%-20%");
        }
    }

    #[test]
    fn test_malformed_range_is_silently_skipped() {
        // Known quirk: a range missing a bound never violates. The separate
        // sanity check flags it instead.
        let reqs = requirements(vec![constraint(
            "Screen 14",
            ConstraintType::Range,
            Some(dec!(10)),
            None,
        )]);
        let result = validate_distribution(&distribution(&[("Screen 14", dec!(99))]), &reqs);
        assert!(result.is_valid);
        assert!(check_requirements(&reqs).is_err());
    }

    #[test]
    fn test_any_never_violates() {
        let reqs = requirements(vec![constraint("Pan", ConstraintType::Any, None, None)]);
        let result = validate_distribution(&distribution(&[("Pan", dec!(87))]), &reqs);
        assert!(result.is_valid);
    }

    #[test]
    fn test_violations_preserve_constraint_order() {
        let reqs = requirements(vec![
            constraint("Screen 17", ConstraintType::Minimum, Some(dec!(60)), None),
            constraint("Screen 16", ConstraintType::Maximum, None, Some(dec!(20))),
        ]);
        let dist = distribution(&[("Screen 17", dec!(55)), ("Screen 16", dec!(25))]);
        let result = validate_distribution(&dist, &reqs);
        assert_eq!(result.violations.len(), 2);
        assert_eq!(result.violations[0].screen_size, "Screen 17");
        assert_eq!(result.violations[1].screen_size, "Screen 16");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(
            constraint("x", ConstraintType::Minimum, Some(dec!(5)), None).display_text(),
            "≥5%"
        );
        assert_eq!(
            constraint("x", ConstraintType::Maximum, None, Some(dec!(20))).display_text(),
            "≤20%"
        );
        assert_eq!(
            constraint("x", ConstraintType::Range, Some(dec!(10)), Some(dec!(20))).display_text(),
            "10%-20%"
        );
        assert_eq!(
            constraint("x", ConstraintType::Any, None, None).display_text(),
            "Any amount"
        );
    }

    #[test]
    fn test_constrained_screen_sizes_order() {
        let reqs = requirements(vec![
            constraint("Screen 18+", ConstraintType::Any, None, None),
            constraint("Screen 17", ConstraintType::Minimum, Some(dec!(60)), None),
        ]);
        assert_eq!(
            constrained_screen_sizes(&reqs),
            vec!["Screen 18+".to_string(), "Screen 17".to_string()]
        );
    }

    #[test]
    fn test_check_requirements_rejects_out_of_domain_percentage() {
        let reqs = requirements(vec![constraint(
            "Pan",
            ConstraintType::Minimum,
            Some(dec!(120)),
            None,
        )]);
        assert!(check_requirements(&reqs).is_err());
    }

    #[test]
    fn test_check_requirements_rejects_inverted_range() {
        let reqs = requirements(vec![constraint(
            "Pan",
            ConstraintType::Range,
            Some(dec!(30)),
            Some(dec!(10)),
        )]);
        assert!(check_requirements(&reqs).is_err());
    }

    #[test]
    fn test_check_requirements_accepts_well_formed() {
        let reqs = requirements(vec![
            constraint("Screen 17", ConstraintType::Minimum, Some(dec!(60)), None),
            constraint("Pan", ConstraintType::Any, None, None),
        ]);
        assert!(check_requirements(&reqs).is_ok());
    }
}
