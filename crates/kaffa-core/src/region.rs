use crate::error::KaffaError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional percentage window for one micro-region's share of a blend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentageBounds {
    #[serde(default)]
    pub min: Option<Decimal>,
    #[serde(default)]
    pub max: Option<Decimal>,
}

/// Which sub-regions of a growing origin are acceptable, and in what mix.
///
/// An empty `required_micro_regions` list means any region from this origin
/// is acceptable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroRegionRequirement {
    pub origin: String,
    pub required_micro_regions: Vec<String>,
    #[serde(default)]
    pub percentage_per_region: BTreeMap<String, PercentageBounds>,
    pub allow_mix: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MicroRegionRequirement {
    pub fn new(origin: impl Into<String>, allow_mix: bool) -> MicroRegionRequirement {
        MicroRegionRequirement {
            origin: origin.into(),
            required_micro_regions: Vec::new(),
            percentage_per_region: BTreeMap::new(),
            allow_mix,
            notes: None,
        }
    }

    /// Human-readable summary for requirement lists in the authoring UI.
    pub fn display_text(&self) -> String {
        if self.required_micro_regions.is_empty() {
            return "Any micro-region".into();
        }
        let mix = if self.allow_mix {
            "mix allowed"
        } else {
            "single region only"
        };
        format!("{} ({})", self.required_micro_regions.join(", "), mix)
    }

    /// Sum of the per-region percentage bounds.
    ///
    /// A missing `min` contributes 0; a missing `max` is skipped entirely,
    /// so the `max` total can read misleadingly low when some regions are
    /// unconstrained upward. Known limitation, kept for compatibility with
    /// how authored configurations are interpreted elsewhere.
    pub fn total_percentage_bounds(&self) -> PercentageTotals {
        let mut totals = PercentageTotals::default();
        for bounds in self.percentage_per_region.values() {
            totals.min += bounds.min.unwrap_or(Decimal::ZERO);
            if let Some(max) = bounds.max {
                totals.max += max;
            }
        }
        totals
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentageTotals {
    pub min: Decimal,
    pub max: Decimal,
}

/// Per-origin requirements owned by one quality template. Origins are not
/// deduplicated: a repeated origin simply contributes further requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroRegionConfiguration {
    pub requirements: Vec<MicroRegionRequirement>,
}

/// Validate a micro-region configuration's structure.
///
/// Short-circuits on the first problem, like defect-configuration
/// validation. Checks each requirement's origin and percentage windows;
/// there is no sample-level evaluator for this model.
pub fn validate_configuration(config: &MicroRegionConfiguration) -> Result<(), KaffaError> {
    let hundred = Decimal::ONE_HUNDRED;

    for req in &config.requirements {
        if req.origin.trim().is_empty() {
            return Err(KaffaError::ConfigInvalid(
                "origin must not be empty".into(),
            ));
        }

        for (region, bounds) in &req.percentage_per_region {
            for value in [bounds.min, bounds.max].into_iter().flatten() {
                if value < Decimal::ZERO || value > hundred {
                    return Err(KaffaError::ConfigInvalid(format!(
                        "'{}' / '{region}': percentage {value} is outside 0-100",
                        req.origin
                    )));
                }
            }
            if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
                if min > max {
                    return Err(KaffaError::ConfigInvalid(format!(
                        "'{}' / '{region}': minimum {min} exceeds maximum {max}",
                        req.origin
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bounds(min: Option<Decimal>, max: Option<Decimal>) -> PercentageBounds {
        PercentageBounds { min, max }
    }

    #[test]
    fn test_new_requirement_accepts_any_region() {
        let req = MicroRegionRequirement::new("Ethiopia", true);
        assert!(req.required_micro_regions.is_empty());
        assert!(req.percentage_per_region.is_empty());
        assert_eq!(req.display_text(), "Any micro-region");
    }

    #[test]
    fn test_display_text_lists_regions_and_mix_mode() {
        let mut req = MicroRegionRequirement::new("Ethiopia", true);
        req.required_micro_regions = vec!["Yirgacheffe".into(), "Sidamo".into()];
        assert_eq!(req.display_text(), "Yirgacheffe, Sidamo (mix allowed)");

        req.allow_mix = false;
        assert_eq!(
            req.display_text(),
            "Yirgacheffe, Sidamo (single region only)"
        );
    }

    #[test]
    fn test_inverted_percentage_window_rejected() {
        let mut req = MicroRegionRequirement::new("Brazil", true);
        req.percentage_per_region
            .insert("Cerrado".into(), bounds(Some(dec!(60)), Some(dec!(40))));
        let config = MicroRegionConfiguration {
            requirements: vec![req],
        };
        assert!(validate_configuration(&config).is_err());
    }

    #[test]
    fn test_out_of_domain_percentage_rejected() {
        let mut req = MicroRegionRequirement::new("Brazil", true);
        req.percentage_per_region
            .insert("Mogiana".into(), bounds(None, Some(dec!(101))));
        let config = MicroRegionConfiguration {
            requirements: vec![req],
        };
        assert!(validate_configuration(&config).is_err());
    }

    #[test]
    fn test_empty_origin_rejected() {
        let config = MicroRegionConfiguration {
            requirements: vec![MicroRegionRequirement::new("  ", true)],
        };
        assert!(validate_configuration(&config).is_err());
    }

    #[test]
    fn test_empty_requirement_list_is_valid() {
        assert!(validate_configuration(&MicroRegionConfiguration::default()).is_ok());
    }

    #[test]
    fn test_duplicate_origins_tolerated() {
        let config = MicroRegionConfiguration {
            requirements: vec![
                MicroRegionRequirement::new("Colombia", true),
                MicroRegionRequirement::new("Colombia", false),
            ],
        };
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_total_percentage_bounds_skips_absent_max() {
        let mut req = MicroRegionRequirement::new("Brazil", true);
        req.percentage_per_region
            .insert("Cerrado".into(), bounds(Some(dec!(20)), Some(dec!(40))));
        // No max: contributes 0 to the max total (skip-if-absent).
        req.percentage_per_region
            .insert("Mogiana".into(), bounds(Some(dec!(10)), None));
        // No min: contributes 0 to the min total.
        req.percentage_per_region
            .insert("Sul de Minas".into(), bounds(None, Some(dec!(30))));

        let totals = req.total_percentage_bounds();
        assert_eq!(totals.min, dec!(30));
        assert_eq!(totals.max, dec!(70));
    }
}
