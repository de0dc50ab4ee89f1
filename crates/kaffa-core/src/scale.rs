use crate::error::ScaleError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named step on a wording scale.
///
/// `value` maps the human label to a numeric severity so aggregate
/// comparisons (intensity ceilings) work across scale kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOption {
    pub label: String,
    pub value: Decimal,
    pub display_order: i32,
}

/// How a sensory attribute's value is measured: either a numeric range
/// stepped by an increment, or an ordered set of named options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeScale {
    Numeric {
        min: Decimal,
        max: Decimal,
        increment: Decimal,
    },
    Wording { options: Vec<ScaleOption> },
}

impl AttributeScale {
    pub fn numeric(min: Decimal, max: Decimal, increment: Decimal) -> AttributeScale {
        AttributeScale::Numeric {
            min,
            max,
            increment,
        }
    }

    /// The default intensity scale for new defect definitions: 1 to 5 in
    /// half-point steps.
    pub fn default_intensity() -> AttributeScale {
        AttributeScale::Numeric {
            min: Decimal::ONE,
            max: Decimal::from(5),
            increment: Decimal::new(5, 1),
        }
    }

    /// Check that the scale is well-formed.
    ///
    /// Advisory: a failure is an ordinary return value, never a panic. For
    /// numeric scales the range must also divide evenly by the increment so
    /// the UI gets a clean step sequence.
    pub fn validate(&self) -> Result<(), ScaleError> {
        match self {
            AttributeScale::Numeric {
                min,
                max,
                increment,
            } => {
                if min >= max {
                    return Err(ScaleError::InvertedBounds {
                        min: *min,
                        max: *max,
                    });
                }
                if *increment <= Decimal::ZERO {
                    return Err(ScaleError::NonPositiveIncrement(*increment));
                }
                if (*max - *min) % *increment != Decimal::ZERO {
                    return Err(ScaleError::UnevenSteps {
                        min: *min,
                        max: *max,
                        increment: *increment,
                    });
                }
                Ok(())
            }
            AttributeScale::Wording { options } => {
                if options.is_empty() {
                    return Err(ScaleError::EmptyOptions);
                }
                for (i, a) in options.iter().enumerate() {
                    for b in &options[i + 1..] {
                        if a.display_order == b.display_order {
                            return Err(ScaleError::DuplicateDisplayOrder {
                                a: a.label.clone(),
                                b: b.label.clone(),
                                order: a.display_order,
                            });
                        }
                        if a.value == b.value {
                            return Err(ScaleError::DuplicateValue {
                                a: a.label.clone(),
                                b: b.label.clone(),
                                value: a.value,
                            });
                        }
                    }
                }
                Ok(())
            }
        }
    }

    /// The largest severity this scale can express.
    pub fn max_value(&self) -> Option<Decimal> {
        match self {
            AttributeScale::Numeric { max, .. } => Some(*max),
            AttributeScale::Wording { options } => options.iter().map(|o| o.value).max(),
        }
    }
}

impl fmt::Display for AttributeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeScale::Numeric {
                min,
                max,
                increment,
            } => write!(f, "{min}-{max} (step {increment})"),
            AttributeScale::Wording { options } => {
                let mut sorted: Vec<&ScaleOption> = options.iter().collect();
                sorted.sort_by_key(|o| o.display_order);
                let labels: Vec<&str> = sorted.iter().map(|o| o.label.as_str()).collect();
                write!(f, "{}", labels.join(" / "))
            }
        }
    }
}
