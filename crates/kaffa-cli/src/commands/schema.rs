use kaffa_core::error::KaffaError;

pub fn run() -> Result<(), KaffaError> {
    print!(
        r#"Template Parameters JSON Schema
===============================

A parameters file holds one configuration block (or an array of blocks)
as stored in a quality template's `parameters` field. Every block carries
a "kind" discriminator.

Decimal values (percentages, intensities, scale bounds) are quoted strings
to preserve exact precision (e.g. "0.5", not 0.5). Counts and display
orders are plain integers.

kind: "screen_size"
  constraints   (array, required)   Ordered list; order is display order.
    screen_size      (string)       e.g. "Screen 17", "Pan"
    constraint_type  (string)       "minimum" | "maximum" | "range" | "any"
    min_value        (string, opt)  Required for minimum and range
    max_value        (string, opt)  Required for maximum and range
    display_order    (int, opt)
  notes         (string, optional)

kind: "defects"
  taints, faults  (arrays, required) Defect definitions:
    id             (string)          Unique within the configuration
    name           (string)          Unique case-insensitively across
                                     taints AND faults
    category       (string)          "taint" | "fault"
    scale          (object)          {{"type": "numeric", "min", "max",
                                     "increment"}} or {{"type": "wording",
                                     "options": [{{"label", "value",
                                     "display_order"}}]}}
    description    (string, opt)
    display_order  (int)
  rules           (object, optional)
    max_taints, max_faults, max_combined      (int, opt, >= 0)
    max_taint_intensity, max_fault_intensity  (string, opt, > 0)
    zero_tolerance     (bool)        Mutually exclusive with the count limits
    validation_message (string, opt) Shown to graders alongside violations
  notes           (string, optional)

kind: "micro_region"
  requirements  (array, required)
    origin                 (string)  Growing origin, e.g. "Ethiopia"
    required_micro_regions (array)   Empty means any region is acceptable
    percentage_per_region  (object, opt) region -> {{"min", "max"}} in 0-100
    allow_mix              (bool)
    notes                  (string, opt)

Example:
{{
  "kind": "screen_size",
  "constraints": [
    {{ "screen_size": "Screen 17", "constraint_type": "minimum", "min_value": "60" }},
    {{ "screen_size": "Screen 16", "constraint_type": "maximum", "max_value": "20" }},
    {{ "screen_size": "Pan", "constraint_type": "any" }}
  ],
  "notes": "Brazil natural, screen 17 dominant"
}}

Measurements files for `kaffa check`:
{{
  "screen_sizes": {{ "Screen 17": "64", "Screen 16": "18" }},
  "defects": [
    {{ "name": "Earthy", "category": "taint", "intensity": "2.5" }}
  ]
}}

Predefined defect templates: `kaffa templates list`, then
`kaffa templates show <id>` to export one as a starting point.
"#
    );
    Ok(())
}
