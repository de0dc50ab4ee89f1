use kaffa_core::error::KaffaError;
use kaffa_core::TemplateParameters;
use std::path::Path;

pub fn run(file: &Path) -> Result<(), KaffaError> {
    let blocks = super::load_parameter_blocks(file)?;

    for block in &blocks {
        match block {
            TemplateParameters::ScreenSize(reqs) => {
                println!(
                    "screen_size block is valid ({} constraint(s)).",
                    reqs.constraints.len()
                );
                for constraint in &reqs.constraints {
                    println!(
                        "  {:<12} {}",
                        constraint.screen_size,
                        constraint.display_text()
                    );
                }
            }
            TemplateParameters::Defects(config) => {
                let stats = kaffa_core::defects::stats(config);
                println!(
                    "defects block is valid ({} taint(s), {} fault(s)).",
                    stats.taint_count, stats.fault_count
                );
            }
            TemplateParameters::MicroRegion(config) => {
                println!(
                    "micro_region block is valid ({} requirement(s)).",
                    config.requirements.len()
                );
                for req in &config.requirements {
                    println!("  {:<12} {}", req.origin, req.display_text());
                }
            }
        }
    }

    // Valid-but-suspect configurations get warnings, not errors. The
    // sanity check flags constraints the grading evaluator silently
    // tolerates, so its findings are advisory here.
    let mut warnings = Vec::new();
    for block in &blocks {
        match block {
            TemplateParameters::ScreenSize(reqs) => {
                if let Err(e) = kaffa_core::screen::check_requirements(reqs) {
                    warnings.push(match e {
                        KaffaError::ConfigInvalid(msg) => msg,
                        other => other.to_string(),
                    });
                }
                if reqs.constraints.is_empty() {
                    warnings.push("screen_size block has no constraints".to_string());
                }
            }
            TemplateParameters::Defects(config) if !config.rules.any_set() => {
                warnings.push(
                    "defects block sets no acceptance rules; grading is never gated".to_string(),
                );
            }
            _ => {}
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
