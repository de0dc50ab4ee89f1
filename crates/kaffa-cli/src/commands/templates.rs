use kaffa_core::defects::builtin;
use kaffa_core::error::KaffaError;
use kaffa_core::TemplateParameters;

pub fn list() -> Result<(), KaffaError> {
    println!("Available predefined templates:\n");
    for t in builtin::templates() {
        let stats = kaffa_core::defects::stats(&t.configuration);
        println!(
            "  {:<20} {} ({} taints, {} faults)",
            t.id, t.name, stats.taint_count, stats.fault_count
        );
        println!("           {}", t.description);
        println!();
    }
    Ok(())
}

pub fn explain(id: &str) -> Result<(), KaffaError> {
    let t = lookup(id)?;
    let config = &t.configuration;

    println!("{}\n", t.name);
    println!("{}\n", t.description);

    if !config.taints.is_empty() {
        println!("Taints:");
        for d in &config.taints {
            println!("  {:<14} {}", d.name, d.scale);
        }
        println!();
    }
    if !config.faults.is_empty() {
        println!("Faults:");
        for d in &config.faults {
            println!("  {:<14} {}", d.name, d.scale);
        }
        println!();
    }

    let rules = &config.rules;
    println!("Acceptance rules:");
    if rules.zero_tolerance {
        println!("  zero tolerance: any recorded taint or fault fails the sample");
    }
    if let Some(n) = rules.max_taints {
        println!("  at most {n} taint(s)");
    }
    if let Some(n) = rules.max_faults {
        println!("  at most {n} fault(s)");
    }
    if let Some(n) = rules.max_combined {
        println!("  at most {n} defect(s) combined");
    }
    if let Some(v) = rules.max_taint_intensity {
        println!("  taint intensity up to {v}");
    }
    if let Some(v) = rules.max_fault_intensity {
        println!("  fault intensity up to {v}");
    }
    if !rules.any_set() {
        println!("  (none)");
    }
    if let Some(ref notes) = config.notes {
        println!("\n{notes}");
    }

    Ok(())
}

pub fn show(id: &str) -> Result<(), KaffaError> {
    let t = lookup(id)?;
    let params = TemplateParameters::Defects(t.configuration.clone());
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

fn lookup(id: &str) -> Result<&'static builtin::DefectTemplate, KaffaError> {
    builtin::template(id).ok_or_else(|| {
        KaffaError::ConfigInvalid(format!(
            "unknown template '{}'. Available: {}",
            id,
            builtin::TEMPLATE_IDS.join(", ")
        ))
    })
}
