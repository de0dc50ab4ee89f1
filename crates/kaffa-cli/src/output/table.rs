use kaffa_core::outcome::GradingReport;

pub fn print(report: &GradingReport) {
    if let Some(ref result) = report.screen_size {
        println!("=== Screen-size distribution ===\n");
        if result.is_valid {
            println!("  OK: all constraints satisfied\n");
        } else {
            let max_name = result
                .violations
                .iter()
                .map(|v| v.screen_size.len())
                .max()
                .unwrap_or(10);
            for v in &result.violations {
                println!(
                    "  {:<width$}  expected {}, measured {}%",
                    v.screen_size,
                    v.expected,
                    v.actual,
                    width = max_name
                );
            }
            println!();
        }
    }

    if let Some(ref result) = report.defects {
        println!("=== Taints & faults ===\n");
        if result.is_valid {
            println!("  OK: acceptance rules satisfied\n");
        } else {
            for v in &result.violations {
                println!("  {}", v.message);
            }
            println!();
        }
        if let Some(ref note) = result.note {
            println!("  Note: {note}\n");
        }
    }

    if report.is_valid {
        println!("Overall: PASS");
    } else {
        println!("Overall: FAIL");
    }
}
