use kaffa_core::error::KaffaError;
use kaffa_core::outcome::GradingReport;

pub fn print(report: &GradingReport) -> Result<(), KaffaError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
