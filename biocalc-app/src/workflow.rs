use crate::plotting;
use crate::scenario::{NamedAssessment, ScenarioFile};
use anyhow::{Context, Result};
use biocalc_core::{
    engine,
    factors::fossil_reference,
    report::{write_json_report, PhaseBreakdownWriter},
};
use biocalc_schemas::{
    categories::FossilComparator,
    input::AssessmentInput,
    report::AssessmentReport,
    result::LifecycleResult,
};
use serde::Serialize;
use std::path::Path;

/// One line of the cross-assessment run summary.
#[derive(Debug, Serialize)]
struct RunSummaryRow {
    assessment: String,
    total_kg_co2eq_per_mj: f64,
    efficiency_pct: f64,
    credit_units: i64,
}

/// Runs every assessment in the scenario, writes its reports into the
/// run directory and closes with a cross-assessment summary CSV.
pub fn run_assessments(scenario: &ScenarioFile, run_dir: &Path) -> Result<()> {
    let mut summary = Vec::new();
    for assessment in &scenario.assessments {
        let result = run_one(assessment, run_dir)?;
        summary.push(RunSummaryRow {
            assessment: assessment.name.clone(),
            total_kg_co2eq_per_mj: result.total,
            efficiency_pct: result.efficiency_pct,
            credit_units: result.credit_units,
        });
    }
    write_run_summary(run_dir, &summary)?;
    Ok(())
}

fn write_run_summary(run_dir: &Path, rows: &[RunSummaryRow]) -> Result<()> {
    let path = run_dir.join("run_summary.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("\n[Workflow] Run summary written to '{}'.", path.display());
    Ok(())
}

fn run_one(assessment: &NamedAssessment, run_dir: &Path) -> Result<LifecycleResult> {
    println!("\n--- [Workflow] Assessing '{}' ---", assessment.name);

    let input = assessment.form.resolve();
    let result = engine::assess(&input);

    print_summary_report(&assessment.name, &input, &result);

    let slug = slugify(&assessment.name);

    let json_path = run_dir.join(format!("{slug}_report.json"));
    let report = AssessmentReport::new(chrono::Utc::now().to_rfc3339(), &input, result.clone());
    write_json_report(&json_path.to_string_lossy(), &report)
        .with_context(|| format!("Failed to write JSON report for '{}'", assessment.name))?;

    let csv_path = run_dir.join(format!("{slug}_phase_breakdown.csv"));
    let mut breakdown = PhaseBreakdownWriter::new(&csv_path.to_string_lossy())
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;
    breakdown
        .write_result(&result)
        .with_context(|| format!("Failed to write phase breakdown for '{}'", assessment.name))?;

    let png_path = run_dir.join(format!("{slug}_emissions_by_phase.png"));
    plotting::plot_phase_emissions(&png_path, &assessment.name, &result)?;

    Ok(result)
}

fn print_summary_report(name: &str, input: &AssessmentInput, result: &LifecycleResult) {
    println!("\n--- [Assessment Summary] ---");
    println!("========================================");
    println!("Assessment: {}", name);
    if let Some(biomass) = input.biomass {
        println!("  - Feedstock:   {}", biomass.name());
    }
    if let Some(region) = input.region {
        println!("  - Region:      {}", region.name());
    }
    println!("  - Heat value:  {:.1} MJ/kg", result.heat_value_mj_per_kg);
    if input.annual_production_kg > 0.0 {
        println!("  - Production:  {:.0} kg/year", input.annual_production_kg);
    }
    println!("----------------------------------------");

    println!("\nEmissions by Phase (kg CO2eq/MJ):");
    for (label, value) in result.phases() {
        println!("  - {:<20} {:>12.6}", label, value);
    }
    println!("  --------------------------------------");
    println!("  - {:<20} {:>12.6}", "Total", result.total);

    println!("\nIndustrial Breakdown (kg CO2eq/MJ):");
    let breakdown = &result.industrial_breakdown;
    println!("  - {:<20} {:>12.6}", "Electricity", breakdown.electricity);
    println!("  - {:<20} {:>12.6}", "Fuels", breakdown.fuels);
    println!("  - {:<20} {:>12.6}", "Co-generation", breakdown.cogeneration);
    println!("  - {:<20} {:>12.6}", "Process inputs", breakdown.process_inputs);

    println!("\nFossil References (kg CO2eq/MJ):");
    for comparator in FossilComparator::ALL {
        println!(
            "  - {:<38} {:>8.4}",
            comparator.name(),
            fossil_reference(comparator)
        );
    }

    println!("\nDerived Metrics:");
    println!(
        "  - Environmental efficiency: {:.1}% vs. weighted fossil reference",
        result.efficiency_pct
    );
    println!("  - Eligible credit units:    {}", result.credit_units);

    println!("\nMethodology Comparison:");
    let methodologies = [
        ("Attributional", result.methodologies.attributional),
        ("Circular footprint", result.methodologies.circular_footprint),
        ("Zero burden", result.methodologies.zero_burden),
    ];
    for (label, outcome) in methodologies {
        println!(
            "  - {:<20} delta {:>10.6} kg CO2eq/MJ | efficiency {:>7.1}%",
            label, outcome.adjusted_delta, outcome.efficiency_pct
        );
    }
    println!("========================================");
}

/// File-name-safe version of an assessment name.
fn slugify(name: &str) -> String {
    let mut slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    while slug.contains("__") {
        slug = slug.replace("__", "_");
    }
    slug.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_non_alphanumerics() {
        assert_eq!(slugify("Eucalyptus pellet plant"), "eucalyptus_pellet_plant");
        assert_eq!(slugify("  Run #2 (draft)  "), "run_2_draft");
        assert_eq!(slugify("___"), "");
    }
}
