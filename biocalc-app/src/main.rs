use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod plotting;
mod scenario;
mod workflow;

/// Batch life-cycle assessment runner for solid biofuels.
#[derive(Debug, Parser)]
#[command(name = "biocalc", version, about)]
struct Cli {
    /// Scenario YAML file with one or more assessment forms
    #[arg(short, long, default_value = "biocalc-app/scenario.yaml")]
    scenario: PathBuf,

    /// Base directory for run outputs
    #[arg(short, long, default_value = "./data/runs")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- BioCalc Application ---");

    let scenario = scenario::load_scenario(&cli.scenario)?;

    let run_dir = cli.out_dir.join(format!(
        "acv_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {}", run_dir.display()))?;

    // Copy the scenario file to the output directory for traceability
    fs::copy(&cli.scenario, run_dir.join("scenario.yaml"))?;

    workflow::run_assessments(&scenario, &run_dir)?;

    println!(
        "\nAssessment run complete. Results are in '{}'",
        run_dir.display()
    );

    Ok(())
}
