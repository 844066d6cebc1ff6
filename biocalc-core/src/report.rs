use crate::error::BiocalcError;
use biocalc_schemas::report::AssessmentReport;
use biocalc_schemas::result::LifecycleResult;
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io;

#[derive(Debug, Serialize)]
struct PhaseRow {
    phase: String,
    emission_kg_co2eq_per_mj: f64,
    share_pct: f64,
}

/// Writes the per-phase emission breakdown of a result as a CSV table,
/// one row per phase plus a trailing total row.
pub struct PhaseBreakdownWriter {
    writer: Writer<fs::File>,
}

impl PhaseBreakdownWriter {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn write_result(&mut self, result: &LifecycleResult) -> Result<(), anyhow::Error> {
        for (label, value) in result.phases() {
            self.writer.serialize(PhaseRow {
                phase: label.to_string(),
                emission_kg_co2eq_per_mj: value,
                share_pct: share_of_total(value, result.total),
            })?;
        }
        self.writer.serialize(PhaseRow {
            phase: "Total".to_string(),
            emission_kg_co2eq_per_mj: result.total,
            share_pct: share_of_total(result.total, result.total),
        })?;
        self.writer.flush()?;
        Ok(())
    }
}

fn share_of_total(value: f64, total: f64) -> f64 {
    if total != 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// Serializes the export artifact to a pretty-printed JSON file.
pub fn write_json_report(path: &str, report: &AssessmentReport) -> Result<(), BiocalcError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| BiocalcError::FileIO(path.to_string(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assess;
    use biocalc_schemas::categories::BiomassType;
    use biocalc_schemas::input::AssessmentInput;
    use std::env;

    fn scratch_path(name: &str) -> String {
        env::temp_dir()
            .join(format!("biocalc_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    fn sample_result() -> LifecycleResult {
        assess(&AssessmentInput {
            biomass: Some(BiomassType::EucalyptusResidue),
            annual_production_kg: 1_000_000.0,
            ..Default::default()
        })
    }

    #[test]
    fn breakdown_has_one_row_per_phase_plus_total() {
        let path = scratch_path("breakdown.csv");
        let mut writer = PhaseBreakdownWriter::new(&path).unwrap();
        writer.write_result(&sample_result()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // Header, six phases, total.
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("phase,"));
        assert!(lines[7].starts_with("Total,"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn json_report_file_parses_back_to_equal_report() {
        let path = scratch_path("report.json");
        let input = AssessmentInput {
            biomass: Some(BiomassType::EucalyptusResidue),
            ..Default::default()
        };
        let report =
            AssessmentReport::new("2024-05-01T12:00:00Z".into(), &input, sample_result());
        write_json_report(&path, &report).unwrap();

        let parsed: AssessmentReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, report);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        assert_eq!(share_of_total(0.0, 0.0), 0.0);
        assert_eq!(share_of_total(1.0, 0.0), 0.0);
    }
}
