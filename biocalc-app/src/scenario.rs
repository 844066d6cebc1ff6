use anyhow::{Context, Result};
use biocalc_schemas::form::AssessmentForm;
use serde::Deserialize;
use std::{fs, path::Path};

/// A batch of assessments loaded from one YAML scenario file. This is the
/// batch counterpart of interactive form entry: each entry carries the raw
/// form exactly as a user would have typed it.
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub schema_version: String,
    pub assessments: Vec<NamedAssessment>,
}

#[derive(Debug, Deserialize)]
pub struct NamedAssessment {
    pub name: String,
    pub form: AssessmentForm,
}

/// Loads and parses a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioFile> {
    println!("Loading scenario from '{}'...", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {:?}", path))?;
    let scenario: ScenarioFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

    println!(
        "Scenario '{}' loaded with {} assessment(s).",
        scenario.schema_version,
        scenario.assessments.len()
    );
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_yaml_parses_into_forms() {
        let yaml = r#"
schema_version: "1.0"
assessments:
  - name: Eucalyptus pellet plant
    form:
      biomass: "eucalyptus_residue"
      region: "sao_paulo"
      transport_distance_km: "150"
      transport_vehicle: "medium_truck"
      biomass_quantity_kg: "1000000"
      annual_production_kg: "1000000"
  - name: Empty draft
    form: {}
"#;
        let scenario: ScenarioFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.schema_version, "1.0");
        assert_eq!(scenario.assessments.len(), 2);

        let input = scenario.assessments[0].form.resolve();
        assert!(input.biomass.is_some());
        assert_eq!(input.transport_distance_km, 150.0);

        let draft = scenario.assessments[1].form.resolve();
        assert!(draft.biomass.is_none());
    }
}
