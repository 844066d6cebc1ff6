use crate::input::AssessmentInput;
use crate::result::LifecycleResult;
use serde::{Deserialize, Serialize};

/// Key input fields echoed back in the export artifact so a report is
/// interpretable without the original scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
    pub biomass: Option<String>,
    pub specific_yield_factor: f64,
    pub annual_production_kg: f64,
    pub heat_value_mj_per_kg: f64,
}

/// The on-demand JSON export artifact: a timestamp, the full result and a
/// summary of the key inputs. Serialization is the caller's concern; the
/// caller also supplies the RFC 3339 timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub generated_at: String,
    pub result: LifecycleResult,
    pub input_summary: InputSummary,
}

impl AssessmentReport {
    pub fn new(generated_at: String, input: &AssessmentInput, result: LifecycleResult) -> Self {
        let input_summary = InputSummary {
            biomass: input
                .biomass
                .and_then(|b| serde_json::to_value(b).ok())
                .and_then(|v| v.as_str().map(str::to_string)),
            specific_yield_factor: input.specific_yield_factor,
            annual_production_kg: input.annual_production_kg,
            heat_value_mj_per_kg: result.heat_value_mj_per_kg,
        };
        AssessmentReport {
            generated_at,
            result,
            input_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::BiomassType;
    use crate::result::{IndustrialBreakdown, MethodologyComparison, MethodologyOutcome};

    #[test]
    fn report_round_trips_through_json() {
        let result = LifecycleResult {
            agricultural: 0.39658,
            land_use_change: -0.0002,
            biomass_transport: 6.2e-6,
            industrial: 0.0123,
            industrial_breakdown: IndustrialBreakdown {
                electricity: 0.004,
                fuels: 0.005,
                cogeneration: 0.002,
                process_inputs: 0.0013,
            },
            distribution: 0.0031,
            end_use: 0.000434,
            total: 0.41241,
            efficiency_pct: -375.6,
            credit_units: 0,
            heat_value_mj_per_kg: 15.8,
            methodologies: MethodologyComparison {
                attributional: MethodologyOutcome {
                    adjusted_delta: -0.3257,
                    efficiency_pct: -375.6,
                },
                ..Default::default()
            },
        };
        let input = AssessmentInput {
            biomass: Some(BiomassType::EucalyptusResidue),
            annual_production_kg: 1_000_000.0,
            ..Default::default()
        };
        let report = AssessmentReport::new("2024-05-01T12:00:00Z".into(), &input, result);

        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: AssessmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn input_summary_uses_serde_key_for_biomass() {
        let input = AssessmentInput {
            biomass: Some(BiomassType::PeanutHusk),
            ..Default::default()
        };
        let report = AssessmentReport::new(String::new(), &input, LifecycleResult::default());
        assert_eq!(report.input_summary.biomass.as_deref(), Some("peanut_husk"));
    }

    #[test]
    fn input_summary_tolerates_missing_biomass() {
        let report = AssessmentReport::new(
            String::new(),
            &AssessmentInput::default(),
            LifecycleResult::default(),
        );
        assert_eq!(report.input_summary.biomass, None);
    }
}
