use serde::{Deserialize, Serialize};

/// Industrial-phase sub-terms, each already normalized to kg CO₂eq/MJ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustrialBreakdown {
    pub electricity: f64,
    pub fuels: f64,
    pub cogeneration: f64,
    pub process_inputs: f64,
}

impl IndustrialBreakdown {
    pub fn total(&self) -> f64 {
        self.electricity + self.fuels + self.cogeneration + self.process_inputs
    }
}

/// Outcome of one accounting methodology applied to the fossil-vs-bio
/// delta: the adjusted avoided-emission delta (kg CO₂eq/MJ) and the
/// efficiency percentage it implies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodologyOutcome {
    pub adjusted_delta: f64,
    pub efficiency_pct: f64,
}

/// All three methodology outcomes, computed independently on every
/// invocation and kept side by side for comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodologyComparison {
    pub attributional: MethodologyOutcome,
    pub circular_footprint: MethodologyOutcome,
    pub zero_burden: MethodologyOutcome,
}

/// Result of one engine invocation. Phase values are kg CO₂eq per MJ of
/// biofuel; every field is always present and finite — a phase whose
/// preconditions are unmet contributes exactly zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifecycleResult {
    pub agricultural: f64,
    pub land_use_change: f64,
    pub biomass_transport: f64,
    pub industrial: f64,
    pub industrial_breakdown: IndustrialBreakdown,
    pub distribution: f64,
    pub end_use: f64,
    /// Sum of the six phase values
    pub total: f64,
    /// Emission reduction vs. the weighted fossil reference, in percent
    pub efficiency_pct: f64,
    /// Whole decarbonization credit units earned by the annual production
    pub credit_units: i64,
    /// Heat value (MJ/kg) used for energy normalization in this run
    pub heat_value_mj_per_kg: f64,
    pub methodologies: MethodologyComparison,
}

impl LifecycleResult {
    /// Phase values in presentation order, labelled.
    pub fn phases(&self) -> [(&'static str, f64); 6] {
        [
            ("Agricultural", self.agricultural),
            ("Land-use change", self.land_use_change),
            ("Biomass transport", self.biomass_transport),
            ("Industrial", self.industrial),
            ("Distribution", self.distribution),
            ("End use", self.end_use),
        ]
    }
}
