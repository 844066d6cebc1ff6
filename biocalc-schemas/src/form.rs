use crate::categories::{BiomassType, ElectricitySource, Region, VehicleClass};
use crate::input::AssessmentInput;
use serde::{Deserialize, Serialize};

/// One assessment as it arrives from interactive entry: every field is
/// optional text. Numeric fields are parsed on resolution; empty or
/// unparsable values fall back to their documented defaults so that a
/// half-filled form still produces a valid (partial) result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentForm {
    // Agricultural phase
    pub biomass: Option<String>,
    pub region: Option<String>,
    /// kg biomass per kg biofuel, defaults to 1
    pub specific_yield_factor: Option<String>,
    /// kg corn starch per MJ of biofuel
    pub corn_starch: Option<String>,
    /// % of biomass considered for land-use change, defaults to 100
    pub land_use_allocation_pct: Option<String>,

    // Biomass transport
    pub transport_distance_km: Option<String>,
    pub transport_vehicle: Option<String>,
    pub biomass_quantity_kg: Option<String>,

    // Industrial phase
    pub annual_production_kg: Option<String>,
    pub electricity_kwh: Option<String>,
    pub electricity_source: Option<String>,
    pub diesel_l: Option<String>,
    pub natural_gas_nm3: Option<String>,
    pub cogeneration_biomass_kg: Option<String>,
    pub water_l: Option<String>,
    pub lubricant_oil_kg: Option<String>,
    pub silica_sand_kg: Option<String>,

    // Distribution, domestic market
    pub domestic_quantity_t: Option<String>,
    pub domestic_distance_km: Option<String>,
    pub domestic_rail_pct: Option<String>,
    pub domestic_waterway_pct: Option<String>,
    pub domestic_road_vehicle: Option<String>,

    // Distribution, export
    pub export_quantity_t: Option<String>,
    pub port_distance_km: Option<String>,
    pub port_road_vehicle: Option<String>,
    pub port_rail_pct: Option<String>,
    pub port_waterway_pct: Option<String>,
    pub sea_distance_km: Option<String>,

    // End use
    /// Combustion efficiency %, defaults to 85
    pub combustion_efficiency_pct: Option<String>,
}

impl AssessmentForm {
    /// Resolves the raw form into a typed engine input. Resolution never
    /// fails: unknown categorical keys become `None` and malformed numbers
    /// take their fallback value.
    pub fn resolve(&self) -> AssessmentInput {
        AssessmentInput {
            biomass: parse_key(&self.biomass, BiomassType::from_key),
            region: parse_key(&self.region, Region::from_key),
            specific_yield_factor: parse_or(&self.specific_yield_factor, 1.0),
            corn_starch_kg_per_mj: parse_or(&self.corn_starch, 0.0),
            land_use_allocation_pct: parse_or(&self.land_use_allocation_pct, 100.0),
            transport_distance_km: parse_or(&self.transport_distance_km, 0.0),
            transport_vehicle: parse_key(&self.transport_vehicle, VehicleClass::from_key),
            biomass_quantity_kg: parse_or(&self.biomass_quantity_kg, 0.0),
            annual_production_kg: parse_or(&self.annual_production_kg, 0.0),
            electricity_kwh: parse_or(&self.electricity_kwh, 0.0),
            electricity_source: parse_key(&self.electricity_source, ElectricitySource::from_key)
                .unwrap_or_default(),
            diesel_l: parse_or(&self.diesel_l, 0.0),
            natural_gas_nm3: parse_or(&self.natural_gas_nm3, 0.0),
            cogeneration_biomass_kg: parse_or(&self.cogeneration_biomass_kg, 0.0),
            water_l: parse_or(&self.water_l, 0.0),
            lubricant_oil_kg: parse_or(&self.lubricant_oil_kg, 0.0),
            silica_sand_kg: parse_or(&self.silica_sand_kg, 0.0),
            domestic_quantity_t: parse_or(&self.domestic_quantity_t, 0.0),
            domestic_distance_km: parse_or(&self.domestic_distance_km, 0.0),
            domestic_rail_pct: parse_or(&self.domestic_rail_pct, 0.0),
            domestic_waterway_pct: parse_or(&self.domestic_waterway_pct, 0.0),
            domestic_road_vehicle: parse_key(&self.domestic_road_vehicle, VehicleClass::from_key),
            export_quantity_t: parse_or(&self.export_quantity_t, 0.0),
            port_distance_km: parse_or(&self.port_distance_km, 0.0),
            port_road_vehicle: parse_key(&self.port_road_vehicle, VehicleClass::from_key),
            port_rail_pct: parse_or(&self.port_rail_pct, 0.0),
            port_waterway_pct: parse_or(&self.port_waterway_pct, 0.0),
            sea_distance_km: parse_or(&self.sea_distance_km, 0.0),
            combustion_efficiency_pct: parse_or(&self.combustion_efficiency_pct, 85.0),
        }
    }
}

fn parse_or(field: &Option<String>, fallback: f64) -> f64 {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

fn parse_key<T>(field: &Option<String>, from_key: fn(&str) -> Option<T>) -> Option<T> {
    field.as_deref().map(str::trim).and_then(from_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_resolves_to_documented_defaults() {
        let input = AssessmentForm::default().resolve();
        assert_eq!(input.biomass, None);
        assert_eq!(input.region, None);
        assert_eq!(input.specific_yield_factor, 1.0);
        assert_eq!(input.land_use_allocation_pct, 100.0);
        assert_eq!(input.combustion_efficiency_pct, 85.0);
        assert_eq!(input.electricity_source, ElectricitySource::GridMediumVoltage);
        assert_eq!(input.annual_production_kg, 0.0);
    }

    #[test]
    fn garbage_numerics_fall_back() {
        let form = AssessmentForm {
            specific_yield_factor: Some("not a number".into()),
            annual_production_kg: Some("".into()),
            combustion_efficiency_pct: Some("  ".into()),
            diesel_l: Some("NaN".into()),
            ..Default::default()
        };
        let input = form.resolve();
        assert_eq!(input.specific_yield_factor, 1.0);
        assert_eq!(input.annual_production_kg, 0.0);
        assert_eq!(input.combustion_efficiency_pct, 85.0);
        assert_eq!(input.diesel_l, 0.0);
    }

    #[test]
    fn unknown_categorical_keys_resolve_to_none() {
        let form = AssessmentForm {
            biomass: Some("bagasse".into()),
            transport_vehicle: Some("ox_cart".into()),
            electricity_source: Some("fusion".into()),
            ..Default::default()
        };
        let input = form.resolve();
        assert_eq!(input.biomass, None);
        assert_eq!(input.transport_vehicle, None);
        // Electricity falls back to the grid mix rather than zeroing out.
        assert_eq!(input.electricity_source, ElectricitySource::GridMediumVoltage);
    }

    #[test]
    fn numeric_fields_parse_with_whitespace() {
        let form = AssessmentForm {
            biomass: Some("eucalyptus_residue".into()),
            transport_distance_km: Some(" 150 ".into()),
            biomass_quantity_kg: Some("1000000".into()),
            ..Default::default()
        };
        let input = form.resolve();
        assert_eq!(input.biomass, Some(BiomassType::EucalyptusResidue));
        assert_eq!(input.transport_distance_km, 150.0);
        assert_eq!(input.biomass_quantity_kg, 1_000_000.0);
    }
}
