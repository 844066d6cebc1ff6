use crate::categories::{BiomassType, ElectricitySource, Region, VehicleClass};
use serde::{Deserialize, Serialize};

/// Typed input for one engine invocation. Owned by the caller; the engine
/// borrows it and never mutates it. Numeric fields are plain `f64` with
/// zero meaning "not provided" — missing data degrades the affected phase
/// to zero instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    // Agricultural phase
    pub biomass: Option<BiomassType>,
    pub region: Option<Region>,
    /// kg biomass per kg biofuel
    pub specific_yield_factor: f64,
    /// kg corn starch per MJ of biofuel
    pub corn_starch_kg_per_mj: f64,
    /// % of biomass allocated to land-use change
    pub land_use_allocation_pct: f64,

    // Biomass transport
    pub transport_distance_km: f64,
    pub transport_vehicle: Option<VehicleClass>,
    pub biomass_quantity_kg: f64,

    // Industrial phase
    pub annual_production_kg: f64,
    pub electricity_kwh: f64,
    pub electricity_source: ElectricitySource,
    pub diesel_l: f64,
    pub natural_gas_nm3: f64,
    pub cogeneration_biomass_kg: f64,
    pub water_l: f64,
    pub lubricant_oil_kg: f64,
    pub silica_sand_kg: f64,

    // Distribution, domestic market
    pub domestic_quantity_t: f64,
    pub domestic_distance_km: f64,
    pub domestic_rail_pct: f64,
    pub domestic_waterway_pct: f64,
    pub domestic_road_vehicle: Option<VehicleClass>,

    // Distribution, export
    pub export_quantity_t: f64,
    pub port_distance_km: f64,
    pub port_road_vehicle: Option<VehicleClass>,
    pub port_rail_pct: f64,
    pub port_waterway_pct: f64,
    pub sea_distance_km: f64,

    // End use
    pub combustion_efficiency_pct: f64,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        AssessmentInput {
            biomass: None,
            region: None,
            specific_yield_factor: 1.0,
            corn_starch_kg_per_mj: 0.0,
            land_use_allocation_pct: 100.0,
            transport_distance_km: 0.0,
            transport_vehicle: None,
            biomass_quantity_kg: 0.0,
            annual_production_kg: 0.0,
            electricity_kwh: 0.0,
            electricity_source: ElectricitySource::default(),
            diesel_l: 0.0,
            natural_gas_nm3: 0.0,
            cogeneration_biomass_kg: 0.0,
            water_l: 0.0,
            lubricant_oil_kg: 0.0,
            silica_sand_kg: 0.0,
            domestic_quantity_t: 0.0,
            domestic_distance_km: 0.0,
            domestic_rail_pct: 0.0,
            domestic_waterway_pct: 0.0,
            domestic_road_vehicle: None,
            export_quantity_t: 0.0,
            port_distance_km: 0.0,
            port_road_vehicle: None,
            port_rail_pct: 0.0,
            port_waterway_pct: 0.0,
            sea_distance_km: 0.0,
            combustion_efficiency_pct: 85.0,
        }
    }
}
