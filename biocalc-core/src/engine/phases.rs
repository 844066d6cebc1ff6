//! Per-phase emission calculators.
//!
//! Each calculator is a pure function over the typed input and the static
//! factor tables, returning kg CO₂eq per MJ of biofuel. A calculator whose
//! required inputs are missing returns 0 so that a partial input record
//! still aggregates to a valid result; the only guarded failure modes are
//! the divisions by annual production, efficiency and transported energy.
//!
//! `heat_value` is looked up once per invocation by the façade and passed
//! to every calculator that normalizes mass to energy.

use crate::factors::{
    biomass_profile, distribution_factor, electricity_factor, fuel_profile, input_material_factor,
    transport_profile, DEFAULT_ROAD_FACTOR,
};
use crate::land_use::land_use_factor;
use biocalc_schemas::categories::{DistributionMode, IndustrialFuel, InputMaterial, VehicleClass};
use biocalc_schemas::input::AssessmentInput;
use biocalc_schemas::result::IndustrialBreakdown;

/// Biomass production, plus the corn-starch additive when present.
pub fn agricultural(input: &AssessmentInput, heat_value: f64) -> f64 {
    let Some(biomass) = input.biomass else {
        return 0.0;
    };
    let profile = biomass_profile(biomass);

    let mut impact = profile.emission_factor * heat_value * input.specific_yield_factor;
    if input.corn_starch_kg_per_mj != 0.0 {
        impact += input.corn_starch_kg_per_mj
            * input_material_factor(InputMaterial::CornStarch)
            * heat_value;
    }
    impact
}

/// Land-use change for the production region; sign preserved, a negative
/// value is a net carbon credit.
pub fn land_use_change(input: &AssessmentInput, heat_value: f64) -> f64 {
    let (Some(biomass), Some(region)) = (input.biomass, input.region) else {
        return 0.0;
    };
    land_use_factor(region, biomass) * (input.land_use_allocation_pct / 100.0) * heat_value
}

/// Haulage of raw biomass from field to plant, on a t·km basis.
pub fn biomass_transport(input: &AssessmentInput, heat_value: f64) -> f64 {
    let Some(vehicle) = input.transport_vehicle else {
        return 0.0;
    };
    if input.transport_distance_km == 0.0 || input.biomass_quantity_kg == 0.0 {
        return 0.0;
    }

    let tonnes = input.biomass_quantity_kg / 1000.0;
    let impact = transport_profile(vehicle).emission_factor * tonnes * input.transport_distance_km;
    impact / (input.biomass_quantity_kg * heat_value)
}

/// Industrial processing: electricity, fuels, co-generation and process
/// inputs, each normalized by the annual production volume. A missing
/// annual volume zeroes the whole phase.
pub fn industrial(input: &AssessmentInput, heat_value: f64) -> IndustrialBreakdown {
    IndustrialBreakdown {
        electricity: industrial_electricity(input, heat_value),
        fuels: industrial_fuels(input, heat_value),
        cogeneration: industrial_cogeneration(input, heat_value),
        process_inputs: industrial_process_inputs(input, heat_value),
    }
}

fn industrial_electricity(input: &AssessmentInput, heat_value: f64) -> f64 {
    if input.electricity_kwh == 0.0 || input.annual_production_kg == 0.0 {
        return 0.0;
    }
    let annual_impact = input.electricity_kwh * electricity_factor(input.electricity_source);
    annual_impact / input.annual_production_kg * heat_value
}

fn industrial_fuels(input: &AssessmentInput, heat_value: f64) -> f64 {
    if input.annual_production_kg == 0.0 {
        return 0.0;
    }

    let mut annual_impact = 0.0;
    if input.diesel_l != 0.0 {
        annual_impact += input.diesel_l * fuel_profile(IndustrialFuel::Diesel).total();
    }
    if input.natural_gas_nm3 != 0.0 {
        annual_impact += input.natural_gas_nm3 * fuel_profile(IndustrialFuel::NaturalGas).total();
    }
    annual_impact / input.annual_production_kg * heat_value
}

fn industrial_cogeneration(input: &AssessmentInput, heat_value: f64) -> f64 {
    if input.cogeneration_biomass_kg == 0.0 || input.annual_production_kg == 0.0 {
        return 0.0;
    }
    let combustion_factor = input
        .biomass
        .map(|b| biomass_profile(b).combustion_factor)
        .unwrap_or(0.0);
    if combustion_factor == 0.0 {
        return 0.0;
    }

    let annual_impact = input.cogeneration_biomass_kg * combustion_factor;
    annual_impact / input.annual_production_kg * heat_value
}

fn industrial_process_inputs(input: &AssessmentInput, heat_value: f64) -> f64 {
    if input.annual_production_kg == 0.0 {
        return 0.0;
    }

    let mut annual_impact = 0.0;
    if input.water_l != 0.0 {
        annual_impact += input.water_l * input_material_factor(InputMaterial::Water);
    }
    if input.lubricant_oil_kg != 0.0 {
        annual_impact += input.lubricant_oil_kg * input_material_factor(InputMaterial::LubricantOil);
    }
    if input.silica_sand_kg != 0.0 {
        annual_impact += input.silica_sand_kg * input_material_factor(InputMaterial::SilicaSand);
    }
    annual_impact / input.annual_production_kg * heat_value
}

/// Distribution to market: an independent domestic and export leg, summed
/// unconditionally (each is zero when its quantity field is absent).
pub fn distribution(input: &AssessmentInput, heat_value: f64) -> f64 {
    domestic_distribution(input, heat_value) + export_distribution(input, heat_value)
}

fn domestic_distribution(input: &AssessmentInput, heat_value: f64) -> f64 {
    if input.domestic_quantity_t == 0.0 || input.domestic_distance_km == 0.0 {
        return 0.0;
    }

    let tonnes = input.domestic_quantity_t;
    let distance = input.domestic_distance_km;
    let impact = modal_split_impact(
        tonnes,
        distance,
        input.domestic_rail_pct,
        input.domestic_waterway_pct,
        input.domestic_road_vehicle,
    );
    normalize_distribution(impact, tonnes, heat_value)
}

fn export_distribution(input: &AssessmentInput, heat_value: f64) -> f64 {
    if input.export_quantity_t == 0.0 {
        return 0.0;
    }

    let tonnes = input.export_quantity_t;
    let mut impact = 0.0;
    if input.port_distance_km != 0.0 {
        impact += modal_split_impact(
            tonnes,
            input.port_distance_km,
            input.port_rail_pct,
            input.port_waterway_pct,
            input.port_road_vehicle,
        );
    }
    if input.sea_distance_km != 0.0 {
        impact += tonnes * input.sea_distance_km * distribution_factor(DistributionMode::Ship);
    }
    normalize_distribution(impact, tonnes, heat_value)
}

/// One overland leg split across rail, waterway and a road remainder.
/// The road fraction is clamped at zero: a split oversubscribed past 100 %
/// must not contribute negative distance-weighted emissions.
fn modal_split_impact(
    tonnes: f64,
    distance: f64,
    rail_pct: f64,
    waterway_pct: f64,
    road_vehicle: Option<VehicleClass>,
) -> f64 {
    let mut impact = 0.0;
    if rail_pct != 0.0 {
        impact += tonnes * distance * (rail_pct / 100.0) * distribution_factor(DistributionMode::Rail);
    }
    if waterway_pct != 0.0 {
        impact +=
            tonnes * distance * (waterway_pct / 100.0) * distribution_factor(DistributionMode::Barge);
    }

    let road_fraction = (1.0 - rail_pct / 100.0 - waterway_pct / 100.0).max(0.0);
    if road_fraction > 0.0 {
        let road_factor = road_vehicle
            .map(|v| transport_profile(v).emission_factor)
            .unwrap_or(DEFAULT_ROAD_FACTOR);
        impact += tonnes * distance * road_fraction * road_factor;
    }
    impact
}

fn normalize_distribution(impact: f64, tonnes: f64, heat_value: f64) -> f64 {
    let transported_mj = tonnes * 1000.0 / heat_value;
    if transported_mj > 0.0 {
        impact / transported_mj
    } else {
        0.0
    }
}

/// Stationary combustion at the point of use, scaled by combustion
/// efficiency. Only non-biogenic pollutant impact is counted; biogenic CO₂
/// is climate-neutral and excluded.
pub fn end_use(input: &AssessmentInput) -> f64 {
    let factor = input
        .biomass
        .map(|b| biomass_profile(b).stationary_combustion_factor)
        .unwrap_or(0.0);

    let efficiency = input.combustion_efficiency_pct / 100.0;
    if efficiency > 0.0 {
        factor / efficiency
    } else {
        0.0
    }
}
