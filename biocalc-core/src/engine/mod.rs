//! The assessment engine: a fixed pipeline of pure phase calculators over
//! an immutable input snapshot and the static factor tables. No shared
//! accumulator is threaded between phases; the façade composes their
//! return values.

pub mod methodology;
pub mod phases;

use crate::factors::{biomass_profile, fossil_reference, DEFAULT_HEAT_VALUE};
use biocalc_schemas::categories::FossilComparator;
use biocalc_schemas::input::AssessmentInput;
use biocalc_schemas::result::LifecycleResult;

/// Runs a full life-cycle assessment for one input record.
///
/// The heat value of the selected biomass is looked up once and reused by
/// every phase that normalizes mass to energy. Phases with unmet
/// preconditions contribute exactly zero; the result is always finite.
pub fn assess(input: &AssessmentInput) -> LifecycleResult {
    let heat_value = input
        .biomass
        .map(|b| biomass_profile(b).heat_value)
        .unwrap_or(DEFAULT_HEAT_VALUE);

    let agricultural = phases::agricultural(input, heat_value);
    let land_use_change = phases::land_use_change(input, heat_value);
    let biomass_transport = phases::biomass_transport(input, heat_value);
    let industrial_breakdown = phases::industrial(input, heat_value);
    let industrial = industrial_breakdown.total();
    let distribution = phases::distribution(input, heat_value);
    let end_use = phases::end_use(input);

    let total =
        agricultural + land_use_change + biomass_transport + industrial + distribution + end_use;

    let fossil = fossil_reference(FossilComparator::WeightedAverage);
    let efficiency_pct = (fossil - total) / fossil * 100.0;
    let credit_units = credit_units(
        heat_value,
        input.annual_production_kg,
        fossil - total,
        efficiency_pct,
    );

    LifecycleResult {
        agricultural,
        land_use_change,
        biomass_transport,
        industrial,
        industrial_breakdown,
        distribution,
        end_use,
        total,
        efficiency_pct,
        credit_units,
        heat_value_mj_per_kg: heat_value,
        methodologies: methodology::compare(fossil, total),
    }
}

/// Whole decarbonization credit units earned by one year of production.
/// Fractional credits are not issued; no credits accrue unless the biofuel
/// actually beats the fossil reference and an annual volume is known.
fn credit_units(heat_value: f64, annual_production_kg: f64, delta: f64, efficiency_pct: f64) -> i64 {
    if efficiency_pct <= 0.0 || annual_production_kg == 0.0 {
        return 0;
    }
    let volume_t = annual_production_kg / 1000.0;
    (heat_value * volume_t * delta).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use biocalc_schemas::categories::{BiomassType, Region, VehicleClass};

    /// A fully populated plant scenario used across the façade tests.
    fn full_scenario() -> AssessmentInput {
        AssessmentInput {
            biomass: Some(BiomassType::EucalyptusResidue),
            region: Some(Region::SaoPaulo),
            transport_distance_km: 150.0,
            transport_vehicle: Some(VehicleClass::MediumTruck),
            biomass_quantity_kg: 1_000_000.0,
            annual_production_kg: 1_000_000.0,
            electricity_kwh: 500_000.0,
            diesel_l: 50_000.0,
            natural_gas_nm3: 10_000.0,
            cogeneration_biomass_kg: 200_000.0,
            water_l: 10_000.0,
            lubricant_oil_kg: 500.0,
            silica_sand_kg: 1_000.0,
            domestic_quantity_t: 800.0,
            domestic_distance_km: 500.0,
            domestic_rail_pct: 30.0,
            domestic_waterway_pct: 20.0,
            domestic_road_vehicle: Some(VehicleClass::MediumTruck),
            export_quantity_t: 200.0,
            port_distance_km: 200.0,
            port_road_vehicle: Some(VehicleClass::LargeTruck),
            sea_distance_km: 8_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn total_is_exactly_the_sum_of_the_six_phases() {
        let result = assess(&full_scenario());
        let sum = result.agricultural
            + result.land_use_change
            + result.biomass_transport
            + result.industrial
            + result.distribution
            + result.end_use;
        assert_eq!(result.total, sum);
    }

    #[test]
    fn industrial_equals_its_breakdown_total() {
        let result = assess(&full_scenario());
        assert_eq!(result.industrial, result.industrial_breakdown.total());
    }

    #[test]
    fn empty_input_yields_all_zero_phases_and_no_credits() {
        let result = assess(&AssessmentInput::default());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.credit_units, 0);
        assert_eq!(result.heat_value_mj_per_kg, DEFAULT_HEAT_VALUE);
        // Zero total still beats the fossil reference on paper.
        assert!((result.efficiency_pct - 100.0).abs() < 1e-12);
    }

    #[test]
    fn every_field_is_finite_for_partial_inputs() {
        let partial = AssessmentInput {
            biomass: Some(BiomassType::EucalyptusCharcoal),
            domestic_quantity_t: 800.0,
            ..Default::default()
        };
        let result = assess(&partial);
        for (_, value) in result.phases() {
            assert!(value.is_finite());
        }
        assert!(result.total.is_finite());
        assert!(result.efficiency_pct.is_finite());
    }

    #[test]
    fn missing_biomass_zeroes_only_the_dependent_phases() {
        let mut input = full_scenario();
        input.biomass = None;
        let result = assess(&input);

        assert_eq!(result.agricultural, 0.0);
        assert_eq!(result.land_use_change, 0.0);
        assert_eq!(result.industrial_breakdown.cogeneration, 0.0);
        assert_eq!(result.end_use, 0.0);
        // Phases that do not need the biomass selection still contribute.
        assert!(result.biomass_transport > 0.0);
        assert!(result.industrial_breakdown.electricity > 0.0);
        assert!(result.distribution > 0.0);

        let sum = result.biomass_transport + result.industrial + result.distribution;
        assert!((result.total - sum).abs() < 1e-15);
    }

    #[test]
    fn credits_are_zero_when_efficiency_is_not_positive() {
        // Virgin pine at unit yield exceeds the fossil reference on its
        // agricultural phase alone.
        let input = AssessmentInput {
            biomass: Some(BiomassType::VirginPine),
            annual_production_kg: 1_000_000.0,
            ..Default::default()
        };
        let result = assess(&input);
        assert!(result.efficiency_pct <= 0.0);
        assert_eq!(result.credit_units, 0);
    }

    #[test]
    fn credits_are_zero_without_annual_production() {
        // Low specific yield keeps the total under the fossil reference.
        let input = AssessmentInput {
            biomass: Some(BiomassType::WoodResidue),
            specific_yield_factor: 0.1,
            ..Default::default()
        };
        let result = assess(&input);
        assert!(result.efficiency_pct > 0.0);
        assert_eq!(result.credit_units, 0);
    }

    #[test]
    fn credits_floor_to_whole_units() {
        let input = AssessmentInput {
            biomass: Some(BiomassType::WoodResidue),
            specific_yield_factor: 0.1,
            annual_production_kg: 1_000_000.0,
            ..Default::default()
        };
        let result = assess(&input);
        assert!(result.efficiency_pct > 0.0);

        let raw = result.heat_value_mj_per_kg
            * (input.annual_production_kg / 1000.0)
            * (fossil_reference(FossilComparator::WeightedAverage) - result.total);
        assert_eq!(result.credit_units, raw.floor() as i64);
        assert!(result.credit_units as f64 <= raw);
    }

    #[test]
    fn methodology_comparison_is_anchored_on_the_attributional_delta() {
        let result = assess(&full_scenario());
        let fossil = fossil_reference(FossilComparator::WeightedAverage);
        let plain = fossil - result.total;
        assert!((result.methodologies.attributional.adjusted_delta - plain).abs() < 1e-15);
        assert!(
            (result.methodologies.circular_footprint.adjusted_delta - plain * 1.15).abs() < 1e-15
        );
    }

    #[test]
    fn assessment_is_deterministic() {
        let input = full_scenario();
        assert_eq!(assess(&input), assess(&input));
    }
}
