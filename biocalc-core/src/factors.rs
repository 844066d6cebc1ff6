//! Static emission-factor tables for every life-cycle phase.
//!
//! All tables are compile-time constants keyed by the closed categorical
//! types in `biocalc-schemas`; they are process-wide, read-only and never
//! copied per invocation. Units differ per table and must not be mixed
//! across phases:
//!
//! | Table                    | Unit                          |
//! |--------------------------|-------------------------------|
//! | Biomass production       | kg CO₂eq / kg biomass         |
//! | Biomass heat value       | MJ / kg                       |
//! | Road transport           | kg CO₂eq / t·km               |
//! | Electricity              | kg CO₂eq / kWh                |
//! | Industrial fuels         | kg CO₂eq / native unit        |
//! | Process inputs           | kg CO₂eq / kg (water: per L)  |
//! | Distribution modes       | kg CO₂eq / t·km               |
//! | Stationary combustion    | kg CO₂eq / MJ                 |
//! | Fossil references        | kg CO₂eq / MJ                 |

use biocalc_schemas::categories::{
    BiomassType, DistributionMode, ElectricitySource, FossilComparator, IndustrialFuel,
    InputMaterial, VehicleClass,
};

/// Heat value assumed when no biomass type has been selected (MJ/kg).
pub const DEFAULT_HEAT_VALUE: f64 = 18.0;

/// Road factor used in the distribution phase when no vehicle class was
/// selected for the road leg (kg CO₂eq/t·km, medium truck).
pub const DEFAULT_ROAD_FACTOR: f64 = 0.098;

/// Production, combustion and physical properties of one biomass type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomassProfile {
    /// Production (agricultural phase), kg CO₂eq per kg of biomass
    pub emission_factor: f64,
    /// MJ per kg of pellet/briquette
    pub heat_value: f64,
    /// kg/m³
    pub density: f64,
    /// Full combustion (co-generation), kg CO₂eq per kg burned
    pub combustion_factor: f64,
    /// Non-biogenic pollutant impact of stationary combustion, kg CO₂eq/MJ
    pub stationary_combustion_factor: f64,
}

pub const fn biomass_profile(biomass: BiomassType) -> BiomassProfile {
    match biomass {
        BiomassType::PeanutHusk => BiomassProfile {
            emission_factor: 0.153,
            heat_value: 17.1,
            density: 350.0,
            combustion_factor: 1.74,
            stationary_combustion_factor: 0.000373,
        },
        BiomassType::WoodResidue => BiomassProfile {
            emission_factor: 0.0251,
            heat_value: 18.8,
            density: 400.0,
            combustion_factor: 1.97,
            stationary_combustion_factor: 0.000369,
        },
        BiomassType::EucalyptusResidue => BiomassProfile {
            emission_factor: 0.0251,
            heat_value: 15.8,
            density: 550.0,
            combustion_factor: 1.97,
            stationary_combustion_factor: 0.000369,
        },
        BiomassType::VirginPine => BiomassProfile {
            emission_factor: 0.422,
            heat_value: 18.8,
            density: 480.0,
            combustion_factor: 1.97,
            stationary_combustion_factor: 0.000369,
        },
        BiomassType::EucalyptusCharcoal => BiomassProfile {
            emission_factor: 1.76,
            heat_value: 18.5,
            density: 650.0,
            combustion_factor: 1.88,
            stationary_combustion_factor: 0.119052,
        },
        BiomassType::VirginEucalyptus => BiomassProfile {
            emission_factor: 0.104,
            heat_value: 15.8,
            density: 500.0,
            combustion_factor: 1.97,
            stationary_combustion_factor: 0.000369,
        },
    }
}

/// Emission factor and payload capacity of one road vehicle class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProfile {
    /// kg CO₂eq per t·km
    pub emission_factor: f64,
    /// Nominal payload, tonnes
    pub capacity_t: f64,
}

pub const fn transport_profile(vehicle: VehicleClass) -> TransportProfile {
    match vehicle {
        VehicleClass::SmallTruck => TransportProfile {
            emission_factor: 0.0937,
            capacity_t: 15.0,
        },
        VehicleClass::MediumTruck => TransportProfile {
            emission_factor: 0.0980,
            capacity_t: 25.0,
        },
        VehicleClass::LargeTruck => TransportProfile {
            emission_factor: 0.0611,
            capacity_t: 35.0,
        },
    }
}

/// kg CO₂eq per kWh delivered.
pub const fn electricity_factor(source: ElectricitySource) -> f64 {
    match source {
        ElectricitySource::GridMediumVoltage => 0.502,
        ElectricitySource::GridHighVoltage => 0.129,
        ElectricitySource::SmallHydro => 0.0367,
        ElectricitySource::Biomass => 0.110,
        ElectricitySource::Wind => 0.000138,
        ElectricitySource::Solar => 0.0801,
    }
}

/// Upstream production and combustion factors of one industrial fuel, per
/// native unit (L for liquid fuels, Nm³ for natural gas, kg for the rest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProfile {
    pub production_factor: f64,
    pub combustion_factor: f64,
}

impl FuelProfile {
    /// Well-to-flame factor: production plus combustion.
    pub fn total(&self) -> f64 {
        self.production_factor + self.combustion_factor
    }
}

pub const fn fuel_profile(fuel: IndustrialFuel) -> FuelProfile {
    match fuel {
        IndustrialFuel::Diesel => FuelProfile {
            production_factor: 0.796,
            combustion_factor: 2.64,
        },
        IndustrialFuel::NaturalGas => FuelProfile {
            production_factor: 0.335,
            combustion_factor: 1.53,
        },
        IndustrialFuel::Lpg => FuelProfile {
            production_factor: 0.722,
            combustion_factor: 2.93,
        },
        IndustrialFuel::GasolineA => FuelProfile {
            production_factor: 1.31,
            combustion_factor: 2.25,
        },
        IndustrialFuel::AnhydrousEthanol => FuelProfile {
            production_factor: 1.23,
            combustion_factor: 1.79,
        },
        IndustrialFuel::HydratedEthanol => FuelProfile {
            production_factor: 0.607,
            combustion_factor: 1.70,
        },
        IndustrialFuel::WoodChips => FuelProfile {
            production_factor: 0.365,
            combustion_factor: 1.97,
        },
        IndustrialFuel::Firewood => FuelProfile {
            production_factor: 0.0260,
            combustion_factor: 1.97,
        },
    }
}

/// kg CO₂eq per kg of material (water: per liter).
pub const fn input_material_factor(material: InputMaterial) -> f64 {
    match material {
        InputMaterial::CornStarch => 1.20,
        InputMaterial::Water => 0.0000237,
        InputMaterial::LubricantOil => 1.51,
        InputMaterial::SilicaSand => 0.0358,
    }
}

/// kg CO₂eq per t·km for the non-road distribution modes.
pub const fn distribution_factor(mode: DistributionMode) -> f64 {
    match mode {
        DistributionMode::Rail => 0.0334,
        DistributionMode::Barge => 0.0350,
        DistributionMode::Ship => 0.00952,
    }
}

/// Life-cycle intensity of the fossil fuel displaced, kg CO₂eq/MJ.
pub const fn fossil_reference(comparator: FossilComparator) -> f64 {
    match comparator {
        FossilComparator::WeightedAverage => 0.0867,
        FossilComparator::GasolineA => 0.0874,
        FossilComparator::DieselA => 0.0865,
        FossilComparator::FuelOil => 0.094,
        FossilComparator::PetroleumCoke => 0.120,
        FossilComparator::AviationKerosene => 0.0875,
        FossilComparator::Lpg => 0.0850,
    }
}
