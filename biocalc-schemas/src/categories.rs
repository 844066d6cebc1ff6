use serde::{Deserialize, Serialize};

/// Solid biomass feedstocks covered by the factor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomassType {
    PeanutHusk,
    WoodResidue,
    EucalyptusResidue,
    VirginPine,
    EucalyptusCharcoal,
    VirginEucalyptus,
}

impl BiomassType {
    pub const ALL: [BiomassType; 6] = [
        BiomassType::PeanutHusk,
        BiomassType::WoodResidue,
        BiomassType::EucalyptusResidue,
        BiomassType::VirginPine,
        BiomassType::EucalyptusCharcoal,
        BiomassType::VirginEucalyptus,
    ];

    /// Resolves a form key into a biomass type. Unknown keys resolve to
    /// `None`, never an error.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "peanut_husk" => Some(BiomassType::PeanutHusk),
            "wood_residue" => Some(BiomassType::WoodResidue),
            "eucalyptus_residue" => Some(BiomassType::EucalyptusResidue),
            "virgin_pine" => Some(BiomassType::VirginPine),
            "eucalyptus_charcoal" => Some(BiomassType::EucalyptusCharcoal),
            "virgin_eucalyptus" => Some(BiomassType::VirginEucalyptus),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BiomassType::PeanutHusk => "Peanut husk",
            BiomassType::WoodResidue => "Wood residue (pine)",
            BiomassType::EucalyptusResidue => "Eucalyptus residue",
            BiomassType::VirginPine => "Virgin pine",
            BiomassType::EucalyptusCharcoal => "Eucalyptus charcoal",
            BiomassType::VirginEucalyptus => "Virgin eucalyptus",
        }
    }
}

/// Road vehicle classes for biomass haulage, by payload bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// 7.5-16 t truck
    SmallTruck,
    /// 16-32 t truck
    MediumTruck,
    /// >32 t truck
    LargeTruck,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::SmallTruck,
        VehicleClass::MediumTruck,
        VehicleClass::LargeTruck,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "small_truck" => Some(VehicleClass::SmallTruck),
            "medium_truck" => Some(VehicleClass::MediumTruck),
            "large_truck" => Some(VehicleClass::LargeTruck),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleClass::SmallTruck => "Small truck (7.5-16 t)",
            VehicleClass::MediumTruck => "Medium truck (16-32 t)",
            VehicleClass::LargeTruck => "Large truck (>32 t)",
        }
    }
}

/// Electricity supply options for the industrial phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectricitySource {
    GridMediumVoltage,
    GridHighVoltage,
    SmallHydro,
    Biomass,
    Wind,
    Solar,
}

impl Default for ElectricitySource {
    fn default() -> Self {
        ElectricitySource::GridMediumVoltage
    }
}

impl ElectricitySource {
    pub const ALL: [ElectricitySource; 6] = [
        ElectricitySource::GridMediumVoltage,
        ElectricitySource::GridHighVoltage,
        ElectricitySource::SmallHydro,
        ElectricitySource::Biomass,
        ElectricitySource::Wind,
        ElectricitySource::Solar,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "grid_medium_voltage" => Some(ElectricitySource::GridMediumVoltage),
            "grid_high_voltage" => Some(ElectricitySource::GridHighVoltage),
            "small_hydro" => Some(ElectricitySource::SmallHydro),
            "biomass" => Some(ElectricitySource::Biomass),
            "wind" => Some(ElectricitySource::Wind),
            "solar" => Some(ElectricitySource::Solar),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElectricitySource::GridMediumVoltage => "Grid mix, medium voltage",
            ElectricitySource::GridHighVoltage => "Grid mix, high voltage",
            ElectricitySource::SmallHydro => "Small hydro",
            ElectricitySource::Biomass => "Biomass",
            ElectricitySource::Wind => "Wind",
            ElectricitySource::Solar => "Solar",
        }
    }
}

/// Fuels burned in the industrial phase. The factor table covers the full
/// set even though the assessment form only asks for diesel and natural gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustrialFuel {
    Diesel,
    NaturalGas,
    Lpg,
    GasolineA,
    AnhydrousEthanol,
    HydratedEthanol,
    WoodChips,
    Firewood,
}

impl IndustrialFuel {
    pub const ALL: [IndustrialFuel; 8] = [
        IndustrialFuel::Diesel,
        IndustrialFuel::NaturalGas,
        IndustrialFuel::Lpg,
        IndustrialFuel::GasolineA,
        IndustrialFuel::AnhydrousEthanol,
        IndustrialFuel::HydratedEthanol,
        IndustrialFuel::WoodChips,
        IndustrialFuel::Firewood,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "diesel" => Some(IndustrialFuel::Diesel),
            "natural_gas" => Some(IndustrialFuel::NaturalGas),
            "lpg" => Some(IndustrialFuel::Lpg),
            "gasoline_a" => Some(IndustrialFuel::GasolineA),
            "anhydrous_ethanol" => Some(IndustrialFuel::AnhydrousEthanol),
            "hydrated_ethanol" => Some(IndustrialFuel::HydratedEthanol),
            "wood_chips" => Some(IndustrialFuel::WoodChips),
            "firewood" => Some(IndustrialFuel::Firewood),
            _ => None,
        }
    }
}

/// Auxiliary process materials consumed in the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMaterial {
    CornStarch,
    Water,
    LubricantOil,
    SilicaSand,
}

impl InputMaterial {
    pub const ALL: [InputMaterial; 4] = [
        InputMaterial::CornStarch,
        InputMaterial::Water,
        InputMaterial::LubricantOil,
        InputMaterial::SilicaSand,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "corn_starch" => Some(InputMaterial::CornStarch),
            "water" => Some(InputMaterial::Water),
            "lubricant_oil" => Some(InputMaterial::LubricantOil),
            "silica_sand" => Some(InputMaterial::SilicaSand),
            _ => None,
        }
    }
}

/// Non-road modes available in the distribution phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    Rail,
    Barge,
    Ship,
}

impl DistributionMode {
    pub const ALL: [DistributionMode; 3] = [
        DistributionMode::Rail,
        DistributionMode::Barge,
        DistributionMode::Ship,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "rail" => Some(DistributionMode::Rail),
            "barge" => Some(DistributionMode::Barge),
            "ship" => Some(DistributionMode::Ship),
            _ => None,
        }
    }
}

/// Production regions for the land-use-change table: the 27 Brazilian
/// federative units plus the national average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Acre,
    Alagoas,
    Amapa,
    Amazonas,
    Bahia,
    Ceara,
    DistritoFederal,
    EspiritoSanto,
    Goias,
    Maranhao,
    MatoGrosso,
    MatoGrossoDoSul,
    MinasGerais,
    Para,
    Paraiba,
    Parana,
    Pernambuco,
    Piaui,
    RioDeJaneiro,
    RioGrandeDoNorte,
    RioGrandeDoSul,
    Rondonia,
    Roraima,
    SantaCatarina,
    SaoPaulo,
    Sergipe,
    Tocantins,
    Brazil,
}

impl Region {
    pub const ALL: [Region; 28] = [
        Region::Acre,
        Region::Alagoas,
        Region::Amapa,
        Region::Amazonas,
        Region::Bahia,
        Region::Ceara,
        Region::DistritoFederal,
        Region::EspiritoSanto,
        Region::Goias,
        Region::Maranhao,
        Region::MatoGrosso,
        Region::MatoGrossoDoSul,
        Region::MinasGerais,
        Region::Para,
        Region::Paraiba,
        Region::Parana,
        Region::Pernambuco,
        Region::Piaui,
        Region::RioDeJaneiro,
        Region::RioGrandeDoNorte,
        Region::RioGrandeDoSul,
        Region::Rondonia,
        Region::Roraima,
        Region::SantaCatarina,
        Region::SaoPaulo,
        Region::Sergipe,
        Region::Tocantins,
        Region::Brazil,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "acre" => Some(Region::Acre),
            "alagoas" => Some(Region::Alagoas),
            "amapa" => Some(Region::Amapa),
            "amazonas" => Some(Region::Amazonas),
            "bahia" => Some(Region::Bahia),
            "ceara" => Some(Region::Ceara),
            "distrito_federal" => Some(Region::DistritoFederal),
            "espirito_santo" => Some(Region::EspiritoSanto),
            "goias" => Some(Region::Goias),
            "maranhao" => Some(Region::Maranhao),
            "mato_grosso" => Some(Region::MatoGrosso),
            "mato_grosso_do_sul" => Some(Region::MatoGrossoDoSul),
            "minas_gerais" => Some(Region::MinasGerais),
            "para" => Some(Region::Para),
            "paraiba" => Some(Region::Paraiba),
            "parana" => Some(Region::Parana),
            "pernambuco" => Some(Region::Pernambuco),
            "piaui" => Some(Region::Piaui),
            "rio_de_janeiro" => Some(Region::RioDeJaneiro),
            "rio_grande_do_norte" => Some(Region::RioGrandeDoNorte),
            "rio_grande_do_sul" => Some(Region::RioGrandeDoSul),
            "rondonia" => Some(Region::Rondonia),
            "roraima" => Some(Region::Roraima),
            "santa_catarina" => Some(Region::SantaCatarina),
            "sao_paulo" => Some(Region::SaoPaulo),
            "sergipe" => Some(Region::Sergipe),
            "tocantins" => Some(Region::Tocantins),
            "brazil" => Some(Region::Brazil),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Acre => "Acre",
            Region::Alagoas => "Alagoas",
            Region::Amapa => "Amapá",
            Region::Amazonas => "Amazonas",
            Region::Bahia => "Bahia",
            Region::Ceara => "Ceará",
            Region::DistritoFederal => "Distrito Federal",
            Region::EspiritoSanto => "Espírito Santo",
            Region::Goias => "Goiás",
            Region::Maranhao => "Maranhão",
            Region::MatoGrosso => "Mato Grosso",
            Region::MatoGrossoDoSul => "Mato Grosso do Sul",
            Region::MinasGerais => "Minas Gerais",
            Region::Para => "Pará",
            Region::Paraiba => "Paraíba",
            Region::Parana => "Paraná",
            Region::Pernambuco => "Pernambuco",
            Region::Piaui => "Piauí",
            Region::RioDeJaneiro => "Rio de Janeiro",
            Region::RioGrandeDoNorte => "Rio Grande do Norte",
            Region::RioGrandeDoSul => "Rio Grande do Sul",
            Region::Rondonia => "Rondônia",
            Region::Roraima => "Roraima",
            Region::SantaCatarina => "Santa Catarina",
            Region::SaoPaulo => "São Paulo",
            Region::Sergipe => "Sergipe",
            Region::Tocantins => "Tocantins",
            Region::Brazil => "Brazil (national average)",
        }
    }
}

/// Fossil fuels the biofuel can be compared against. The headline
/// efficiency metric uses the weighted average; the others appear in the
/// comparison section of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FossilComparator {
    /// Weighted average of diesel A, gasoline A and natural gas
    WeightedAverage,
    GasolineA,
    DieselA,
    FuelOil,
    PetroleumCoke,
    AviationKerosene,
    Lpg,
}

impl FossilComparator {
    pub const ALL: [FossilComparator; 7] = [
        FossilComparator::WeightedAverage,
        FossilComparator::GasolineA,
        FossilComparator::DieselA,
        FossilComparator::FuelOil,
        FossilComparator::PetroleumCoke,
        FossilComparator::AviationKerosene,
        FossilComparator::Lpg,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "weighted_average" => Some(FossilComparator::WeightedAverage),
            "gasoline_a" => Some(FossilComparator::GasolineA),
            "diesel_a" => Some(FossilComparator::DieselA),
            "fuel_oil" => Some(FossilComparator::FuelOil),
            "petroleum_coke" => Some(FossilComparator::PetroleumCoke),
            "aviation_kerosene" => Some(FossilComparator::AviationKerosene),
            "lpg" => Some(FossilComparator::Lpg),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FossilComparator::WeightedAverage => "Weighted average (diesel/gasoline/NG)",
            FossilComparator::GasolineA => "Gasoline A",
            FossilComparator::DieselA => "Diesel A",
            FossilComparator::FuelOil => "Fuel oil",
            FossilComparator::PetroleumCoke => "Petroleum coke",
            FossilComparator::AviationKerosene => "Aviation kerosene",
            FossilComparator::Lpg => "LPG",
        }
    }
}

/// Accounting methodology applied to the fossil-vs-bio emission delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Methodology {
    Attributional,
    CircularFootprint,
    ZeroBurden,
}

impl Methodology {
    pub const ALL: [Methodology; 3] = [
        Methodology::Attributional,
        Methodology::CircularFootprint,
        Methodology::ZeroBurden,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "attributional" => Some(Methodology::Attributional),
            "cff" | "circular_footprint" => Some(Methodology::CircularFootprint),
            "zero_burden" => Some(Methodology::ZeroBurden),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Methodology::Attributional => "Attributional",
            Methodology::CircularFootprint => "Circular footprint formula",
            Methodology::ZeroBurden => "Zero burden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert!(BiomassType::from_key("bagasse").is_none());
        assert!(VehicleClass::from_key("").is_none());
        assert!(Region::from_key("atlantis").is_none());
        assert!(Methodology::from_key("consequential").is_none());
    }

    #[test]
    fn keys_round_trip_through_serde() {
        for biomass in BiomassType::ALL {
            let key = serde_json::to_string(&biomass).unwrap();
            let key = key.trim_matches('"');
            assert_eq!(BiomassType::from_key(key), Some(biomass));
        }
        for region in Region::ALL {
            let key = serde_json::to_string(&region).unwrap();
            let key = key.trim_matches('"');
            assert_eq!(Region::from_key(key), Some(region));
        }
    }

    #[test]
    fn cff_accepts_short_key() {
        assert_eq!(
            Methodology::from_key("cff"),
            Some(Methodology::CircularFootprint)
        );
    }

    #[test]
    fn default_electricity_source_is_medium_voltage_grid() {
        assert_eq!(
            ElectricitySource::default(),
            ElectricitySource::GridMediumVoltage
        );
    }
}
