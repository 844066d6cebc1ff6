//! Land-use-change factors per production region and biomass type.
//!
//! Each factor is a signed annual value in kg CO₂eq per kg of biomass per
//! year: positive means net emission from converting land to biomass
//! production, negative means net sequestration. Every region defines a
//! value for every biomass type, so a lookup never fails; zero encodes
//! "no net change".

use biocalc_schemas::categories::{BiomassType, Region};

/// Signed land-use-change factor for a (region, biomass) pair.
pub fn land_use_factor(region: Region, biomass: BiomassType) -> f64 {
    region_row(region)[biomass_index(biomass)]
}

/// Column order of the per-region rows; matches [`BiomassType::ALL`].
const fn biomass_index(biomass: BiomassType) -> usize {
    match biomass {
        BiomassType::PeanutHusk => 0,
        BiomassType::WoodResidue => 1,
        BiomassType::EucalyptusResidue => 2,
        BiomassType::VirginPine => 3,
        BiomassType::EucalyptusCharcoal => 4,
        BiomassType::VirginEucalyptus => 5,
    }
}

#[rustfmt::skip]
const fn region_row(region: Region) -> [f64; 6] {
    // [peanut_husk, wood_residue, eucalyptus_residue, virgin_pine,
    //  eucalyptus_charcoal, virgin_eucalyptus]
    match region {
        Region::Acre             => [0.000162,  0.0,       0.0,        0.0,       0.0,       0.0],
        Region::Alagoas          => [0.0,       0.0,       0.0,        0.0,       0.0,       0.0],
        Region::Amapa            => [0.000100,  0.007720,  0.002620,   0.007720,  0.002620,  0.002620],
        Region::Amazonas         => [0.0,       0.0,       0.0,        0.0,       0.0,       0.0],
        Region::Bahia            => [0.0,      -0.000590, -0.000200,  -0.000590, -0.000200, -0.000200],
        Region::Ceara            => [0.000195,  0.0,       0.0,        0.0,       0.0,       0.0],
        Region::DistritoFederal  => [0.000149, -0.001190, -0.000404,  -0.001190, -0.000404, -0.000404],
        Region::EspiritoSanto    => [0.0,      -0.000340, -0.000115,  -0.000340, -0.000115, -0.000115],
        Region::Goias            => [0.000401, -0.002090, -0.000709,  -0.002090, -0.000709, -0.000709],
        Region::Maranhao         => [0.0,       0.008730,  0.002960,   0.008730,  0.002960,  0.002960],
        Region::MatoGrosso       => [0.000926, -0.002290, -0.000777,  -0.002290, -0.000777, -0.000777],
        Region::MatoGrossoDoSul  => [0.000243, -0.002650, -0.000899,  -0.002650, -0.000899, -0.000899],
        Region::MinasGerais      => [0.000142,  0.000380,  0.000129,   0.000380,  0.000129,  0.000129],
        Region::Para             => [0.000171,  0.012200,  0.004150,   0.012200,  0.004150,  0.004150],
        Region::Paraiba          => [0.001590, -0.004430, -0.001500,  -0.004430, -0.001500, -0.001500],
        Region::Parana           => [0.0000687, 0.0000100, 0.00000339, 0.0000100, 0.00000339, 0.00000339],
        Region::Pernambuco       => [0.000130, -0.004060, -0.001380,  -0.004060, -0.001380, -0.001380],
        Region::Piaui            => [0.0000458, -0.001450, -0.000492, -0.001450, -0.000492, -0.000492],
        Region::RioDeJaneiro     => [0.000152,  0.003790,  0.001290,   0.003790,  0.001290,  0.001290],
        Region::RioGrandeDoNorte => [0.0,       0.0,       0.0,        0.0,       0.0,       0.0],
        Region::RioGrandeDoSul   => [0.0,       0.000500,  0.000170,   0.000500,  0.000170,  0.000170],
        Region::Rondonia         => [0.000156,  0.015800,  0.005360,   0.015800,  0.005360,  0.005360],
        Region::Roraima          => [0.000581,  0.011200,  0.003790,   0.011200,  0.003790,  0.003790],
        Region::SantaCatarina    => [0.0,       0.001470,  0.000499,   0.001470,  0.000499,  0.000499],
        Region::SaoPaulo         => [0.000141, -0.000480, -0.000163,  -0.000480, -0.000163, -0.000163],
        Region::Sergipe          => [0.000174, -0.003090, -0.001050,  -0.003090, -0.001050, -0.001050],
        Region::Tocantins        => [0.000200,  0.009160,  0.003110,   0.009160,  0.003110,  0.003110],
        Region::Brazil           => [0.000303,  0.0000700, 0.0000238,  0.0000700, 0.0000238, 0.0000238],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_covers_every_biomass_type() {
        for region in Region::ALL {
            for biomass in BiomassType::ALL {
                let factor = land_use_factor(region, biomass);
                assert!(factor.is_finite(), "{region:?}/{biomass:?}");
            }
        }
    }

    #[test]
    fn sequestration_states_carry_negative_factors() {
        assert!(land_use_factor(Region::Bahia, BiomassType::EucalyptusResidue) < 0.0);
        assert!(land_use_factor(Region::SaoPaulo, BiomassType::VirginPine) < 0.0);
    }

    #[test]
    fn deforestation_frontier_states_carry_positive_factors() {
        assert!(land_use_factor(Region::Rondonia, BiomassType::VirginPine) > 0.0);
        assert!(land_use_factor(Region::Para, BiomassType::EucalyptusResidue) > 0.0);
    }

    #[test]
    fn national_average_is_nonzero_but_small() {
        for biomass in BiomassType::ALL {
            let factor = land_use_factor(Region::Brazil, biomass);
            assert!(factor > 0.0 && factor < 0.001, "{biomass:?}: {factor}");
        }
    }

    #[test]
    fn wood_residue_and_virgin_pine_share_rows() {
        // Both map to the pine land-use column in the source data.
        for region in Region::ALL {
            assert_eq!(
                land_use_factor(region, BiomassType::WoodResidue),
                land_use_factor(region, BiomassType::VirginPine),
                "{region:?}"
            );
        }
    }
}
