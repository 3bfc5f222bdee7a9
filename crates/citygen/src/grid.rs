use serde::{Deserialize, Serialize};

/// A grid-cell coordinate pair `(column, row)`.
pub type GridPos = (u32, u32);

/// Functional category of a block, driving size, height and shape bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ZoneType {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Business,
}

/// Per-zone generation tunables. The defaults below are the mixed-city
/// profiles; uniform-district presets override them wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneProfile {
    /// Multiplier applied to the base block size for this zone.
    pub size_multiplier: f32,
    /// Minimum floor count for buildings in this zone.
    pub min_floors: u32,
    /// Fraction of the configured max floors this zone may reach.
    pub max_floors_multiplier: f32,
}

impl ZoneProfile {
    pub fn default_for(zone: ZoneType) -> Self {
        match zone {
            ZoneType::Residential => Self {
                size_multiplier: 1.0,
                min_floors: 1,
                max_floors_multiplier: 0.4,
            },
            ZoneType::Commercial => Self {
                size_multiplier: 1.15,
                min_floors: 2,
                max_floors_multiplier: 1.0,
            },
            ZoneType::Industrial => Self {
                size_multiplier: 1.3,
                min_floors: 1,
                max_floors_multiplier: 0.3,
            },
            ZoneType::Business => Self {
                size_multiplier: 1.1,
                min_floors: 3,
                max_floors_multiplier: 1.0,
            },
        }
    }
}

/// Complete profile set for one generation run, indexable by zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneProfiles {
    pub residential: ZoneProfile,
    pub commercial: ZoneProfile,
    pub industrial: ZoneProfile,
    pub business: ZoneProfile,
}

impl Default for ZoneProfiles {
    fn default() -> Self {
        Self {
            residential: ZoneProfile::default_for(ZoneType::Residential),
            commercial: ZoneProfile::default_for(ZoneType::Commercial),
            industrial: ZoneProfile::default_for(ZoneType::Industrial),
            business: ZoneProfile::default_for(ZoneType::Business),
        }
    }
}

impl ZoneProfiles {
    pub fn get(&self, zone: ZoneType) -> &ZoneProfile {
        match zone {
            ZoneType::Residential => &self.residential,
            ZoneType::Commercial => &self.commercial,
            ZoneType::Industrial => &self.industrial,
            ZoneType::Business => &self.business,
        }
    }

    pub fn get_mut(&mut self, zone: ZoneType) -> &mut ZoneProfile {
        match zone {
            ZoneType::Residential => &mut self.residential,
            ZoneType::Commercial => &mut self.commercial,
            ZoneType::Industrial => &mut self.industrial,
            ZoneType::Business => &mut self.business,
        }
    }
}

/// District presets for uniform-district generation: every cell shares one
/// zone and the zone profile is replaced by the preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictKind {
    /// Dense commercial core: tall, tightly packed.
    Downtown,
    /// Office towers, the tallest preset.
    Business,
    /// Low residential sprawl.
    Suburban,
    /// Wide, flat industrial lots.
    Industrial,
}

impl DistrictKind {
    pub fn zone(self) -> ZoneType {
        match self {
            DistrictKind::Downtown => ZoneType::Commercial,
            DistrictKind::Business => ZoneType::Business,
            DistrictKind::Suburban => ZoneType::Residential,
            DistrictKind::Industrial => ZoneType::Industrial,
        }
    }

    pub fn profile(self) -> ZoneProfile {
        match self {
            DistrictKind::Downtown => ZoneProfile {
                size_multiplier: 1.1,
                min_floors: 3,
                max_floors_multiplier: 1.0,
            },
            DistrictKind::Business => ZoneProfile {
                size_multiplier: 1.1,
                min_floors: 4,
                max_floors_multiplier: 1.0,
            },
            DistrictKind::Suburban => ZoneProfile {
                size_multiplier: 0.9,
                min_floors: 1,
                max_floors_multiplier: 0.2,
            },
            DistrictKind::Industrial => ZoneProfile {
                size_multiplier: 1.4,
                min_floors: 1,
                max_floors_multiplier: 0.25,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_presets_override_defaults() {
        let preset = DistrictKind::Suburban.profile();
        let default = ZoneProfile::default_for(ZoneType::Residential);
        assert_eq!(DistrictKind::Suburban.zone(), ZoneType::Residential);
        assert!(preset.max_floors_multiplier < default.max_floors_multiplier);
    }

    #[test]
    fn test_profiles_indexing_roundtrip() {
        let mut profiles = ZoneProfiles::default();
        profiles.get_mut(ZoneType::Business).min_floors = 7;
        assert_eq!(profiles.get(ZoneType::Business).min_floors, 7);
        assert_eq!(profiles.get(ZoneType::Residential).min_floors, 1);
    }
}
