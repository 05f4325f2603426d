//! Catalog of published pressure scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::definition::ScaleDefinition;
use crate::error::{ScaleError, ScaleResult};
use crate::scale::Scale;
use crate::{gold, neon, periclase, platinum, sodium_chloride, sodium_chloride_b2};

/// Reference material of a pressure scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Gold,
    Platinum,
    Periclase,
    Neon,
    /// NaCl, B1 (rock salt) structure
    SodiumChloride,
    /// NaCl, B2 (CsCl) structure
    SodiumChlorideB2,
}

impl Material {
    pub const ALL: [Self; 6] = [
        Self::Gold,
        Self::Platinum,
        Self::Periclase,
        Self::Neon,
        Self::SodiumChloride,
        Self::SodiumChlorideB2,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Periclase => "periclase",
            Self::Neon => "neon",
            Self::SodiumChloride => "nacl_b1",
            Self::SodiumChlorideB2 => "nacl_b2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Periclase => "Periclase (MgO)",
            Self::Neon => "Neon",
            Self::SodiumChloride => "Sodium chloride (B1)",
            Self::SodiumChlorideB2 => "Sodium chloride (B2)",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Gold => &["au"],
            Self::Platinum => &["pt"],
            Self::Periclase => &["mgo"],
            Self::Neon => &["ne"],
            Self::SodiumChloride => &["nacl", "sodium_chloride"],
            Self::SodiumChlorideB2 => &["sodium_chloride_b2"],
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        match self {
            Self::Gold => gold::ENTRIES,
            Self::Platinum => platinum::ENTRIES,
            Self::Periclase => periclase::ENTRIES,
            Self::Neon => neon::ENTRIES,
            Self::SodiumChloride => sodium_chloride::ENTRIES,
            Self::SodiumChlorideB2 => sodium_chloride_b2::ENTRIES,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Material {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.id() == wanted || m.aliases().iter().any(|alias| *alias == wanted))
            .ok_or_else(|| ScaleError::UnknownScale {
                name: s.to_string(),
            })
    }
}

/// Which of two published parameter sets to use where a scale's tables are
/// only reproduced with adjusted values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableVariant {
    /// Values as published.
    #[default]
    Published,
    /// Adjusted values that reproduce the published tables.
    ReproduceTable,
}

/// Per-request overrides for catalog scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Reference volume (Å³); the catalog default when absent. Hugoniot
    /// scales derive `v0` from their reference density and ignore it.
    #[serde(default)]
    pub v0: Option<f64>,
    #[serde(default)]
    pub variant: TableVariant,
}

impl ScaleOptions {
    pub fn with_v0(mut self, v0: f64) -> Self {
        self.v0 = Some(v0);
        self
    }

    pub fn with_variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn v0_or(&self, default: f64) -> f64 {
        self.v0.unwrap_or(default)
    }

    pub(crate) fn reproduce_table(&self) -> bool {
        self.variant == TableVariant::ReproduceTable
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub material: Material,
    pub name: &'static str,
    pub(crate) definition: fn(&ScaleOptions) -> ScaleDefinition,
}

impl CatalogEntry {
    pub(crate) const fn new(
        material: Material,
        name: &'static str,
        definition: fn(&ScaleOptions) -> ScaleDefinition,
    ) -> Self {
        Self {
            material,
            name,
            definition,
        }
    }

    /// `material/name`
    pub fn key(&self) -> String {
        format!("{}/{}", self.material.id(), self.name)
    }

    pub fn definition(&self, options: &ScaleOptions) -> ScaleDefinition {
        (self.definition)(options)
    }

    pub fn build(&self, options: &ScaleOptions) -> ScaleResult<Scale> {
        self.definition(options).build()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.contains(&query)
            || self.material.id().contains(&query)
            || self.material.display_name().to_ascii_lowercase().contains(&query)
            || self.material.aliases().iter().any(|alias| alias.contains(&query))
    }
}

static CATALOG: [&[CatalogEntry]; 6] = [
    gold::ENTRIES,
    platinum::ENTRIES,
    periclase::ENTRIES,
    neon::ENTRIES,
    sodium_chloride::ENTRIES,
    sodium_chloride_b2::ENTRIES,
];

pub fn catalog() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().flat_map(|entries| entries.iter())
}

pub fn filter_catalog(query: &str) -> Vec<&'static CatalogEntry> {
    catalog().filter(|entry| entry.matches_query(query)).collect()
}

pub fn lookup(material: Material, name: &str) -> ScaleResult<&'static CatalogEntry> {
    let wanted = name.trim().to_ascii_lowercase();
    material
        .entries()
        .iter()
        .find(|entry| entry.name == wanted)
        .ok_or_else(|| ScaleError::UnknownScale {
            name: format!("{}/{}", material.id(), name),
        })
}

/// Build a catalog scale.
pub fn scale(material: Material, name: &str, options: &ScaleOptions) -> ScaleResult<Scale> {
    lookup(material, name)?.build(options)
}

/// Build a catalog scale from a `material/name` key.
pub fn scale_by_key(key: &str, options: &ScaleOptions) -> ScaleResult<Scale> {
    let (material, name) = key.split_once('/').ok_or_else(|| ScaleError::UnknownScale {
        name: key.to_string(),
    })?;
    scale(material.parse()?, name, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in catalog() {
            assert!(seen.insert(entry.key()), "duplicate key: {}", entry.key());
        }
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn entries_belong_to_their_material() {
        for material in Material::ALL {
            for entry in material.entries() {
                assert_eq!(entry.material, material);
                let definition = entry.definition(&ScaleOptions::default());
                assert_eq!(definition.material, material.id());
                assert_eq!(definition.name, entry.name);
                assert!(definition.reference.is_some());
            }
        }
    }

    #[test]
    fn material_parsing() {
        assert_eq!("Au".parse::<Material>().unwrap(), Material::Gold);
        assert_eq!(" mgo ".parse::<Material>().unwrap(), Material::Periclase);
        assert_eq!("nacl_b2".parse::<Material>().unwrap(), Material::SodiumChlorideB2);
        assert!(matches!(
            "iron".parse::<Material>(),
            Err(ScaleError::UnknownScale { .. })
        ));
    }

    #[test]
    fn search() {
        let hits = filter_catalog("dorogokupets2015");
        assert_eq!(hits.len(), 3);
        let mgo = filter_catalog("mgo");
        assert!(mgo.iter().all(|e| e.material == Material::Periclase));
        assert_eq!(filter_catalog("").len(), catalog().count());
    }

    #[test]
    fn lookup_by_key() {
        let scale = scale_by_key("gold/Dorogokupets2007", &ScaleOptions::default()).unwrap();
        assert_eq!(scale.key(), "gold/dorogokupets2007");
        assert!(matches!(
            scale_by_key("gold", &ScaleOptions::default()),
            Err(ScaleError::UnknownScale { .. })
        ));
        assert!(matches!(
            lookup(Material::Neon, "zha2000"),
            Err(ScaleError::UnknownScale { name }) if name == "neon/zha2000"
        ));
    }

    #[test]
    fn options_builder() {
        let options = ScaleOptions::default()
            .with_v0(67.9)
            .with_variant(TableVariant::ReproduceTable);
        assert_eq!(options.v0_or(1.0), 67.9);
        assert!(options.reproduce_table());
        assert!(!ScaleOptions::default().reproduce_table());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use pvt_core::Values;
    use pvt_eos::PvtEos;

    proptest! {
        #[test]
        fn v0_override_moves_the_reference_state(scale_factor in 0.95f64..1.05, index in 0usize..36) {
            let entry = catalog().nth(index).unwrap();
            let scale = entry.build(&ScaleOptions::default()).unwrap();
            prop_assume!(scale.eos().as_mie_gruneisen().is_some());
            let v0 = scale.v0() * scale_factor;
            let moved = entry.build(&ScaleOptions::default().with_v0(v0)).unwrap();
            prop_assert!((moved.v0() - v0).abs() < 1e-12);
            let p = moved.pressure(&Values::from(v0), &Values::from(300.0)).unwrap();
            prop_assert!(p.nominal(0).unwrap().abs() < 1e-9, "{}", entry.key());
        }
    }
}
