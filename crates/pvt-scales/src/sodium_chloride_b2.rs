//! Sodium chloride, B2 structure.

use crate::catalog::{CatalogEntry, Material, ScaleOptions};
use crate::definition::{MieGruneisenDefinition, ScaleDefinition, StaticDefinition, TermDefinition};

const MATERIAL: Material = Material::SodiumChlorideB2;
/// Å³ (24.53 cm³/mol)
pub const V_REF_DOROGOKUPETS: f64 = 40.733_023_317_774_46;
/// Å³
pub const V_REF_FEI: f64 = 41.35;
const N: f64 = 2.0;
const Z: f64 = 1.0;
const EF_V: f64 = 0.001;

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(MATERIAL, "dorogokupets2007", dorogokupets2007),
    CatalogEntry::new(MATERIAL, "fei2007vinet", fei2007vinet),
    CatalogEntry::new(MATERIAL, "fei2007bm3", fei2007bm3),
];

fn dorogokupets2007(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF_DOROGOKUPETS);
    let model = MieGruneisenDefinition::new(StaticDefinition::new(
        "vinet",
        &[("v0", v0, EF_V), ("k0", 29.72, 0.0), ("k0p", 5.14, 0.0)],
    ))
    .with_thermal(TermDefinition::new(
        "dorogokupets2007",
        &[
            ("v0", v0, EF_V),
            ("gamma0", 1.64, 0.0),
            ("gamma_inf", 1.23, 0.0),
            ("beta", 6.83, 0.0),
            ("theta0", 270.0, 0.0),
        ],
    ))
    .with_anharmonic(TermDefinition::new(
        "zharkov",
        &[("v0", v0, EF_V), ("a0", -24.0e-6, 0.0), ("m", 7.02, 0.0)],
    ))
    .with_electronic(TermDefinition::new(
        "zharkov",
        &[("v0", v0, EF_V), ("e0", 0.0, 0.0), ("g", 0.0, 0.0)],
    ));
    ScaleDefinition::new(MATERIAL.id(), "dorogokupets2007", N, Z, model)
        .with_reference("Dorogokupets and Dewaele. 2007. HPR 27, 431+")
}

fn fei2007(name: &str, family: &str, k0: f64, k0p: f64, options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF_FEI);
    let model = MieGruneisenDefinition::new(StaticDefinition::new(
        family,
        &[("v0", v0, EF_V), ("k0", k0, 2.9), ("k0p", k0p, 0.26)],
    ))
    .with_thermal(TermDefinition::new(
        "constq",
        &[
            ("v0", v0, EF_V),
            ("gamma0", 1.7, 0.0),
            ("q", 0.5, 0.3),
            ("theta0", 290.0, 0.0),
        ],
    ));
    ScaleDefinition::new(MATERIAL.id(), name, N, Z, model)
        .with_reference("Fei et al. 2007 PNAS 104, 9182+")
}

fn fei2007vinet(options: &ScaleOptions) -> ScaleDefinition {
    fei2007("fei2007vinet", "vinet", 26.86, 5.25, options)
}

fn fei2007bm3(options: &ScaleOptions) -> ScaleDefinition {
    fei2007("fei2007bm3", "bm3", 30.69, 4.33, options)
}
