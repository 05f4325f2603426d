//! Sodium chloride, B1 structure.

use crate::catalog::{CatalogEntry, Material, ScaleOptions};
use crate::definition::{MieGruneisenDefinition, ScaleDefinition, StaticDefinition, TermDefinition};

const MATERIAL: Material = Material::SodiumChloride;
/// Å³ (27.015 cm³/mol)
pub const V_REF: f64 = 179.44;
const N: f64 = 2.0;
const Z: f64 = 4.0;
const EF_V: f64 = 0.001;

pub(crate) const ENTRIES: &[CatalogEntry] =
    &[CatalogEntry::new(MATERIAL, "dorogokupets2007", dorogokupets2007)];

fn dorogokupets2007(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(StaticDefinition::new(
        "vinet",
        &[("v0", v0, EF_V), ("k0", 23.83, 0.0), ("k0p", 5.09, 0.0)],
    ))
    .with_thermal(TermDefinition::new(
        "dorogokupets2007",
        &[
            ("v0", v0, EF_V),
            ("gamma0", 1.64, 0.0),
            ("gamma_inf", 1.12, 0.0),
            ("beta", 4.36, 0.0),
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
