//! Neon pressure scales.

use crate::catalog::{CatalogEntry, Material, ScaleOptions};
use crate::definition::{MieGruneisenDefinition, ScaleDefinition, StaticDefinition, TermDefinition};

const MATERIAL: Material = Material::Neon;
/// Å³
pub const V_REF: f64 = 88.967;
const N: f64 = 1.0;
const Z: f64 = 4.0;
const EF_V: f64 = 0.001;

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(MATERIAL, "fei2007vinet", fei2007vinet),
    CatalogEntry::new(MATERIAL, "fei2007bm3", fei2007bm3),
];

fn fei2007(name: &str, family: &str, k0: f64, k0p: f64, options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(StaticDefinition::new(
        family,
        &[("v0", v0, EF_V), ("k0", k0, 0.14), ("k0p", k0p, 0.31)],
    ))
    .with_thermal(TermDefinition::new(
        "constq",
        &[
            ("v0", v0, EF_V),
            ("gamma0", 2.05, 0.0),
            ("q", 0.6, 0.3),
            ("theta0", 75.1, 0.0),
        ],
    ));
    ScaleDefinition::new(MATERIAL.id(), name, N, Z, model)
        .with_reference("Fei et al. 2007 PNAS 104, 9182+")
}

fn fei2007vinet(options: &ScaleOptions) -> ScaleDefinition {
    fei2007("fei2007vinet", "vinet", 1.16, 8.23, options)
}

fn fei2007bm3(options: &ScaleOptions) -> ScaleDefinition {
    fei2007("fei2007bm3", "bm3", 1.43, 8.02, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::Values;
    use pvt_eos::PvtEos;

    #[test]
    fn both_forms_agree_at_low_compression() {
        let options = ScaleOptions::default();
        let vinet = fei2007vinet(&options).build().unwrap();
        let bm3 = fei2007bm3(&options).build().unwrap();
        let v = Values::from(0.98 * V_REF);
        let t = Values::from(300.0);
        let a = vinet.pressure(&v, &t).unwrap().nominal(0).unwrap();
        let b = bm3.pressure(&v, &t).unwrap().nominal(0).unwrap();
        assert!(a > 0.0 && b > 0.0);
        assert!((a - b).abs() / a < 0.3);
    }
}
