//! Periclase (MgO) pressure scales.

use pvt_core::units::uc_volume_from_density;

use crate::catalog::{CatalogEntry, Material, ScaleOptions};
use crate::definition::{
    HugoniotDefinition, MieGruneisenDefinition, ModelDefinition, ScaleDefinition,
    StaticDefinition, TermDefinition,
};

const MATERIAL: Material = Material::Periclase;
/// Å³
pub const V_REF: f64 = 74.698;
const N: f64 = 2.0;
const Z: f64 = 4.0;
/// g/mol
pub const MOLAR_MASS: f64 = 40.3044;
const EF_V: f64 = 0.001;

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(MATERIAL, "jamieson1982", jamieson1982),
    CatalogEntry::new(MATERIAL, "zha2000", zha2000),
    CatalogEntry::new(MATERIAL, "ye2017", ye2017),
    CatalogEntry::new(MATERIAL, "speziale2001", speziale2001),
    CatalogEntry::new(MATERIAL, "tange2009", tange2009),
    CatalogEntry::new(MATERIAL, "dorogokupets2007", dorogokupets2007),
    CatalogEntry::new(MATERIAL, "dorogokupets2015", dorogokupets2015),
];

fn scale(name: &str, reference: &str, model: impl Into<ModelDefinition>) -> ScaleDefinition {
    ScaleDefinition::new(MATERIAL.id(), name, N, Z, model).with_reference(reference)
}

fn static_term(family: &str, v0: f64, k0: (f64, f64), k0p: (f64, f64)) -> StaticDefinition {
    StaticDefinition::new(
        family,
        &[("v0", v0, EF_V), ("k0", k0.0, k0.1), ("k0p", k0p.0, k0p.1)],
    )
}

fn jamieson1982(_: &ScaleOptions) -> ScaleDefinition {
    let rho0 = 3.585;
    let v0 = uc_volume_from_density(&rho0, Z, MOLAR_MASS);
    let model = HugoniotDefinition::new(
        MOLAR_MASS,
        TermDefinition::new(
            "linear",
            &[("rho0", rho0, 0.0), ("c0", 6.597, 0.0), ("s", 1.369, 0.0)],
        ),
        TermDefinition::new(
            "constq",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 1.32, 0.0),
                ("q", 1.0, 0.0),
                ("theta0", 760.0, 0.0),
            ],
        ),
    );
    scale(
        "jamieson1982",
        "Jamieson et al. 1982. High pressure research in geophysics.",
        model,
    )
    .with_three_r(1.237_54 * MOLAR_MASS / N)
}

fn zha2000(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("bm3", v0, (160.2, 0.0), (4.03, 0.0)));
    scale("zha2000", "Zha et al. 2000. PNAS 97, 13494+", model)
}

fn ye2017(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model =
        MieGruneisenDefinition::new(static_term("vinet", v0, (160.3, 0.0), (4.109, 0.022)));
    scale("ye2017", "Ye et al. 2017. JGR 10.1002/2016JB013811", model)
}

fn speziale2001(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("bm3", v0, (160.2, 0.0), (3.99, 0.01)))
        .with_thermal(TermDefinition::new(
            "speziale",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 1.524, 0.03),
                ("q0", 1.65, 0.4),
                ("q1", 11.8, 0.2),
                ("theta0", 773.0, 0.0),
            ],
        ));
    scale("speziale2001", "Speziale et al. 2001. JGR 106, 515+", model)
}

fn tange2009(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model =
        MieGruneisenDefinition::new(static_term("vinet", v0, (160.63, 0.18), (4.367, 0.013)))
            .with_thermal(TermDefinition::new(
                "tange",
                &[
                    ("v0", v0, EF_V),
                    ("gamma0", 1.442, 0.015),
                    ("a", 0.138, 0.019),
                    ("b", 5.4, 1.1),
                    ("theta0", 761.0, 13.0),
                ],
            ));
    scale("tange2009", "Tange et al. 2009. JGR 114, B03208", model)
}

fn dorogokupets2007(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("vinet", v0, (160.3, 0.0), (4.18, 0.0)))
        .with_thermal(TermDefinition::new(
            "dorogokupets2007",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 1.50, 0.0),
                ("gamma_inf", 0.75, 0.0),
                ("beta", 2.96, 0.0),
                ("theta0", 760.0, 0.0),
            ],
        ))
        .with_anharmonic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("a0", -14.9e-6, 0.0), ("m", 5.12, 0.0)],
        ))
        .with_electronic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("e0", 0.0, 0.0), ("g", 0.0, 0.0)],
        ));
    scale(
        "dorogokupets2007",
        "Dorogokupets and Dewaele. 2007. HPR 27, 431+",
        model,
    )
}

/// Kunc static isotherm.
fn dorogokupets2015(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("kunc", v0, (160.3, 0.0), (4.25, 0.0)))
        .with_thermal(TermDefinition::new(
            "dorogokupets2015",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 1.53, 0.0),
                ("gamma_inf", 0.624, 0.0),
                ("beta", 2.115, 0.0),
                ("theta01", 747.0, 0.0),
                ("m1", 1.5, 0.0),
                ("theta02", 399.0, 0.0),
                ("m2", 1.5, 0.0),
            ],
        ))
        .with_anharmonic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("a0", -15.9e-6, 0.0), ("m", 4.48, 0.0)],
        ))
        .with_electronic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("e0", 0.0, 0.0), ("g", 0.0, 0.0)],
        ));
    scale(
        "dorogokupets2015",
        "Dorogokupets et al. 2015. RGG 56, 172+",
        model,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::Values;
    use pvt_eos::PvtEos;

    #[test]
    fn every_entry_builds() {
        for entry in ENTRIES {
            entry.build(&ScaleOptions::default()).unwrap();
        }
    }

    #[test]
    fn zha2000_static_point() {
        let scale = zha2000(&ScaleOptions::default()).build().unwrap();
        let p = scale.pressure(&Values::from(60.0), &Values::from(300.0)).unwrap();
        assert!((p.nominal(0).unwrap() - 54.646).abs() < 1e-3);
        assert!(p.std_devs()[0] > 0.0);
    }

    #[test]
    fn speziale_round_trip() {
        let scale = speziale2001(&ScaleOptions::default()).build().unwrap();
        let v = Values::from(vec![62.0, 68.0]);
        let t = Values::from(vec![1500.0, 2500.0]);
        let p = scale.pressure(&v, &t).unwrap();
        let back = scale.volume(&p, &t).unwrap();
        for (a, b) in back.nominal_values().iter().zip(v.nominal_values()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }
}
