//! Platinum (Pt) pressure scales.

use pvt_core::units::uc_volume_from_density;

use crate::catalog::{CatalogEntry, Material, ScaleOptions};
use crate::definition::{
    HugoniotDefinition, MieGruneisenDefinition, ModelDefinition, ScaleDefinition,
    StaticDefinition, TermDefinition,
};

const MATERIAL: Material = Material::Platinum;
/// 3.9231³ Å³
pub const V_REF: f64 = 3.9231 * 3.9231 * 3.9231;
const N: f64 = 1.0;
const Z: f64 = 4.0;
/// g/mol
pub const MOLAR_MASS: f64 = 195.084;
const EF_V: f64 = 0.001;

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(MATERIAL, "fei2004", fei2004),
    CatalogEntry::new(MATERIAL, "fei2007vinet", fei2007vinet),
    CatalogEntry::new(MATERIAL, "fei2007bm3", fei2007bm3),
    CatalogEntry::new(MATERIAL, "dorfman2012", dorfman2012),
    CatalogEntry::new(MATERIAL, "ye2017", ye2017),
    CatalogEntry::new(MATERIAL, "yokoo2009", yokoo2009),
    CatalogEntry::new(MATERIAL, "jamieson1982", jamieson1982),
    CatalogEntry::new(MATERIAL, "holmes1989", holmes1989),
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

fn constq(v0: f64, gamma0: (f64, f64), q: (f64, f64), theta0: f64) -> TermDefinition {
    TermDefinition::new(
        "constq",
        &[
            ("v0", v0, EF_V),
            ("gamma0", gamma0.0, gamma0.1),
            ("q", q.0, q.1),
            ("theta0", theta0, 0.0),
        ],
    )
}

fn fei2004(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("bm3", v0, (273.0, 3.0), (4.8, 0.03)))
        .with_thermal(constq(v0, (2.69, 0.03), (0.5, 0.5), 230.0));
    scale("fei2004", "Fei et al. 2004 PEPI 143-144, 515+", model)
}

fn fei2007(name: &str, family: &str, k0p: f64, options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term(family, v0, (277.0, 0.0), (k0p, 0.02)))
        .with_thermal(constq(v0, (2.72, 0.03), (0.5, 0.5), 230.0));
    scale(name, "Fei et al. 2007 PNAS 104, 9182+", model)
}

fn fei2007vinet(options: &ScaleOptions) -> ScaleDefinition {
    fei2007("fei2007vinet", "vinet", 5.08, options)
}

fn fei2007bm3(options: &ScaleOptions) -> ScaleDefinition {
    fei2007("fei2007bm3", "bm3", 4.95, options)
}

fn dorfman2012(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("vinet", v0, (277.0, 0.0), (5.43, 0.02)));
    scale("dorfman2012", "Dorfman et al. 2012, JGR 117, B08210", model)
}

fn ye2017(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model =
        MieGruneisenDefinition::new(static_term("vinet", v0, (277.3, 0.0), (5.226, 0.033)));
    scale("ye2017", "Ye et al. 2017. JGR 10.1002/2016JB013811", model)
}

fn yokoo2009(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("bm3", v0, (276.4, 0.0), (5.12, 0.1)))
        .with_thermal(TermDefinition::new(
            "tange",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 2.63, 0.0),
                ("a", 0.39, 0.08),
                ("b", 5.2, 1.1),
                ("theta0", 230.0, 0.0),
            ],
        ))
        .with_electronic(TermDefinition::new(
            "tsuchiya",
            &[
                ("v0", v0, EF_V),
                ("a", 0.011_316, 0.0),
                ("b", -5.6486e-7, 0.0),
                ("c", 2.67e-7, 0.0),
                ("d", -2.8531e-11, 0.0),
            ],
        ));
    scale("yokoo2009", "Yokoo et al. 2009. PRB 80, 104114", model)
}

fn jamieson1982(_: &ScaleOptions) -> ScaleDefinition {
    let rho0 = 21.4449;
    let v0 = uc_volume_from_density(&rho0, Z, MOLAR_MASS);
    let model = HugoniotDefinition::new(
        MOLAR_MASS,
        TermDefinition::new(
            "linear",
            &[("rho0", rho0, 0.0), ("c0", 3.574, 0.0), ("s", 1.582, 0.0)],
        ),
        constq(v0, (2.40, 0.0), (1.0, 0.0), 200.0),
    );
    scale(
        "jamieson1982",
        "Jamieson et al. 1982. High pressure research in geophysics.",
        model,
    )
    .with_three_r(0.127_86 * MOLAR_MASS / N)
}

fn holmes1989(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("vinet", v0, (266.0, 0.0), (5.81, 0.0)))
        .with_thermal(TermDefinition::new(
            "alphakt",
            &[("v0", v0, EF_V), ("alpha0", 0.261e-4, 0.0), ("k0", 266.0, 0.0)],
        ));
    scale("holmes1989", "Holmes et al. 1989. JAP 66, 2962+", model)
}

fn dorogokupets2007(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("vinet", v0, (277.3, 0.0), (5.12, 0.0)))
        .with_thermal(TermDefinition::new(
            "dorogokupets2007",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 2.82, 0.0),
                ("gamma_inf", 1.83, 0.0),
                ("beta", 8.11, 0.0),
                ("theta0", 220.0, 0.0),
            ],
        ))
        .with_anharmonic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("a0", -166.9e-6, 0.0), ("m", 4.32, 0.0)],
        ))
        .with_electronic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("e0", 260.0e-6, 0.0), ("g", 2.4, 0.0)],
        ));
    scale(
        "dorogokupets2007",
        "Dorogokupets and Dewaele. 2007. HPR 27, 431+",
        model,
    )
}

fn dorogokupets2015(options: &ScaleOptions) -> ScaleDefinition {
    let v0 = options.v0_or(V_REF);
    let model = MieGruneisenDefinition::new(static_term("vinet", v0, (275.0, 0.0), (5.43, 0.0)))
        .with_thermal(TermDefinition::new(
            "dorogokupets2015",
            &[
                ("v0", v0, EF_V),
                ("gamma0", 2.77, 0.0),
                ("gamma_inf", 0.43, 0.0),
                ("beta", 2.26, 0.0),
                ("theta01", 184.0, 0.0),
                ("m1", 1.5, 0.0),
                ("theta02", 137.0, 0.0),
                ("m2", 1.5, 0.0),
            ],
        ))
        .with_anharmonic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("a0", 0.0, 0.0), ("m", 0.0, 0.0)],
        ))
        .with_electronic(TermDefinition::new(
            "zharkov",
            &[("v0", v0, EF_V), ("e0", 79.0e-6, 0.0), ("g", 0.26, 0.0)],
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
    fn holmes_thermal_pressure_is_linear_in_temperature() {
        let scale = holmes1989(&ScaleOptions::default()).build().unwrap();
        let v = Values::from(V_REF);
        let pth = scale
            .thermal_pressure(&v, &Values::from(vec![1300.0, 2300.0]))
            .unwrap()
            .nominal_values();
        let expected = 0.261e-4 * 266.0 * 1000.0;
        assert!((pth[0] - expected).abs() < 1e-9);
        assert!((pth[1] - 2.0 * expected).abs() < 1e-9);
    }

    #[test]
    fn hot_isotherms_sit_above_the_reference() {
        for entry in ENTRIES {
            let scale = entry.build(&ScaleOptions::default()).unwrap();
            let v = Values::from(0.85 * scale.v0());
            let cold = scale.pressure(&v, &Values::from(300.0)).unwrap();
            let hot = scale.pressure(&v, &Values::from(2000.0)).unwrap();
            assert!(
                hot.nominal(0).unwrap() >= cold.nominal(0).unwrap(),
                "{}",
                entry.name
            );
        }
    }
}
