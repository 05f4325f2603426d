//! Every catalog scale, end to end.

use pvt_core::Values;
use pvt_eos::PvtEos;
use pvt_scales::{
    Material, ScaleDefinition, ScaleEos, ScaleOptions, TableVariant, catalog, scale_by_key,
};

#[test]
fn every_scale_is_pressure_free_at_reference() {
    for entry in catalog() {
        let scale = entry.build(&ScaleOptions::default()).unwrap();
        let t_ref = Values::from(scale.constants().t_ref);
        let p = scale.pressure(&Values::from(scale.v0()), &t_ref).unwrap();
        assert!(p.nominal(0).unwrap().abs() < 1e-6, "{}", entry.key());
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn every_scale_inverts_its_own_pressure() {
    init_tracing();
    for entry in catalog() {
        let scale = entry.build(&ScaleOptions::default()).unwrap();
        let v = Values::from(vec![0.8 * scale.v0(), 0.9 * scale.v0()]);
        let t = Values::from(vec![300.0, 1500.0]);
        let p = scale.pressure(&v, &t).unwrap();
        let back = scale.volume(&p, &t).unwrap();
        for (a, b) in back.nominal_values().iter().zip(v.nominal_values()) {
            assert!((a - b).abs() / b < 1e-6, "{}: {a} vs {b}", entry.key());
        }
    }
}

#[test]
fn compression_raises_pressure_on_every_scale() {
    for entry in catalog() {
        let scale = entry.build(&ScaleOptions::default()).unwrap();
        let v0 = scale.v0();
        let p = scale
            .pressure(
                &Values::from(vec![0.95 * v0, 0.85 * v0, 0.75 * v0]),
                &Values::from(300.0),
            )
            .unwrap()
            .nominal_values();
        assert!(p[0] < p[1] && p[1] < p[2], "{}: {p:?}", entry.key());
    }
}

#[test]
fn gold_dorogokupets2007_table() {
    let scale = scale_by_key("au/dorogokupets2007", &ScaleOptions::default()).unwrap();
    let v = Values::from(0.70 * scale.v0());
    let p = scale
        .pressure(&v, &Values::from(vec![300.0, 2500.0]))
        .unwrap()
        .nominal_values();
    assert!((p[0] - 162.373).abs() < 0.01, "{p:?}");
    assert!((p[1] - 176.250).abs() < 0.05, "{p:?}");
}

#[test]
fn catalog_definitions_survive_yaml() {
    let options = ScaleOptions::default().with_variant(TableVariant::ReproduceTable);
    for entry in Material::Gold.entries() {
        let definition = entry.definition(&options);
        let yaml = definition.to_yaml_string().unwrap();
        let back = ScaleDefinition::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, definition, "{}", entry.key());
    }
}

#[test]
fn hugoniot_scales_expose_the_shock_model() {
    init_tracing();
    let scale = scale_by_key("gold/jamieson1982l", &ScaleOptions::default()).unwrap();
    let ScaleEos::Jamieson(eos) = scale.eos() else {
        panic!("expected a hugoniot-derived scale");
    };
    assert!(eos.shock().is_nonlinear());
    let th = eos
        .hugoniot_temperature(&Values::from(0.8 * scale.v0()))
        .unwrap();
    assert!(th.nominal(0).unwrap() > 300.0);
    assert!(scale.to_string().contains("scale: gold/jamieson1982l"));
}
