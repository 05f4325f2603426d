//! End-to-end scenarios against published tables.

use pvt_core::{UFloat, Values};
use pvt_eos::anharmonic::ZharkovAnharmonicParams;
use pvt_eos::electronic::ZharkovElectronicParams;
use pvt_eos::static_eos::DEFAULT_MIN_STRAIN;
use pvt_eos::thermal::Dorogokupets2007Params;
use pvt_eos::{
    AnharmonicParams, ElectronicParams, MaterialConstants, MieGruneisenEos, PvtEos, StaticEos,
    StaticFamily, StaticParams, ThermalParams,
};

fn exact(x: &f64) -> UFloat {
    UFloat::exact(*x)
}

fn gold_dorogokupets2007() -> MieGruneisenEos {
    let v0 = 4.078_60_f64.powi(3);
    MieGruneisenEos::new(
        StaticEos::plain(StaticFamily::Vinet, v0, 167.0, 5.90),
        MaterialConstants::new(1.0, 4.0),
    )
    .with_thermal(ThermalParams::Dorogokupets2007(
        Dorogokupets2007Params {
            v0,
            gamma0: 2.89,
            gamma_inf: 1.54,
            beta: 4.36,
            theta0: 170.0,
        }
        .map(exact),
    ))
    .with_anharmonic(AnharmonicParams::Zharkov(
        ZharkovAnharmonicParams { v0, a0: 0.0, m: 0.0 }.map(exact),
    ))
    .with_electronic(ElectronicParams::Zharkov(
        ZharkovElectronicParams { v0, e0: 0.0, g: 0.0 }.map(exact),
    ))
}

#[test]
fn mgo_zha2000_static_table() {
    let eos = StaticEos::plain(StaticFamily::BM3, 74.698, 160.2, 4.03);
    let p = eos.pressure(&Values::from(60.0)).unwrap();
    // Zha et al. 2000
    assert!((p.nominal(0).unwrap() - 54.65).abs() < 0.1);
    let v = eos.volume(&p, DEFAULT_MIN_STRAIN).unwrap();
    assert!((v.nominal(0).unwrap() - 60.0).abs() < 1e-4);
}

#[test]
fn gold_dorogokupets2007_at_2500k() {
    let eos = gold_dorogokupets2007();
    let v = Values::from(0.70 * eos.v0());
    let p = eos.pressure(&v, &Values::from(2500.0)).unwrap();
    let p = p.nominal(0).unwrap();
    assert!((p - 176.25).abs() < 0.05, "p = {p}");

    let back = eos.volume_in(&Values::from(p), &Values::from(2500.0), 0.6, 1.0).unwrap();
    assert!((back.nominal(0).unwrap() / eos.v0() - 0.70).abs() < 1e-6);
}

#[test]
fn composite_pressure_carries_parameter_uncertainty() {
    let v0 = UFloat::new(74.698, 0.01);
    // the same v0 variable feeds both terms, so the two are correlated
    let eos = MieGruneisenEos::new(
        StaticEos::new(
            StaticFamily::Vinet,
            StaticParams {
                v0: v0.clone(),
                k0: UFloat::new(160.3, 1.0),
                k0p: UFloat::exact(4.18),
            },
        ),
        MaterialConstants::new(2.0, 4.0),
    )
    .with_thermal(ThermalParams::Dorogokupets2007(Dorogokupets2007Params {
        v0: v0.clone(),
        gamma0: UFloat::exact(1.5),
        gamma_inf: UFloat::exact(0.75),
        beta: UFloat::exact(2.96),
        theta0: UFloat::exact(760.0),
    }));
    let p = eos
        .pressure(&Values::from(65.0), &Values::from(2000.0))
        .unwrap();
    let p = &p.as_uncertain()[0];
    assert!(p.std_dev() > 0.0);
    assert!(p.derivative(&v0).is_some());
}

#[test]
fn reference_temperature_volume_shortcut() {
    let eos = gold_dorogokupets2007();
    let v = PvtEos::volume(&eos, &Values::from(vec![0.0, 1e-6]), &Values::from(300.0)).unwrap();
    assert_eq!(v.nominal_values(), vec![eos.v0(), eos.v0()]);
}
