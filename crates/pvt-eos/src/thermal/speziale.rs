//! Speziale et al. (2001) Grüneisen parameter,
//! `γ = γ0 exp(q0/q1 ((V/V0)^q1 - 1))`.
//!
//! The Debye temperature has no closed form here; it is
//! `θ = θ0 exp(-∫_{V0}^{V} γ/V' dV')`, integrated numerically.

use pvt_core::QuadratureConfig;
use pvt_core::Scalar;
use pvt_core::quadrature::integrate;

use super::debye_thermal_pressure;
use crate::error::EosResult;
use crate::params::{MaterialConstants, param_set};

param_set!(
    SpezialeParams, "speziale" {
        v0,
        gamma0,
        q0,
        q1,
        theta0,
    }
);

pub fn gruneisen<S: Scalar>(v: &S, v0: &S, gamma0: &S, q0: &S, q1: &S) -> S {
    let x = v.clone() / v0.clone();
    gamma0.clone() * (q0.clone() / q1.clone() * (x.pow(q1) - 1.0)).exp()
}

pub fn debye_temperature<S: Scalar>(
    v: &S,
    p: &SpezialeParams<S>,
    config: &QuadratureConfig,
) -> EosResult<S> {
    let integral = integrate(
        |x: &S| gruneisen(x, &p.v0, &p.gamma0, &p.q0, &p.q1) / x.clone(),
        &p.v0,
        v,
        config,
    )?;
    Ok((p.theta0.ln() - integral).exp())
}

pub fn pressure<S: Scalar>(
    v: &S,
    temp: &S,
    p: &SpezialeParams<S>,
    mat: &MaterialConstants,
    config: &QuadratureConfig,
) -> EosResult<S> {
    let gamma = gruneisen(v, &p.v0, &p.gamma0, &p.q0, &p.q1);
    let theta = debye_temperature(v, p, config)?;
    Ok(debye_thermal_pressure(v, temp, &gamma, &theta, mat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::UFloat;

    // MgO, Speziale et al. 2001
    fn mgo() -> SpezialeParams<f64> {
        SpezialeParams {
            v0: 74.698,
            gamma0: 1.524,
            q0: 1.65,
            q1: 11.8,
            theta0: 773.0,
        }
    }

    #[test]
    fn theta_at_reference_volume() {
        let p = mgo();
        let theta = debye_temperature(&p.v0, &p, &QuadratureConfig::default()).unwrap();
        assert!((theta - 773.0).abs() < 1e-9);
    }

    #[test]
    fn theta_consistent_with_gruneisen() {
        // γ = -d ln θ / d ln V
        let p = mgo();
        let cfg = QuadratureConfig::default();
        let v: f64 = 60.0;
        let h = 1e-4;
        let up = debye_temperature(&(v * (1.0 + h)), &p, &cfg).unwrap().ln();
        let dn = debye_temperature(&(v * (1.0 - h)), &p, &cfg).unwrap().ln();
        let slope = (up - dn) / ((1.0 + h).ln() - (1.0 - h).ln());
        let gamma = gruneisen(&v, &p.v0, &p.gamma0, &p.q0, &p.q1);
        assert!((-slope - gamma).abs() < 1e-6);
    }

    #[test]
    fn uncertain_volume_carries_through_integral() {
        let p = mgo().map(|x| UFloat::exact(*x));
        let v = UFloat::new(60.0, 0.1);
        let theta = debye_temperature(&v, &p, &QuadratureConfig::default()).unwrap();
        let gamma = gruneisen(&60.0, &74.698, &1.524, &1.65, &11.8);
        // dθ/dV = -γ θ / V
        let expected = gamma * theta.nominal_value() / 60.0 * 0.1;
        assert!((theta.std_dev() - expected).abs() / expected < 1e-6);
    }
}
