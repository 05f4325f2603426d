//! Constant-q Grüneisen parameter, `γ = γ0 (V/V0)^q`.

use pvt_core::Scalar;

use super::debye_thermal_pressure;
use crate::params::{MaterialConstants, param_set};

param_set!(
    ConstQParams, "constq" {
        v0,
        gamma0,
        q,
        /// Debye temperature at `v0` (K)
        theta0,
    }
);

pub fn gruneisen<S: Scalar>(v: &S, v0: &S, gamma0: &S, q: &S) -> S {
    gamma0.clone() * (v.clone() / v0.clone()).pow(q)
}

pub fn debye_temperature<S: Scalar>(v: &S, v0: &S, gamma0: &S, q: &S, theta0: &S) -> S {
    let gamma = gruneisen(v, v0, gamma0, q);
    theta0.clone() * ((gamma0.clone() - gamma) / q.clone()).exp()
}

pub fn pressure<S: Scalar>(v: &S, temp: &S, p: &ConstQParams<S>, mat: &MaterialConstants) -> S {
    let gamma = gruneisen(v, &p.v0, &p.gamma0, &p.q);
    let theta = debye_temperature(v, &p.v0, &p.gamma0, &p.q, &p.theta0);
    debye_thermal_pressure(v, temp, &gamma, &theta, mat)
}
