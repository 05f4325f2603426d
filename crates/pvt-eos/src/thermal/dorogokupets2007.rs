//! Altshuler form of the Grüneisen parameter used by Dorogokupets and
//! Oganov (2007): `γ = γ∞ + (γ0 - γ∞) x^β`.

use pvt_core::Scalar;

use super::debye_thermal_pressure;
use crate::params::{MaterialConstants, param_set};

param_set!(
    Dorogokupets2007Params, "dorogokupets2007" {
        v0,
        gamma0,
        /// Grüneisen parameter at infinite compression
        gamma_inf,
        beta,
        theta0,
    }
);

pub fn gruneisen<S: Scalar>(v: &S, v0: &S, gamma0: &S, gamma_inf: &S, beta: &S) -> S {
    let x = v.clone() / v0.clone();
    gamma_inf.clone() + (gamma0.clone() - gamma_inf.clone()) * x.pow(beta)
}

pub fn debye_temperature<S: Scalar>(
    v: &S,
    v0: &S,
    gamma0: &S,
    gamma_inf: &S,
    beta: &S,
    theta0: &S,
) -> S {
    let x = v.clone() / v0.clone();
    let decay = (gamma0.clone() - gamma_inf.clone()) / beta.clone() * (-x.pow(beta) + 1.0);
    theta0.clone() * x.pow(&-gamma_inf.clone()) * decay.exp()
}

pub fn pressure<S: Scalar>(
    v: &S,
    temp: &S,
    p: &Dorogokupets2007Params<S>,
    mat: &MaterialConstants,
) -> S {
    let gamma = gruneisen(v, &p.v0, &p.gamma0, &p.gamma_inf, &p.beta);
    let theta = debye_temperature(v, &p.v0, &p.gamma0, &p.gamma_inf, &p.beta, &p.theta0);
    debye_thermal_pressure(v, temp, &gamma, &theta, mat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_reference_values() {
        let theta = debye_temperature(&67.85, &67.85, &2.89, &1.54, &4.36, &180.0);
        assert!((theta - 180.0).abs() < 1e-12);
        assert!((gruneisen(&67.85, &67.85, &2.89, &1.54, &4.36) - 2.89).abs() < 1e-12);
    }

    #[test]
    fn tends_to_gamma_inf() {
        let g = gruneisen(&1e-3, &67.85, &2.89, &1.54, &4.36);
        assert!((g - 1.54).abs() < 1e-9);
    }
}
