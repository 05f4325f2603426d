//! Dorogokupets et al. (2015): Altshuler Grüneisen parameter with two
//! weighted Einstein oscillators in place of the Debye term.

use pvt_core::Scalar;
use pvt_core::constants::PA_TO_GPA;
use pvt_core::units::vol_uc_to_mol;

use super::dorogokupets2007::{debye_temperature as altshuler_theta, gruneisen};
use crate::params::{MaterialConstants, param_set};

param_set!(
    Dorogokupets2015Params, "dorogokupets2015" {
        v0,
        gamma0,
        gamma_inf,
        beta,
        /// First characteristic temperature (K)
        theta01,
        /// Weight of the first oscillator
        m1,
        theta02,
        m2,
    }
);

impl<S: pvt_core::Scalar> Dorogokupets2015Params<S> {
    pub fn gruneisen(&self, v: &S) -> S {
        gruneisen(v, &self.v0, &self.gamma0, &self.gamma_inf, &self.beta)
    }

    /// Characteristic temperatures of both oscillators at `v`.
    pub fn einstein_temperatures(&self, v: &S) -> (S, S) {
        let theta = |t0: &S| altshuler_theta(v, &self.v0, &self.gamma0, &self.gamma_inf, &self.beta, t0);
        (theta(&self.theta01), theta(&self.theta02))
    }

    /// Weight-averaged characteristic temperature.
    pub fn debye_temperature(&self, v: &S) -> S {
        let (t1, t2) = self.einstein_temperatures(v);
        (t1 * self.m1.clone() + t2 * self.m2.clone()) / (self.m1.clone() + self.m2.clone())
    }
}

/// `θ / (exp(θ/T) - 1)`, zero at `T = 0`.
fn einstein_energy<S: Scalar>(theta: &S, temp: &S) -> S {
    if temp.nominal() == 0.0 {
        return S::from_f64(0.0);
    }
    theta.clone() / ((theta.clone() / temp.clone()).exp() - 1.0)
}

pub fn pressure<S: Scalar>(
    v: &S,
    temp: &S,
    p: &Dorogokupets2015Params<S>,
    mat: &MaterialConstants,
) -> S {
    let v_mol = vol_uc_to_mol(v, mat.z);
    let gamma = p.gruneisen(v);
    let (theta1, theta2) = p.einstein_temperatures(v);
    let weight = p.m1.clone() + p.m2.clone();
    let t_ref = S::from_f64(mat.t_ref);
    let term = |theta: &S, m: &S| {
        m.clone() / weight.clone()
            * (einstein_energy(theta, temp) - einstein_energy(theta, &t_ref))
    };
    let de = term(&theta1, &p.m1) + term(&theta2, &p.m2);
    gamma / v_mol * de * (mat.three_r * mat.n * PA_TO_GPA)
}
