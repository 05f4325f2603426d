//! Thermal pressure from constant `αK_T`: `P_th = α0 K0 (T - T_ref)`.

use pvt_core::Scalar;

use crate::params::{MaterialConstants, param_set};

param_set!(
    AlphaKtParams, "alphakt" {
        v0,
        /// Thermal expansion at reference conditions (1/K)
        alpha0,
        k0,
    }
);

pub fn pressure<S: Scalar>(temp: &S, p: &AlphaKtParams<S>, mat: &MaterialConstants) -> S {
    p.alpha0.clone() * p.k0.clone() * (temp.clone() - mat.t_ref)
}
