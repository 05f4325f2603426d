//! Vinet (universal) equation.

use pvt_core::Scalar;

/// Pressure (GPa) at unit-cell volume `v`.
pub fn pressure<S: Scalar>(v: &S, v0: &S, k0: &S, k0p: &S) -> S {
    let x = (v.clone() / v0.clone()).powf(1.0 / 3.0);
    let one_minus_x = S::from_f64(1.0) - x.clone();
    let f1 = one_minus_x.clone() / x.powi(2);
    let f2 = ((k0p.clone() - 1.0) * 1.5 * one_minus_x).exp();
    k0.clone() * 3.0 * f1 * f2
}

/// Isothermal bulk modulus (GPa) at volume `v`.
pub fn bulk_modulus<S: Scalar>(v: &S, v0: &S, k0: &S, k0p: &S) -> S {
    let y = (v.clone() / v0.clone()).powf(1.0 / 3.0);
    let eta = (k0p.clone() - 1.0) * 1.5;
    let one_minus_y = S::from_f64(1.0) - y.clone();
    let bracket = (eta.clone() * y.clone() + 1.0) * one_minus_y.clone() + 1.0;
    k0.clone() * y.powi(-2) * bracket * (one_minus_y * eta).exp()
}
