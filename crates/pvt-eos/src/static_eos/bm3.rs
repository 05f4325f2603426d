//! Third-order Birch-Murnaghan equation.

use pvt_core::Scalar;

/// Pressure (GPa) at unit-cell volume `v` with an optional reference
/// pressure `p_ref`.
pub fn pressure<S: Scalar>(v: &S, v0: &S, k0: &S, k0p: &S, p_ref: f64) -> S {
    let vvr = v.clone() / v0.clone();
    let strain = S::from_f64(1.0) - vvr.powf(-2.0 / 3.0);
    let linear = (k0.clone() * 3.0 - 5.0 * p_ref) * 0.5 * strain.clone();
    let quadratic = k0.clone()
        * (9.0 / 8.0)
        * (k0p.clone() - 4.0 + k0.recip() * (35.0 / 9.0 * p_ref))
        * strain.powi(2);
    (quadratic - linear + p_ref) * vvr.powf(-5.0 / 3.0)
}

/// Isothermal bulk modulus (GPa) at volume `v`.
pub fn bulk_modulus<S: Scalar>(v: &S, v0: &S, k0: &S, k0p: &S) -> S {
    let f = small_f(v, v0);
    let a4 = v0.clone() * k0.clone() * (k0p.clone() - 4.0) * 4.5;
    let three_v0_k0 = v0.clone() * k0.clone() * 3.0;
    let one_2f = f.clone() * 2.0 + 1.0;
    let bracket = f.clone() * 5.0 * (three_v0_k0.clone() + a4.clone() * f.clone())
        + one_2f.clone() * (three_v0_k0 + a4 * f * 2.0);
    one_2f.powf(2.5) * bracket / (v0.clone() * 3.0)
}

/// Shear modulus (GPa) at volume `v` from `g0` and its pressure derivative
/// `g0p`.
pub fn shear_modulus<S: Scalar>(v: &S, v0: &S, k0: &S, k0p: &S, g0: &S, g0p: &S) -> S {
    let f = ((v.clone() / v0.clone()).powf(-2.0 / 3.0) - 1.0) * 0.5;
    let first = k0.clone() * g0p.clone() * 3.0 - g0.clone() * 5.0;
    let second = k0.clone() * g0p.clone() * 6.0 - k0.clone() * 24.0 - g0.clone() * 14.0
        + k0.clone() * k0p.clone() * 4.5;
    (f.clone() * 2.0 + 1.0).powf(2.5) * (g0.clone() + first * f.clone() + second * f.powi(2))
}

/// Eulerian finite strain `f` of the linearized form.
pub fn small_f<S: Scalar>(v: &S, v0: &S) -> S {
    ((v0.clone() / v.clone()).powf(2.0 / 3.0) - 1.0) * 0.5
}

/// Normalized pressure `F = P / (3f (1 + 2f)^2.5)`.
pub fn big_f<S: Scalar>(p: &S, f: &S) -> S {
    p.clone() / (f.clone() * 3.0 * (f.clone() * 2.0 + 1.0).powf(2.5))
}
