//! Kunc equation of a configurable order (order 2 is Vinet).

use pvt_core::Scalar;

/// Order used when none is given.
pub const DEFAULT_ORDER: i32 = 5;

/// Pressure (GPa) at unit-cell volume `v`.
pub fn pressure<S: Scalar>(v: &S, v0: &S, k0: &S, k0p: &S, order: i32) -> S {
    let x = (v.clone() / v0.clone()).powf(1.0 / 3.0);
    let one_minus_x = S::from_f64(1.0) - x.clone();
    let f1 = one_minus_x.clone() / x.powi(order);
    let f2 = ((k0p.clone() * 1.5 - f64::from(order) + 0.5) * one_minus_x).exp();
    k0.clone() * 3.0 * f1 * f2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_eos::vinet;

    #[test]
    fn order_two_is_vinet() {
        let (v0, k0, k0p) = (74.698, 160.3, 4.18);
        for v in [70.0, 60.0, 50.0] {
            let kunc = pressure(&v, &v0, &k0, &k0p, 2);
            let vinet = vinet::pressure(&v, &v0, &k0, &k0p);
            assert!((kunc - vinet).abs() < 1e-10);
        }
    }

    #[test]
    fn compression_raises_pressure() {
        let p1 = pressure(&70.0, &74.698, &160.3, &4.18, DEFAULT_ORDER);
        let p2 = pressure(&60.0, &74.698, &160.3, &4.18, DEFAULT_ORDER);
        assert!(p1 > 0.0 && p2 > p1);
    }
}
