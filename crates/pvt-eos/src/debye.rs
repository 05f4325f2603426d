//! Debye internal-energy function
//! `D(x) = (3 / x³) ∫₀ˣ t³ / (eᵗ - 1) dt`.
//!
//! Three regimes: a small-x series up to 0.1, a rational fit up to 7.25, and
//! an exponential sum beyond, whose term count scales as `round(25 / x)`.
//! The regime is chosen on the nominal value of `x`.

use pvt_core::{Scalar, Values};

const SMALL_X: f64 = 0.1;
const RATIONAL_X: f64 = 7.25;
/// π⁴/15
const ASYMPTOTE: f64 = 6.493_939_402;

/// Debye function for one argument. `x` must be non-negative; `D(0) = 1`.
pub fn debye_e<S: Scalar>(x: &S) -> S {
    let xn = x.nominal();
    if xn < 0.0 || xn.is_nan() {
        return S::from_f64(f64::NAN);
    }
    if xn == 0.0 {
        return S::from_f64(1.0);
    }
    if xn <= SMALL_X {
        let x2 = x.powi(2);
        return S::from_f64(1.0) - x.clone() * 0.375
            + x2.clone() * (S::from_f64(0.05) - x2 * 5.952_380_953e-4);
    }
    if xn <= RATIONAL_X {
        let num = (((x.clone() * 0.094_617_3 - 4.432_582) * x.clone() + 85.077_24) * x.clone()
            - 800.608_7)
            * x.clone()
            + 3953.632;
        let den = (((x.clone() + 15.121_491) * x.clone() + 143.155_337) * x.clone() + 682.001_2)
            * x.clone()
            + 3953.632;
        return num / den;
    }
    let terms = (25.0 / xn).round() as u32;
    let exx = (-x.clone()).exp();
    let mut sum = S::from_f64(0.0);
    let mut power = S::from_f64(1.0);
    for i in 1..=terms {
        let fi = f64::from(i);
        power = power * exx.clone();
        let ix = x.clone() * fi;
        let poly = (ix.clone() * (ix.clone() * (ix + 3.0) + 6.0)) + 6.0;
        sum = sum + power.clone() * poly / fi.powi(4);
    }
    (S::from_f64(ASYMPTOTE) - sum) * 3.0 / x.powi(3)
}

/// Elementwise Debye function, keeping the mode of the input.
pub fn debye_e_values(x: &Values) -> Values {
    match x {
        Values::Plain(v) => Values::Plain(v.iter().map(debye_e).collect()),
        Values::Uncertain(v) => Values::Uncertain(v.iter().map(debye_e).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::UFloat;

    /// Direct quadrature of the defining integral.
    fn reference(x: f64) -> f64 {
        let n = 20_000;
        let h = x / n as f64;
        let g = |t: f64| if t == 0.0 { 0.0 } else { t.powi(3) / t.exp_m1() };
        let mut s = g(0.0) + g(x);
        for i in 1..n {
            let w = if i % 2 == 1 { 4.0 } else { 2.0 };
            s += w * g(i as f64 * h);
        }
        3.0 / x.powi(3) * s * h / 3.0
    }

    #[test]
    fn matches_integral() {
        for x in [0.05, 0.5, 1.0, 3.0, 7.0, 8.0, 12.0, 30.0] {
            let d = debye_e(&x);
            assert!((d - reference(x)).abs() < 2e-4, "x = {x}: {d} vs {}", reference(x));
        }
    }

    #[test]
    fn limits() {
        assert_eq!(debye_e(&0.0), 1.0);
        assert!(debye_e(&-1.0_f64).is_nan());
        assert!(debye_e(&200.0) > 0.0);
        assert!(debye_e(&200.0) < 1e-5);
    }

    #[test]
    fn continuous_at_regime_boundaries() {
        for edge in [SMALL_X, RATIONAL_X] {
            let below = debye_e(&(edge * (1.0 - 1e-12)));
            let above = debye_e(&(edge * (1.0 + 1e-12)));
            assert!((below - above).abs() < 1e-3);
        }
    }

    #[test]
    fn uncertainty_propagates() {
        let x = UFloat::new(2.0, 0.01);
        let d = debye_e(&x);
        let h = 1e-6;
        let slope = (debye_e(&(2.0 + h)) - debye_e(&(2.0 - h))) / (2.0 * h);
        assert!((d.std_dev() - slope.abs() * 0.01).abs() < 1e-9);
    }

    #[test]
    fn values_keep_mode() {
        let out = debye_e_values(&Values::from(vec![1.0, 2.0]));
        assert!(!out.is_uncertain());
        let out = debye_e_values(&Values::from(UFloat::new(1.0, 0.1)));
        assert!(out.is_uncertain());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bounded_in_unit_interval(x in 1e-6f64..60.0) {
            let d = debye_e(&x);
            prop_assert!(d > 0.0 && d <= 1.0);
        }

        #[test]
        fn decreasing(a in 1e-3f64..40.0, b in 1e-3f64..40.0) {
            prop_assume!((a - b).abs() > 1e-3);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(debye_e(&lo) > debye_e(&hi));
        }
    }
}
