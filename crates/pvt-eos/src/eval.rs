//! Elementwise evaluation of scalar formulas over [`Values`] arrays.
//!
//! Callers pick the scalar type once per call from the numeric mode and
//! hand a formula over that type to these helpers.

use pvt_core::{HasUncertainty, NumericMode, Scalar, Values, broadcast};
use rayon::prelude::*;

use crate::error::EosResult;

/// Uncertain when any input array or the model parameters are.
pub(crate) fn mode_of(inputs: &[&Values], uncertain_params: bool) -> NumericMode {
    if uncertain_params || inputs.iter().any(|v| v.has_uncertainty()) {
        NumericMode::Uncertain
    } else {
        NumericMode::Plain
    }
}

pub(crate) fn map_unary<S, F>(x: &Values, f: F) -> EosResult<Values>
where
    S: Scalar,
    F: Fn(&S) -> EosResult<S>,
{
    let out = x
        .to_scalars::<S>()
        .iter()
        .map(f)
        .collect::<EosResult<Vec<S>>>()?;
    Ok(S::into_values(out))
}

pub(crate) fn map_binary<S, F>(a: &Values, b: &Values, f: F) -> EosResult<Values>
where
    S: Scalar,
    F: Fn(&S, &S) -> EosResult<S>,
{
    let pairs = broadcast(&a.to_scalars::<S>(), &b.to_scalars::<S>())?;
    let out = pairs
        .iter()
        .map(|(x, y)| f(x, y))
        .collect::<EosResult<Vec<S>>>()?;
    Ok(S::into_values(out))
}

/// Parallel variant for expensive per-element work (root finding, ODE
/// solves). Output order matches the sequential helpers.
pub(crate) fn par_map_binary<S, F>(a: &Values, b: &Values, f: F) -> EosResult<Values>
where
    S: Scalar,
    F: Fn(&S, &S) -> EosResult<S> + Sync + Send,
{
    let pairs = broadcast(&a.to_scalars::<S>(), &b.to_scalars::<S>())?;
    let out = pairs
        .par_iter()
        .map(|(x, y)| f(x, y))
        .collect::<EosResult<Vec<S>>>()?;
    Ok(S::into_values(out))
}

pub(crate) fn par_map_unary<S, F>(x: &Values, f: F) -> EosResult<Values>
where
    S: Scalar,
    F: Fn(&S) -> EosResult<S> + Sync + Send,
{
    let out = x
        .to_scalars::<S>()
        .par_iter()
        .map(f)
        .collect::<EosResult<Vec<S>>>()?;
    Ok(S::into_values(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::UFloat;

    #[test]
    fn mode_follows_inputs_and_params() {
        let plain = Values::from(vec![1.0, 2.0]);
        let unc = Values::from(UFloat::new(1.0, 0.1));
        assert_eq!(mode_of(&[&plain], false), NumericMode::Plain);
        assert_eq!(mode_of(&[&plain], true), NumericMode::Uncertain);
        assert_eq!(mode_of(&[&plain, &unc], false), NumericMode::Uncertain);
    }

    #[test]
    fn binary_broadcasts() {
        let a = Values::from(vec![1.0, 2.0, 3.0]);
        let b = Values::from(10.0);
        let out = map_binary::<f64, _>(&a, &b, |x, y| Ok(x + y)).unwrap();
        assert_eq!(out, Values::Plain(vec![11.0, 12.0, 13.0]));
        let par = par_map_binary::<f64, _>(&a, &b, |x, y| Ok(x * y)).unwrap();
        assert_eq!(par, Values::Plain(vec![10.0, 20.0, 30.0]));
    }

    #[test]
    fn uncertain_scalar_type_yields_uncertain_values() {
        let a = Values::from(vec![1.0, 2.0]);
        let out = map_unary::<UFloat, _>(&a, |x| Ok(x.clone() * 2.0)).unwrap();
        assert!(out.is_uncertain());
        assert_eq!(out.nominal_values(), vec![2.0, 4.0]);
    }
}
