//! Bracketing root finder (Brent's method).

use crate::error::CoreError;
use crate::numeric::ensure_finite;

/// Brent solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrentConfig {
    /// Absolute tolerance on the root
    pub xtol: f64,
    /// Relative tolerance on the root
    pub rtol: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

/// Brent iteration result.
#[derive(Clone, Copy, Debug)]
pub struct RootResult {
    /// Root estimate
    pub root: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Number of function evaluations
    pub function_calls: usize,
}

/// Find a root of `f` inside `[a, b]` (either order).
///
/// The endpoints must bracket a sign change; otherwise
/// [`CoreError::RootNotBracketed`] is returned without iterating. Errors
/// from `f` are propagated as-is, so callers can use their own error type.
pub fn brent<F, E>(mut f: F, a: f64, b: f64, config: &BrentConfig) -> Result<RootResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<CoreError>,
{
    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = ensure_finite(f(xpre)?, "brent bracket value")?;
    let mut fcur = ensure_finite(f(xcur)?, "brent bracket value")?;
    let mut calls = 2;

    if fpre * fcur > 0.0 {
        return Err(CoreError::RootNotBracketed {
            lower: a,
            upper: b,
            f_lower: fpre,
            f_upper: fcur,
        }
        .into());
    }
    if fpre == 0.0 {
        return Ok(RootResult {
            root: xpre,
            iterations: 0,
            function_calls: calls,
        });
    }
    if fcur == 0.0 {
        return Ok(RootResult {
            root: xcur,
            iterations: 0,
            function_calls: calls,
        });
    }

    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for iter in 0..config.max_iterations {
        if fpre != 0.0 && fcur != 0.0 && fpre.signum() != fcur.signum() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = 0.5 * (config.xtol + config.rtol * xcur.abs());
        let sbis = 0.5 * (xblk - xcur);
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(RootResult {
                root: xcur,
                iterations: iter,
                function_calls: calls,
            });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic interpolation
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else if sbis > 0.0 {
            xcur += delta;
        } else {
            xcur -= delta;
        }
        fcur = f(xcur)?;
        calls += 1;
    }

    Err(CoreError::ConvergenceFailed {
        what: "brent",
        iterations: config.max_iterations,
    }
    .into())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finds_cube_roots(target in 0.01f64..100.0) {
            let r = brent(
                |x: f64| Ok::<_, CoreError>(x.powi(3) - target),
                0.0,
                10.0,
                &BrentConfig::default(),
            )
            .unwrap();
            prop_assert!((r.root.powi(3) - target).abs() < 1e-8 * target.max(1.0));
        }
    }
}
