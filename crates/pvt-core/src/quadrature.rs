//! Composite Gauss-Legendre quadrature over any [`Scalar`].

use crate::error::{CoreError, CoreResult};
use crate::numeric::{Tolerances, nearly_equal};
use crate::scalar::Scalar;

/// 10-point Gauss-Legendre nodes and weights on [-1, 1].
const GL10: [(f64, f64); 10] = [
    (-9.739_065_285_171_717e-1, 6.667_134_430_868_813e-2),
    (-8.650_633_666_889_845e-1, 1.494_513_491_505_806e-1),
    (-6.794_095_682_990_244e-1, 2.190_863_625_159_821e-1),
    (-4.333_953_941_292_472e-1, 2.692_667_193_099_963e-1),
    (-1.488_743_389_816_312e-1, 2.955_242_247_147_529e-1),
    (1.488_743_389_816_312e-1, 2.955_242_247_147_529e-1),
    (4.333_953_941_292_472e-1, 2.692_667_193_099_963e-1),
    (6.794_095_682_990_244e-1, 2.190_863_625_159_821e-1),
    (8.650_633_666_889_845e-1, 1.494_513_491_505_806e-1),
    (9.739_065_285_171_717e-1, 6.667_134_430_868_813e-2),
];

/// Quadrature configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadratureConfig {
    /// Absolute tolerance between successive refinements
    pub abs_tol: f64,
    /// Relative tolerance between successive refinements
    pub rel_tol: f64,
    /// Panel count at which refinement gives up
    pub max_panels: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1e-12,
            rel_tol: 1e-10,
            max_panels: 1024,
        }
    }
}

/// Fixed rule: `panels` equal panels of 10-point Gauss-Legendre.
///
/// The abscissae are built as `a + (b - a)·u`, so when `a` and `b` are
/// uncertain the integral carries their sensitivities (Leibniz rule to
/// first order).
pub fn gauss_legendre<S, F>(f: &F, a: &S, b: &S, panels: usize) -> S
where
    S: Scalar,
    F: Fn(&S) -> S,
{
    let panels = panels.max(1);
    let width = (b.clone() - a.clone()) / panels as f64;
    let mut total = S::from_f64(0.0);
    for k in 0..panels {
        for (node, weight) in GL10 {
            let u = k as f64 + 0.5 * (node + 1.0);
            let x = a.clone() + width.clone() * u;
            total = total + f(&x) * weight;
        }
    }
    total * width * 0.5
}

/// Integrate `f` over `[a, b]`, doubling panels until two successive
/// estimates agree.
pub fn integrate<S, F>(f: F, a: &S, b: &S, config: &QuadratureConfig) -> CoreResult<S>
where
    S: Scalar,
    F: Fn(&S) -> S,
{
    let mut panels = 1;
    let mut previous = gauss_legendre(&f, a, b, panels);
    if !previous.is_finite() {
        return Err(CoreError::NonFinite {
            what: "quadrature",
            value: previous.nominal(),
        });
    }
    let mut refinements = 0;
    while panels < config.max_panels {
        panels *= 2;
        refinements += 1;
        let current = gauss_legendre(&f, a, b, panels);
        let tol = Tolerances {
            abs: config.abs_tol,
            rel: config.rel_tol,
        };
        if nearly_equal(current.nominal(), previous.nominal(), tol) {
            return Ok(current);
        }
        previous = current;
    }
    Err(CoreError::ConvergenceFailed {
        what: "gauss-legendre quadrature",
        iterations: refinements,
    })
}
