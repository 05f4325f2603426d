//! Adaptive Dormand-Prince 5(4) integrator for scalar ODEs `dy/dt = f(t, y)`.

use crate::error::CoreError;

/// Step-size control configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OdeConfig {
    /// Relative local error tolerance
    pub rtol: f64,
    /// Absolute local error tolerance
    pub atol: f64,
    /// First trial step as a fraction of the span (`None` = 1%)
    pub initial_step: Option<f64>,
    /// Maximum accepted plus rejected steps
    pub max_steps: usize,
}

impl Default for OdeConfig {
    fn default() -> Self {
        Self {
            rtol: 1e-10,
            atol: 1e-12,
            initial_step: None,
            max_steps: 100_000,
        }
    }
}

/// Integration result at the end point.
#[derive(Clone, Copy, Debug)]
pub struct OdeSolution {
    /// State at `t1`
    pub y: f64,
    /// Accepted steps
    pub steps: usize,
    /// Rejected steps
    pub rejected: usize,
}

const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// 5th minus embedded 4th order weights
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

/// Integrate from `(t0, y0)` to `t1`. `t1 < t0` integrates backwards.
pub fn integrate<F, E>(f: F, t0: f64, y0: f64, t1: f64, config: &OdeConfig) -> Result<OdeSolution, E>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: From<CoreError>,
{
    let span = t1 - t0;
    if span == 0.0 {
        return Ok(OdeSolution {
            y: y0,
            steps: 0,
            rejected: 0,
        });
    }
    let direction = span.signum();
    let min_step = 16.0 * f64::EPSILON * t0.abs().max(t1.abs()).max(1.0);

    let mut t = t0;
    let mut y = y0;
    let mut h = config.initial_step.unwrap_or(0.01) * span.abs();
    let mut k1 = f(t, y)?;
    let mut steps = 0;
    let mut rejected = 0;

    while (t1 - t) * direction > 0.0 {
        if steps + rejected >= config.max_steps {
            return Err(CoreError::ConvergenceFailed {
                what: "dormand-prince integration",
                iterations: steps + rejected,
            }
            .into());
        }
        let remaining = (t1 - t).abs();
        let last = h >= remaining;
        let hs = direction * h.min(remaining);

        let k2 = f(t + C2 * hs, y + hs * A21 * k1)?;
        let k3 = f(t + C3 * hs, y + hs * (A31 * k1 + A32 * k2))?;
        let k4 = f(t + C4 * hs, y + hs * (A41 * k1 + A42 * k2 + A43 * k3))?;
        let k5 = f(t + C5 * hs, y + hs * (A51 * k1 + A52 * k2 + A53 * k3 + A54 * k4))?;
        let k6 = f(
            t + hs,
            y + hs * (A61 * k1 + A62 * k2 + A63 * k3 + A64 * k4 + A65 * k5),
        )?;
        let y_new = y + hs * (B1 * k1 + B3 * k3 + B4 * k4 + B5 * k5 + B6 * k6);
        let k7 = f(t + hs, y_new)?;

        let err = hs * (E1 * k1 + E3 * k3 + E4 * k4 + E5 * k5 + E6 * k6 + E7 * k7);
        let scale = config.atol + config.rtol * y.abs().max(y_new.abs());
        let err_norm = (err / scale).abs();
        if !err_norm.is_finite() {
            return Err(CoreError::NonFinite {
                what: "ode step error",
                value: err_norm,
            }
            .into());
        }

        let factor = if err_norm == 0.0 {
            5.0
        } else {
            (0.9 * err_norm.powf(-0.2)).clamp(0.2, 5.0)
        };

        if err_norm <= 1.0 {
            t = if last { t1 } else { t + hs };
            y = y_new;
            k1 = k7;
            steps += 1;
        } else {
            rejected += 1;
        }
        h = (h.min(remaining) * factor).max(min_step);
    }

    Ok(OdeSolution {
        y,
        steps,
        rejected,
    })
}
