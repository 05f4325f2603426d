//! Shock Hugoniot relations.
//!
//! Densities are in g/cm³, shock and particle velocities in km/s, so
//! `ρ0 Us Up` comes out in GPa. Compression is `η = 1 - ρ0/ρ`.

use pvt_core::ode::{self, OdeConfig};
use pvt_core::{BrentConfig, Scalar, brent};
use tracing::{trace, warn};

use crate::debye::debye_e;
use crate::error::{EosError, EosResult};
use crate::params::{MaterialConstants, param_set};
use crate::static_eos::ZERO_PRESSURE;
use crate::thermal::ConstQParams;

/// Default lower strain `ρ0/ρ` for density inversion.
pub const DEFAULT_MIN_STRAIN: f64 = 0.01;

param_set!(
    /// Linear `Us = c0 + s Up`.
    LinearHugoniotParams, "hugoniot_linear" {
        /// Reference density (g/cm³)
        rho0,
        /// Bulk sound speed (km/s)
        c0,
        s,
    }
);

param_set!(
    /// Quadratic `Us = a + b Up + c Up²`.
    NonlinearHugoniotParams, "hugoniot_nonlinear" {
        rho0,
        a,
        b,
        /// Quadratic coefficient (s/km)
        c,
    }
);

/// Hugoniot pressure for the linear Us-Up relation,
/// `ρ0 c0² η / (1 - s η)²`.
pub fn pressure<S: Scalar>(rho: &S, rho0: &S, c0: &S, s: &S) -> S {
    let eta = S::from_f64(1.0) - rho0.clone() / rho.clone();
    let denom = S::from_f64(1.0) - s.clone() * eta.clone();
    rho0.clone() * c0.powi(2) * eta / denom.powi(2)
}

/// Particle velocity on the quadratic Hugoniot at compression `eta`.
fn particle_velocity<S: Scalar>(eta: &S, a: &S, b: &S, c: &S) -> S {
    let one_minus_b_eta = S::from_f64(1.0) - b.clone() * eta.clone();
    let disc = one_minus_b_eta.powi(2) - eta.powi(2) * a.clone() * c.clone() * 4.0;
    (-one_minus_b_eta + disc.sqrt()) / (eta.clone() * c.clone() * -2.0)
}

/// Hugoniot pressure for the quadratic Us-Up relation; zero at `η = 0`.
pub fn pressure_nonlinear<S: Scalar>(rho: &S, rho0: &S, a: &S, b: &S, c: &S) -> S {
    let eta = S::from_f64(1.0) - rho0.clone() / rho.clone();
    if eta.nominal() == 0.0 {
        return S::from_f64(0.0);
    }
    let up = particle_velocity(&eta, a, b, c);
    let us = a.clone() + up.clone() * b.clone() + up.powi(2) * c.clone();
    rho0.clone() * up * us
}

/// Either Us-Up relation.
#[derive(Clone, Debug, PartialEq)]
pub enum ShockParams<S> {
    Linear(LinearHugoniotParams<S>),
    Nonlinear(NonlinearHugoniotParams<S>),
}

impl<S: Scalar> ShockParams<S> {
    pub fn rho0(&self) -> &S {
        match self {
            Self::Linear(p) => &p.rho0,
            Self::Nonlinear(p) => &p.rho0,
        }
    }

    pub fn is_nonlinear(&self) -> bool {
        matches!(self, Self::Nonlinear(_))
    }

    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Self::Linear(_) => LinearHugoniotParams::<S>::NAMES,
            Self::Nonlinear(_) => NonlinearHugoniotParams::<S>::NAMES,
        }
    }

    pub fn to_vec(&self) -> Vec<S> {
        match self {
            Self::Linear(p) => p.to_vec(),
            Self::Nonlinear(p) => p.to_vec(),
        }
    }

    pub fn map<T, F: Fn(&S) -> T>(&self, f: F) -> ShockParams<T> {
        match self {
            Self::Linear(p) => ShockParams::Linear(p.map(f)),
            Self::Nonlinear(p) => ShockParams::Nonlinear(p.map(f)),
        }
    }

    pub fn pressure(&self, rho: &S) -> S {
        match self {
            Self::Linear(p) => pressure(rho, &p.rho0, &p.c0, &p.s),
            Self::Nonlinear(p) => pressure_nonlinear(rho, &p.rho0, &p.a, &p.b, &p.c),
        }
    }

    /// Linear relation used to integrate the Hugoniot temperature. The
    /// quadratic form stands in `(a, b)` for `(c0, s)`.
    pub fn temperature_path(&self) -> LinearHugoniotParams<S> {
        match self {
            Self::Linear(p) => p.clone(),
            Self::Nonlinear(p) => LinearHugoniotParams {
                rho0: p.rho0.clone(),
                c0: p.a.clone(),
                s: p.b.clone(),
            },
        }
    }
}

/// Heat capacity used along the Hugoniot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeatCapacity {
    /// Debye heat capacity from the constant-q Debye temperature.
    Debye,
    /// Constant value (J/g/K).
    Fixed(f64),
}

/// Material data for integrating the Hugoniot temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShockMaterial {
    pub constants: MaterialConstants,
    /// Molar mass of the formula unit (g/mol)
    pub molar_mass: f64,
    pub heat_capacity: HeatCapacity,
}

impl ShockMaterial {
    pub fn new(constants: MaterialConstants, molar_mass: f64) -> Self {
        Self {
            constants,
            molar_mass,
            heat_capacity: HeatCapacity::Debye,
        }
    }

    pub fn with_heat_capacity(mut self, heat_capacity: HeatCapacity) -> Self {
        self.heat_capacity = heat_capacity;
        self
    }

    /// `3nR / M` (J/g/K).
    fn three_nk(&self) -> f64 {
        self.constants.three_r / self.molar_mass * self.constants.n
    }
}

/// `dT/dη` with T in kK.
fn temperature_rate(
    temp_kk: f64,
    eta: f64,
    shock: &LinearHugoniotParams<f64>,
    thermal: &ConstQParams<f64>,
    material: &ShockMaterial,
) -> EosResult<f64> {
    let LinearHugoniotParams { rho0, c0, s } = *shock;
    let one_minus_s_eta = 1.0 - s * eta;
    let dph_deta = rho0 * c0 * c0 * (1.0 + s * eta) / one_minus_s_eta.powi(3);
    let ph = rho0 * c0 * c0 * eta / one_minus_s_eta.powi(2);

    let gamma = thermal.gamma0 * (1.0 - eta).powf(thermal.q);
    let theta_kk = thermal.theta0 / 1e3 * ((thermal.gamma0 - gamma) / thermal.q).exp();
    let c_v = match material.heat_capacity {
        HeatCapacity::Fixed(c_v) => c_v,
        HeatCapacity::Debye => {
            let x = theta_kk / temp_kk;
            material.three_nk() * (4.0 * debye_e(&x) - 3.0 * x / x.exp_m1())
        }
    };
    if c_v == 0.0 {
        return Err(EosError::InvalidArg {
            what: "zero heat capacity along hugoniot",
        });
    }
    Ok(gamma / (1.0 - eta) * temp_kk + (dph_deta * eta - ph) / (2.0 * c_v * rho0))
}

/// Hugoniot temperature (K) at density `rho`, integrating `dT/dη` from
/// `(0, T_ref)`.
pub fn temperature_plain(
    rho: f64,
    shock: &LinearHugoniotParams<f64>,
    thermal: &ConstQParams<f64>,
    material: &ShockMaterial,
    config: &OdeConfig,
) -> EosResult<f64> {
    let eta = 1.0 - shock.rho0 / rho;
    let t_ref = material.constants.t_ref;
    if eta == 0.0 {
        return Ok(t_ref);
    }
    let solution = ode::integrate(
        |e, t| temperature_rate(t, e, shock, thermal, material),
        0.0,
        t_ref / 1e3,
        eta,
        config,
    )?;
    trace!(eta, steps = solution.steps, rejected = solution.rejected, "hugoniot temperature");
    Ok(solution.y * 1e3)
}

/// Hugoniot temperature in either numeric mode. Sensitivities to the
/// density, shock and thermal parameters are estimated numerically.
pub fn temperature<S: Scalar>(
    rho: &S,
    shock: &LinearHugoniotParams<S>,
    thermal: &ConstQParams<S>,
    material: &ShockMaterial,
    config: &OdeConfig,
) -> EosResult<S> {
    let args = [
        rho.clone(),
        shock.rho0.clone(),
        shock.c0.clone(),
        shock.s.clone(),
        thermal.gamma0.clone(),
        thermal.q.clone(),
        thermal.theta0.clone(),
    ];
    S::lift_numeric(
        |x: &[f64]| {
            let shock = LinearHugoniotParams {
                rho0: x[1],
                c0: x[2],
                s: x[3],
            };
            let thermal = ConstQParams {
                v0: thermal.v0.nominal(),
                gamma0: x[4],
                q: x[5],
                theta0: x[6],
            };
            temperature_plain(x[0], &shock, &thermal, material, config)
        },
        &args,
    )
}

/// Density on the Hugoniot at pressure `p` by Brent's method on
/// `[ρ0, ρ0 / min_strain]`.
pub fn density_plain(
    p: f64,
    shock: &ShockParams<f64>,
    min_strain: f64,
    config: &BrentConfig,
) -> EosResult<f64> {
    let rho0 = *shock.rho0();
    if p <= ZERO_PRESSURE {
        return Ok(rho0);
    }
    let result = brent(
        |rho| Ok::<_, EosError>(shock.pressure(&rho) - p),
        rho0,
        rho0 / min_strain,
        config,
    )
    .inspect_err(|e| warn!(p, min_strain, error = %e, "hugoniot density inversion failed"))?;
    Ok(result.root)
}

pub fn density<S: Scalar>(
    p: &S,
    shock: &ShockParams<S>,
    min_strain: f64,
    config: &BrentConfig,
) -> EosResult<S> {
    let mut args = vec![p.clone()];
    args.extend(shock.to_vec());
    let nonlinear = shock.is_nonlinear();
    S::lift_numeric(
        |x: &[f64]| {
            let shock = if nonlinear {
                ShockParams::Nonlinear(NonlinearHugoniotParams::from_slice(&x[1..])?)
            } else {
                ShockParams::Linear(LinearHugoniotParams::from_slice(&x[1..])?)
            };
            density_plain(x[0], &shock, min_strain, config)
        },
        &args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::UFloat;

    // Au, Jamieson et al. 1982 (high-pressure fit)
    const AU: LinearHugoniotParams<f64> = LinearHugoniotParams {
        rho0: 19.2827,
        c0: 3.12,
        s: 1.54,
    };

    fn au_thermal() -> ConstQParams<f64> {
        ConstQParams {
            v0: 67.85,
            gamma0: 3.07,
            q: 1.0,
            theta0: 170.0,
        }
    }

    fn au_material() -> ShockMaterial {
        ShockMaterial::new(MaterialConstants::new(1.0, 4.0), 196.966_57)
    }

    #[test]
    fn pressure_zero_at_reference_density() {
        assert_eq!(pressure(&19.2827, &AU.rho0, &AU.c0, &AU.s), 0.0);
        assert_eq!(pressure_nonlinear(&19.2827, &19.2827, &3.0, &1.5, &0.01), 0.0);
    }

    #[test]
    fn nonlinear_reduces_to_linear_without_curvature() {
        let rho = 25.0;
        let lin = pressure(&rho, &AU.rho0, &AU.c0, &AU.s);
        let nl = pressure_nonlinear(&rho, &AU.rho0, &AU.c0, &AU.s, &1e-9);
        assert!((lin - nl).abs() / lin < 1e-6);
    }

    #[test]
    fn density_inverts_pressure() {
        let shock = ShockParams::Linear(AU);
        let p = shock.pressure(&25.0);
        let rho = density_plain(p, &shock, DEFAULT_MIN_STRAIN, &BrentConfig::default()).unwrap();
        assert!((rho - 25.0).abs() < 1e-8);
        assert_eq!(
            density_plain(0.0, &shock, DEFAULT_MIN_STRAIN, &BrentConfig::default()).unwrap(),
            19.2827
        );
    }

    #[test]
    fn temperature_starts_at_reference_and_rises() {
        let material = au_material();
        let cfg = OdeConfig::default();
        let t0 = temperature_plain(19.2827, &AU, &au_thermal(), &material, &cfg).unwrap();
        assert_eq!(t0, 300.0);
        let t1 = temperature_plain(24.0, &AU, &au_thermal(), &material, &cfg).unwrap();
        let t2 = temperature_plain(27.0, &AU, &au_thermal(), &material, &cfg).unwrap();
        assert!(t1 > 300.0 && t2 > t1, "{t1} {t2}");
    }

    #[test]
    fn fixed_heat_capacity_is_used() {
        let cfg = OdeConfig::default();
        let zero = au_material().with_heat_capacity(HeatCapacity::Fixed(0.0));
        assert!(temperature_plain(24.0, &AU, &au_thermal(), &zero, &cfg).is_err());
        let fixed = au_material().with_heat_capacity(HeatCapacity::Fixed(0.125));
        assert!(temperature_plain(24.0, &AU, &au_thermal(), &fixed, &cfg).unwrap() > 300.0);
    }

    #[test]
    fn uncertain_density_through_wrap() {
        let shock = ShockParams::Linear(AU).map(|x| UFloat::exact(*x));
        let p = UFloat::new(100.0, 1.0);
        let rho = density(&p, &shock, DEFAULT_MIN_STRAIN, &BrentConfig::default()).unwrap();
        // dρ/dP from the inverse slope
        let h = 1e-4;
        let plain = shock.map(UFloat::nominal_value);
        let r_plus = density_plain(100.0 + h, &plain, 0.01, &BrentConfig::default()).unwrap();
        let r_minus = density_plain(100.0 - h, &plain, 0.01, &BrentConfig::default()).unwrap();
        let slope = (r_plus - r_minus) / (2.0 * h);
        assert!((rho.std_dev() - slope).abs() / slope < 1e-4);
    }

    #[test]
    fn nonlinear_temperature_path() {
        let shock = ShockParams::Nonlinear(NonlinearHugoniotParams {
            rho0: 19.2827,
            a: 3.1,
            b: 1.5,
            c: 0.01,
        });
        let path = shock.temperature_path();
        assert_eq!((path.c0, path.s), (3.1, 1.5));
    }
}
