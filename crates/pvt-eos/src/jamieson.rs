//! EOS whose reference isotherm is derived from a shock Hugoniot
//! (Jamieson et al. 1982): `P_st(V) = P_H(V) - P_th(V, T_H(V))`, with the
//! constant-q thermal model for `P_th`.

use std::fmt;

use pvt_core::units::{density_from_uc_volume, uc_volume_from_density};
use pvt_core::{BrentConfig, NumericMode, OdeConfig, Scalar, UFloat, Values, brent};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::error::{EosError, EosResult};
use crate::eval::{map_binary, mode_of, par_map_unary};
use crate::hugoniot::{self, ShockMaterial, ShockParams};
use crate::static_eos::ZERO_PRESSURE;
use crate::thermal::{ConstQParams, constq};

/// Default bracket for [`JamiesonEos::volume`], as fractions of `v0`.
pub const DEFAULT_MIN_STRAIN: f64 = 0.3;
pub const DEFAULT_MAX_STRAIN: f64 = 1.0;
/// Fraction of the Hugoniot pole `η = 1/s` that volume inversion may reach.
const POLE_FRACTION: f64 = 0.95;

#[derive(Clone, Debug, PartialEq)]
pub struct JamiesonEos {
    shock: ShockParams<UFloat>,
    thermal: ConstQParams<UFloat>,
    material: ShockMaterial,
    reference: Option<String>,
    ode: OdeConfig,
    brent: BrentConfig,
}

impl JamiesonEos {
    pub fn new(shock: ShockParams<UFloat>, thermal: ConstQParams<UFloat>, material: ShockMaterial) -> Self {
        debug!(
            nonlinear = shock.is_nonlinear(),
            rho0 = shock.rho0().nominal_value(),
            "hugoniot-derived eos"
        );
        Self {
            shock,
            thermal,
            material,
            reference: None,
            ode: OdeConfig::default(),
            brent: BrentConfig::default(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_ode(mut self, config: OdeConfig) -> Self {
        self.ode = config;
        self
    }

    pub fn with_brent(mut self, config: BrentConfig) -> Self {
        self.brent = config;
        self
    }

    pub fn shock(&self) -> &ShockParams<UFloat> {
        &self.shock
    }

    pub fn thermal(&self) -> &ConstQParams<UFloat> {
        &self.thermal
    }

    pub fn material(&self) -> &ShockMaterial {
        &self.material
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Reference volume of the thermal term (Å³).
    pub fn v0(&self) -> f64 {
        self.thermal.v0.nominal_value()
    }

    pub fn has_uncertain_params(&self) -> bool {
        self.shock
            .to_vec()
            .iter()
            .chain(self.thermal.to_vec().iter())
            .any(|p| !p.is_exact())
    }

    fn density_of<S: Scalar>(&self, v: &S) -> S {
        let c = &self.material.constants;
        density_from_uc_volume(v, c.z, self.material.molar_mass)
    }

    fn hugoniot_temperature_at<S: Scalar>(
        &self,
        v: &S,
        shock: &ShockParams<S>,
        thermal: &ConstQParams<S>,
    ) -> EosResult<S> {
        let rho = self.density_of(v);
        hugoniot::temperature(
            &rho,
            &shock.temperature_path(),
            thermal,
            &self.material,
            &self.ode,
        )
    }

    fn static_at<S: Scalar>(
        &self,
        v: &S,
        shock: &ShockParams<S>,
        thermal: &ConstQParams<S>,
    ) -> EosResult<S> {
        let p_h = shock.pressure(&self.density_of(v));
        let t_h = self.hugoniot_temperature_at(v, shock, thermal)?;
        let p_th = constq::pressure(v, &t_h, thermal, &self.material.constants);
        Ok(p_h - p_th)
    }

    fn total_at<S: Scalar>(
        &self,
        v: &S,
        temp: &S,
        shock: &ShockParams<S>,
        thermal: &ConstQParams<S>,
    ) -> EosResult<S> {
        let p_th = constq::pressure(v, temp, thermal, &self.material.constants);
        Ok(self.static_at(v, shock, thermal)? + p_th)
    }

    fn unary<F>(&self, v: &Values, f: F) -> EosResult<Values>
    where
        F: Fn(&Self, &UFloat, &ShockParams<UFloat>, &ConstQParams<UFloat>) -> EosResult<UFloat>
            + Sync
            + Send,
    {
        par_map_unary(v, |x: &UFloat| f(self, x, &self.shock, &self.thermal))
    }

    fn unary_plain<F>(&self, v: &Values, f: F) -> EosResult<Values>
    where
        F: Fn(&Self, &f64, &ShockParams<f64>, &ConstQParams<f64>) -> EosResult<f64> + Sync + Send,
    {
        let shock = self.shock.map(UFloat::nominal_value);
        let thermal = self.thermal.map(UFloat::nominal_value);
        par_map_unary(v, |x: &f64| f(self, x, &shock, &thermal))
    }

    /// Smallest volume the inversion probes. The temperature path diverges
    /// at `η = 1/s`.
    fn volume_floor(&self, shock: &ShockParams<f64>) -> f64 {
        let path = shock.temperature_path();
        if path.s <= POLE_FRACTION {
            return 0.0;
        }
        let rho = path.rho0 / (1.0 - POLE_FRACTION / path.s);
        uc_volume_from_density(&rho, self.material.constants.z, self.material.molar_mass)
    }

    /// Pressure on the Hugoniot at unit-cell volume `v`.
    pub fn hugoniot_pressure(&self, v: &Values) -> EosResult<Values> {
        match mode_of(&[v], self.has_uncertain_params()) {
            NumericMode::Plain => {
                self.unary_plain(v, |me, x, shock, _| Ok(shock.pressure(&me.density_of(x))))
            }
            NumericMode::Uncertain => {
                self.unary(v, |me, x, shock, _| Ok(shock.pressure(&me.density_of(x))))
            }
        }
    }

    /// Temperature on the Hugoniot at unit-cell volume `v` (K).
    pub fn hugoniot_temperature(&self, v: &Values) -> EosResult<Values> {
        match mode_of(&[v], self.has_uncertain_params()) {
            NumericMode::Plain => self.unary_plain(v, |me, x, s, t| me.hugoniot_temperature_at(x, s, t)),
            NumericMode::Uncertain => self.unary(v, |me, x, s, t| me.hugoniot_temperature_at(x, s, t)),
        }
    }

    /// Density on the Hugoniot at pressure `p` (g/cm³).
    pub fn hugoniot_density(&self, p: &Values, min_strain: f64) -> EosResult<Values> {
        match mode_of(&[p], self.has_uncertain_params()) {
            NumericMode::Plain => {
                let shock = self.shock.map(UFloat::nominal_value);
                par_map_unary(p, |x: &f64| hugoniot::density(x, &shock, min_strain, &self.brent))
            }
            NumericMode::Uncertain => par_map_unary(p, |x: &UFloat| {
                hugoniot::density(x, &self.shock, min_strain, &self.brent)
            }),
        }
    }

    /// Static pressure at `t_ref`.
    pub fn static_pressure(&self, v: &Values) -> EosResult<Values> {
        match mode_of(&[v], self.has_uncertain_params()) {
            NumericMode::Plain => self.unary_plain(v, |me, x, s, t| me.static_at(x, s, t)),
            NumericMode::Uncertain => self.unary(v, |me, x, s, t| me.static_at(x, s, t)),
        }
    }

    /// Constant-q thermal pressure relative to `t_ref`.
    pub fn thermal_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        let mat = &self.material.constants;
        match mode_of(&[v, temp], self.has_uncertain_params()) {
            NumericMode::Plain => {
                let thermal = self.thermal.map(UFloat::nominal_value);
                map_binary(v, temp, |x: &f64, t: &f64| Ok(constq::pressure(x, t, &thermal, mat)))
            }
            NumericMode::Uncertain => map_binary(v, temp, |x: &UFloat, t: &UFloat| {
                Ok(constq::pressure(x, t, &self.thermal, mat))
            }),
        }
    }

    pub fn pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        match mode_of(&[v, temp], self.has_uncertain_params()) {
            NumericMode::Plain => {
                let shock = self.shock.map(UFloat::nominal_value);
                let thermal = self.thermal.map(UFloat::nominal_value);
                map_binary(v, temp, |x: &f64, t: &f64| self.total_at(x, t, &shock, &thermal))
            }
            NumericMode::Uncertain => map_binary(v, temp, |x: &UFloat, t: &UFloat| {
                self.total_at(x, t, &self.shock, &self.thermal)
            }),
        }
    }

    /// Volume at `(p, temp)` on nominal values, bracket
    /// `[v0 * max_strain, v0 * min_strain]`.
    pub fn volume(
        &self,
        p: &Values,
        temp: &Values,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<Values> {
        let shock = self.shock.map(UFloat::nominal_value);
        let thermal = self.thermal.map(UFloat::nominal_value);
        let v0 = thermal.v0;
        let t_ref = self.material.constants.t_ref;
        let lower = (v0 * min_strain).max(self.volume_floor(&shock));
        let pairs = pvt_core::broadcast(&p.nominal_values(), &temp.nominal_values())?;
        debug!(points = pairs.len(), min_strain, max_strain, lower, "hugoniot-derived volume");
        let volumes = pairs
            .par_iter()
            .map(|&(pi, ti)| {
                if pi <= ZERO_PRESSURE && ti == t_ref {
                    return Ok(v0);
                }
                let result = brent(
                    |v| Ok::<_, EosError>(self.total_at(&v, &ti, &shock, &thermal)? - pi),
                    v0 * max_strain,
                    lower,
                    &self.brent,
                )
                .inspect_err(|e| warn!(p = pi, temp = ti, error = %e, "hugoniot-derived inversion failed"))?;
                trace!(p = pi, temp = ti, v = result.root, "hugoniot-derived inversion converged");
                Ok(result.root)
            })
            .collect::<EosResult<Vec<f64>>>()?;
        Ok(Values::Plain(volumes))
    }
}

impl fmt::Display for JamiesonEos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.shock.is_nonlinear() { "nonlinear" } else { "linear" };
        writeln!(f, "static: hugoniot ({kind})")?;
        for (name, value) in self.shock.names().iter().zip(self.shock.to_vec()) {
            writeln!(f, "    {name} = {value}")?;
        }
        writeln!(f, "thermal: constq")?;
        for (name, value) in ConstQParams::<UFloat>::NAMES.iter().zip(self.thermal.to_vec()) {
            writeln!(f, "    {name} = {value}")?;
        }
        let c = &self.material.constants;
        writeln!(
            f,
            "n = {}, z = {}, t_ref = {} K, 3R = {}, molar mass = {} g/mol",
            c.n, c.z, c.t_ref, c.three_r, self.material.molar_mass
        )?;
        if let Some(reference) = &self.reference {
            writeln!(f, "reference: {reference}")?;
        }
        Ok(())
    }
}
