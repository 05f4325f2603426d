//! Mie-Grüneisen composite: static + thermal + anharmonic + electronic.
//!
//! Every add-on term is written as `f(T) - f(T_ref)`, so at the reference
//! temperature the composite pressure equals the static pressure.

use std::fmt;

use pvt_core::{BrentConfig, NumericMode, QuadratureConfig, Scalar, UFloat, Values, brent};
use pvt_core::numeric::central_difference;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::anharmonic::AnharmonicParams;
use crate::electronic::ElectronicParams;
use crate::error::{EosError, EosResult};
use crate::eval::{map_binary, map_unary, mode_of};
use crate::params::MaterialConstants;
use crate::static_eos::{DEFAULT_PRECISION, StaticEos, StaticParams, ZERO_PRESSURE};
use crate::thermal::ThermalParams;

/// Default bracket for [`MieGruneisenEos::volume`], as fractions of `v0`.
pub const DEFAULT_MIN_STRAIN: f64 = 0.2;
pub const DEFAULT_MAX_STRAIN: f64 = 1.0;

/// All parameter sets converted to one scalar type.
struct Terms<S> {
    static_params: StaticParams<S>,
    thermal: Option<ThermalParams<S>>,
    anharmonic: Option<AnharmonicParams<S>>,
    electronic: Option<ElectronicParams<S>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Term {
    Static,
    Thermal,
    Anharmonic,
    Electronic,
    Total,
}

/// Composite pressure-volume-temperature equation of state.
#[derive(Clone, Debug, PartialEq)]
pub struct MieGruneisenEos {
    static_eos: StaticEos,
    thermal: Option<ThermalParams<UFloat>>,
    anharmonic: Option<AnharmonicParams<UFloat>>,
    electronic: Option<ElectronicParams<UFloat>>,
    constants: MaterialConstants,
    reference: Option<String>,
    brent: BrentConfig,
    quadrature: QuadratureConfig,
}

impl MieGruneisenEos {
    pub fn new(static_eos: StaticEos, constants: MaterialConstants) -> Self {
        Self {
            static_eos,
            thermal: None,
            anharmonic: None,
            electronic: None,
            constants,
            reference: None,
            brent: BrentConfig::default(),
            quadrature: QuadratureConfig::default(),
        }
    }

    pub fn with_thermal(mut self, params: ThermalParams<UFloat>) -> Self {
        self.thermal = Some(params);
        self
    }

    pub fn with_anharmonic(mut self, params: AnharmonicParams<UFloat>) -> Self {
        self.anharmonic = Some(params);
        self
    }

    pub fn with_electronic(mut self, params: ElectronicParams<UFloat>) -> Self {
        self.electronic = Some(params);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_brent(mut self, config: BrentConfig) -> Self {
        self.brent = config;
        self
    }

    pub fn with_quadrature(mut self, config: QuadratureConfig) -> Self {
        self.quadrature = config;
        self
    }

    pub fn static_eos(&self) -> &StaticEos {
        &self.static_eos
    }

    pub fn thermal(&self) -> Option<&ThermalParams<UFloat>> {
        self.thermal.as_ref()
    }

    pub fn anharmonic(&self) -> Option<&AnharmonicParams<UFloat>> {
        self.anharmonic.as_ref()
    }

    pub fn electronic(&self) -> Option<&ElectronicParams<UFloat>> {
        self.electronic.as_ref()
    }

    pub fn constants(&self) -> &MaterialConstants {
        &self.constants
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn v0(&self) -> f64 {
        self.static_eos.v0()
    }

    pub fn has_uncertain_params(&self) -> bool {
        let uncertain = |params: Vec<UFloat>| params.iter().any(|p| !p.is_exact());
        self.static_eos.has_uncertain_params()
            || self.thermal.as_ref().is_some_and(|t| uncertain(t.to_vec()))
            || self.anharmonic.as_ref().is_some_and(|a| uncertain(a.to_vec()))
            || self.electronic.as_ref().is_some_and(|e| uncertain(e.to_vec()))
    }

    fn terms<S: Scalar>(&self) -> Terms<S> {
        Terms {
            static_params: self.static_eos.params_as(),
            thermal: self.thermal.as_ref().map(|t| t.map(S::from_ufloat)),
            anharmonic: self.anharmonic.as_ref().map(|a| a.map(S::from_ufloat)),
            electronic: self.electronic.as_ref().map(|e| e.map(S::from_ufloat)),
        }
    }

    fn term_at<S: Scalar>(&self, term: Term, v: &S, temp: &S, terms: &Terms<S>) -> EosResult<S> {
        let mat = &self.constants;
        let zero = || S::from_f64(0.0);
        Ok(match term {
            Term::Static => self.static_eos.family().pressure(v, &terms.static_params),
            Term::Thermal => match &terms.thermal {
                Some(t) => t.pressure(v, temp, mat, &self.quadrature)?,
                None => zero(),
            },
            Term::Anharmonic => terms
                .anharmonic
                .as_ref()
                .map_or_else(zero, |a| a.pressure(v, temp, mat)),
            Term::Electronic => terms
                .electronic
                .as_ref()
                .map_or_else(zero, |e| e.pressure(v, temp, mat)),
            Term::Total => {
                self.term_at(Term::Static, v, temp, terms)?
                    + self.term_at(Term::Thermal, v, temp, terms)?
                    + self.term_at(Term::Anharmonic, v, temp, terms)?
                    + self.term_at(Term::Electronic, v, temp, terms)?
            }
        })
    }

    fn evaluate(&self, term: Term, v: &Values, temp: &Values) -> EosResult<Values> {
        match mode_of(&[v, temp], self.has_uncertain_params()) {
            NumericMode::Plain => self.evaluate_with::<f64>(term, v, temp),
            NumericMode::Uncertain => self.evaluate_with::<UFloat>(term, v, temp),
        }
    }

    fn evaluate_with<S: Scalar>(&self, term: Term, v: &Values, temp: &Values) -> EosResult<Values> {
        let terms = self.terms::<S>();
        map_binary(v, temp, |x: &S, t: &S| self.term_at(term, x, t, &terms))
    }

    /// Total pressure (GPa). `v` and `temp` broadcast against each other.
    pub fn pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        self.evaluate(Term::Total, v, temp)
    }

    /// Static (reference-temperature) pressure.
    pub fn static_pressure(&self, v: &Values) -> EosResult<Values> {
        self.static_eos.pressure(v)
    }

    /// Thermal pressure; zero when no thermal term is set.
    pub fn thermal_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        self.evaluate(Term::Thermal, v, temp)
    }

    pub fn anharmonic_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        self.evaluate(Term::Anharmonic, v, temp)
    }

    pub fn electronic_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        self.evaluate(Term::Electronic, v, temp)
    }

    fn require_thermal(&self) -> EosResult<&ThermalParams<UFloat>> {
        self.thermal.as_ref().ok_or(EosError::NotSupported {
            what: "thermal quantity without a thermal term",
        })
    }

    pub fn gruneisen(&self, v: &Values) -> EosResult<Values> {
        let thermal = self.require_thermal()?;
        match mode_of(&[v], self.has_uncertain_params()) {
            NumericMode::Plain => {
                let t = thermal.map(f64::from_ufloat);
                map_unary(v, |x: &f64| t.gruneisen(x))
            }
            NumericMode::Uncertain => map_unary(v, |x: &UFloat| thermal.gruneisen(x)),
        }
    }

    pub fn debye_temperature(&self, v: &Values) -> EosResult<Values> {
        let thermal = self.require_thermal()?;
        let cfg = &self.quadrature;
        match mode_of(&[v], self.has_uncertain_params()) {
            NumericMode::Plain => {
                let t = thermal.map(f64::from_ufloat);
                map_unary(v, |x: &f64| t.debye_temperature(x, cfg))
            }
            NumericMode::Uncertain => map_unary(v, |x: &UFloat| thermal.debye_temperature(x, cfg)),
        }
    }

    /// Volume at `(p, temp)` by Brent's method on
    /// `[v0 * max_strain, v0 * min_strain]`.
    ///
    /// The search runs on nominal parameter values and the result carries no
    /// uncertainty.
    pub fn volume(
        &self,
        p: &Values,
        temp: &Values,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<Values> {
        let terms = self.terms::<f64>();
        let pairs = pvt_core::broadcast(&p.nominal_values(), &temp.nominal_values())?;
        debug!(points = pairs.len(), min_strain, max_strain, "mie-gruneisen volume");
        let volumes = pairs
            .par_iter()
            .map(|&(pi, ti)| self.volume_point(pi, ti, &terms, min_strain, max_strain))
            .collect::<EosResult<Vec<f64>>>()?;
        Ok(Values::Plain(volumes))
    }

    fn volume_point(
        &self,
        p: f64,
        temp: f64,
        terms: &Terms<f64>,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<f64> {
        let v0 = terms.static_params.v0;
        if p <= ZERO_PRESSURE && temp == self.constants.t_ref {
            return Ok(v0);
        }
        let result = brent(
            |v| Ok::<_, EosError>(self.term_at(Term::Total, &v, &temp, terms)? - p),
            v0 * max_strain,
            v0 * min_strain,
            &self.brent,
        )
        .inspect_err(|e| warn!(p, temp, min_strain, max_strain, error = %e, "composite inversion failed"))?;
        trace!(p, temp, v = result.root, iterations = result.iterations, "composite inversion converged");
        Ok(result.root)
    }

    /// Isothermal bulk modulus `-V ∂P/∂V` at `(v, temp)` from a central
    /// difference with step `v0 * precision`. Nominal values only.
    pub fn bulk_modulus(&self, v: &Values, temp: &Values, precision: f64) -> EosResult<Vec<f64>> {
        let terms = self.terms::<f64>();
        let dv = self.v0() * precision;
        pvt_core::broadcast(&v.nominal_values(), &temp.nominal_values())?
            .into_iter()
            .map(|(vi, ti)| {
                let dpdv = central_difference(
                    |x| self.term_at(Term::Total, &x, &ti, &terms),
                    vi,
                    dv,
                )?;
                Ok(-vi * dpdv)
            })
            .collect()
    }

    /// [`Self::bulk_modulus`] with the default step.
    pub fn bulk_modulus_default(&self, v: &Values, temp: &Values) -> EosResult<Vec<f64>> {
        self.bulk_modulus(v, temp, DEFAULT_PRECISION)
    }
}

fn write_params(f: &mut fmt::Formatter<'_>, names: &[&str], values: &[UFloat]) -> fmt::Result {
    for (name, value) in names.iter().zip(values) {
        writeln!(f, "    {name} = {value}")?;
    }
    Ok(())
}

impl fmt::Display for MieGruneisenEos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = self.static_eos.family();
        writeln!(f, "static: {family}")?;
        write_params(f, family.param_names(), &self.static_eos.params().to_vec())?;
        if let Some(t) = &self.thermal {
            writeln!(f, "thermal: {}", t.family())?;
            write_params(f, t.family().param_names(), &t.to_vec())?;
        }
        if let Some(a) = &self.anharmonic {
            writeln!(f, "anharmonic: {}", a.family())?;
            write_params(f, a.family().param_names(), &a.to_vec())?;
        }
        if let Some(e) = &self.electronic {
            writeln!(f, "electronic: {}", e.family())?;
            write_params(f, e.family().param_names(), &e.to_vec())?;
        }
        let MaterialConstants { n, z, t_ref, three_r } = self.constants;
        writeln!(f, "n = {n}, z = {z}, t_ref = {t_ref} K, 3R = {three_r}")?;
        if let Some(reference) = &self.reference {
            writeln!(f, "reference: {reference}")?;
        }
        Ok(())
    }
}
