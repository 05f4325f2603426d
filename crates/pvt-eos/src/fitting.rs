//! Formula families as named model functions for least-squares fitting.
//!
//! A [`FitModel`] exposes the independent variables, the ordered parameter
//! names, lower-bound hints, and an `evaluate` that maps independent
//! variables plus a flat parameter vector to pressure. Any generic
//! nonlinear least-squares driver can wrap it.

use pvt_core::{NumericMode, QuadratureConfig, Scalar, UFloat, Values};

use crate::anharmonic::{AnharmonicFamily, AnharmonicParams};
use crate::electronic::{ElectronicFamily, ElectronicParams};
use crate::error::{EosError, EosResult};
use crate::eval::{map_binary, map_unary, mode_of};
use crate::params::MaterialConstants;
use crate::static_eos::{StaticFamily, StaticParams};
use crate::thermal::{ThermalFamily, ThermalParams};

const VOLUME: &[&str] = &["v"];
const VOLUME_TEMPERATURE: &[&str] = &["v", "temp"];

/// Parameters that are physically non-negative.
const NON_NEGATIVE: &[&str] = &[
    "v0", "k0", "k0p", "gamma0", "gamma_inf", "theta0", "theta01", "theta02",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitKind {
    Static(StaticFamily),
    Thermal(ThermalFamily),
    Anharmonic(AnharmonicFamily),
    Electronic(ElectronicFamily),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FitModel {
    name: String,
    kind: FitKind,
    constants: MaterialConstants,
    quadrature: QuadratureConfig,
}

impl FitModel {
    fn build(name: String, kind: FitKind, constants: MaterialConstants) -> Self {
        Self {
            name,
            kind,
            constants,
            quadrature: QuadratureConfig::default(),
        }
    }

    /// `P(v)` for a static family.
    pub fn static_model(family: StaticFamily) -> Self {
        // constants are not used by static formulas
        Self::build(
            family.tag().to_string(),
            FitKind::Static(family),
            MaterialConstants::new(1.0, 1.0),
        )
    }

    /// `P_th(v, temp)` for a thermal family.
    pub fn thermal_model(family: ThermalFamily, constants: MaterialConstants) -> Self {
        Self::build(family.tag().to_string(), FitKind::Thermal(family), constants)
    }

    pub fn anharmonic_model(family: AnharmonicFamily, constants: MaterialConstants) -> Self {
        Self::build(family.tag().to_string(), FitKind::Anharmonic(family), constants)
    }

    pub fn electronic_model(family: ElectronicFamily, constants: MaterialConstants) -> Self {
        Self::build(family.tag().to_string(), FitKind::Electronic(family), constants)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_quadrature(mut self, config: QuadratureConfig) -> Self {
        self.quadrature = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FitKind {
        self.kind
    }

    pub fn independent_vars(&self) -> &'static [&'static str] {
        match self.kind {
            FitKind::Static(_) => VOLUME,
            _ => VOLUME_TEMPERATURE,
        }
    }

    pub fn param_names(&self) -> &'static [&'static str] {
        match self.kind {
            FitKind::Static(f) => f.param_names(),
            FitKind::Thermal(f) => f.param_names(),
            FitKind::Anharmonic(f) => f.param_names(),
            FitKind::Electronic(f) => f.param_names(),
        }
    }

    /// Lower-bound hint per parameter, in `param_names` order.
    pub fn lower_bounds(&self) -> Vec<Option<f64>> {
        self.param_names()
            .iter()
            .map(|name| NON_NEGATIVE.contains(name).then_some(0.0))
            .collect()
    }

    /// Evaluate the model. `x` holds one array per independent variable;
    /// uncertain inputs give uncertain output.
    pub fn evaluate(&self, x: &[&Values], params: &[f64]) -> EosResult<Values> {
        if x.len() != self.independent_vars().len() {
            return Err(EosError::InvalidArg {
                what: "number of independent variables",
            });
        }
        match mode_of(x, false) {
            NumericMode::Plain => self.evaluate_with::<f64>(x, params),
            NumericMode::Uncertain => self.evaluate_with::<UFloat>(x, params),
        }
    }

    fn evaluate_with<S: Scalar>(&self, x: &[&Values], params: &[f64]) -> EosResult<Values> {
        let params: Vec<S> = params.iter().copied().map(S::from_f64).collect();
        let mat = &self.constants;
        match self.kind {
            FitKind::Static(family) => {
                let p = StaticParams::from_slice(&params)?;
                map_unary(x[0], |v: &S| Ok(family.pressure(v, &p)))
            }
            FitKind::Thermal(family) => {
                let p = ThermalParams::from_values(family, &params)?;
                map_binary(x[0], x[1], |v: &S, t: &S| {
                    p.pressure(v, t, mat, &self.quadrature)
                })
            }
            FitKind::Anharmonic(family) => {
                let p = AnharmonicParams::from_values(family, &params)?;
                map_binary(x[0], x[1], |v: &S, t: &S| Ok(p.pressure(v, t, mat)))
            }
            FitKind::Electronic(family) => {
                let p = ElectronicParams::from_values(family, &params)?;
                map_binary(x[0], x[1], |v: &S, t: &S| Ok(p.pressure(v, t, mat)))
            }
        }
    }
}
